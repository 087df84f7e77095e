use yew::events::{Event, MouseEvent};
use yew::prelude::*;

use showcase_core::APP_CATALOG;

use crate::icons::app_icon;
use crate::launcher;

#[derive(Properties, PartialEq)]
pub(crate) struct DetailPaneProps {
    pub(crate) index: usize,
    /// Dim the pane while a transition is in flight.
    pub(crate) dimmed: bool,
}

/// Detail card for the centered catalog entry: header, description, feature
/// grid, launch button, and the screenshot with its placeholder fallback.
#[function_component(DetailPane)]
pub(crate) fn detail_pane(props: &DetailPaneProps) -> Html {
    let entry = &APP_CATALOG[props.index.min(APP_CATALOG.len() - 1)];
    let tile_class = format!("tile--{}", entry.color);

    // A failed screenshot load swaps in the placeholder until the centered
    // entry changes again.
    let image_failed = use_state(|| false);
    {
        let image_failed = image_failed.clone();
        use_effect_with(entry.id, move |_| {
            image_failed.set(false);
        });
    }
    let on_image_error = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            image_failed.set(true);
        })
    };
    let on_launch = {
        let name = entry.name;
        Callback::from(move |_: MouseEvent| {
            launcher::launch(name);
        })
    };

    html! {
        <section class={classes!("detail", props.dimmed.then_some("detail--dimmed"))}>
            <div class="detail__header">
                <div class={classes!("detail__icon", tile_class.clone())}>
                    { app_icon(entry.icon) }
                </div>
                <div>
                    <div class="detail__name">{ entry.name }</div>
                    <h1 class="detail__title">{ entry.title }</h1>
                </div>
            </div>

            <p class="detail__description">{ entry.description }</p>

            <div class="features">
                <h3>{ "Key Features" }</h3>
                <div class="features__grid">
                    { for entry.features.iter().map(|feature| html! {
                        <div class="feature" key={*feature}>
                            <span class={classes!("feature__dot", tile_class.clone())} />
                            <span>{ *feature }</span>
                        </div>
                    }) }
                </div>
            </div>

            <div class="detail__cta">
                <button class={classes!("launch-button", tile_class.clone())} onclick={on_launch}>
                    { format!("Launch {}", entry.name) }
                </button>
            </div>

            <div class="screenshot">
                if *image_failed {
                    <div class="screenshot__fallback">
                        <div class={classes!("screenshot__fallback-icon", tile_class)}>
                            { app_icon(entry.icon) }
                        </div>
                        <p>{ "Image preview" }</p>
                        <p class="screenshot__filename">{ format!("app-{}.png", entry.id) }</p>
                    </div>
                } else {
                    <img
                        src={entry.screenshot_src()}
                        alt={format!("{} application screenshot", entry.name)}
                        onerror={on_image_error}
                    />
                }
            </div>
        </section>
    }
}
