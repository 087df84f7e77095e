use yew::events::MouseEvent;
use yew::prelude::*;

use showcase_core::{icon_layout, Direction, APP_CATALOG};

use crate::icons::{app_icon, ui_icon, UiIcon};
use crate::model::{CarouselAction, CarouselModel};

#[derive(Properties, PartialEq)]
pub(crate) struct OrbitPaneProps {
    pub(crate) carousel: UseReducerHandle<CarouselModel>,
}

/// The rotating icon orbit plus its navigation controls. Hovering the orbit
/// region suspends auto-rotation; leaving it resumes.
#[function_component(OrbitPane)]
pub(crate) fn orbit_pane(props: &OrbitPaneProps) -> Html {
    let carousel = &props.carousel;
    let n = carousel.0.item_count();
    let current_index = carousel.0.current_index();
    let transitioning = carousel.0.is_transitioning();

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::SetAutoRotate(false));
        })
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::SetAutoRotate(true));
        })
    };
    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::Advance(Direction::Prev));
        })
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::Advance(Direction::Next));
        })
    };
    let select = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::Select(index));
        })
    };

    html! {
        <div class="orbit-pane">
            <div class="orbit" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="orbit__stage">
                    { for APP_CATALOG.iter().enumerate().map(|(index, entry)| {
                        let layout = icon_layout(index, current_index, n);
                        let style = format!(
                            "transform: translate({:.2}px, {:.2}px) scale({}); opacity: {}; z-index: {};",
                            layout.dx, layout.dy, layout.scale, layout.opacity, layout.z_index,
                        );
                        let active = index == current_index;
                        html! {
                            <button
                                key={entry.id}
                                class={classes!(
                                    "orbit-tile",
                                    format!("tile--{}", entry.color),
                                    active.then_some("orbit-tile--active"),
                                )}
                                style={style}
                                onclick={select(index)}
                                aria-label={format!("Show {}", entry.name)}
                            >
                                { app_icon(entry.icon) }
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class="orbit-controls">
                <button
                    class="nav-button"
                    onclick={on_prev}
                    disabled={transitioning}
                    aria-label="Previous application"
                >
                    { ui_icon(UiIcon::ChevronLeft) }
                </button>
                <div class="dots">
                    { for (0..n).map(|index| html! {
                        <button
                            key={index}
                            class={classes!(
                                "dot",
                                (index == current_index).then_some("dot--active"),
                            )}
                            onclick={select(index)}
                            aria-label={format!("Go to item {}", index + 1)}
                        />
                    }) }
                </div>
                <button
                    class="nav-button"
                    onclick={on_next}
                    disabled={transitioning}
                    aria-label="Next application"
                >
                    { ui_icon(UiIcon::ChevronRight) }
                </button>
            </div>
        </div>
    }
}
