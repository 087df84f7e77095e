use gloo::timers::callback::{Interval, Timeout};
use yew::events::MouseEvent;
use yew::prelude::*;

use showcase_core::{CarouselState, Direction, Overlay, APP_CATALOG, AUTO_ROTATE_MS, TRANSITION_MS};

use crate::bio::BioPanel;
use crate::detail::DetailPane;
use crate::icons::{ui_icon, UiIcon};
use crate::model::{CarouselAction, CarouselModel, ViewAction, ViewModel};
use crate::orbit::OrbitPane;
use crate::sidebar::Sidebar;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let carousel = use_reducer(|| CarouselModel(CarouselState::new(APP_CATALOG.len())));
    let view = use_reducer(ViewModel::default);

    let current_index = carousel.0.current_index();
    let transitioning = carousel.0.is_transitioning();
    let auto_rotate = carousel.0.auto_rotate();
    let overlay = view.0.overlay();
    let sidebar_open = view.0.sidebar_open();

    // Release the transition lock a fixed window after any index change. The
    // effect cleanup drops the pending timeout on unmount.
    {
        let carousel = carousel.clone();
        use_effect_with(transitioning, move |armed| {
            let timeout = armed.then(|| {
                Timeout::new(TRANSITION_MS, move || {
                    carousel.dispatch(CarouselAction::EndTransition);
                })
            });
            move || drop(timeout)
        });
    }

    // Auto-rotation. The interval is dropped and recreated whenever the index
    // or the hover flag changes, so manual navigation resets the countdown
    // instead of stacking timers, and nothing fires after unmount.
    {
        let carousel = carousel.clone();
        use_effect_with((current_index, auto_rotate), move |&(_, auto)| {
            let interval = auto.then(|| {
                Interval::new(AUTO_ROTATE_MS, move || {
                    carousel.dispatch(CarouselAction::Advance(Direction::Next));
                })
            });
            move || drop(interval)
        });
    }

    let on_open_sidebar = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::OpenSidebar))
    };
    let on_close_sidebar = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::CloseSidebar))
    };
    let on_backdrop_click = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::CloseSidebar))
    };
    let on_main = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::GoMain))
    };
    let on_show_bio = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::ShowBio))
    };
    let on_close_bio = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.dispatch(ViewAction::CloseBio))
    };

    html! {
        <div class="page">
            <div class="page__glow" aria-hidden="true">
                <div class="glow glow--blue" />
                <div class="glow glow--purple" />
                <div class="glow glow--green" />
            </div>

            <Sidebar
                open={sidebar_open}
                on_close={on_close_sidebar}
                on_main={on_main}
                on_show_bio={on_show_bio}
            />

            <button class="menu-button" onclick={on_open_sidebar} aria-label="Open sidebar">
                { ui_icon(UiIcon::Menu) }
            </button>

            if overlay == Overlay::None {
                <>
                    <main class="content">
                        <header class="welcome">
                            <h1>{ "Welcome, stranger" }</h1>
                            <p>{ "Thanks for stopping by. Hope your day is as awesome as you are!" }</p>
                        </header>
                        <div class="showcase-grid">
                            <DetailPane index={current_index} dimmed={transitioning} />
                            <OrbitPane carousel={carousel.clone()} />
                        </div>
                    </main>
                    <div class="rotate-status">
                        <span class={classes!(
                            "rotate-status__pip",
                            auto_rotate.then_some("rotate-status__pip--live"),
                        )} />
                        <span>{ if auto_rotate { "Auto-rotating" } else { "Paused" } }</span>
                    </div>
                </>
            }

            if sidebar_open {
                <div class="sidebar-backdrop" onclick={on_backdrop_click} />
            }

            if overlay == Overlay::Bio {
                <BioPanel on_close={on_close_bio} />
            }
        </div>
    }
}
