use yew::events::MouseEvent;
use yew::prelude::*;

use crate::icons::{ui_icon, UiIcon};

#[derive(Properties, PartialEq)]
pub(crate) struct SidebarProps {
    pub(crate) open: bool,
    pub(crate) on_close: Callback<MouseEvent>,
    pub(crate) on_main: Callback<MouseEvent>,
    pub(crate) on_show_bio: Callback<MouseEvent>,
}

/// Identity block, in-app navigation, and the fixed external link list.
/// Always visible on wide viewports; slides in/out behind `open` on narrow
/// ones.
#[function_component(Sidebar)]
pub(crate) fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class={classes!("sidebar", props.open.then_some("sidebar--open"))}>
            <button class="sidebar__close" onclick={props.on_close.clone()} aria-label="Close sidebar">
                { ui_icon(UiIcon::Close) }
            </button>

            <div class="sidebar__identity">
                <div class="sidebar__avatar tile--blue-purple">
                    { ui_icon(UiIcon::User) }
                </div>
                <h2>{ "Miroslav Lebeda" }</h2>
                <p>{ "Loving challenges.. usually" }</p>
            </div>

            <nav class="sidebar__section">
                <h3>{ "Navigation" }</h3>
                <button class="side-link" onclick={props.on_main.clone()}>
                    <span class="side-link__icon side-link__icon--indigo">{ ui_icon(UiIcon::Globe) }</span>
                    <span>{ "Main Page" }</span>
                </button>
            </nav>

            <div class="sidebar__section">
                <h3>{ "Information" }</h3>
                <button class="side-link" onclick={props.on_show_bio.clone()}>
                    <span class="side-link__icon side-link__icon--blue">{ ui_icon(UiIcon::User) }</span>
                    <span>{ "Current Information and CV" }</span>
                </button>
                { external_link(
                    UiIcon::Award,
                    "side-link__icon--purple",
                    "Publications",
                    "https://scholar.google.com/citations?user=GGK2czoAAAAJ&hl=cs&oi=sra",
                ) }
            </div>

            <div class="sidebar__section sidebar__section--last">
                <h3>{ "Links" }</h3>
                { external_link(UiIcon::Globe, "side-link__icon--cyan", "Team Website", "https://implant.fs.cvut.cz/") }
                { external_link(UiIcon::Github, "side-link__icon--gray", "GitHub Profile", "https://github.com/bracerino") }
                { external_link(UiIcon::Youtube, "side-link__icon--red", "YouTube Channel", "https://www.youtube.com/@implantMD") }
                { external_link(UiIcon::Coffee, "side-link__icon--yellow", "Buy Me a Coffee", "https://buymeacoffee.com/bracerino") }
            </div>

            <footer class="sidebar__footer">
                <p>{ "© 2025 Miroslav Lebeda" }</p>
            </footer>
        </aside>
    }
}

fn external_link(
    icon: UiIcon,
    icon_class: &'static str,
    label: &'static str,
    href: &'static str,
) -> Html {
    html! {
        <a class="side-link" href={href} target="_blank" rel="noopener noreferrer">
            <span class={classes!("side-link__icon", icon_class)}>{ ui_icon(icon) }</span>
            <span>{ label }</span>
        </a>
    }
}
