mod app;
mod bio;
mod detail;
mod icons;
mod launcher;
mod model;
mod orbit;
mod sidebar;

use app::App;

fn main() {
    // The catalog is static data; a broken table is a build mistake, so
    // refuse to mount rather than render half a page.
    if let Err(err) = showcase_core::validate_catalog(showcase_core::APP_CATALOG) {
        gloo::console::error!(format!("catalog validation failed: {err}"));
        return;
    }
    yew::Renderer::<App>::new().render();
}
