/// Opens the launch target registered for `name` in a new browsing context.
/// Fire-and-forget: the result of the navigation is not checked. Names
/// without a registered target are a logged no-op so catalog entries can land
/// before their launch URL does.
pub(crate) fn launch(name: &str) {
    let Some(url) = showcase_core::launch_url(name) else {
        gloo::console::log!(format!("launch: no target registered for '{name}'"));
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.open_with_url_and_target(url, "_blank");
}
