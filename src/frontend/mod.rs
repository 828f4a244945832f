mod app;
mod bootstrap;
mod contact;
mod dom;
mod effects;
mod nav;
mod portfolio;
mod reveal;
mod theme;
mod toast;

use web_sys::window;

pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    bootstrap::inject_styles();
    bootstrap::preload_fonts();

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log::error!("missing #app mount point; nothing rendered");
        return;
    };

    yew::Renderer::<app::App>::with_root(root).render();
    log::info!("portfolio initialized");
}
