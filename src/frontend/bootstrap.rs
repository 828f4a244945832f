use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlLinkElement, HtmlStyleElement};
use yew::prelude::*;

use super::dom::{body, document};
use crate::effects::lift_rules;

const STYLE_ELEMENT_ID: &str = "portfolio-fx-styles";
const FONT_PRELOAD_ID: &str = "portfolio-fx-fonts";
const FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700;900&family=Exo+2:wght@300;400;500;600;700&display=swap";
const LOADED_CLASS: &str = "loaded";

const ADDITIONAL_STYLES: &str = r"
@keyframes fadeOut {
    to { opacity: 0; transform: scale(0.8); }
}

@keyframes slideOutRight {
    to { opacity: 0; transform: translateX(100%); }
}

@keyframes sparkleFloat {
    0% { opacity: 0; transform: translateY(0) scale(0); }
    50% { opacity: 1; transform: translateY(-50px) scale(1); }
    100% { opacity: 0; transform: translateY(-100px) scale(0); }
}

.nav-menu.active {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    background: var(--nav-bg);
    backdrop-filter: blur(10px);
    padding: 2rem;
    border-top: 1px solid var(--border-color);
    animation: slideInDown 0.3s ease-out;
}

@keyframes slideInDown {
    from { opacity: 0; transform: translateY(-20px); }
    to { opacity: 1; transform: translateY(0); }
}
";

/// Appends the runtime keyframes once; later calls find the element by id.
pub fn inject_styles() {
    let Some(document) = document() else {
        return;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Some(style) = document
        .create_element("style")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlStyleElement>().ok())
    else {
        return;
    };

    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&format!("{ADDITIONAL_STYLES}\n{}", lift_rules())));
    let _ = head.append_child(&style);
}

pub fn preload_fonts() {
    let Some(document) = document() else {
        return;
    };
    if document.get_element_by_id(FONT_PRELOAD_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Some(link) = document
        .create_element("link")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok())
    else {
        return;
    };

    link.set_id(FONT_PRELOAD_ID);
    link.set_rel("preload");
    link.set_as("style");
    link.set_href(FONT_STYLESHEET_URL);
    let _ = head.append_child(&link);
}

fn mark_body_loaded() {
    if let Some(body) = body() {
        let _ = body.class_list().add_1(LOADED_CLASS);
    }
}

/// `true` once the window `load` event has fired (or had already fired at
/// mount). Marks `<body>` with the `loaded` class at that moment.
#[hook]
pub fn use_page_loaded() -> bool {
    let already_loaded = document().is_some_and(|d| d.ready_state() == "complete");
    let loaded = use_state_eq(|| already_loaded);

    {
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            let mut listener = None;
            if already_loaded {
                mark_body_loaded();
            } else if let Some(win) = window() {
                listener = Some(EventListener::once(&win, "load", move |_| {
                    mark_body_loaded();
                    loaded.set(true);
                }));
            }
            move || drop(listener)
        });
    }

    *loaded
}
