use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, Storage};
use yew::prelude::*;

use crate::scroll::SectionBounds;
use crate::theme::{Theme, ThemeStore, THEME_KEY};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Theme preference persisted in `localStorage`.
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, value);
        }
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = body() {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Bounds of the element with `id`, or `None` when it is not in the page.
pub fn section_bounds(id: &str) -> Option<SectionBounds> {
    let element = document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

/// Current vertical scroll offset, updated on every window scroll event.
#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state_eq(scroll_y);
    {
        let offset = offset.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| offset.set(scroll_y()))
            });
            move || drop(listener)
        });
    }
    *offset
}

/// Trailing-edge debounced callback; each call re-arms the timer.
pub struct Debounced {
    pending: RefCell<Option<Timeout>>,
    wait_ms: u32,
    callback: Rc<dyn Fn()>,
}

impl Debounced {
    pub fn new(wait_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            pending: RefCell::new(None),
            wait_ms,
            callback: Rc::new(callback),
        }
    }

    pub fn call(&self) {
        let callback = Rc::clone(&self.callback);
        let timeout = Timeout::new(self.wait_ms, move || callback());
        // Replacing the handle cancels the previously armed timeout.
        *self.pending.borrow_mut() = Some(timeout);
    }
}
