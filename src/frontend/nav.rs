use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use super::dom::{document, section_bounds, set_body_overflow, use_scroll_y, viewport_width, Debounced};
use super::theme::{use_glitch, ThemeToggle};
use crate::menu::{Drawer, DrawerEvent, RESIZE_DEBOUNCE_MS};
use crate::scroll::{active_section, fragment_id, navbar_background, navbar_shadow, scroll_target};
use crate::theme::Theme;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#portfolio", "Portfolio"),
    ("#skills", "Skills"),
    ("#awards", "Awards"),
    ("#contact", "Contact"),
];

impl Reducible for Drawer {
    type Action = DrawerEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn smooth_scroll_to(href: &str) {
    let Some(top) = fragment_id(href).and_then(section_bounds).map(|b| b.top) else {
        log::debug!("no section for {href}; link click ignored");
        return;
    };
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Escape and viewport-resize subscriptions for the drawer.
#[hook]
fn use_drawer_dismissal(dispatcher: UseReducerDispatcher<Drawer>) {
    use_effect_with((), move |_| {
        let keydown = document().map(|doc| {
            let dispatcher = dispatcher.clone();
            EventListener::new(&doc, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if is_escape {
                    dispatcher.dispatch(DrawerEvent::Escape);
                }
            })
        });

        let resize = window().map(|win| {
            let debounced = Debounced::new(RESIZE_DEBOUNCE_MS, move || {
                if let Some(width) = viewport_width() {
                    dispatcher.dispatch(DrawerEvent::Resize(width));
                }
            });
            EventListener::new(&win, "resize", move |_| debounced.call())
        });

        move || drop((keydown, resize))
    });
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let drawer = use_reducer_eq(Drawer::default);
    let scroll_y = use_scroll_y();
    let glitching = use_glitch(props.theme);

    use_drawer_dismissal(drawer.dispatcher());

    use_effect_with(*drawer, |drawer| {
        set_body_overflow(drawer.body_overflow());
        || ()
    });

    let sections: Vec<_> = NAV_LINKS
        .iter()
        .map(|(href, _)| fragment_id(href).and_then(section_bounds))
        .collect();
    let active = active_section(scroll_y, &sections);

    let on_toggle_drawer = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| drawer.dispatch(DrawerEvent::Toggle))
    };
    let on_overlay = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| drawer.dispatch(DrawerEvent::OverlayClick))
    };

    let open = drawer.is_open().then_some("active");
    let navbar_style = format!(
        "background: {}; box-shadow: {};",
        navbar_background(scroll_y, props.theme),
        navbar_shadow(scroll_y)
    );

    html! {
        <>
            <nav class="navbar" style={navbar_style}>
                <div class="nav-container">
                    <a class="logo" href="#home">
                        <span class={classes!("logo-text", glitching.then_some("glitch"))}>{"STARK"}</span>
                    </a>
                    <ul id="navMenu" class={classes!("nav-menu", open)}>
                        { for NAV_LINKS.iter().enumerate().map(|(index, (href, label))| {
                            let onclick = {
                                let drawer = drawer.clone();
                                let href = *href;
                                Callback::from(move |event: MouseEvent| {
                                    event.prevent_default();
                                    smooth_scroll_to(href);
                                    drawer.dispatch(DrawerEvent::NavLinkClick);
                                })
                            };
                            html! {
                                <li>
                                    <a
                                        class={classes!("nav-link", (active == Some(index)).then_some("active"))}
                                        href={*href}
                                        {onclick}
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                    <div class="nav-actions">
                        <ThemeToggle theme={props.theme} onclick={props.on_toggle_theme.clone()} />
                        <button
                            id="mobileMenuToggle"
                            class={classes!("mobile-menu-toggle", open)}
                            type="button"
                            aria-label="Toggle navigation"
                            aria-expanded={drawer.is_open().to_string()}
                            onclick={on_toggle_drawer}
                        >
                            <span></span>
                            <span></span>
                            <span></span>
                        </button>
                    </div>
                </div>
            </nav>
            <div id="mobileMenuOverlay" class={classes!("mobile-menu-overlay", open)} onclick={on_overlay}></div>
        </>
    }
}
