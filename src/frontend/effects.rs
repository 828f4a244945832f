use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent as DomMouseEvent, Node};
use yew::prelude::*;

use super::dom::{document, now_ms};
use crate::effects::{
    lift_state, Cursor, SparkleField, Typewriter, INTERACTIVE_SELECTOR, LIFT_ATTRIBUTE,
    SPARKLE_TICK_MS, TYPEWRITER_TICK_MS,
};

pub enum CursorAction {
    Move(f64, f64),
    Hover(bool),
}

impl Reducible for Cursor {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CursorAction::Move(x, y) => next.move_to(x, y),
            CursorAction::Hover(over) => next.set_over_interactive(over),
        }
        Rc::new(next)
    }
}

/// Closest interactive ancestor of the event target, if any.
fn interactive_target(event: &DomMouseEvent) -> Option<HtmlElement> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(INTERACTIVE_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Whether the pointer moved between nodes inside the same element.
fn stays_within(element: &HtmlElement, event: &DomMouseEvent) -> bool {
    event
        .related_target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| element.contains(Some(&node)))
}

fn set_lift(element: &HtmlElement, hovered: bool) {
    let _ = element.set_attribute(LIFT_ATTRIBUTE, lift_state(hovered));
}

/// Pointer follower plus hover lift on interactive elements, both driven by
/// document-level mouse listeners.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let cursor = use_reducer_eq(Cursor::default);

    {
        let dispatcher = cursor.dispatcher();
        use_effect_with((), move |_| {
            let listeners = document().map(|doc| {
                let on_move = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&doc, "mousemove", move |event| {
                        if let Some(event) = event.dyn_ref::<DomMouseEvent>() {
                            dispatcher.dispatch(CursorAction::Move(
                                f64::from(event.client_x()),
                                f64::from(event.client_y()),
                            ));
                        }
                    })
                };
                let on_over = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&doc, "mouseover", move |event| {
                        let Some(event) = event.dyn_ref::<DomMouseEvent>() else {
                            return;
                        };
                        if let Some(element) = interactive_target(event) {
                            if !stays_within(&element, event) {
                                set_lift(&element, true);
                                dispatcher.dispatch(CursorAction::Hover(true));
                            }
                        }
                    })
                };
                let on_out = EventListener::new(&doc, "mouseout", move |event| {
                    let Some(event) = event.dyn_ref::<DomMouseEvent>() else {
                        return;
                    };
                    if let Some(element) = interactive_target(event) {
                        if !stays_within(&element, event) {
                            set_lift(&element, false);
                            dispatcher.dispatch(CursorAction::Hover(false));
                        }
                    }
                });
                [on_move, on_over, on_out]
            });
            move || drop(listeners)
        });
    }

    let Some((left, top)) = cursor.position() else {
        return Html::default();
    };

    html! {
        <div
            class="custom-cursor"
            style={format!("left: {left}px; top: {top}px; transform: {};", cursor.transform())}
        ></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub class: Classes,
    pub text: AttrValue,
}

/// Reveals `text` one character per tick.
#[function_component(TypedText)]
pub fn typed_text(props: &TypedTextProps) -> Html {
    let typewriter = use_mut_ref(|| Typewriter::new(&props.text));
    let shown = use_state_eq(String::new);
    let done = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let done_handle = done.clone();
        use_effect_with(*done, move |done| {
            let interval = (!*done).then(|| {
                Interval::new(TYPEWRITER_TICK_MS, move || {
                    let mut typewriter = typewriter.borrow_mut();
                    if typewriter.tick() {
                        shown.set(typewriter.shown());
                    } else {
                        done_handle.set(true);
                    }
                })
            });
            move || drop(interval)
        });
    }

    html! {
        <p class={props.class.clone()} aria-label={props.text.clone()}>{ (*shown).clone() }</p>
    }
}

pub enum SparkleAction {
    Start(f64),
    Tick(f64),
    Stop,
}

impl Reducible for SparkleField {
    type Action = SparkleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SparkleAction::Start(now) => next.start(now),
            SparkleAction::Tick(now) => next.advance(now, &mut js_sys::Math::random),
            SparkleAction::Stop => next.stop(),
        }
        Rc::new(next)
    }
}

/// Ambient particle layer; unmounting drops the driving interval.
#[function_component(SparkleLayer)]
pub fn sparkle_layer() -> Html {
    let field = use_reducer(SparkleField::default);

    {
        let dispatcher = field.dispatcher();
        use_effect_with((), move |_| {
            dispatcher.dispatch(SparkleAction::Start(now_ms()));
            let ticker = {
                let dispatcher = dispatcher.clone();
                Interval::new(SPARKLE_TICK_MS, move || {
                    dispatcher.dispatch(SparkleAction::Tick(now_ms()));
                })
            };
            move || {
                drop(ticker);
                dispatcher.dispatch(SparkleAction::Stop);
            }
        });
    }

    html! {
        <div class="sparkle-container" aria-hidden="true">
            { for field.particles().iter().map(|sparkle| html! {
                <div key={sparkle.id} class="sparkle" style={sparkle.style()}></div>
            }) }
        </div>
    }
}
