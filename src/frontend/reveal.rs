use gloo_timers::callback::{Interval, Timeout};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::{
    CounterAnimation, CounterTarget, OneShot, SkillFill, COUNTER_TICK_MS, FLOATING_CLASS,
    REVEALED_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_FILL_DELAY_MS, SKILL_ROOT_MARGIN,
    SKILL_THRESHOLD,
};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Intersection observer bound to one element; disconnects on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    fn observe(
        target: &Element,
        threshold: f64,
        root_margin: &str,
        on_reveal: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let latch = Cell::new(OneShot::default());
        let mut on_reveal = Some(on_reveal);
        let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !intersecting {
                return;
            }

            let mut state = latch.get();
            if state.fire() {
                latch.set(state);
                observer.disconnect();
                if let Some(on_reveal) = on_reveal.take() {
                    on_reveal();
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// One-shot visibility flag for the element behind `node`.
///
/// Stays `false` forever if the node never mounts.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64, root_margin: &'static str) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let observer = match node.cast::<Element>() {
                Some(element) => RevealObserver::observe(&element, threshold, root_margin, move || {
                    revealed.set(true);
                }),
                None => {
                    log::debug!("reveal target not mounted; skipping observer");
                    None
                }
            };
            move || drop(observer)
        });
    }
    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealBoxProps {
    pub class: Classes,
    #[prop_or_default]
    pub floating: bool,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Block that gains the reveal class the first time it scrolls into view.
#[function_component(RevealBox)]
pub fn reveal_box(props: &RevealBoxProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN);

    html! {
        <div
            ref={node}
            class={classes!(
                props.class.clone(),
                revealed.then_some(REVEALED_CLASS),
                (revealed && props.floating).then_some(FLOATING_CLASS),
            )}
            style={props.style.clone()}
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN);
    let text = use_state_eq(|| props.value.to_string());
    let finished = use_state_eq(|| false);
    let animation = use_mut_ref(|| CounterTarget::parse(&props.value).map(CounterAnimation::new));

    {
        let text = text.clone();
        let finished = finished.clone();
        use_effect_with((revealed, *finished), move |(revealed, done)| {
            let mut interval = None;
            if *revealed && !*done && animation.borrow().is_some() {
                interval = Some(Interval::new(COUNTER_TICK_MS, move || {
                    let mut animation = animation.borrow_mut();
                    if let Some(counter) = animation.as_mut() {
                        text.set(counter.tick());
                        if counter.is_finished() {
                            finished.set(true);
                        }
                    }
                }));
            }
            move || drop(interval)
        });
    }

    html! {
        <div ref={node} class={classes!("stat", revealed.then_some(REVEALED_CLASS))}>
            <span class="stat-number">{ (*text).clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub name: AttrValue,
    pub percent: u8,
}

#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    let bar = use_node_ref();
    let bar_revealed = use_reveal(bar.clone(), SKILL_THRESHOLD, SKILL_ROOT_MARGIN);
    let fill = use_state_eq(SkillFill::default);
    let pending_fill: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let fill = fill.clone();
        use_effect_with(bar_revealed, move |revealed| {
            if *revealed {
                let collapsed = fill.on_reveal();
                fill.set(collapsed);
                let restore = fill.clone();
                *pending_fill.borrow_mut() = Some(Timeout::new(SKILL_FILL_DELAY_MS, move || {
                    restore.set(collapsed.on_delay_elapsed());
                }));
            }
            move || drop(pending_fill.borrow_mut().take())
        });
    }

    html! {
        <RevealBox class={classes!("skill-item")}>
            <div class="skill-header">
                <span class="skill-name">{ props.name.clone() }</span>
                <span class="skill-percent">{ format!("{}%", props.percent) }</span>
            </div>
            <div class="skill-bar">
                <div ref={bar} class="skill-progress" style={format!("width: {};", fill.width(props.percent))}></div>
            </div>
        </RevealBox>
    }
}
