use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::toast::{ToastId, ToastKind, ToastQueue, ToastStep, TOAST_SCHEDULE};

const TOAST_STYLE: &str = "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
    background: var(--bg-secondary); border: 2px solid var(--text-accent); border-radius: 10px; \
    color: var(--text-primary); z-index: 10000; box-shadow: 0 4px 20px var(--shadow-color); \
    max-width: 400px; display: flex; justify-content: space-between; align-items: center; gap: 1rem;";
const CLOSE_BUTTON_STYLE: &str = "background: none; border: none; color: var(--text-accent); \
    font-size: 1.5rem; cursor: pointer; padding: 0; width: 24px; height: 24px; display: flex; \
    align-items: center; justify-content: center;";

pub enum ToastAction {
    Push {
        id: ToastId,
        message: String,
        kind: ToastKind,
    },
    Dismiss(ToastId),
    Step(ToastId, ToastStep),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ToastAction::Push { id, message, kind } => {
                next.push(id, message, kind);
                true
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
            ToastAction::Step(id, step) => next.step(id, step),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Handle for raising notifications from any component under the provider.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastQueue>,
    next_id: Rc<Cell<ToastId>>,
}

impl Notifier {
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.dispatcher.dispatch(ToastAction::Push {
            id,
            message: message.into(),
            kind,
        });

        for (delay, step) in TOAST_SCHEDULE {
            let dispatcher = self.dispatcher.clone();
            Timeout::new(delay, move || dispatcher.dispatch(ToastAction::Step(id, step))).forget();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_memo((), |_| Cell::new(0));
    let notifier = Notifier {
        dispatcher: queue.dispatcher(),
        next_id,
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { props.children.clone() }
            { for queue.visible().iter().map(|toast| {
                let on_close = {
                    let queue = queue.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| queue.dispatch(ToastAction::Dismiss(id)))
                };
                let style = format!("{TOAST_STYLE} animation: {};", toast.animation());
                html! {
                    <div key={toast.id} class={toast.kind.class_name()} style={style} role="status">
                        <span>{ toast.message.clone() }</span>
                        <button type="button" style={CLOSE_BUTTON_STYLE} aria-label="Dismiss" onclick={on_close}>
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </ContextProvider<Notifier>>
    }
}

#[hook]
pub fn use_notifier() -> Option<Notifier> {
    use_context::<Notifier>()
}
