use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::reveal::RevealBox;
use super::toast::use_notifier;
use crate::contact::{success_notice, ContactForm, Field, SUBMIT_DELAY_MS};

pub enum ContactAction {
    Edit(Field, String),
    Submit,
    Complete,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ContactAction::Edit(field, value) => {
                next.fields.set(field, value);
                true
            }
            ContactAction::Submit => next.submit(),
            ContactAction::Complete => next.complete(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn input_handler(form: &UseReducerHandle<ContactForm>, field: Field) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let value = match field {
            Field::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
            _ => event.target_unchecked_into::<HtmlInputElement>().value(),
        };
        form.dispatch(ContactAction::Edit(field, value));
    })
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_reducer_eq(ContactForm::default);
    let notifier = use_notifier();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if form.state.is_sending() {
                return;
            }
            form.dispatch(ContactAction::Submit);

            let dispatcher = form.dispatcher();
            let notifier = notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                if let Some(notifier) = notifier {
                    let (message, kind) = success_notice();
                    notifier.notify(message, kind);
                } else {
                    log::debug!("no notifier in scope; contact confirmation not shown");
                }
                dispatcher.dispatch(ContactAction::Complete);
            });
        })
    };

    let state = form.state;
    let fields = &form.fields;

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        <RevealBox class={classes!("contact-item")}>
                            <h3>{"Email"}</h3>
                            <p>{"tony@starkindustries.example"}</p>
                        </RevealBox>
                        <RevealBox class={classes!("contact-item")}>
                            <h3>{"Office"}</h3>
                            <p>{"Stark Tower, New York"}</p>
                        </RevealBox>
                        <RevealBox class={classes!("contact-item")}>
                            <h3>{"Assistant"}</h3>
                            <p>{"Ask J.A.R.V.I.S."}</p>
                        </RevealBox>
                    </div>
                    <form class="form" {onsubmit}>
                        <input
                            class="form-input"
                            type="text"
                            name="name"
                            placeholder="Your Name"
                            value={fields.name.clone()}
                            oninput={input_handler(&form, Field::Name)}
                            required=true
                        />
                        <input
                            class="form-input"
                            type="email"
                            name="email"
                            placeholder="Your Email"
                            value={fields.email.clone()}
                            oninput={input_handler(&form, Field::Email)}
                            required=true
                        />
                        <input
                            class="form-input"
                            type="text"
                            name="subject"
                            placeholder="Subject"
                            value={fields.subject.clone()}
                            oninput={input_handler(&form, Field::Subject)}
                        />
                        <textarea
                            class="form-input"
                            name="message"
                            rows="5"
                            placeholder="Your Message"
                            value={fields.message.clone()}
                            oninput={input_handler(&form, Field::Message)}
                            required=true
                        />
                        <button
                            class="btn btn-primary"
                            type="submit"
                            disabled={state.is_sending()}
                            style={format!("opacity: {};", state.opacity())}
                        >
                            { state.label() }
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
