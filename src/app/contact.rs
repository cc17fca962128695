use std::rc::Rc;

use leptos::{either::Either, html, prelude::*};

use crate::contact::{
    ContactEvent, ContactFields, ContactForm, SENDING_LABEL, SEND_LABEL, SUCCESS_TEXT,
};
use crate::content::SiteContent;
use crate::schedule::TimeoutScheduler;

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Success,
    Error(String),
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (sending, set_sending) = signal(false);
    let (status, set_status) = signal(None::<Status>);

    let form = StoredValue::new_local(ContactForm::new(
        Rc::new(TimeoutScheduler),
        move |event| match event {
            ContactEvent::Sending => {
                set_sending.set(true);
                set_status.set(None);
            }
            ContactEvent::Sent => {
                set_sending.set(false);
                set_status.set(Some(Status::Success));
                if let Some(form) = form_ref.get_untracked() {
                    form.reset();
                }
            }
            ContactEvent::StatusHidden => set_status.set(None),
        },
    ));

    let value_of = |input: NodeRef<html::Input>| {
        input
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = ContactFields {
            name: value_of(name_ref),
            email: value_of(email_ref),
            subject: value_of(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
        };
        if let Err(e) = form.with_value(|f| f.submit(&fields)) {
            set_status.set(Some(Status::Error(e.to_string())));
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title fade-in-up">"Get In Touch"</h2>
            <div class="contact-content">
                <div class="contact-info fade-in-left">
                    <p>
                        <i class="fas fa-envelope"></i>
                        " "
                        <a href=format!("mailto:{}", content.email)>{content.email.clone()}</a>
                    </p>
                    <p>
                        <i class="fas fa-map-marker-alt"></i>
                        " "
                        {content.location.clone()}
                    </p>
                </div>
                <form
                    id="contact-form"
                    class="contact-form fade-in-right"
                    node_ref=form_ref
                    on:submit=on_submit
                >
                    <input node_ref=name_ref type="text" name="name" placeholder="Your Name" />
                    <input node_ref=email_ref type="email" name="email" placeholder="Your Email" />
                    <input node_ref=subject_ref type="text" name="subject" placeholder="Subject" />
                    <textarea
                        node_ref=message_ref
                        name="message"
                        rows="5"
                        placeholder="Your Message"
                    ></textarea>
                    <button
                        type="submit"
                        class=move || if sending.get() { "submit-btn submitting" } else { "submit-btn" }
                        disabled=move || sending.get()
                    >
                        {move || {
                            if sending.get() {
                                Either::Left(view! {
                                    <i class="fas fa-spinner fa-spin"></i>
                                    " "
                                    {SENDING_LABEL}
                                })
                            } else {
                                Either::Right(view! {
                                    <i class="fas fa-paper-plane"></i>
                                    " "
                                    {SEND_LABEL}
                                })
                            }
                        }}
                    </button>
                    {move || {
                        status
                            .get()
                            .map(|status| match status {
                                Status::Success => Either::Left(view! {
                                    <div id="submit-status" class="submit-status success">
                                        <i class="fas fa-check-circle"></i>
                                        " "
                                        {SUCCESS_TEXT}
                                    </div>
                                }),
                                Status::Error(msg) => Either::Right(view! {
                                    <div id="submit-status" class="submit-status error">
                                        <i class="fas fa-exclamation-circle"></i>
                                        " "
                                        {msg}
                                    </div>
                                }),
                            })
                    }}
                </form>
            </div>
        </section>
    }
}
