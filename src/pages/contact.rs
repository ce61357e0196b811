//! Contact Page
//!
//! There is no backend endpoint for messages; the form validates locally
//! and confirms after a short simulated send.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FormField;
use crate::validation::{validate_contact, ContactErrors};

const SEND_DELAY_MS: u32 = 800;

const CONTACT_INFO: &[(&str, &str, &str)] = &[
    ("Email Us", "hello@devhub.com", "We'll respond within 24 hours"),
    ("Call Us", "+91 12345 67890", "Mon-Fri, 9AM-6PM IST"),
    ("Visit Us", "Odisha, India", "Open office hours by appointment"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(ContactErrors::default());
    let (sending, set_sending) = signal(false);
    let (sent, set_sent) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let checked = validate_contact(&name.get(), &email.get(), &subject.get(), &message.get());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid || sending.get() {
            return;
        }

        set_sending.set(true);
        set_sent.set(false);
        spawn_local(async move {
            TimeoutFuture::new(SEND_DELAY_MS).await;
            log::info!("Contact message from {} queued", email.get_untracked());
            for field in [name, email, subject, message] {
                field.set(String::new());
            }
            set_sending.set(false);
            set_sent.set(true);
        });
    };

    view! {
        <div class="contact-page">
            <section class="hero">
                <h1>"Get in Touch"</h1>
                <p>
                    "Have a question, suggestion, or want to collaborate? We'd love to hear from you. Reach out
                    and let's start a conversation."
                </p>
            </section>

            <div class="contact-layout">
                <form class="contact-form" on:submit=submit novalidate=true>
                    <h2>"Send us a Message"</h2>
                    <p class="muted">"Fill out the form below and we'll get back to you as soon as possible."</p>
                    <Show when=move || sent.get()>
                        <div class="notice success" role="status">
                            <strong>"Message Sent Successfully!"</strong>
                            <p>"We'll get back to you within 24 hours."</p>
                        </div>
                    </Show>
                    <FormField id="contact-name" label="Name" value=name error=Signal::derive(move || errors.get().name)/>
                    <FormField
                        id="contact-email"
                        label="Email"
                        input_type="email"
                        value=email
                        error=Signal::derive(move || errors.get().email)
                    />
                    <FormField
                        id="contact-subject"
                        label="Subject"
                        value=subject
                        error=Signal::derive(move || errors.get().subject)
                    />
                    <div class="form-field">
                        <label for="contact-message">"Message"</label>
                        <textarea
                            id="contact-message"
                            rows="5"
                            class=move || if errors.get().message.is_some() { "input invalid" } else { "input" }
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        {move || errors.get().message.map(|msg| view! { <p class="field-error">{msg}</p> })}
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>

                <aside class="contact-info">
                    <h2>"Let's Connect"</h2>
                    {CONTACT_INFO
                        .iter()
                        .map(|(title, value, note)| view! {
                            <div class="info-card">
                                <h3>{*title}</h3>
                                <p>{*value}</p>
                                <p class="muted">{*note}</p>
                            </div>
                        })
                        .collect_view()}
                    <div class="stat-grid">
                        <div class="stat"><span class="stat-value">"24h"</span><span class="muted">"Response Time"</span></div>
                        <div class="stat"><span class="stat-value">"10k+"</span><span class="muted">"Happy Users"</span></div>
                    </div>
                </aside>
            </div>
        </div>
    }
}
