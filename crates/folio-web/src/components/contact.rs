use folio_common::SectionId;
use folio_config::schema::{ContactConfig, RevealConfig};
use folio_motion::reveal::presets;
use leptos::ev::SubmitEvent;
use leptos::html::Section;
use leptos::prelude::*;
use tracing::debug;

use super::reveal::use_viewport_reveal;

/// Static contact form. Submitting it goes nowhere.
#[component]
pub fn Contact(contact: ContactConfig, reveal: RevealConfig) -> impl IntoView {
    let target = NodeRef::<Section>::new();
    let state = use_viewport_reveal(target, reveal.policy);
    let variants = presets::contact(&reveal);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        debug!("contact form submitted; no handler configured");
    };

    view! {
        <section id=SectionId::Contact.anchor() class="section" node_ref=target>
            <div style=move || variants.style(state.get())>
                <h2 class="section-heading">{contact.heading}</h2>
                <form class="contact-form" on:submit=on_submit>
                    <div class="field">
                        <label for="name">"Name"</label>
                        <input type="text" id="name" name="name" required />
                    </div>
                    <div class="field">
                        <label for="email">"Email"</label>
                        <input type="email" id="email" name="email" required />
                    </div>
                    <div class="field">
                        <label for="message">"Message"</label>
                        <textarea id="message" name="message" rows=contact.message_rows.to_string() required></textarea>
                    </div>
                    <button type="submit" class="submit">{contact.submit_label}</button>
                </form>
            </div>
        </section>
    }
}
