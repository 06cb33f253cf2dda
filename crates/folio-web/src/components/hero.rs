use std::time::Duration;

use folio_common::SectionId;
use folio_config::schema::{HeroConfig, RevealConfig};
use folio_motion::reveal::presets;
use folio_motion::{Typewriter, TypewriterStep};
use leptos::prelude::*;
use tracing::{debug, warn};

use super::reveal::use_mount_reveal;
use crate::browser::dom;

/// Types `text` into a signal one character per `interval`.
///
/// The timer stops itself once the text is complete and is cleared if the
/// component unmounts first.
fn use_typed_text(text: &str, interval: Duration) -> ReadSignal<String> {
    let (typed, set_typed) = signal(String::new());
    let writer = StoredValue::new(Typewriter::new(text));
    let timer = StoredValue::new(None::<IntervalHandle>);

    let tick = move || match writer.try_update_value(|w| w.tick()) {
        Some(TypewriterStep::Typed(c)) => set_typed.update(|s| s.push(c)),
        Some(TypewriterStep::Finished) | None => {
            if let Some(Some(handle)) = timer.try_update_value(Option::take) {
                handle.clear();
                debug!("hero text finished typing");
            }
        }
    };

    match set_interval_with_handle(tick, interval) {
        Ok(handle) => timer.set_value(Some(handle)),
        Err(e) => {
            warn!("typing timer unavailable: {}", dom::describe(&e));
            set_typed.set(text.to_string());
        }
    }

    on_cleanup(move || {
        if let Some(Some(handle)) = timer.try_update_value(Option::take) {
            handle.clear();
        }
    });

    typed
}

#[component]
pub fn Hero(config: HeroConfig, reveal: RevealConfig) -> impl IntoView {
    let HeroConfig {
        name,
        tagline,
        typing_interval_ms,
        cta_label,
        cta_target,
    } = config;

    let typed = use_typed_text(&tagline, Duration::from_millis(u64::from(typing_interval_ms)));
    let state = use_mount_reveal();
    let variants = presets::hero(&reveal);

    view! {
        <section id=SectionId::Home.anchor() class="hero">
            <div class="hero-body" style=move || variants.style(state.get())>
                <h1 class="hero-name">{name}</h1>
                <h2 class="hero-tagline">{move || typed.get()}</h2>
                <a href=cta_target.href() class="cta">{cta_label}</a>
            </div>
        </section>
    }
}
