use folio_common::SectionId;
use folio_config::schema::{ProjectsConfig, RevealConfig};
use folio_motion::reveal::presets;
use folio_motion::RevealState;
use leptos::prelude::*;
use tracing::warn;

use super::reveal::use_mount_reveal;
use crate::model::{project_cards, ProjectCard};

#[component]
fn Card(card: ProjectCard, state: ReadSignal<RevealState>) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let ProjectCard {
        title,
        description,
        image_url,
        href,
        reveal,
    } = card;
    let log_title = title.clone();

    view! {
        <div class="project-card" style=move || reveal.style(state.get())>
            <a href=href target="_blank" rel="noopener noreferrer">
                <div class="project-image">
                    <img
                        src=image_url
                        alt=title.clone()
                        class:broken=move || broken.get()
                        on:error=move |_| {
                            warn!(project = %log_title, "project image failed to load");
                            set_broken.set(true);
                        }
                    />
                </div>
                <h3>{title}</h3>
                <p>{description}</p>
            </a>
        </div>
    }
}

/// Project gallery. Revealed on mount rather than on scroll.
#[component]
pub fn Projects(projects: ProjectsConfig, reveal: RevealConfig) -> impl IntoView {
    let state = use_mount_reveal();
    let container = presets::section_fade(&reveal);
    let cards = project_cards(&projects, &reveal);

    view! {
        <section id=SectionId::Projects.anchor() class="section">
            <div style=move || container.style(state.get())>
                <h2 class="section-heading">{projects.heading}</h2>
                <div class="project-grid">
                    {cards.into_iter().map(|card| view! { <Card card=card state=state /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
