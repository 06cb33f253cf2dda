use folio_common::SectionId;
use folio_config::schema::{RevealConfig, SkillsConfig};
use folio_motion::reveal::presets;
use leptos::html::Section;
use leptos::prelude::*;

use super::reveal::use_viewport_reveal;
use crate::model::skill_badges;

/// Skill badges. The container fades in when scrolled into view and the
/// badges follow in order, each delayed by its position.
#[component]
pub fn Skills(skills: SkillsConfig, reveal: RevealConfig) -> impl IntoView {
    let target = NodeRef::<Section>::new();
    let state = use_viewport_reveal(target, reveal.policy);
    let container = presets::section_fade(&reveal);
    let badges = skill_badges(&skills, &reveal);

    view! {
        <section id=SectionId::Skills.anchor() class="section" node_ref=target>
            <div style=move || container.style(state.get())>
                <h2 class="section-heading">{skills.heading}</h2>
                <div class="badges">
                    {badges
                        .into_iter()
                        .map(|badge| {
                            let variants = badge.reveal;
                            view! {
                                <span class="badge" style=move || variants.style(state.get())>
                                    {badge.name}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
