use folio_common::SectionId;
use folio_config::schema::{ProfileConfig, RevealConfig};
use folio_motion::reveal::presets;
use leptos::html::Section;
use leptos::prelude::*;

use super::reveal::use_viewport_reveal;
use crate::model::social_anchors;

#[component]
pub fn About(profile: ProfileConfig, reveal: RevealConfig) -> impl IntoView {
    let target = NodeRef::<Section>::new();
    let state = use_viewport_reveal(target, reveal.policy);
    let variants = presets::about_card(&reveal);
    let socials = social_anchors(&profile);

    view! {
        <section id=SectionId::About.anchor() class="section" node_ref=target>
            <div class="about-card" style=move || variants.style(state.get())>
                <img class="avatar" src=profile.avatar_url alt=profile.avatar_alt width="96" height="96" />
                <h2 class="section-heading">{profile.heading}</h2>
                <div class="about-text">
                    {profile.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
                <div class="socials">
                    {socials
                        .into_iter()
                        .map(|social| {
                            let (link_target, rel) = if social.new_tab {
                                (Some("_blank"), Some("noopener noreferrer"))
                            } else {
                                (None, None)
                            };
                            view! {
                                <a class="social" href=social.href target=link_target rel=rel>
                                    {social.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
