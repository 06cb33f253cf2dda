//! Render-ready view models built from config.
//!
//! Components only map over these; everything testable about what the
//! page shows lives here.

use folio_common::SectionId;
use folio_config::schema::{ProfileConfig, ProjectsConfig, RevealConfig, SkillsConfig};
use folio_motion::reveal::presets;
use folio_motion::RevealVariants;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillBadge {
    pub name: String,
    pub reveal: RevealVariants,
}

pub fn skill_badges(skills: &SkillsConfig, reveal: &RevealConfig) -> Vec<SkillBadge> {
    skills
        .items
        .iter()
        .enumerate()
        .map(|(i, name)| SkillBadge {
            name: name.clone(),
            reveal: presets::list_item(reveal, i),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub href: String,
    pub reveal: RevealVariants,
}

pub fn project_cards(projects: &ProjectsConfig, reveal: &RevealConfig) -> Vec<ProjectCard> {
    projects
        .items
        .iter()
        .enumerate()
        .map(|(i, project)| ProjectCard {
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            href: project.link.clone(),
            reveal: presets::list_item(reveal, i),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialAnchor {
    pub label: &'static str,
    pub href: String,
    pub new_tab: bool,
}

pub fn social_anchors(profile: &ProfileConfig) -> Vec<SocialAnchor> {
    profile
        .socials
        .iter()
        .map(|social| SocialAnchor {
            label: social.kind.label(),
            href: social.url.clone(),
            new_tab: social.kind.opens_new_tab(),
        })
        .collect()
}

/// CSS class for a nav entry.
pub fn nav_class(section: SectionId, active: SectionId) -> &'static str {
    if section == active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}
