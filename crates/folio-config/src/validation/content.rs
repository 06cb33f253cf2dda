//! Display list validation: skills, projects, and profile links.

use std::collections::HashSet;

use crate::schema::FolioConfig;

use super::helpers::{validate_link, validate_not_empty};

pub(crate) fn validate_skills(errors: &mut Vec<String>, config: &FolioConfig) {
    let skills = &config.skills.items;
    if skills.is_empty() {
        errors.push("skills.items must not be empty".into());
    }

    let mut seen = HashSet::new();
    for (i, skill) in skills.iter().enumerate() {
        validate_not_empty(errors, &format!("skills.items[{i}]"), skill);
        if !seen.insert(skill.trim().to_lowercase()) {
            errors.push(format!("skills.items[{i}] = {skill:?} is a duplicate"));
        }
    }
}

pub(crate) fn validate_projects(errors: &mut Vec<String>, config: &FolioConfig) {
    let projects = &config.projects.items;
    if projects.is_empty() {
        errors.push("projects.items must not be empty".into());
    }

    for (i, project) in projects.iter().enumerate() {
        validate_not_empty(errors, &format!("projects.items[{i}].title"), &project.title);
        validate_link(errors, &format!("projects.items[{i}].link"), &project.link);
        validate_link(
            errors,
            &format!("projects.items[{i}].image_url"),
            &project.image_url,
        );
    }
}

pub(crate) fn validate_profile(errors: &mut Vec<String>, config: &FolioConfig) {
    let profile = &config.profile;
    validate_link(errors, "profile.avatar_url", &profile.avatar_url);
    for (i, social) in profile.socials.iter().enumerate() {
        validate_link(errors, &format!("profile.socials[{i}].url"), &social.url);
    }
}
