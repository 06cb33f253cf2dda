//! Configuration schema types for the portfolio.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the published site content.

mod background;
mod content;
mod hero;
mod profile;
mod reveal;
mod site;

pub use background::*;
pub use content::*;
pub use hero::*;
pub use profile::*;
pub use reveal::*;
pub use site::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the portfolio page.
///
/// Every section defaults to the content the site ships with.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FolioConfig {
    pub site: SiteConfig,
    pub profile: ProfileConfig,
    pub hero: HeroConfig,
    pub background: BackgroundConfig,
    pub reveal: RevealConfig,
    pub skills: SkillsConfig,
    pub projects: ProjectsConfig,
    pub contact: ContactConfig,
    pub footer: FooterConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hero_matches_site() {
        let config = FolioConfig::default();
        assert_eq!(config.hero.name, "Harsh Kumar");
        assert_eq!(config.hero.tagline, "Cloud Engineer & Full Stack Developer");
        assert_eq!(config.hero.typing_interval_ms, 100);
        assert_eq!(config.hero.cta_label, "Get in touch");
    }

    #[test]
    fn default_background_is_halo() {
        let config = FolioConfig::default();
        let bg = &config.background;
        assert!(bg.enabled);
        assert_eq!(bg.scripts.len(), 2);
        assert!(bg.scripts[0].contains("three.min.js"));
        assert!(bg.scripts[1].contains("vanta.halo.min.js"));
        assert!(bg.halo.mouse_controls);
        assert!(bg.halo.touch_controls);
        assert!(!bg.halo.gyro_controls);
        assert!((bg.halo.min_height - 400.0).abs() < f64::EPSILON);
        assert!((bg.halo.min_width - 800.0).abs() < f64::EPSILON);
        assert_eq!(bg.halo.base_color, 0x22b945);
        assert_eq!(bg.halo.background_color, 0x000000);
        assert!((bg.halo.y_offset - 0.20).abs() < f64::EPSILON);
    }

    #[test]
    fn default_reveal_timings() {
        let config = FolioConfig::default();
        assert!((config.reveal.section_duration - 0.8).abs() < f64::EPSILON);
        assert!((config.reveal.item_duration - 0.5).abs() < f64::EPSILON);
        assert!((config.reveal.stagger_step - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.reveal.policy, RevealPolicy::Once);
    }

    #[test]
    fn default_skills_list() {
        let config = FolioConfig::default();
        assert_eq!(config.skills.items.len(), 14);
        assert_eq!(config.skills.items.first().map(String::as_str), Some("HTML"));
        assert_eq!(config.skills.items.last().map(String::as_str), Some("Linux"));
    }

    #[test]
    fn default_projects_list() {
        let config = FolioConfig::default();
        let titles: Vec<&str> = config
            .projects
            .items
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(
            titles,
            [
                "Lingua.BOT",
                "Windows 98 Javascript",
                "Snack It Up",
                "Dragon Slayer Game",
                "Repurpose.It",
                "CarbonCalc",
            ]
        );
        assert_eq!(
            config.projects.items[0].link,
            "https://github.com/cyrixninja/Lingua.BOT"
        );
    }

    #[test]
    fn default_profile_socials() {
        let config = FolioConfig::default();
        let kinds: Vec<SocialKind> = config.profile.socials.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [SocialKind::Github, SocialKind::Linkedin, SocialKind::Email]
        );
        assert_eq!(config.profile.socials[2].url, "mailto:cyrixninja@gmail.com");
        assert_eq!(config.profile.paragraphs.len(), 3);
    }

    #[test]
    fn default_logging_is_info() {
        let config = FolioConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: FolioConfig = toml::from_str(
            r#"
[hero]
tagline = "Rustacean"
"#,
        )
        .unwrap();
        assert_eq!(config.hero.tagline, "Rustacean");
        assert_eq!(config.hero.name, "Harsh Kumar");
        assert_eq!(config.skills.items.len(), 14);
    }

    #[test]
    fn hex_colors_parse_from_toml() {
        let config: FolioConfig = toml::from_str(
            r#"
[background.halo]
base_color = 0xff0000
"#,
        )
        .unwrap();
        assert_eq!(config.background.halo.base_color, 0xff0000);
        assert_eq!(config.background.halo.background_color, 0);
    }
}
