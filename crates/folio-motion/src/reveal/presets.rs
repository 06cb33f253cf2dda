//! Reveal variants used by each page section.

use folio_config::schema::RevealConfig;

use super::variants::{stagger_delay, RevealVariants};

/// About card: fades up 20px.
pub fn about_card(config: &RevealConfig) -> RevealVariants {
    RevealVariants::fade_up(20.0, config.section_duration)
}

/// Hero block: fades up 20px on mount.
pub fn hero(config: &RevealConfig) -> RevealVariants {
    RevealVariants::fade_up(20.0, config.section_duration)
}

/// Section containers (skills, projects): plain fade.
pub fn section_fade(config: &RevealConfig) -> RevealVariants {
    RevealVariants::fade(config.section_duration)
}

/// A skill badge or project card at `index`, staggered by position.
pub fn list_item(config: &RevealConfig, index: usize) -> RevealVariants {
    RevealVariants::fade_up(20.0, config.item_duration)
        .with_delay(stagger_delay(index, config.stagger_step))
}

/// Contact form: fades up from 50px.
pub fn contact(config: &RevealConfig) -> RevealVariants {
    RevealVariants::fade_up(50.0, config.section_duration)
}
