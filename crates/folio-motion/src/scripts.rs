//! Ordered external script loading for the background effect.

use folio_config::schema::BackgroundConfig;

/// One script tag to inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub url: String,
    /// Whether this script's load event means the effect library is ready.
    pub signals_ready: bool,
}

/// Scripts to inject, in execution order.
///
/// Only the last script signals readiness: it depends on the earlier ones
/// and the page runs them in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptPlan {
    entries: Vec<ScriptEntry>,
}

impl ScriptPlan {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<ScriptEntry> = urls
            .into_iter()
            .map(|url| ScriptEntry {
                url: url.into(),
                signals_ready: false,
            })
            .collect();
        if let Some(last) = entries.last_mut() {
            last.signals_ready = true;
        }
        Self { entries }
    }

    /// Plan for the configured background; empty when disabled.
    pub fn from_config(config: &BackgroundConfig) -> Self {
        if !config.enabled {
            return Self::default();
        }
        Self::new(config.scripts.iter().cloned())
    }

    pub fn entries(&self) -> &[ScriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_script_signals_ready() {
        let plan = ScriptPlan::new(["three.js", "vanta.halo.js"]);
        let flags: Vec<bool> = plan.entries().iter().map(|e| e.signals_ready).collect();
        assert_eq!(flags, [false, true]);
    }

    #[test]
    fn default_background_plan() {
        let plan = ScriptPlan::from_config(&BackgroundConfig::default());
        assert_eq!(plan.entries().len(), 2);
        assert!(plan.entries()[0].url.contains("three"));
        assert!(plan.entries()[1].url.contains("vanta.halo"));
        assert!(plan.entries()[1].signals_ready);
    }

    #[test]
    fn disabled_background_loads_nothing() {
        let config = BackgroundConfig {
            enabled: false,
            ..BackgroundConfig::default()
        };
        assert!(ScriptPlan::from_config(&config).is_empty());
    }

    #[test]
    fn empty_plan() {
        let plan = ScriptPlan::new(Vec::<String>::new());
        assert!(plan.is_empty());
    }
}
