//! # Configuration
//!
//! Console configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ROSTER_*`)
//! 2. Defaults (this file)
//!
//! `RUST_LOG`, when set, overrides `log_filter` entirely.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Default tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// JSON file with the initial roster (array of employee records).
    pub seed_path: Option<PathBuf>,

    /// Shell prompt.
    pub prompt: String,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - Log filter: `info,roster=debug`
    /// - Seed: none (empty roster)
    /// - Prompt: `"> "`
    fn default() -> Self {
        AppConfig {
            log_filter: "info,roster=debug".to_string(),
            seed_path: None,
            prompt: "> ".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from the process environment and defaults.
    ///
    /// ## Environment Variables
    /// - `ROSTER_LOG`: default log filter
    /// - `ROSTER_SEED`: path to a seed JSON file
    /// - `ROSTER_PROMPT`: shell prompt
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(filter) = lookup("ROSTER_LOG").filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(path) = lookup("ROSTER_SEED").filter(|v| !v.trim().is_empty()) {
            config.seed_path = Some(PathBuf::from(path));
        }

        if let Some(prompt) = lookup("ROSTER_PROMPT") {
            config.prompt = prompt;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "info,roster=debug");
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ROSTER_LOG", "warn"),
            ("ROSTER_SEED", "/tmp/roster.json"),
            ("ROSTER_PROMPT", ""),
        ]));
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/roster.json")));
        assert_eq!(config.prompt, "");
    }

    #[test]
    fn test_blank_values_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("ROSTER_LOG", "  "), ("ROSTER_SEED", "")]));
        assert_eq!(config.log_filter, "info,roster=debug");
        assert!(config.seed_path.is_none());
    }
}
