//! The `[features]` section: one switch per inline matcher.

use blogmark_core::Feature;
use serde::{Deserialize, Serialize};

/// Which inline matchers run. Markup for a switched-off feature stays literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Recognise `[description](url)` links.
    /// Default: true
    #[serde(default = "default_true")]
    pub links: bool,

    /// Recognise `` `code` `` spans.
    /// Default: true
    #[serde(default = "default_true")]
    pub code: bool,

    /// Recognise `**bold**` text.
    /// Default: true
    #[serde(default = "default_true")]
    pub bold: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}

impl FeaturesConfig {
    pub fn all_enabled() -> Self {
        Self {
            links: true,
            code: true,
            bold: true,
        }
    }

    pub fn all_disabled() -> Self {
        Self {
            links: false,
            code: false,
            bold: false,
        }
    }

    /// Whether a single feature is switched on.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Link => self.links,
            Feature::Code => self.code,
            Feature::Bold => self.bold,
        }
    }

    /// The enabled features, in matcher priority order.
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let features = FeaturesConfig::default();
        assert!(features.links);
        assert!(features.code);
        assert!(features.bold);
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Links = false
            Code = true
            Bold = false
        "#;

        let features: FeaturesConfig = toml::from_str(toml_str).unwrap();
        assert!(!features.links);
        assert!(features.code);
        assert!(!features.bold);
    }

    #[test]
    fn test_missing_keys_default_to_enabled() {
        let features: FeaturesConfig = toml::from_str("Code = false").unwrap();
        assert!(features.links);
        assert!(!features.code);
        assert!(features.bold);
    }

    #[test]
    fn test_enabled_keeps_priority_order() {
        let features = FeaturesConfig {
            code: false,
            ..FeaturesConfig::all_enabled()
        };
        assert_eq!(features.enabled(), vec![Feature::Link, Feature::Bold]);
        assert!(FeaturesConfig::all_disabled().enabled().is_empty());
    }
}
