//! `[hosted]` section configuration.
//!
//! Describes how a hosted documentation build is recognized.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[hosted]` section in doxbridge.toml.
///
/// # Example
/// ```toml
/// [hosted]
/// env_var = "READTHEDOCS"
/// enable_value = "True"   # compared literally, case-sensitive
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HostedConfig {
    /// Environment variable set by the hosting service.
    #[serde(default = "defaults::hosted::env_var")]
    #[educe(Default = defaults::hosted::env_var())]
    pub env_var: String,

    /// The only value of `env_var` that enables hosted mode.
    #[serde(default = "defaults::hosted::enable_value")]
    #[educe(Default = defaults::hosted::enable_value())]
    pub enable_value: String,

    /// Treat every build as hosted, ignoring the environment.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::super::DocsConfig;

    #[test]
    fn test_hosted_config() {
        let config: DocsConfig = toml::from_str(
            r#"
            [hosted]
            env_var = "CI_DOCS"
            enable_value = "1"
            force = true
        "#,
        )
        .unwrap();

        assert_eq!(config.hosted.env_var, "CI_DOCS");
        assert_eq!(config.hosted.enable_value, "1");
        assert!(config.hosted.force);
    }

    #[test]
    fn test_hosted_config_defaults() {
        let config: DocsConfig = toml::from_str("").unwrap();

        assert_eq!(config.hosted.env_var, "READTHEDOCS");
        assert_eq!(config.hosted.enable_value, "True");
        assert!(!config.hosted.force);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<DocsConfig, _> = toml::from_str(
            r#"
            [hosted]
            enabled = true
        "#,
        );
        assert!(result.is_err());
    }
}
