use config::{Config, ConfigError, Environment, File};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;

use crate::ingredients::StapleSet;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Default provider to use when not specified
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Map of provider name to provider configuration
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Request timeout in seconds, applied by callers around generation
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Replacement pantry staple list
    #[serde(default)]
    pub staples: Option<Vec<String>>,
}

/// Configuration for a specific generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Whether this provider is enabled
    pub enabled: bool,
    /// Model identifier (e.g., "gpt-4o", "claude-sonnet-4-5")
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            providers: HashMap::new(),
            timeout: default_timeout(),
            staples: None,
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "openai".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    30
}

impl GeneratorConfig {
    /// Load configuration from file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with MEAL_BASKET__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEAL_BASKET__PROVIDERS__OPENAI__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Staple set from configuration, or the built-in defaults
    pub fn staple_set(&self) -> StapleSet {
        match &self.staples {
            Some(entries) => StapleSet::new(entries),
            None => StapleSet::default(),
        }
    }

    /// Staple set for offline commands: a broken generation setting must not
    /// stop ingredient processing, so load failures fall back to the defaults.
    pub fn load_staples() -> StapleSet {
        staples_or_default(load_config())
    }
}

fn staples_or_default(loaded: Result<GeneratorConfig, ConfigError>) -> StapleSet {
    match loaded {
        Ok(config) => config.staple_set(),
        Err(e) => {
            warn!("Ignoring unreadable configuration, using default staples: {}", e);
            StapleSet::default()
        }
    }
}

/// Load configuration from `config.toml` and `MEAL_BASKET__*` environment variables
pub fn load_config() -> Result<GeneratorConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: MEAL_BASKET__PROVIDERS__OPENAI__API_KEY
        .add_source(
            Environment::with_prefix("MEAL_BASKET")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn try_from_toml(toml: &str) -> Result<GeneratorConfig, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn from_toml(toml: &str) -> GeneratorConfig {
        try_from_toml(toml).unwrap()
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_provider(), "openai");
        assert_eq!(default_temperature(), 0.7);
        assert_eq!(default_max_tokens(), 2000);
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.default_provider, "openai");
        assert!(config.providers.is_empty());
        assert!(config.staples.is_none());
        assert_eq!(config.staple_set(), StapleSet::default());
    }

    #[test]
    fn test_parse_provider_section() {
        let config = from_toml(
            r#"
            default_provider = "anthropic"
            timeout = 10

            [providers.anthropic]
            enabled = true
            model = "claude-sonnet-4-5"
            max_tokens = 4000
            "#,
        );

        assert_eq!(config.default_provider, "anthropic");
        assert_eq!(config.timeout, 10);
        let anthropic = &config.providers["anthropic"];
        assert!(anthropic.enabled);
        assert_eq!(anthropic.max_tokens, 4000);
        assert_eq!(anthropic.temperature, 0.7);
        assert!(anthropic.api_key.is_none());
    }

    #[test]
    fn test_staples_override() {
        let config = from_toml(r#"staples = ["Rice", "eggs"]"#);

        let staples = config.staple_set();
        assert!(staples.is_staple("brown rice"));
        assert!(!staples.is_staple("salt"));
    }

    #[test]
    fn test_load_config_without_file() {
        // No config.toml in the crate root and no MEAL_BASKET__ variables set
        let config = load_config().unwrap();
        assert_eq!(config.default_provider, "openai");
        assert_eq!(config.timeout, 30);
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let result = try_from_toml(r#"timeout = "soon""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_staples_fall_back_on_config_error() {
        let staples = staples_or_default(try_from_toml(r#"timeout = "soon""#));
        assert_eq!(staples, StapleSet::default());

        let staples = staples_or_default(try_from_toml(r#"staples = ["rice"]"#));
        assert_eq!(staples, StapleSet::new(["rice"]));
    }
}
