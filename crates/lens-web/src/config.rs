//! Site configuration
//!
//! The bundle runs in a browser, so the settings document is embedded at
//! build time and overrides are read with `option_env!` rather than at runtime.

use crate::error::ConfigError;
use crate::route::Page;
use serde::Deserialize;
use tracing::Level;

const SITE_JSON: &str = include_str!("../site.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    pub initial_path: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Company Lens".to_string(),
            initial_path: "/".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by the build environment.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// The embedded `site.json` with build environment overrides on top.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_json(SITE_JSON)?.with_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies `LENS_BRAND_NAME`, `LENS_INITIAL_PATH` and `LENS_LOG_LEVEL`
    /// as set when the bundle was built.
    pub fn with_env_overrides(self) -> Self {
        Self {
            brand_name: option_env!("LENS_BRAND_NAME")
                .map(str::to_string)
                .unwrap_or(self.brand_name),
            initial_path: option_env!("LENS_INITIAL_PATH")
                .map(str::to_string)
                .unwrap_or(self.initial_path),
            log_level: option_env!("LENS_LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(self.log_level),
        }
    }

    /// Parses a JSON document; missing keys take their defaults.
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(doc)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.initial_page()?;
        self.level()?;
        Ok(())
    }

    pub fn initial_page(&self) -> Result<Page, ConfigError> {
        Page::from_path(&self.initial_path)
            .ok_or_else(|| ConfigError::UnknownRoute(self.initial_path.clone()))
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.brand_name, "Company Lens");
        assert_eq!(config.initial_page().unwrap(), Page::Home);
        assert_eq!(config.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_embedded_document_loads() {
        let embedded = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(embedded, SiteConfig::default());
        assert!(SiteConfig::load().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = SiteConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert_eq!(config.initial_path, "/");
    }

    #[test]
    fn test_unknown_route_rejected() {
        let err = SiteConfig::from_json(r#"{"initial_path": "/pricing"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRoute(p) if p == "/pricing"));
    }

    #[test]
    fn test_bad_level_rejected() {
        let err = SiteConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SiteConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
