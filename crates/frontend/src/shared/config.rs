//! Studio configuration.
//!
//! Defaults are embedded below. A host page can override any subset with
//!
//! ```html
//! <script type="application/toml" id="studio-config">
//! [logging]
//! level = "info"
//! </script>
//! ```

use contracts::domain::DurationBounds;
use serde::Deserialize;

/// Id of the optional override element in the host page
pub const CONFIG_ELEMENT_ID: &str = "studio-config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub video: VideoConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub company: String,
    pub billing_docs_url: String,
    pub taglines: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Jyb Tv Studio".to_string(),
            company: "Jyb Production Systems".to_string(),
            billing_docs_url: "https://ai.google.dev/gemini-api/docs/billing".to_string(),
            taglines: vec![
                "High Fidelity".to_string(),
                "Spatial Consistency".to_string(),
                "Real-time Rendering".to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// error | warn | info | debug | trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Unknown names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Clip duration bounds in seconds
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    pub min_duration: u32,
    pub max_duration: u32,
    pub default_duration: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        let bounds = DurationBounds::default();
        Self {
            min_duration: bounds.min,
            max_duration: bounds.max,
            default_duration: bounds.default,
        }
    }
}

impl VideoConfig {
    pub fn bounds(&self) -> Result<DurationBounds, String> {
        DurationBounds::new(self.min_duration, self.max_duration, self.default_duration)
            .map_err(|e| e.to_string())
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
title = "Jyb Tv Studio"
company = "Jyb Production Systems"
billing_docs_url = "https://ai.google.dev/gemini-api/docs/billing"
taglines = ["High Fidelity", "Spatial Consistency", "Real-time Rendering"]

[logging]
level = "debug"

[video]
min_duration = 4
max_duration = 8
default_duration = 5
"#;

/// Parses and checks a TOML document. Missing sections and keys take defaults.
pub fn parse_config(contents: &str) -> Result<Config, String> {
    let config: Config =
        toml::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e))?;
    config.video.bounds()?;
    Ok(config)
}

pub fn default_config() -> Config {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("embedded config is invalid: {}", e);
        Config::default()
    })
}

/// Load configuration
///
/// Search order:
/// 1. `<script id="studio-config">` in the host page
/// 2. Falls back to embedded default config
///
/// Runs before the logger is installed, so diagnostics are returned to the
/// caller instead of logged.
pub fn load_config() -> (Config, Option<String>) {
    let Some(contents) = page_override() else {
        return (default_config(), None);
    };
    match parse_config(&contents) {
        Ok(config) => (config, Some("Loaded config overrides from page".to_string())),
        Err(e) => (
            default_config(),
            Some(format!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e)),
        ),
    }
}

/// Config provided by `App`; embedded defaults outside the app tree.
pub fn use_config() -> Config {
    leptos::prelude::use_context::<Config>().unwrap_or_else(default_config)
}

fn page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.title, "Jyb Tv Studio");
        assert_eq!(config.app.taglines.len(), 3);
        assert_eq!(config.logging.level(), log::Level::Debug);
        assert_eq!(config.video.bounds(), Ok(DurationBounds::default()));
        assert_eq!(default_config(), config);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
[logging]
level = "warn"

[video]
max_duration = 10
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level(), log::Level::Warn);
        assert_eq!(config.video.min_duration, 4);
        assert_eq!(config.video.max_duration, 10);
        assert_eq!(config.app, AppConfig::default());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result = parse_config(
            r#"
[video]
min_duration = 9
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(parse_config("[logging\nlevel = ").is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_debug() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert_eq!(logging.level(), log::Level::Debug);
    }
}
