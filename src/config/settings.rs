use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::AppError;
use crate::risk::ScoringRules;

/// Environment variable naming an extra configuration file
pub const CONFIG_FILE_ENV: &str = "RISK_CONFIG_FILE";
/// Prefix for environment overrides, e.g. `RISK__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "RISK";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logging: LoggingSettings,
    #[serde(default)]
    pub scoring: ScoringRules,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    /// `compact`, `pretty` or `json`
    pub format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            logging: LoggingSettings::default(),
            scoring: ScoringRules::standard(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `.env`, `config/default.toml`, the file named by
    /// `RISK_CONFIG_FILE` and `RISK__*` environment variables, in that order.
    pub fn new() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        match env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::load(Some(Path::new(&path))),
            Err(_) => Self::load(None),
        }
    }

    /// Load settings with an optional extra file layered over the defaults.
    /// The scoring rules are validated before they are returned.
    pub fn load(extra_file: Option<&Path>) -> Result<Self, AppError> {
        let defaults = LoggingSettings::default();
        let mut builder = config::Config::builder()
            .set_default("logging.level", defaults.level)?
            .set_default("logging.format", defaults.format)?
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        settings.scoring.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_use_standard_rules() {
        let settings = Settings::default();
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.scoring, ScoringRules::standard());
    }
}
