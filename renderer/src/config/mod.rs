//! Configuration management for the FitTrack renderer
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use fittrack_shared::ProfileInput;
use serde::{Deserialize, Serialize};
use std::env;

/// Renderer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Profile the dashboard is rendered for
    pub profile: ProfileInput,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub exercise: ExerciseConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Exercise selection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseConfig {
    /// Fixed seed for reproducible picks; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RendererConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&RendererConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., FT__PROFILE__AGE=42 sets profile.age
            .add_source(config::Environment::with_prefix("FT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fittrack_shared::{ActivityLevel, BiologicalSex};

    #[test]
    fn test_default_config() {
        let config = RendererConfig::default();
        assert_eq!(config.profile.age, 30);
        assert_eq!(config.profile.weight_kg, 80.0);
        assert_eq!(config.profile.activity_level, ActivityLevel::Moderate);
        assert!(config.output.pretty);
        assert_eq!(config.exercise.seed, None);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let toml = r#"
            [profile]
            age = 45
            weight_kg = 92.5
            goal_weight_kg = 85.0
            height_cm = 176.0
            sex = "female"
            activity_level = "very_active"

            [exercise]
            seed = 7
        "#;

        let config: RendererConfig = config::Config::builder()
            .add_source(config::Config::try_from(&RendererConfig::default()).unwrap())
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.profile.age, 45);
        assert_eq!(config.profile.sex, BiologicalSex::Female);
        assert_eq!(config.profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(config.exercise.seed, Some(7));
        assert!(config.output.pretty);
    }
}
