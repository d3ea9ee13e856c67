use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Parameters for the savings projection view. The projection itself is a
/// simple monthly compounding loop, not a real financial model.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectionConfig {
    #[serde(default = "default_projection_years")]
    pub years: u32,
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,
    /// Annual interest rate in percent.
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,
}

fn default_projection_years() -> u32 {
    5
}

fn default_monthly_contribution() -> f64 {
    2000.0
}

fn default_interest_rate() -> f64 {
    1.5
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            years: default_projection_years(),
            monthly_contribution: default_monthly_contribution(),
            interest_rate: default_interest_rate(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Display currency code, e.g. "INR" or "USD".
    pub currency: String,
    /// Monthly spending limit highlighted in the expenses view.
    #[serde(default = "default_monthly_threshold")]
    pub monthly_threshold: f64,
    #[serde(default)]
    pub projection: ProjectionConfig,
    pub data_path: Option<String>,
}

fn default_monthly_threshold() -> f64 {
    4000.0
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "finboard", "finboard")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs = ProjectDirs::from("io", "finboard", "finboard")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
currency: "INR"
monthly_threshold: 5000
projection:
  years: 10
  monthly_contribution: 1500
  interest_rate: 2.0
data_path: "/tmp/finboard-data"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currency, "INR");
        assert_eq!(config.monthly_threshold, 5000.0);
        assert_eq!(config.projection.years, 10);
        assert_eq!(config.projection.monthly_contribution, 1500.0);
        assert_eq!(config.projection.interest_rate, 2.0);
        assert_eq!(config.data_path.as_deref(), Some("/tmp/finboard-data"));
    }

    #[test]
    fn test_config_defaults() {
        let yaml_str = r#"
currency: "USD"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.monthly_threshold, 4000.0);
        assert_eq!(config.projection.years, 5);
        assert_eq!(config.projection.monthly_contribution, 2000.0);
        assert_eq!(config.projection.interest_rate, 1.5);
        assert!(config.data_path.is_none());
    }
}
