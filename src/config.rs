use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::dataset::{DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SIZE};
use crate::error::BenchError;

/// Benchmark settings. Every field has a default, so a config file only
/// needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub size: usize,
    pub min: i64,
    pub max: i64,
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path_str = config_path.as_ref().display().to_string();
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {config_path_str}"))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {config_path_str}"))?;
        log::debug!("Loaded benchmark config from: {config_path_str}");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.min > self.max {
            return Err(BenchError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.size, 20_000);
        assert_eq!(config.min, 1);
        assert_eq!(config.max, 100_000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = BenchConfig::from_toml_str("size = 500\nseed = 9\n").unwrap();
        assert_eq!(
            config,
            BenchConfig {
                size: 500,
                seed: Some(9),
                ..BenchConfig::default()
            }
        );
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(BenchConfig::from_toml_str("").unwrap(), BenchConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(BenchConfig::from_toml_str("sise = 10").is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = BenchConfig::from_toml_str("min = 10\nmax = 2").unwrap_err();
        assert_eq!(
            err.downcast_ref::<BenchError>(),
            Some(&BenchError::InvalidRange { min: 10, max: 2 })
        );
    }

    #[test]
    fn missing_file_has_context() {
        let err = BenchConfig::from_toml_file("does/not/exist/bench.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
