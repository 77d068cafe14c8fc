// ⚙️ Engine Configuration
// Loaded from JSON; every field has a default so an empty object is valid

use anyhow::{bail, Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.9;
pub const DEFAULT_DOMINANT_CATEGORY_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Threshold used by the high-confidence filter when the caller gives none
    pub min_confidence: f64,

    /// How many categories an analysis reports as dominant
    pub dominant_category_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            dominant_category_limit: DEFAULT_DOMINANT_CATEGORY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: EngineConfig = serde_json::from_str(&content)
            .context("Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            bail!(
                "min_confidence must be between 0.0 and 1.0, got {}",
                self.min_confidence
            );
        }
        if self.dominant_category_limit == 0 {
            bail!("dominant_category_limit must be at least 1");
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.min_confidence, 0.9);
        assert_eq!(config.dominant_category_limit, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"min_confidence": 0.8}"#).unwrap();
        assert_eq!(config.min_confidence, 0.8);
        assert_eq!(config.dominant_category_limit, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = EngineConfig {
            min_confidence: 1.5,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            dominant_category_limit: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("bmad-config-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{"dominant_category_limit": 2}"#).unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.dominant_category_limit, 2);
        assert_eq!(config.min_confidence, DEFAULT_MIN_CONFIDENCE);

        fs::remove_file(&path).unwrap();
        assert!(EngineConfig::from_file(&path).is_err());
    }
}
