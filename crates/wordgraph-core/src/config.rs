//! Configuration types for the wordgraph engine.
//!
//! Follows a builder pattern for complex configuration with validation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default PageRank damping factor
pub const DEFAULT_DAMPING: f64 = 0.85;
/// Default PageRank iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Default PageRank convergence tolerance (total absolute change)
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// How the rank vector is seeded before iterating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankInit {
    /// Every node starts at 1/N
    Uniform,
    /// Node score starts at occurrences / total tokens
    TermFrequency,
}

/// Rendering of bridge-word query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    /// Quoted missing words, singular/plural grammar
    Structured,
    /// Unquoted first missing word, always plural header
    Plain,
}

/// Whitespace policy for augmented text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentSpacing {
    /// Emit original fragments verbatim
    Preserve,
    /// Collapse whitespace runs to one space and trim the ends
    Collapse,
}

/// PageRank parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
    pub init: RankInit,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            init: RankInit::TermFrequency,
        }
    }
}

impl RankConfig {
    /// Validate the rank parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(Error::config_error(format!(
                "Damping factor must be in (0, 1], got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(Error::config_error("max_iterations must be at least 1"));
        }

        if !(self.tolerance > 0.0) {
            return Err(Error::config_error(format!(
                "Tolerance must be positive, got {}",
                self.tolerance
            )));
        }

        Ok(())
    }
}

/// Global engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Configuration profile name
    pub profile: String,

    // Algorithm settings
    pub rank: RankConfig,
    pub message_style: MessageStyle,
    pub augment_spacing: AugmentSpacing,

    // Files
    pub allowed_root: Option<PathBuf>,
    pub walk_log: PathBuf,
    pub graph_image: PathBuf,

    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: "structured".to_string(),
            rank: RankConfig::default(),
            message_style: MessageStyle::Structured,
            augment_spacing: AugmentSpacing::Preserve,
            allowed_root: None,
            walk_log: PathBuf::from("walk.txt"),
            graph_image: PathBuf::from("graph.png"),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder from the default configuration
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()?;

        if self.walk_log.as_os_str().is_empty() {
            return Err(Error::config_error("walk_log path cannot be empty"));
        }

        if let Some(root) = &self.allowed_root
            && !root.is_dir()
        {
            return Err(Error::config_error(format!(
                "Allowed root is not a directory: {}",
                root.display()
            )));
        }

        Ok(())
    }

    /// Root that file access is confined to (current directory when unset)
    pub fn resolved_root(&self) -> Result<PathBuf> {
        match &self.allowed_root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load configuration from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration as YAML
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Error::config_error(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, yaml).map_err(|e| {
            Error::config_error(format!(
                "Failed to save configuration to {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Builder for EngineConfig
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the rank parameters
    pub fn rank(mut self, rank: RankConfig) -> Self {
        self.config.rank = rank;
        self
    }

    /// Set the rank initialization policy
    pub fn rank_init(mut self, init: RankInit) -> Self {
        self.config.rank.init = init;
        self
    }

    /// Set the bridge message style
    pub fn message_style(mut self, style: MessageStyle) -> Self {
        self.config.message_style = style;
        self
    }

    /// Set the augmentation spacing policy
    pub fn augment_spacing(mut self, spacing: AugmentSpacing) -> Self {
        self.config.augment_spacing = spacing;
        self
    }

    /// Confine file access to a directory
    pub fn allowed_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.allowed_root = Some(root.into());
        self
    }

    /// Set the walk log location
    pub fn walk_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.walk_log = path.into();
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.rank.damping, 0.85);
        assert_eq!(config.rank.max_iterations, 100);
        assert_eq!(config.rank.tolerance, 1e-6);
        assert_eq!(config.rank.init, RankInit::TermFrequency);
        assert_eq!(config.walk_log, PathBuf::from("walk.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let temp = TempDir::new().unwrap();
        let config = EngineConfig::builder()
            .rank_init(RankInit::Uniform)
            .message_style(MessageStyle::Plain)
            .allowed_root(temp.path())
            .build()
            .unwrap();

        assert_eq!(config.rank.init, RankInit::Uniform);
        assert_eq!(config.message_style, MessageStyle::Plain);
        assert_eq!(config.resolved_root().unwrap(), temp.path());
    }

    #[test]
    fn test_invalid_rank_rejected() {
        let bad_damping = RankConfig {
            damping: 1.5,
            ..RankConfig::default()
        };
        assert!(bad_damping.validate().is_err());

        let bad_iterations = RankConfig {
            max_iterations: 0,
            ..RankConfig::default()
        };
        assert!(bad_iterations.validate().is_err());

        let bad_tolerance = RankConfig {
            tolerance: 0.0,
            ..RankConfig::default()
        };
        assert!(EngineConfig::builder().rank(bad_tolerance).build().is_err());
    }

    #[test]
    fn test_missing_root_rejected() {
        let result = EngineConfig::builder()
            .allowed_root("/definitely/not/a/real/dir")
            .build();
        assert!(matches!(result, Err(Error::ConfigError { .. })));
    }

    #[test]
    fn test_yaml_round_trip_with_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wordgraph.yaml");
        std::fs::write(
            &path,
            "message_style: plain\nrank:\n  damping: 0.9\n  max_iterations: 10\n  tolerance: 0.001\n  init: uniform\n",
        )
        .unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.message_style, MessageStyle::Plain);
        assert_eq!(config.rank.init, RankInit::Uniform);
        assert_eq!(config.rank.max_iterations, 10);
        // Unspecified fields fall back to defaults
        assert_eq!(config.augment_spacing, AugmentSpacing::Preserve);

        let saved = temp.path().join("saved.yaml");
        config.save(&saved).unwrap();
        let reloaded = EngineConfig::load(&saved).unwrap();
        assert_eq!(reloaded.rank, config.rank);
    }
}
