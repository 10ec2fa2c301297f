//! Pre-configured engine profiles
//!
//! Two presets are provided:
//! - Structured: term-frequency rank seeding, quoted bridge messages
//! - Classic: uniform rank seeding, plain bridge messages

use crate::config::{AugmentSpacing, EngineConfig, MessageStyle, RankInit};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Profile selector for pre-configured engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProfile {
    /// Structured: TF rank init, structured messages, preserved spacing
    Structured,
    /// Classic: uniform rank init, plain messages, collapsed spacing
    Classic,
}

impl ConfigProfile {
    /// Create an EngineConfig from this profile
    pub fn create_config(self) -> EngineConfig {
        let mut config = EngineConfig::new();

        match self {
            Self::Structured => {
                config.profile = "structured".to_string();
                config.rank.init = RankInit::TermFrequency;
                config.message_style = MessageStyle::Structured;
                config.augment_spacing = AugmentSpacing::Preserve;
            }

            Self::Classic => {
                config.profile = "classic".to_string();
                config.rank.init = RankInit::Uniform;
                config.message_style = MessageStyle::Plain;
                config.augment_spacing = AugmentSpacing::Collapse;
            }
        }

        config
    }

    /// Profile name as used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Structured => "structured",
            Self::Classic => "classic",
        }
    }
}

impl FromStr for ConfigProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "structured" | "default" => Ok(Self::Structured),
            "classic" | "simple" => Ok(Self::Classic),
            other => Err(Error::config_error(format!("Unknown profile: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_profile() {
        let config = ConfigProfile::Structured.create_config();
        assert_eq!(config.rank.init, RankInit::TermFrequency);
        assert_eq!(config.message_style, MessageStyle::Structured);
        assert_eq!(config.profile, "structured");
    }

    #[test]
    fn test_classic_profile() {
        let config = ConfigProfile::Classic.create_config();
        assert_eq!(config.rank.init, RankInit::Uniform);
        assert_eq!(config.message_style, MessageStyle::Plain);
        assert_eq!(config.augment_spacing, AugmentSpacing::Collapse);
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!(
            "Classic".parse::<ConfigProfile>().unwrap(),
            ConfigProfile::Classic
        );
        assert_eq!(
            "default".parse::<ConfigProfile>().unwrap(),
            ConfigProfile::Structured
        );
        assert!("production".parse::<ConfigProfile>().is_err());
    }
}
