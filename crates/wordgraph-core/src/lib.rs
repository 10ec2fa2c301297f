//! # Wordgraph Core
//!
//! Error types, configuration and path validation shared by the wordgraph
//! crates.
//!
//! ## Core Modules
//!
//! - [`error`] - Error taxonomy and Result alias
//! - [`config`] - Engine configuration (rank parameters, message and spacing policies)
//! - [`profiles`] - Preset configurations for the two engine flavours
//! - [`utils`] - Path validation against an allowed root
//!
//! ## Usage
//!
//! ```
//! use wordgraph_core::prelude::*;
//!
//! let config = ConfigProfile::Classic.create_config();
//! assert_eq!(config.rank.init, RankInit::Uniform);
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod profiles;
pub mod utils;

pub use config::*;
pub use error::{Error, Result};
pub use profiles::ConfigProfile;
pub use utils::PathValidator;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{
        AugmentSpacing, EngineConfig, MessageStyle, RankConfig, RankInit,
    };
    pub use crate::error::{Error, Result};
    pub use crate::profiles::ConfigProfile;
    pub use crate::utils::PathValidator;
}
