//! Configuration module for dnslook
//!
//! - `root`: main configuration, file loading and CLI overrides
//! - `resolver`: resolver discovery and query transport settings
//! - `session`: interactive session tuning
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod session;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use session::SessionConfig;
