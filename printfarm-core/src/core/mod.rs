//! Process-level configuration and startup

pub mod config;
pub mod error;

pub use config::{Config, load_snapshot, setup_environment, validate_snapshot};
pub use error::StartupError;
