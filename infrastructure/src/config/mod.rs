//! Configuration loading: TOML files merged with the environment surface.

pub mod file_config;
pub mod loader;

pub use file_config::{AutoCommit, ConfigValidationError, FileConfig, FileGitConfig};
pub use loader::ConfigLoader;
