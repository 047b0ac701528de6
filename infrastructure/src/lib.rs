//! Infrastructure layer for planforge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: HTTP provider adapters, the routing gateway,
//! configuration file loading, and local plan storage.

pub mod config;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use config::{AutoCommit, ConfigLoader, ConfigValidationError, FileConfig, FileGitConfig};
pub use providers::{
    ProviderAdapter, ProviderKind, anthropic::AnthropicAdapter, openai::OpenAiAdapter,
    routing::RoutingGateway,
};
pub use storage::{DataPaths, GitAutoCommit, LocalPlanStore};
