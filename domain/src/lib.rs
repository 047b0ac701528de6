//! Domain layer for planforge
//!
//! This crate contains the core value objects and business rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Role**: the purpose a prompt is routed under (planner / coder /
//!   reviewer). Roles form a closed set.
//! - **Model**: a typed backend model identifier.
//! - **RoleModels**: the immutable role → model mapping.
//! - **PlanArtifact**: a generated plan and the file it was written to.

pub mod config;
pub mod core;
pub mod plan;
pub mod prompt;

// Re-export commonly used types
pub use config::RoleModels;
pub use core::{error::DomainError, model::Model, role::Role};
pub use plan::{PlanArtifact, plan_filename};
pub use prompt::PromptTemplate;
