//! Application layer for planforge
//!
//! This crate defines the ports (gateway, plan store), the role-based
//! model router, and the use cases that compose them. Adapters live in
//! the infrastructure layer and are injected at construction time.

pub mod ports;
pub mod router;
pub mod use_cases;

// Re-export commonly used types
pub use ports::llm_gateway::{GatewayError, LlmGateway, LlmResponse};
pub use ports::plan_store::{PlanStore, PlanStoreError};
pub use router::{ModelRouter, RouterError};
pub use use_cases::generate_plan::{GeneratePlanError, GeneratePlanUseCase};
