//! Ports — interfaces implemented by infrastructure adapters.

pub mod llm_gateway;
pub mod plan_store;

pub use llm_gateway::{GatewayError, LlmGateway, LlmResponse};
pub use plan_store::{PlanStore, PlanStoreError};
