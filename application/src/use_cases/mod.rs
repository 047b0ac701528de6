//! Use cases — application operations composed from ports.

pub mod generate_plan;

pub use generate_plan::{GeneratePlanError, GeneratePlanUseCase};
