//! Core value objects: models, roles, and domain errors.

pub mod error;
pub mod model;
pub mod role;
