//! Configuration value objects.

pub mod role_models;

pub use role_models::RoleModels;
