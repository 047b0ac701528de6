//! Role-based model configuration.
//!
//! [`RoleModels`] groups the model selection for each role. This is a static
//! value object — once created, the mapping doesn't change at runtime.

use crate::core::model::Model;
use crate::core::role::Role;
use serde::{Deserialize, Serialize};

/// Role-based model configuration.
///
/// Each role gets exactly one model:
///
/// - **Planner**: turns project descriptions into development plans
/// - **Coder**: writes code
/// - **Reviewer**: reviews plans and code
///
/// # Example
///
/// ```
/// use planforge_domain::config::role_models::RoleModels;
/// use planforge_domain::{Model, Role};
///
/// let models = RoleModels::default().with_coder(Model::Claude35Sonnet);
///
/// assert_eq!(models.model_for(Role::Coder), &Model::Claude35Sonnet);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleModels {
    /// Model for the planner role.
    pub planner: Model,
    /// Model for the coder role.
    pub coder: Model,
    /// Model for the reviewer role.
    pub reviewer: Model,
}

impl Default for RoleModels {
    fn default() -> Self {
        Self {
            planner: Model::Gpt4o,
            coder: Model::Claude3Opus,
            reviewer: Model::Gpt4o,
        }
    }
}

impl RoleModels {
    /// Look up the configured model for a role.
    pub fn model_for(&self, role: Role) -> &Model {
        match role {
            Role::Planner => &self.planner,
            Role::Coder => &self.coder,
            Role::Reviewer => &self.reviewer,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_planner(mut self, model: Model) -> Self {
        self.planner = model;
        self
    }

    pub fn with_coder(mut self, model: Model) -> Self {
        self.coder = model;
        self
    }

    pub fn with_reviewer(mut self, model: Model) -> Self {
        self.reviewer = model;
        self
    }
}
