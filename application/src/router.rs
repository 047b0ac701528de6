//! Model router — resolves a role to its configured model and forwards
//! prompts to the gateway.
//!
//! The router is constructed with an explicit role → model mapping and a
//! gateway (dependency injection); there is no process-wide registry.
//! It is stateless after construction.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmResponse};
use planforge_domain::{Model, Role, RoleModels};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during routing.
#[derive(Error, Debug)]
pub enum RouterError {
    /// The role's configured model has no registered provider.
    ///
    /// Raised synchronously, before any external call.
    #[error("Model {model} for role {role} not configured")]
    ModelNotRegistered { role: Role, model: Model },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Routes prompts to the appropriate LLM based on the required role.
pub struct ModelRouter {
    gateway: Arc<dyn LlmGateway>,
    roles: RoleModels,
}

impl ModelRouter {
    pub fn new(gateway: Arc<dyn LlmGateway>, roles: RoleModels) -> Self {
        Self { gateway, roles }
    }

    /// The role → model mapping this router was built with.
    pub fn roles(&self) -> &RoleModels {
        &self.roles
    }

    /// Resolve the model configured for a role.
    ///
    /// Fails with [`RouterError::ModelNotRegistered`] when the gateway has
    /// no provider for the configured model. No side effects.
    pub fn model_for_role(&self, role: Role) -> Result<&Model, RouterError> {
        let model = self.roles.model_for(role);
        if !self.gateway.supports_model(model) {
            return Err(RouterError::ModelNotRegistered {
                role,
                model: model.clone(),
            });
        }
        Ok(model)
    }

    /// Execute a prompt with the model configured for the role.
    ///
    /// Returns the provider response unmodified. Provider failures
    /// propagate unchanged; there is no timeout or retry.
    pub async fn execute_prompt(
        &self,
        role: Role,
        prompt: &str,
    ) -> Result<LlmResponse, RouterError> {
        let model = self.model_for_role(role)?.clone();
        debug!("Routing {} prompt to {}", role, model);
        Ok(self.gateway.invoke(&model, prompt).await?)
    }
}
