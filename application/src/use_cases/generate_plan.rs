//! Generate Plan use case.
//!
//! Turns a free-text project description into a persisted development
//! plan: build the fixed prompt, ask the planner model, write the
//! response verbatim to a timestamped markdown file.

use crate::ports::plan_store::{PlanStore, PlanStoreError};
use crate::router::{ModelRouter, RouterError};
use planforge_domain::{PlanArtifact, PromptTemplate, Role};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during plan generation.
///
/// No error is retried or locally recovered; everything surfaces to the
/// caller. A failed model call performs no file write.
#[derive(Error, Debug)]
pub enum GeneratePlanError {
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    #[error("Plan store error: {0}")]
    Store(#[from] PlanStoreError),
}

/// Use case for producing and persisting a development plan.
pub struct GeneratePlanUseCase {
    router: Arc<ModelRouter>,
    store: Arc<dyn PlanStore>,
}

impl GeneratePlanUseCase {
    pub fn new(router: Arc<ModelRouter>, store: Arc<dyn PlanStore>) -> Self {
        Self { router, store }
    }

    /// Generate a plan from a project description.
    ///
    /// The description is embedded as-is — empty or malformed input is
    /// passed through to the model. The returned artifact's path points
    /// to a file containing exactly the returned text.
    pub async fn execute(&self, project_description: &str) -> Result<PlanArtifact, GeneratePlanError> {
        let prompt = PromptTemplate::plan_prompt(project_description);
        debug!("Requesting plan from {} model", Role::Planner);

        let response = self.router.execute_prompt(Role::Planner, &prompt).await?;

        let path = self.store.save(&response.content)?;
        info!("Plan written to {}", path.display());

        Ok(PlanArtifact::new(response.content, path))
    }
}
