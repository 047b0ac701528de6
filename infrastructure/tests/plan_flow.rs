//! End-to-end plan generation over the real routing gateway and store.

use async_trait::async_trait;
use planforge_application::ports::llm_gateway::{GatewayError, LlmResponse};
use planforge_application::{GeneratePlanUseCase, ModelRouter, RouterError};
use planforge_domain::{Model, Role, RoleModels};
use planforge_infrastructure::{LocalPlanStore, ProviderAdapter, ProviderKind, RoutingGateway};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

struct ScriptedProvider {
    reply: Result<String, String>,
}

impl ScriptedProvider {
    fn replying(text: &str) -> Arc<dyn ProviderAdapter> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
        })
    }

    fn failing(message: &str) -> Arc<dyn ProviderAdapter> {
        Arc::new(Self {
            reply: Err(message.to_string()),
        })
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn supports_model(&self, model: &Model) -> bool {
        model.is_gpt()
    }

    async fn invoke(&self, model: &Model, _prompt: &str) -> Result<LlmResponse, GatewayError> {
        match &self.reply {
            Ok(text) => Ok(LlmResponse::new(text.clone(), model.to_string())),
            Err(message) => Err(GatewayError::RequestFailed(message.clone())),
        }
    }
}

fn wire(provider: Arc<dyn ProviderAdapter>, plans_dir: &Path) -> GeneratePlanUseCase {
    let gateway = Arc::new(RoutingGateway::new(vec![provider]));
    let router = Arc::new(ModelRouter::new(gateway, RoleModels::default()));
    let store = Arc::new(LocalPlanStore::new(plans_dir).unwrap());
    GeneratePlanUseCase::new(router, store)
}

#[tokio::test]
async fn generated_plan_lands_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let plans = dir.path().join("data").join("plans");
    let use_case = wire(ScriptedProvider::replying("# Plan\n\n- [ ] build it"), &plans);

    let artifact = use_case.execute("Build a todo app").await.unwrap();

    // The store created the directory and the path holds exactly the content
    assert!(artifact.path.starts_with(&plans));
    assert_eq!(
        std::fs::read_to_string(&artifact.path).unwrap(),
        artifact.content
    );
    assert_eq!(artifact.content, "# Plan\n\n- [ ] build it");
}

#[tokio::test]
async fn repeated_generation_produces_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let use_case = wire(ScriptedProvider::replying("plan text"), dir.path());

    let first = use_case.execute("Build a todo app").await.unwrap();
    // File names are millisecond-granular
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = use_case.execute("Build a todo app").await.unwrap();

    assert_ne!(first.path, second.path);
    assert!(first.path.exists());
    assert!(second.path.exists());
}

#[tokio::test]
async fn provider_failure_leaves_plans_dir_empty() {
    let dir = tempfile::tempdir().unwrap();
    let use_case = wire(ScriptedProvider::failing("overloaded"), dir.path());

    let result = use_case.execute("Build a todo app").await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn role_mapped_to_unregistered_model_names_both() {
    // Only a GPT-claiming provider is registered; coder maps to Claude
    let gateway = Arc::new(RoutingGateway::new(vec![ScriptedProvider::replying("x")]));
    let router = ModelRouter::new(gateway, RoleModels::default());

    let err = router.execute_prompt(Role::Coder, "hi").await.unwrap_err();
    assert!(matches!(err, RouterError::ModelNotRegistered { .. }));
    let message = err.to_string();
    assert!(message.contains("coder"));
    assert!(message.contains("claude-3-opus-20240229"));
}
