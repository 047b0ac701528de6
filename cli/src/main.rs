//! CLI entrypoint for planforge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;

use anyhow::Result;
use args::{Cli, Command};
use clap::Parser;
use planforge_application::{GeneratePlanUseCase, ModelRouter};
use planforge_infrastructure::{
    AnthropicAdapter, ConfigLoader, DataPaths, FileConfig, GitAutoCommit, LocalPlanStore,
    OpenAiAdapter, ProviderAdapter, RoutingGateway,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting planforge");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    config.validate()?;

    match cli.command {
        Command::Config => {
            ConfigLoader::print_config_sources();
            println!();
            println!("Effective role models:");
            println!("  planner:  {}", config.models.planner);
            println!("  coder:    {}", config.models.coder);
            println!("  reviewer: {}", config.models.reviewer);
            println!(
                "Git auto-commit: {}",
                if config.git.auto_commit.is_enabled() {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            Ok(())
        }
        Command::Plan { description } => {
            let router = build_router(&config);
            let paths = DataPaths::from_cwd()?;
            paths.ensure()?;

            let mut store = LocalPlanStore::new(&paths.plans)?;
            if config.git.auto_commit.is_enabled() {
                store = store.with_auto_commit(GitAutoCommit::new(config.git.commit_message.clone()));
            }

            let use_case = GeneratePlanUseCase::new(router, Arc::new(store));
            let artifact = use_case.execute(&description).await?;

            println!("Plan written to {}", artifact.path.display());
            println!();
            println!("{}", artifact.content);
            Ok(())
        }
        Command::Prompt { role, prompt } => {
            let router = build_router(&config);
            let response = router.execute_prompt(role, &prompt).await?;
            println!("{}", response.content);
            Ok(())
        }
    }
}

/// Build the router over the providers whose API keys are present.
///
/// A missing key leaves that backend unregistered; roles mapped to its
/// models then fail the registry check with the role and model named.
fn build_router(config: &FileConfig) -> Arc<ModelRouter> {
    let mut providers: Vec<Arc<dyn ProviderAdapter>> = Vec::new();

    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        providers.push(Arc::new(OpenAiAdapter::new(key)));
    }
    if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
        providers.push(Arc::new(AnthropicAdapter::new(key)));
    }
    if providers.is_empty() {
        warn!("No provider API keys set (OPENAI_API_KEY, ANTHROPIC_API_KEY); every role lookup will fail");
    }

    let gateway = Arc::new(RoutingGateway::new(providers));
    Arc::new(ModelRouter::new(gateway, config.models.clone()))
}
