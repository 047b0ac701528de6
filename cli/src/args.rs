//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use planforge_domain::Role;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planforge", version, about = "Route prompts to LLMs by role and persist generated plans")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip config files and use built-in defaults
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a development plan from a project description
    Plan {
        /// Free-text description of the project
        description: String,
    },
    /// Execute a raw prompt with the model configured for a role
    Prompt {
        /// Role to route the prompt under (planner, coder, reviewer)
        #[arg(long)]
        role: Role,
        /// The prompt text
        prompt: String,
    },
    /// Show configuration sources and the effective role → model mapping
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_command_parses() {
        let cli = Cli::try_parse_from(["planforge", "plan", "Build a todo app"]).unwrap();
        match cli.command {
            Command::Plan { description } => assert_eq!(description, "Build a todo app"),
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn test_prompt_command_parses_role() {
        let cli =
            Cli::try_parse_from(["planforge", "prompt", "--role", "coder", "write a function"])
                .unwrap();
        match cli.command {
            Command::Prompt { role, prompt } => {
                assert_eq!(role, Role::Coder);
                assert_eq!(prompt, "write a function");
            }
            _ => panic!("expected prompt command"),
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = Cli::try_parse_from(["planforge", "prompt", "--role", "architect", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_accumulates() {
        let cli = Cli::try_parse_from(["planforge", "-vv", "config"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
