//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Environment variables that override the role → model mapping.
const MODEL_ENV_VARS: &[&str] = &["PLANNER_MODEL", "CODER_MODEL", "REVIEWER_MODEL"];

/// Environment variables that override the git settings.
const GIT_ENV_VARS: &[&str] = &["GIT_AUTO_COMMIT", "GIT_COMMIT_MESSAGE"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `PLANNER_MODEL`, `CODER_MODEL`, `REVIEWER_MODEL`,
    ///    `GIT_AUTO_COMMIT`, `GIT_COMMIT_MESSAGE`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./planforge.toml` or `./.planforge.toml`
    /// 4. XDG config: `~/.config/planforge/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config files (check both names)
        for filename in &["planforge.toml", ".planforge.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Environment always wins — this is the original configuration surface
        figment = figment
            .merge(
                Env::raw()
                    .only(MODEL_ENV_VARS)
                    .map(|key| {
                        let role = key.as_str().to_ascii_lowercase();
                        let role = role.trim_end_matches("_model");
                        format!("models.{role}").into()
                    })
                    .split("."),
            )
            .merge(
                Env::raw()
                    .only(GIT_ENV_VARS)
                    .map(|key| {
                        let setting = key.as_str().to_ascii_lowercase();
                        let setting = setting.trim_start_matches("git_");
                        format!("git.{setting}").into()
                    })
                    .split("."),
            );

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("planforge").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["planforge.toml", ".planforge.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     PLANNER_MODEL, CODER_MODEL, REVIEWER_MODEL, GIT_*");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./planforge.toml or ./.planforge.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
