//! Raw configuration data types
//!
//! These structs represent the structure of the TOML config file and the
//! environment-variable surface. They deserialize directly and use domain
//! types where appropriate.

use planforge_domain::{Model, RoleModels};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("git commit message cannot be empty")]
    EmptyCommitMessage,
}

/// Lenient auto-commit flag.
///
/// The environment surface treats exactly the string `"true"` as enabled
/// and anything else as disabled, so this accepts both real booleans and
/// arbitrary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoCommit(pub bool);

impl AutoCommit {
    pub fn is_enabled(&self) -> bool {
        self.0
    }
}

impl Serialize for AutoCommit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.0)
    }
}

impl<'de> Deserialize<'de> for AutoCommit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = AutoCommit;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a boolean or a string")
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<AutoCommit, E> {
                Ok(AutoCommit(v))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<AutoCommit, E> {
                Ok(AutoCommit(v == "true"))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

/// Raw git configuration from TOML / environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGitConfig {
    /// Auto-commit saved plans to the enclosing repository
    pub auto_commit: AutoCommit,
    /// Commit message for auto-commits
    pub commit_message: String,
}

impl Default for FileGitConfig {
    fn default() -> Self {
        Self {
            auto_commit: AutoCommit(false),
            commit_message: "Update from context manager".to_string(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Role → model mapping (uses domain types)
    pub models: RoleModels,
    /// Git settings
    pub git: FileGitConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Custom model identifiers come in as free strings
        for model in [&self.models.planner, &self.models.coder, &self.models.reviewer] {
            if let Model::Custom(name) = model
                && name.trim().is_empty()
            {
                return Err(ConfigValidationError::EmptyModelName);
            }
        }

        if self.git.commit_message.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCommitMessage);
        }

        Ok(())
    }
}
