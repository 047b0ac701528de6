//! Model value object representing an LLM backend model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// A model identifier names a specific backend configuration. Known
/// identifiers get their own variant; anything else is carried through
/// as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // GPT models
    Gpt4o,
    Gpt4oMini,
    Gpt4Turbo,
    // Claude models
    Claude3Opus,
    Claude35Sonnet,
    Claude3Haiku,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Claude3Opus => "claude-3-opus-20240229",
            Model::Claude35Sonnet => "claude-3-5-sonnet-20241022",
            Model::Claude3Haiku => "claude-3-haiku-20240307",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        matches!(self, Model::Gpt4o | Model::Gpt4oMini | Model::Gpt4Turbo)
    }

    /// Check if this is a Claude model
    pub fn is_claude(&self) -> bool {
        matches!(
            self,
            Model::Claude3Opus | Model::Claude35Sonnet | Model::Claude3Haiku
        )
    }
}

impl Default for Model {
    /// Returns the default model (GPT-4o)
    fn default() -> Self {
        Model::Gpt4o
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4-turbo" => Model::Gpt4Turbo,
            "claude-3-opus-20240229" => Model::Claude3Opus,
            "claude-3-5-sonnet-20241022" => Model::Claude35Sonnet,
            "claude-3-haiku-20240307" => Model::Claude3Haiku,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
