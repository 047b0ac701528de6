//! Artifact directory layout.
//!
//! Generated artifacts live under a working-directory-relative `data/`
//! folder with fixed subdirectories. The layout is not configurable.

use std::path::{Path, PathBuf};

/// Fixed filesystem layout for generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Generated plans.
    pub plans: PathBuf,
    /// Context documents.
    pub context: PathBuf,
    /// Vector store data.
    pub vectors: PathBuf,
}

impl DataPaths {
    /// Layout rooted at `<root>/data`.
    pub fn relative_to(root: impl AsRef<Path>) -> Self {
        let base = root.as_ref().join("data");
        Self {
            plans: base.join("plans"),
            context: base.join("context"),
            vectors: base.join("vectors"),
        }
    }

    /// Layout rooted at the current working directory.
    pub fn from_cwd() -> std::io::Result<Self> {
        Ok(Self::relative_to(std::env::current_dir()?))
    }

    /// Create all directories if absent. Idempotent.
    pub fn ensure(&self) -> std::io::Result<()> {
        for dir in [&self.plans, &self.context, &self.vectors] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}
