//! Local filesystem plan store.
//!
//! One markdown file per plan, named by the unix-epoch-millisecond
//! timestamp of the save. Same-millisecond saves collide and the later
//! write wins; the naming scheme doesn't guard against it.

use super::git::GitAutoCommit;
use planforge_application::ports::plan_store::{PlanStore, PlanStoreError};
use planforge_domain::plan_filename;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes plans into a directory, optionally committing each file to git.
pub struct LocalPlanStore {
    dir: PathBuf,
    auto_commit: Option<GitAutoCommit>,
}

impl LocalPlanStore {
    /// Create a store over the given directory, creating it if absent.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            auto_commit: None,
        })
    }

    /// Commit each saved plan to the enclosing git repository.
    pub fn with_auto_commit(mut self, git: GitAutoCommit) -> Self {
        self.auto_commit = Some(git);
        self
    }
}

impl PlanStore for LocalPlanStore {
    fn save(&self, content: &str) -> Result<PathBuf, PlanStoreError> {
        let path = self
            .dir
            .join(plan_filename(chrono::Utc::now().timestamp_millis()));

        std::fs::write(&path, content)?;
        debug!("Plan saved to {}", path.display());

        if let Some(git) = &self.auto_commit {
            git.commit_file(&path);
        }

        Ok(path)
    }

    fn plans_dir(&self) -> &Path {
        &self.dir
    }
}
