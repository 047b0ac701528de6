//! Best-effort auto-commit of saved plan files.
//!
//! Failures never fail the plan operation; the plan file on disk is the
//! artifact of record and a missed commit only loses history.

use git2::Repository;
use std::path::Path;
use tracing::{debug, warn};

/// Commits saved plan files to the enclosing git repository.
pub struct GitAutoCommit {
    message: String,
}

impl GitAutoCommit {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Stage and commit a single file. Logs a warning on failure.
    pub fn commit_file(&self, path: &Path) {
        match self.try_commit(path) {
            Ok(()) => debug!("Auto-committed {}", path.display()),
            Err(e) => warn!("Auto-commit of {} failed: {}", path.display(), e),
        }
    }

    fn try_commit(&self, path: &Path) -> Result<(), git2::Error> {
        let start = path.parent().unwrap_or_else(|| Path::new("."));
        let repo = Repository::discover(start)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("cannot commit into a bare repository"))?;

        // Index paths are relative to the work tree; canonicalize both
        // sides so symlinked temp dirs compare equal.
        let abs = path
            .canonicalize()
            .map_err(|e| git2::Error::from_str(&e.to_string()))?;
        let workdir = workdir
            .canonicalize()
            .map_err(|e| git2::Error::from_str(&e.to_string()))?;
        let rel = abs
            .strip_prefix(&workdir)
            .map_err(|_| git2::Error::from_str("plan path lies outside the repository"))?;

        let mut index = repo.index()?;
        index.add_path(rel)?;
        index.write()?;

        let tree = repo.find_tree(index.write_tree()?)?;
        let signature = repo.signature()?;
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());

        match parent {
            Some(parent) => repo.commit(
                Some("HEAD"),
                &signature,
                &signature,
                &self.message,
                &tree,
                &[&parent],
            )?,
            None => repo.commit(Some("HEAD"), &signature, &signature, &self.message, &tree, &[])?,
        };

        Ok(())
    }
}
