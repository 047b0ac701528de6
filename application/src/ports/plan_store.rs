//! Plan store port
//!
//! Persistence seam for generated plans. The write is blocking and
//! overwrite-or-create; errors propagate unchanged.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while persisting a plan
#[derive(Error, Debug)]
pub enum PlanStoreError {
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Store for generated plan artifacts.
///
/// One file per save; no manifest or index ties artifacts together.
pub trait PlanStore: Send + Sync {
    /// Write the plan text verbatim to a new uniquely named file and
    /// return its path.
    fn save(&self, content: &str) -> Result<PathBuf, PlanStoreError>;

    /// Directory plans are written to.
    fn plans_dir(&self) -> &Path;
}
