//! Filesystem storage: artifact layout, plan persistence, git auto-commit.

pub mod git;
pub mod paths;
pub mod plan_store;

pub use git::GitAutoCommit;
pub use paths::DataPaths;
pub use plan_store::LocalPlanStore;
