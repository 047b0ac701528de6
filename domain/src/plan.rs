//! Plan artifact value object.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A generated development plan and where it was persisted.
///
/// Artifacts are independent per call — there is no manifest or index
/// tying them together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanArtifact {
    /// The markdown plan text, exactly as the model returned it.
    pub content: String,
    /// Path of the file the plan was written to.
    pub path: PathBuf,
}

impl PlanArtifact {
    pub fn new(content: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            content: content.into(),
            path: path.into(),
        }
    }
}

/// File name for a plan generated at the given unix-epoch-millisecond
/// timestamp.
///
/// Uniqueness relies on millisecond granularity; two plans generated in
/// the same millisecond collide and the later write wins.
pub fn plan_filename(timestamp_millis: i64) -> String {
    format!("plan-{timestamp_millis}.md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_filename_format() {
        assert_eq!(plan_filename(1717171717171), "plan-1717171717171.md");
    }

    #[test]
    fn test_artifact_construction() {
        let artifact = PlanArtifact::new("# Plan", "data/plans/plan-1.md");
        assert_eq!(artifact.content, "# Plan");
        assert_eq!(artifact.path, PathBuf::from("data/plans/plan-1.md"));
    }
}
