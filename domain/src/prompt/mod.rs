//! Prompt templates for plan generation

/// Templates for the prompts sent to role models
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for generating a development plan from a project description.
    ///
    /// The description is embedded verbatim — no validation or escaping.
    /// The requested structure is fixed: overview, architecture, and
    /// phased checklists.
    pub fn plan_prompt(project_description: &str) -> String {
        format!(
            r#"Create a detailed development plan for the following project:

{project_description}

Provide the plan in markdown format with the following sections:

# Project Overview

# Architecture

# Development Phases

## Phase 1: [Name]
- [ ] Task 1
- [ ] Task 2

## Phase 2: [Name]
- [ ] Task 1
- [ ] Task 2"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prompt_embeds_description() {
        let prompt = PromptTemplate::plan_prompt("Build a todo app");
        assert!(prompt.contains("Build a todo app"));
    }

    #[test]
    fn test_plan_prompt_section_markers() {
        let prompt = PromptTemplate::plan_prompt("Build a todo app");
        assert!(prompt.contains("# Project Overview"));
        assert!(prompt.contains("# Architecture"));
        assert!(prompt.contains("# Development Phases"));
        assert!(prompt.contains("- [ ] Task 1"));
    }

    #[test]
    fn test_empty_description_passes_through() {
        // No validation by design — the model sees whatever the caller sent
        let prompt = PromptTemplate::plan_prompt("");
        assert!(prompt.contains("# Project Overview"));
    }
}
