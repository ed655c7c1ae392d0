use super::replace_placeholders;

/// Project-instructions file at the base path
pub const CLAUDE_MD_PATH: &str = "CLAUDE.md";

/// Presence of this word means the workflow section is already there
pub const KEYWORD: &str = "Prism";

pub const PRISM_SECTION: &str = r#"
## Prism Workflow

Use Prism for complex tasks:
- `/prism-research` - Map codebase, understand problem
- `/prism-plan` - Create phased implementation plan
- `/prism-implement` - Execute plan phase by phase
- `/prism-validate` - Verify against success criteria

Thoughts location:
- Research: `thoughts/shared/research/`
- Plans: `thoughts/shared/plans/`
- Validation: `thoughts/shared/validation/`
- Personal notes: `thoughts/local/`
"#;

const HEADER_TEMPLATE: &str = r#"# {{PROJECT_NAME}}

## Overview

[Brief description of the project]

"#;

/// Minimal instructions file for a project that has none
pub fn new_document(project_name: &str) -> String {
    format!(
        "{}{}\n",
        replace_placeholders(HEADER_TEMPLATE, project_name),
        PRISM_SECTION
    )
}

pub fn has_keyword(content: &str) -> bool {
    content.contains(KEYWORD)
}
