/// Location of the shared-thoughts README, relative to the base path
pub const README_PATH: &str = "thoughts/shared/README.md";

pub const README_TEMPLATE: &str = r#"# Shared Thoughts

This directory contains research, plans, and validation reports that are committed 
to the repository and shared with the team.

## Structure

```
thoughts/shared/
├── research/      # Codebase research (YYYY-MM-DD-topic.md)
├── plans/         # Implementation plans (YYYY-MM-DD-feature.md)
└── validation/    # Validation reports (YYYY-MM-DD-report.md)
```

## Naming Convention

Use ISO date prefix for chronological ordering:
- `2025-01-12-oauth-integration.md`
- `2025-01-13-api-refactor.md`

## Prism Workflow

1. **Research Phase** -> Save findings to `research/`
2. **Plan Phase** -> Save implementation plan to `plans/`
3. **Implement Phase** -> Reference plan, update progress checkboxes
4. **Validate Phase** -> Save validation report to `validation/`

## Phase Commands

- `/prism-research` - Start research phase
- `/prism-plan` - Start planning phase
- `/prism-implement` - Start implementation phase
- `/prism-validate` - Start validation phase
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme_sections() {
        for heading in [
            "## Structure",
            "## Naming Convention",
            "## Prism Workflow",
            "## Phase Commands",
        ] {
            assert!(README_TEMPLATE.contains(heading), "missing {}", heading);
        }
    }
}
