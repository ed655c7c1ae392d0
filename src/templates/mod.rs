//! Static documents written by the initializer.

pub mod claude_md;
pub mod gitignore;
pub mod readme;
pub mod summary;

/// Fill the `{{PROJECT_NAME}}` placeholder. This is the only parameter any template takes.
pub fn replace_placeholders(template: &str, project_name: &str) -> String {
    template.replace("{{PROJECT_NAME}}", project_name)
}
