/// The ignore rule that keeps personal notes out of version control
pub const MARKER: &str = "thoughts/local/";

pub const COMMENT: &str = "# Prism local thoughts (not committed)";

/// Content of a freshly created `.gitignore`
pub fn new_file() -> String {
    format!("{}\n{}\n", COMMENT, MARKER)
}

/// Text appended to an existing `.gitignore` that lacks the marker
pub fn appended_block() -> String {
    format!("\n{}\n{}\n", COMMENT, MARKER)
}

/// Literal substring check, not a parse of the ignore rules
pub fn has_marker(content: &str) -> bool {
    content.contains(MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_is_two_lines() {
        let content = new_file();
        let lines: Vec<&str> = content.trim().lines().collect();

        assert_eq!(lines, vec![COMMENT, MARKER]);
    }

    #[test]
    fn test_appended_block_starts_with_blank_line() {
        assert_eq!(appended_block(), format!("\n{}", new_file()));
    }

    #[test]
    fn test_marker_matches_anywhere() {
        assert!(has_marker("target/\nthoughts/local/\n"));
        assert!(has_marker("# old: thoughts/local/ was here"));
        assert!(!has_marker("thoughts/\n"));
    }
}
