//! Human-readable progress lines.
//!
//! Lines go to any `io::Write` sink as each step finishes, so a run that fails
//! halfway still shows what it did.

use crate::models::{InitReport, Outcome, Target};
use crate::paths::GITIGNORE_PATH;
use crate::templates::{claude_md, gitignore, readme, summary};
use std::io::{self, Write};
use std::path::Path;

/// Format the progress line for one step
pub fn progress_line(target: &Target, outcome: Outcome, dry_run: bool) -> String {
    let (created, added) = if dry_run {
        ("[~] Would create", "[~] Would add")
    } else {
        ("[+] Created", "[+] Added")
    };

    let line = match (target, outcome) {
        (Target::Directory(dir), Outcome::AlreadyPresent) => format!("[-] {}/ already exists", dir),
        (Target::Directory(dir), _) => format!("{} {}/", created, dir),

        (Target::GitIgnore, Outcome::Created) => {
            format!("{} {} with {}", created, GITIGNORE_PATH, gitignore::MARKER)
        }
        (Target::GitIgnore, Outcome::Appended) => {
            format!("{} {} to {}", added, gitignore::MARKER, GITIGNORE_PATH)
        }
        (Target::GitIgnore, Outcome::AlreadyPresent) => {
            format!("[-] {} already in {}", gitignore::MARKER, GITIGNORE_PATH)
        }

        (Target::Readme, Outcome::AlreadyPresent) => {
            format!("[-] {} already exists", readme::README_PATH)
        }
        (Target::Readme, _) => format!("{} {}", created, readme::README_PATH),

        (Target::Instructions, Outcome::Created) => format!(
            "{} {} with {} section",
            created,
            claude_md::CLAUDE_MD_PATH,
            claude_md::KEYWORD
        ),
        (Target::Instructions, Outcome::Appended) => format!(
            "{} {} section to {}",
            added,
            claude_md::KEYWORD,
            claude_md::CLAUDE_MD_PATH
        ),
        (Target::Instructions, Outcome::AlreadyPresent) => format!(
            "[-] {} section already in {}",
            claude_md::KEYWORD,
            claude_md::CLAUDE_MD_PATH
        ),
    };

    format!("  {}", line)
}

pub struct Reporter<'a, W: Write> {
    out: &'a mut W,
    dry_run: bool,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(out: &'a mut W, dry_run: bool) -> Self {
        Self { out, dry_run }
    }

    pub fn banner(&mut self, base: &Path) -> io::Result<()> {
        if self.dry_run {
            writeln!(self.out, "[*] Dry run: planning Prism structure in: {}", base.display())?;
        } else {
            writeln!(self.out, "[*] Initializing Prism structure in: {}", base.display())?;
        }
        writeln!(self.out)
    }

    pub fn step(&mut self, target: &Target, outcome: Outcome) -> io::Result<()> {
        writeln!(self.out, "{}", progress_line(target, outcome, self.dry_run))
    }

    pub fn summary(&mut self, report: &InitReport) -> io::Result<()> {
        writeln!(self.out)?;
        if self.dry_run {
            writeln!(
                self.out,
                "[OK] Dry run complete: {} change(s) planned, nothing written.",
                report.changes()
            )?;
            return self.out.flush();
        }

        writeln!(self.out, "[OK] Prism structure initialized!")?;
        writeln!(self.out)?;
        for line in summary::TREE {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        for line in summary::NEXT_STEPS {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_lines() {
        assert_eq!(
            progress_line(&Target::Directory("thoughts/local"), Outcome::Created, false),
            "  [+] Created thoughts/local/"
        );
        assert_eq!(
            progress_line(&Target::GitIgnore, Outcome::Created, false),
            "  [+] Created .gitignore with thoughts/local/"
        );
        assert_eq!(
            progress_line(&Target::Readme, Outcome::Created, false),
            "  [+] Created thoughts/shared/README.md"
        );
        assert_eq!(
            progress_line(&Target::Instructions, Outcome::Created, false),
            "  [+] Created CLAUDE.md with Prism section"
        );
    }

    #[test]
    fn test_skipped_and_appended_lines() {
        assert_eq!(
            progress_line(&Target::GitIgnore, Outcome::AlreadyPresent, false),
            "  [-] thoughts/local/ already in .gitignore"
        );
        assert_eq!(
            progress_line(&Target::GitIgnore, Outcome::Appended, false),
            "  [+] Added thoughts/local/ to .gitignore"
        );
        assert_eq!(
            progress_line(&Target::Instructions, Outcome::Appended, false),
            "  [+] Added Prism section to CLAUDE.md"
        );
        assert_eq!(
            progress_line(&Target::Instructions, Outcome::AlreadyPresent, false),
            "  [-] Prism section already in CLAUDE.md"
        );
    }

    #[test]
    fn test_dry_run_wording() {
        assert_eq!(
            progress_line(&Target::Directory("thoughts/shared/plans"), Outcome::Created, true),
            "  [~] Would create thoughts/shared/plans/"
        );
        assert_eq!(
            progress_line(&Target::Instructions, Outcome::Appended, true),
            "  [~] Would add Prism section to CLAUDE.md"
        );
    }

    #[test]
    fn test_summary_lists_tree_and_next_steps() {
        let mut buf = Vec::new();
        Reporter::new(&mut buf, false)
            .summary(&InitReport::new(false))
            .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("[OK] Prism structure initialized!"));
        assert!(output.contains("+-- local/           # Personal notes (gitignored)"));
        assert!(output.contains("1. Start with /prism-research for your first task"));
    }
}
