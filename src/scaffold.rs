use crate::error::{PrismError, Result};
use crate::models::{InitReport, Outcome, Target};
use crate::paths::{project_name, resolve_base_path, GITIGNORE_PATH, THOUGHTS_DIRECTORIES};
use crate::reporter::Reporter;
use crate::templates::{claude_md, gitignore, readme};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Creates the Prism thoughts layout under a base directory.
///
/// Every step inspects the filesystem first and only writes when something is
/// missing, so running it again over the same directory changes nothing. Steps
/// run in a fixed order and the first I/O failure aborts the run; whatever was
/// written before the failure stays in place.
#[derive(Debug, Clone)]
pub struct ScaffoldInitializer {
    base: PathBuf,
    dry_run: bool,
}

impl ScaffoldInitializer {
    /// Resolve `path` to an absolute base directory. The directory need not exist yet.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let base = resolve_base_path(path.as_ref())?;
        Ok(Self {
            base,
            dry_run: false,
        })
    }

    /// Plan every step without writing anything
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Run all steps, writing progress lines to `out`.
    #[instrument(skip_all, fields(base = %self.base.display(), dry_run = self.dry_run))]
    pub fn initialize<W: Write>(&self, out: &mut W) -> Result<InitReport> {
        let mut reporter = Reporter::new(out, self.dry_run);
        let mut report = InitReport::new(self.dry_run);

        reporter.banner(&self.base)?;

        for dir in THOUGHTS_DIRECTORIES {
            let outcome = self.ensure_directory(dir)?;
            Self::finish_step(&mut reporter, &mut report, Target::Directory(dir), outcome)?;
        }

        let outcome = self.ensure_gitignore()?;
        Self::finish_step(&mut reporter, &mut report, Target::GitIgnore, outcome)?;

        let outcome = self.ensure_readme()?;
        Self::finish_step(&mut reporter, &mut report, Target::Readme, outcome)?;

        let outcome = self.ensure_instructions()?;
        Self::finish_step(&mut reporter, &mut report, Target::Instructions, outcome)?;

        reporter.summary(&report)?;

        info!(changes = report.changes(), "Prism structure initialized");
        Ok(report)
    }

    fn finish_step<W: Write>(
        reporter: &mut Reporter<'_, W>,
        report: &mut InitReport,
        target: Target,
        outcome: Outcome,
    ) -> Result<()> {
        reporter.step(&target, outcome)?;
        report.record(target, outcome);
        Ok(())
    }

    fn ensure_directory(&self, relative: &str) -> Result<Outcome> {
        let path = self.base.join(relative);
        let outcome = if path.is_dir() {
            Outcome::AlreadyPresent
        } else {
            Outcome::Created
        };

        if outcome.writes() && !self.dry_run {
            fs::create_dir_all(&path).map_err(|e| PrismError::create_dir(&path, e))?;
        }

        debug!(path = %path.display(), %outcome, "thoughts directory");
        Ok(outcome)
    }

    fn ensure_gitignore(&self) -> Result<Outcome> {
        let path = self.base.join(GITIGNORE_PATH);

        let outcome = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| PrismError::read(&path, e))?;
            if gitignore::has_marker(&content) {
                Outcome::AlreadyPresent
            } else {
                Outcome::Appended
            }
        } else {
            Outcome::Created
        };

        if !self.dry_run {
            match outcome {
                Outcome::Created => write_file(&path, &gitignore::new_file())?,
                Outcome::Appended => append_to_file(&path, &gitignore::appended_block())?,
                Outcome::AlreadyPresent => {}
            }
        }

        debug!(path = %path.display(), %outcome, "ignore rule");
        Ok(outcome)
    }

    fn ensure_readme(&self) -> Result<Outcome> {
        let path = self.base.join(readme::README_PATH);

        // Never overwritten or merged once present
        let outcome = if path.exists() {
            Outcome::AlreadyPresent
        } else {
            Outcome::Created
        };

        if outcome.writes() && !self.dry_run {
            write_file(&path, readme::README_TEMPLATE)?;
        }

        debug!(path = %path.display(), %outcome, "shared README");
        Ok(outcome)
    }

    fn ensure_instructions(&self) -> Result<Outcome> {
        let path = self.base.join(claude_md::CLAUDE_MD_PATH);

        let outcome = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| PrismError::read(&path, e))?;
            if claude_md::has_keyword(&content) {
                Outcome::AlreadyPresent
            } else {
                Outcome::Appended
            }
        } else {
            Outcome::Created
        };

        if !self.dry_run {
            match outcome {
                Outcome::Created => {
                    write_file(&path, &claude_md::new_document(&project_name(&self.base)))?
                }
                Outcome::Appended => append_to_file(&path, claude_md::PRISM_SECTION)?,
                Outcome::AlreadyPresent => {}
            }
        }

        debug!(path = %path.display(), %outcome, "instructions section");
        Ok(outcome)
    }
}

/// Initialize `path`, or the current directory when `None`.
pub fn init_thoughts<W: Write>(path: Option<&Path>, out: &mut W) -> Result<InitReport> {
    let initializer = ScaffoldInitializer::new(path.unwrap_or(Path::new(".")))?;
    initializer.initialize(out)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| PrismError::write(path, e))
}

fn append_to_file(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| PrismError::write(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| PrismError::write(path, e))
}
