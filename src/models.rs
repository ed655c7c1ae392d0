use std::fmt;

/// Result of one check-then-write step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The directory or file did not exist and was created
    Created,
    /// The file existed and the missing block was appended
    Appended,
    /// Nothing to do
    AlreadyPresent,
}

impl Outcome {
    /// True when applying this outcome touches the filesystem
    pub fn writes(self) -> bool {
        !matches!(self, Outcome::AlreadyPresent)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created => write!(f, "created"),
            Outcome::Appended => write!(f, "appended"),
            Outcome::AlreadyPresent => write!(f, "already-present"),
        }
    }
}

/// What a step acted on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One of the fixed thoughts subdirectories, relative to the base path
    Directory(&'static str),
    GitIgnore,
    Readme,
    Instructions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub target: Target,
    pub outcome: Outcome,
}

/// Ordered record of every step taken during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub steps: Vec<Step>,
    pub dry_run: bool,
}

impl InitReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            steps: Vec::new(),
            dry_run,
        }
    }

    pub fn record(&mut self, target: Target, outcome: Outcome) {
        self.steps.push(Step { target, outcome });
    }

    pub fn outcome_of(&self, target: &Target) -> Option<Outcome> {
        self.steps
            .iter()
            .find(|step| &step.target == target)
            .map(|step| step.outcome)
    }

    /// Number of steps that wrote (or in dry-run, would write) something
    pub fn changes(&self) -> usize {
        self.steps.iter().filter(|step| step.outcome.writes()).count()
    }

    pub fn is_noop(&self) -> bool {
        self.changes() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_changes() {
        let mut report = InitReport::new(false);
        report.record(Target::Directory("thoughts/local"), Outcome::Created);
        report.record(Target::GitIgnore, Outcome::AlreadyPresent);
        report.record(Target::Instructions, Outcome::Appended);

        assert_eq!(report.changes(), 2);
        assert!(!report.is_noop());
        assert_eq!(report.outcome_of(&Target::GitIgnore), Some(Outcome::AlreadyPresent));
        assert_eq!(report.outcome_of(&Target::Readme), None);
    }

    #[test]
    fn test_empty_report_is_noop() {
        assert!(InitReport::new(true).is_noop());
    }
}
