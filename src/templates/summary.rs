pub const TREE: &[&str] = &[
    "Directory structure:",
    "   thoughts/",
    "   +-- shared/",
    "   |   +-- research/    # Codebase research docs",
    "   |   +-- plans/       # Implementation plans",
    "   |   +-- validation/  # Validation reports",
    "   +-- local/           # Personal notes (gitignored)",
];

pub const NEXT_STEPS: &[&str] = &[
    "Next steps:",
    "   1. Start with /prism-research for your first task",
    "   2. Use specialized agents (codebase-locator, codebase-analyzer, etc.)",
    "   3. Save findings to thoughts/shared/research/",
];
