use anyhow::{Context, Result};
use clap::ArgMatches;
use prism_init::config::Config;
use prism_init::logging::init_logging;
use prism_init::ScaffoldInitializer;
use std::io;
use std::path::PathBuf;
use tracing::debug;

pub fn handle_init(matches: &ArgMatches) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    let verbose = matches.get_flag("verbose") || config.runtime.verbose;
    let dry_run = matches.get_flag("dry-run") || config.runtime.dry_run;
    init_logging(&config.logging, verbose).context("Failed to initialize logging")?;

    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(path = %path.display(), dry_run, "starting init");

    let initializer = ScaffoldInitializer::new(&path)
        .with_context(|| format!("Failed to resolve {}", path.display()))?
        .with_dry_run(dry_run);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    initializer
        .initialize(&mut out)
        .with_context(|| format!("Failed to initialize {}", initializer.base().display()))?;

    Ok(())
}
