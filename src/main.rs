use clap::{Arg, Command};
use dotenv::dotenv;
use std::path::PathBuf;
use std::process;

mod cli;

fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let matches = build_cli().get_matches();

    if let Err(e) = cli::init::handle_init(&matches) {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("prism-init")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Initialize the Prism thoughts directory structure in a project")
        .long_about(
            "Creates thoughts/shared/{research,plans,validation} and thoughts/local, \
             ignores thoughts/local/ in .gitignore, and adds the Prism workflow section \
             to CLAUDE.md. Safe to run repeatedly.",
        )
        .arg(
            Arg::new("path")
                .help("Project directory to initialize")
                .required(false)
                .index(1)
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Report what would change without writing anything")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose logging on stderr")
                .action(clap::ArgAction::SetTrue)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_path_defaults_to_current_directory() {
        let matches = build_cli().get_matches_from(["prism-init"]);
        assert_eq!(matches.get_one::<PathBuf>("path"), Some(&PathBuf::from(".")));
        assert!(!matches.get_flag("dry-run"));
    }

    #[test]
    fn test_rejects_second_positional() {
        let result = build_cli().try_get_matches_from(["prism-init", "a", "b"]);
        assert!(result.is_err());
    }
}
