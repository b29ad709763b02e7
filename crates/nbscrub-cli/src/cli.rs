//! CLI argument parsing.
//!
//! Running with no arguments cleans the current directory. The flags only
//! affect where configuration comes from and how chatty the diagnostics on
//! stderr are.

use clap::Parser;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "nbscrub",
    version,
    about = "Clear metadata and execution counts from Jupyter notebooks",
    long_about = None
)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "NBSCRUB_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::try_parse_from(["nbscrub"]).unwrap();
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_args_verbose() {
        let args = CliArgs::parse_from(["nbscrub", "--verbose"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_args_quiet() {
        let args = CliArgs::parse_from(["nbscrub", "-q"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_args_config() {
        let args = CliArgs::parse_from(["nbscrub", "--config", "/path/to/config.toml"]);
        assert_eq!(args.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_cli_args_verbose_conflicts_with_quiet() {
        let result = CliArgs::try_parse_from(["nbscrub", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_args_rejects_positional() {
        let result = CliArgs::try_parse_from(["nbscrub", "notebook.ipynb"]);
        assert!(result.is_err());
    }
}
