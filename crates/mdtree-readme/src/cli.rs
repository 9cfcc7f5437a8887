//! Command-line interface of `readme-gen`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::CONFIG_FILE_NAME;

#[derive(Parser, Debug)]
#[command(name = "readme-gen")]
#[command(about = "Generate README.md from a readme.toml project description")]
#[command(version)]
#[command(after_help = "Examples:
  readme-gen                          # Read ./readme.toml, write the configured output
  readme-gen -c tools/readme.toml     # Paths in the config are relative to its directory
  readme-gen --stdout                 # Print instead of writing a file")]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Output file, overriding the one in the configuration
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the README to standard output
    #[arg(long)]
    pub stdout: bool,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// The clap command, used to render readme-gen's own help in-process
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["readme-gen"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("readme.toml"));
        assert!(cli.output.is_none());
        assert!(!cli.stdout && !cli.verbose && !cli.quiet);
    }

    #[test]
    fn test_output_conflicts_with_stdout() {
        assert!(Cli::try_parse_from(["readme-gen", "-o", "X.md", "--stdout"]).is_err());
    }

    #[test]
    fn test_command_is_consistent() {
        command().debug_assert();
    }
}
