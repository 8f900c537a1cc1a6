//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scriptnet CLI - inspect how script configuration resolves into an HTTP client
///
/// Resolves a configuration file with exactly the rules the script
/// constructor applies, including the HTTP_PROXY environment variable.
#[derive(Parser, Debug)]
#[command(
    name = "scriptnet",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a client configuration and print the transport settings
    Resolve(ResolveArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Configuration file (JSON or YAML); omit to resolve defaults only
    #[arg(value_name = "CONFIG_FILE", env = "SCRIPTNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Set an option, overriding the file (value parsed as JSON, else string)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, String)>,

    /// Also construct the HTTP client
    #[arg(long)]
    pub build: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// Pretty-printed JSON output
    JsonPretty,
    /// YAML output
    Yaml,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        use is_terminal::IsTerminal;
        !self.no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    }
}

fn parse_key_value(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("timeout=5").unwrap(),
            ("timeout".to_string(), "5".to_string())
        );
        assert_eq!(
            parse_key_value("http_proxy=http://u:p@h:1?a=b").unwrap(),
            ("http_proxy".to_string(), "http://u:p@h:1?a=b".to_string())
        );
        assert!(parse_key_value("timeout").is_err());
        assert!(parse_key_value("=5").is_err());
    }

    #[test]
    fn test_resolve_args() {
        let cli = Cli::parse_from([
            "scriptnet",
            "-vv",
            "resolve",
            "client.yaml",
            "--set",
            "timeout=3",
            "--set",
            "insecure_skip_verify=true",
            "--build",
        ]);
        assert_eq!(cli.verbosity_level(), 2);

        let Commands::Resolve(args) = cli.command;
        assert_eq!(args.config, Some(PathBuf::from("client.yaml")));
        assert_eq!(args.overrides.len(), 2);
        assert!(args.build);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::parse_from(["scriptnet", "--quiet", "-o", "json", "resolve"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
