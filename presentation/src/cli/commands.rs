//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Auth backend selection from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Hosted GoTrue/Supabase project from `[backend] url`
    Remote,
    /// Process-local accounts (nothing leaves this machine)
    Memory,
}

/// CLI arguments for biogenie
#[derive(Parser, Debug)]
#[command(name = "biogenie")]
#[command(author, version, about = "BioGenie - biotechnology learning assistant")]
#[command(long_about = r#"
BioGenie is an interactive learning client for biotechnology.

Pick a role (student, teacher, public or labs) to browse its tools, or open
the NCERT virtual labs for classes 9 to 12. Signing in is optional.

Configuration files are loaded from (in priority order):
1. BIOGENIE_* environment variables (e.g. BIOGENIE_BACKEND__URL)
2. --config <path>     Explicit config file
3. ./biogenie.toml     Project-level config
4. ~/.config/biogenie/config.toml   Global config

Example:
  biogenie
  biogenie --backend memory
  biogenie --link "http://localhost:5173/#access_token=...&type=recovery"
"#)]
pub struct Cli {
    /// Startup URL; a `type=recovery` fragment opens the new-password form
    #[arg(long, value_name = "URL")]
    pub link: Option<String>,

    /// Auth backend to use (overrides `[backend] mode`)
    #[arg(long, value_enum, value_name = "MODE")]
    pub backend: Option<BackendArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "biogenie",
            "-vv",
            "--backend",
            "memory",
            "--link",
            "http://localhost:5173/#type=recovery",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.backend, Some(BackendArg::Memory));
        assert_eq!(
            cli.link.as_deref(),
            Some("http://localhost:5173/#type=recovery")
        );
        assert!(!cli.quiet);
        assert!(!cli.no_config);
    }
}
