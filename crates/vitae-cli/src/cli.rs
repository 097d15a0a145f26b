//! Argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use vitae::{ColorMode, OutputMode};

/// vitae - render a résumé page with a remembered light/dark theme
#[derive(Debug, Parser)]
#[command(name = "vitae")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Preference file (defaults to the user config directory)
    #[arg(long, env = "VITAE_STORE", global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Résumé content file (.json, .yaml or .yml) replacing the built-in data
    #[arg(long, env = "VITAE_CONTENT", global = true, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Directory of template overrides
    #[arg(long, env = "VITAE_TEMPLATES", global = true, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Answer the OS color-scheme query with this mode instead of asking the host
    #[arg(long, global = true, value_name = "MODE")]
    pub system: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the page to stdout (default)
    Show(ShowArgs),

    /// Write the standalone HTML page
    Export(ExportArgs),

    /// Inspect or change the theme preference
    Theme(ThemeArgs),
}

#[derive(Debug, Args, Default)]
pub struct ShowArgs {
    /// Output mode: auto, term, text, term-debug, json or html
    #[arg(short, long, default_value = "auto")]
    pub output: OutputMode,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Target file; stdout when omitted
    #[arg(short = 'o', long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ThemeAction {
    /// Print the current mode and where it came from (default)
    Show,

    /// Switch between light and dark and remember the choice
    Toggle,

    /// Remember an explicit mode
    Set {
        /// light or dark
        mode: ColorMode,
    },

    /// Forget the remembered mode and follow the OS again
    Reset,
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
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["vitae"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["vitae", "theme", "toggle", "--system", "dark", "-vv"]).unwrap();
        assert_eq!(cli.system, Some(ColorMode::Dark));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Theme(args)) => assert!(matches!(args.action, Some(ThemeAction::Toggle))),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_show_output_mode() {
        let cli = Cli::try_parse_from(["vitae", "show", "--output", "term-debug"]).unwrap();
        match cli.command {
            Some(Commands::Show(args)) => assert_eq!(args.output, OutputMode::TermDebug),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["vitae", "theme", "set", "sepia"]).is_err());
        assert!(Cli::try_parse_from(["vitae", "--system", "dim"]).is_err());
    }
}
