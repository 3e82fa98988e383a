//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::Action;

/// Clipact - copy or cut text to the clipboard
#[derive(Parser, Debug)]
#[command(name = "clipact")]
#[command(version)]
#[command(about = "Copy or cut text to the clipboard through a host page model")]
#[command(long_about = None)]
pub struct Cli {
    /// Text to put on the clipboard
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Action to perform
    #[arg(short = 'a', long, value_name = "ACTION")]
    pub action: Option<ActionArg>,

    /// Keep the result in the in-memory clipboard only
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome event as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Action argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ActionArg {
    Copy,
    Cut,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Copy => Action::Copy,
            ActionArg::Cut => Action::Cut,
        }
    }
}

impl From<Action> for ActionArg {
    fn from(action: Action) -> Self {
        match action {
            Action::Copy => ActionArg::Copy,
            Action::Cut => ActionArg::Cut,
        }
    }
}

/// Parsed copy/cut options
#[derive(Debug, Clone)]
pub struct CopyOptions {
    pub action: Action,
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub system_clipboard: bool,
    pub json: bool,
    pub quiet: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["action", "system_clipboard", "quiet"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["clipact"]);
        assert!(cli.text.is_none());
        assert!(cli.file.is_none());
        assert!(cli.action.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn cli_parses_positional_text() {
        let cli = Cli::parse_from(["clipact", "hello"]);
        assert_eq!(cli.text, Some("hello".to_string()));
    }

    #[test]
    fn cli_parses_action() {
        let cli = Cli::parse_from(["clipact", "-a", "cut", "hello"]);
        assert_eq!(cli.action, Some(ActionArg::Cut));
    }

    #[test]
    fn cli_rejects_unknown_action() {
        assert!(Cli::try_parse_from(["clipact", "-a", "paste", "hello"]).is_err());
    }

    #[test]
    fn cli_parses_file() {
        let cli = Cli::parse_from(["clipact", "--file", "notes.txt"]);
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn cli_rejects_text_and_file_together() {
        assert!(Cli::try_parse_from(["clipact", "hello", "--file", "notes.txt"]).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["clipact", "--dry-run", "--json", "-q", "hello"]);
        assert!(cli.dry_run);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["clipact", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["clipact", "config", "set", "action", "cut"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "action");
            assert_eq!(value, "cut");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn action_arg_converts_both_ways() {
        assert_eq!(Action::from(ActionArg::Copy), Action::Copy);
        assert_eq!(ActionArg::from(Action::Cut), ActionArg::Cut);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("action"));
        assert!(is_valid_config_key("system_clipboard"));
        assert!(is_valid_config_key("quiet"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
