//! Clipact CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipact::cli::{
    app::{load_merged_config, run_copy, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, CopyOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use clipact::domain::{Action, AppConfig};
use clipact::infrastructure::XdgConfigStore;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter) {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    if cli.text.is_none() && cli.file.is_none() {
        presenter.error("Nothing to copy: provide TEXT or --file <PATH>");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        action: cli.action.map(|a| Action::from(a).to_string()),
        system_clipboard: if cli.dry_run { Some(false) } else { None },
        quiet: if cli.quiet { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config);

    // Parse action
    let action = match config.action.as_ref() {
        Some(s) => match s.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Action::default(),
    };

    let options = CopyOptions {
        action,
        text: cli.text,
        file: cli.file,
        system_clipboard: config.system_clipboard_or_default(),
        json: cli.json,
        quiet: config.quiet_or_default(),
    };

    run_copy(options)
}
