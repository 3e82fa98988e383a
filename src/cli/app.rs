//! Main app runner for copy/cut mode

use std::fs;
use std::process::ExitCode;
use std::rc::Rc;

use serde::Serialize;

use crate::application::ports::{ConfigStore, OutcomeKind};
use crate::application::{ClipboardRequest, RequestOptions};
use crate::domain::{Action, AppConfig};
use crate::infrastructure::{
    create_clipboard, CollectingNotifier, ElementSpec, MemoryPage, XdgConfigStore,
};

use super::args::CopyOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Merge the config file with CLI-supplied values (CLI wins).
pub fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().unwrap_or_else(|e| {
        Presenter::new().warn(&format!("Ignoring config file: {}", e));
        AppConfig::empty()
    });
    file_config.merge(cli_config)
}

/// JSON view of an outcome event
#[derive(Serialize)]
struct OutcomeView<'a> {
    event: &'a str,
    action: &'a str,
    text: &'a str,
}

/// Run a single copy/cut action against an in-memory page.
pub fn run_copy(options: CopyOptions) -> ExitCode {
    let presenter = Presenter::new();

    let page = if options.system_clipboard {
        Rc::new(MemoryPage::with_sink(create_clipboard()))
    } else {
        Rc::new(MemoryPage::new())
    };
    let notifier = CollectingNotifier::new();

    let mut request_options = RequestOptions {
        action: options.action,
        ..Default::default()
    };
    match (&options.text, &options.file) {
        (Some(text), _) => request_options.text = Some(text.clone()),
        (None, Some(path)) => {
            // Mount the file content as a page element and cut/copy from it.
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    presenter.error(&format!("Failed to read {}: {}", path.display(), e));
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            request_options.target = Some(page.insert_element(ElementSpec::text(&content)));
        }
        (None, None) => {}
    }

    let mut request = match ClipboardRequest::new(
        Rc::clone(&page),
        Rc::clone(&page),
        notifier.clone(),
        request_options,
    ) {
        Ok(request) => request,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    request.run();
    request.teardown();

    let Some(event) = notifier.take_events().pop() else {
        presenter.error("No outcome event was emitted");
        return ExitCode::from(EXIT_ERROR);
    };

    // React the way an embedding consumer would: done with the result,
    // reset the page selection.
    event.clear_selection.clear();

    if options.json {
        let view = OutcomeView {
            event: event.kind.as_str(),
            action: event.action.as_str(),
            text: &event.text,
        };
        match serde_json::to_string(&view) {
            Ok(line) => presenter.output(&line),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    match event.kind {
        OutcomeKind::Success => {
            if !options.quiet && !options.json {
                presenter.success(&format!(
                    "{} {} characters",
                    past_tense(event.action),
                    event.text.chars().count()
                ));
                if !options.system_clipboard {
                    presenter.info("Dry run: system clipboard untouched");
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        OutcomeKind::Error => {
            if !options.quiet && !options.json {
                presenter.error(&format!("The {} command failed", event.action));
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn past_tense(action: Action) -> &'static str {
    match action {
        Action::Copy => "Copied",
        Action::Cut => "Cut",
    }
}
