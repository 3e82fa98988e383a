//! Console notifier adapter

use colored::*;

use crate::application::ports::{OutcomeEvent, OutcomeKind, OutcomeNotifier};

/// Notifier that prints outcome events to stderr
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeNotifier for ConsoleNotifier {
    fn emit(&self, event: OutcomeEvent) {
        match event.kind {
            OutcomeKind::Success => eprintln!(
                "{} {} {} characters",
                "✓".green(),
                event.action,
                event.text.chars().count()
            ),
            OutcomeKind::Error => eprintln!(
                "{} {} command failed",
                "✗".red(),
                event.action
            ),
        }
    }
}
