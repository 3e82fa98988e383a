//! Outcome notifier infrastructure module

mod collecting;
mod console;

pub use collecting::CollectingNotifier;
pub use console::ConsoleNotifier;
