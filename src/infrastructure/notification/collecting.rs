//! Collecting notifier adapter

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::ports::{OutcomeEvent, OutcomeNotifier};

/// Notifier that records every emitted event for later inspection.
///
/// Clones share the same backing store, so a clone handed to a request
/// exposes the events to the original handle.
#[derive(Clone, Default)]
pub struct CollectingNotifier {
    events: Rc<RefCell<Vec<OutcomeEvent>>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events emitted so far.
    pub fn events(&self) -> Vec<OutcomeEvent> {
        self.events.borrow().clone()
    }

    /// Drain and return all events emitted so far.
    pub fn take_events(&self) -> Vec<OutcomeEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl OutcomeNotifier for CollectingNotifier {
    fn emit(&self, event: OutcomeEvent) {
        self.events.borrow_mut().push(event);
    }
}
