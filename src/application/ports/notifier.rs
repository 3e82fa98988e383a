//! Outcome notification port interface

use std::fmt;
use std::rc::Rc;

use crate::domain::{Action, ElementId};

/// Event name for a clipboard outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Error,
}

impl OutcomeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bound callback that restores focus to the trigger and removes all
/// ranges from the host selection. Idempotent; cheap to clone.
#[derive(Clone)]
pub struct ClearSelection {
    f: Rc<dyn Fn()>,
}

impl ClearSelection {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    pub fn clear(&self) {
        (self.f)()
    }
}

impl fmt::Debug for ClearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearSelection")
    }
}

/// Payload of a clipboard outcome event.
///
/// The same shape is delivered for success and error, so consumers have
/// one uniform reporting channel regardless of failure cause.
#[derive(Debug, Clone)]
pub struct OutcomeEvent {
    pub kind: OutcomeKind,
    pub action: Action,
    /// The text captured by the selection step for this exact attempt.
    pub text: String,
    /// The element that initiated the action, if any.
    pub trigger: Option<ElementId>,
    pub clear_selection: ClearSelection,
}

/// Port for broadcasting outcome events
pub trait OutcomeNotifier {
    fn emit(&self, event: OutcomeEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn outcome_kind_names() {
        assert_eq!(OutcomeKind::Success.as_str(), "success");
        assert_eq!(OutcomeKind::Error.as_str(), "error");
    }

    #[test]
    fn clear_selection_is_callable_after_clone() {
        let count = Rc::new(Cell::new(0));
        let counted = Rc::clone(&count);
        let clear = ClearSelection::new(move || counted.set(counted.get() + 1));

        let copy = clear.clone();
        clear.clear();
        copy.clear();
        assert_eq!(count.get(), 2);
    }
}
