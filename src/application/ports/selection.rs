//! Text selection port interface

use crate::domain::ElementId;

/// Port for the selection helper.
///
/// Selects the full content of an element on the host's active selection
/// and returns the selected string. The core treats this as a black box;
/// an unknown element yields the empty string.
pub trait TextSelector {
    fn select(&self, element: &ElementId) -> String;
}

/// Blanket implementation so a shared page adapter can double as the
/// selection helper.
impl<T: TextSelector + ?Sized> TextSelector for std::rc::Rc<T> {
    fn select(&self, element: &ElementId) -> String {
        self.as_ref().select(element)
    }
}

/// Blanket implementation for boxed selector types
impl<T: TextSelector + ?Sized> TextSelector for Box<T> {
    fn select(&self, element: &ElementId) -> String {
        self.as_ref().select(element)
    }
}
