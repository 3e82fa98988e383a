//! Host page port interface
//!
//! Models the ambient facilities of the host environment the clipboard
//! core depends on: the element tree, the single global selection, focus,
//! click dispatch, and the copy/cut command primitive.

use thiserror::Error;

use crate::domain::{Action, Edge, ElementId, ListenerId, ReadingDirection};

/// Error raised by the host's command primitive.
///
/// Command support is feature-detectable only at call time; the core
/// treats any error here as a failed command, never as a fatal one.
#[derive(Debug, Clone, Error)]
#[error("Clipboard command failed: {0}")]
pub struct CommandError(pub String);

/// Description of a temporary off-screen text field.
///
/// Adapters must create the field focusable and read-only (a read-only
/// field suppresses on-screen keyboards), parked past `edge` so it never
/// flashes into view, with its top aligned to `top` so the viewport does
/// not autoscroll when the field is focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffscreenField {
    pub text: String,
    pub edge: Edge,
    pub top: i64,
}

/// Callback invoked when a click lands inside a subscribed element
pub type ClickHandler = Box<dyn Fn()>;

/// Port for the host page
pub trait HostPage {
    /// The document root, used as the default mounting container.
    fn root(&self) -> ElementId;

    /// Whether `element` currently exists on the page.
    fn element_exists(&self, element: &ElementId) -> bool;

    /// Whether `element` carries the disabled attribute.
    fn is_disabled(&self, element: &ElementId) -> bool;

    /// Whether `element` carries the readonly attribute.
    fn is_readonly(&self, element: &ElementId) -> bool;

    /// Reading direction of the page, used for off-screen placement.
    fn reading_direction(&self) -> ReadingDirection;

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> i64;

    /// Create a temporary text field under `container`.
    fn create_offscreen_field(&self, container: &ElementId, field: OffscreenField) -> ElementId;

    /// Detach and discard `element`. No-op if it no longer exists.
    fn remove_element(&self, element: &ElementId);

    /// Register `handler` to fire on the next clicks inside `element`.
    fn add_click_listener(&self, element: &ElementId, handler: ClickHandler) -> ListenerId;

    /// Detach a previously registered click listener. No-op if gone.
    fn remove_click_listener(&self, element: &ElementId, listener: ListenerId);

    /// Move keyboard focus to `element`.
    fn focus(&self, element: &ElementId);

    /// Remove all ranges from the host's active selection.
    fn clear_selection_ranges(&self);

    /// Invoke the copy/cut command against the current selection.
    ///
    /// `Ok(true)` means the command ran; `Ok(false)` means the host
    /// reported the command unsupported; `Err` means the call blew up.
    fn exec_command(&self, action: Action) -> Result<bool, CommandError>;
}
