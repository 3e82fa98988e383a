//! Clipboard request use case
//!
//! The core of the crate: resolves which selection strategy applies,
//! materializes the selection on the host page, invokes the copy/cut
//! command and broadcasts the outcome through the notifier port.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::domain::{Action, ElementId, ListenerId, RequestError};

use super::ports::{
    ClearSelection, ClickHandler, HostPage, OffscreenField, OutcomeEvent, OutcomeKind,
    OutcomeNotifier, TextSelector,
};

/// Caller-supplied options for a clipboard request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Operation to perform
    pub action: Action,
    /// Literal text to copy; takes precedence over `target`
    pub text: Option<String>,
    /// Element whose content should be copied
    pub target: Option<ElementId>,
    /// Mounting point for the temporary surface; defaults to the page root
    pub container: Option<ElementId>,
    /// Element that initiated the action, focused again by clear_selection
    pub trigger: Option<ElementId>,
}

/// Selection strategy, resolved once at construction and never changed.
#[derive(Debug, Clone)]
enum Strategy {
    /// Select literal text through a temporary off-screen field
    FakeText(String),
    /// Select the existing content of a page element
    Target(ElementId),
    /// No selection step; the command acts on whatever the host
    /// already has selected
    Ambient,
}

/// The temporary field and its dismissal listener. Held as one value so
/// they are always both present or both absent.
struct FakeSurface {
    field: ElementId,
    listener: ListenerId,
}

/// A validated copy/cut request against a host page.
///
/// Construction validates the action/target combination; [`run`] performs
/// selection, executes the command and emits exactly one outcome event.
///
/// [`run`]: ClipboardRequest::run
pub struct ClipboardRequest<P, S, N>
where
    P: HostPage + 'static,
    S: TextSelector,
    N: OutcomeNotifier,
{
    page: Rc<P>,
    selector: S,
    notifier: N,
    action: Action,
    strategy: Strategy,
    container: ElementId,
    trigger: Option<ElementId>,
    selected_text: String,
    surface: Rc<RefCell<Option<FakeSurface>>>,
}

impl<P, S, N> ClipboardRequest<P, S, N>
where
    P: HostPage + 'static,
    S: TextSelector,
    N: OutcomeNotifier,
{
    /// Validate `options` against the page and build a request.
    ///
    /// Fails when the container or target does not exist, when a copy
    /// targets a disabled element, or when a cut targets a readonly or
    /// disabled element. Nothing is selected or executed here.
    pub fn new(
        page: Rc<P>,
        selector: S,
        notifier: N,
        options: RequestOptions,
    ) -> Result<Self, RequestError> {
        let container = options.container.unwrap_or_else(|| page.root());
        if !page.element_exists(&container) {
            return Err(RequestError::UnknownContainer);
        }

        if let Some(ref target) = options.target {
            Self::validate_target(&page, options.action, target)?;
        }

        let strategy = match options.text.filter(|t| !t.is_empty()) {
            Some(text) => Strategy::FakeText(text),
            None => match options.target {
                Some(target) => Strategy::Target(target),
                None => Strategy::Ambient,
            },
        };

        Ok(Self {
            page,
            selector,
            notifier,
            action: options.action,
            strategy,
            container,
            trigger: options.trigger,
            selected_text: String::new(),
            surface: Rc::new(RefCell::new(None)),
        })
    }

    fn validate_target(page: &P, action: Action, target: &ElementId) -> Result<(), RequestError> {
        if !page.element_exists(target) {
            return Err(RequestError::UnknownTarget);
        }

        match action {
            Action::Copy if page.is_disabled(target) => Err(RequestError::CopyFromDisabled),
            Action::Cut if page.is_readonly(target) || page.is_disabled(target) => {
                Err(RequestError::CutFromImmutable)
            }
            _ => Ok(()),
        }
    }

    /// Perform the selection, execute the command and emit the outcome.
    ///
    /// Selection completes before the command runs, and the command
    /// completes before the event is emitted, all within this call.
    pub fn run(&mut self) {
        match self.strategy.clone() {
            Strategy::FakeText(text) => self.select_fake(&text),
            Strategy::Target(target) => self.select_target(&target),
            Strategy::Ambient => {}
        }
        self.exec_and_report();
    }

    /// The action this request performs.
    pub fn action(&self) -> Action {
        self.action
    }

    /// The text captured by the most recent selection step.
    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    /// Create a temporary off-screen field holding `text`, mount it under
    /// the container and select its content.
    ///
    /// The field is parked past the start-of-line edge for the page's
    /// reading direction and vertically aligned with the current scroll
    /// offset, so it never flashes into view and focusing it does not
    /// autoscroll. It is removed on the next click inside the container
    /// rather than right after selection, so a manual copy shortcut still
    /// finds a live selection.
    fn select_fake(&mut self, text: &str) {
        // A re-trigger supersedes any previous surface.
        self.remove_surface();

        let page = Rc::downgrade(&self.page);
        let container = self.container.clone();
        let surface = Rc::clone(&self.surface);
        let handler: ClickHandler = Box::new(move || {
            if let Some(page) = page.upgrade() {
                Self::discard_surface(&page, &container, &surface);
            }
        });
        let listener = self.page.add_click_listener(&self.container, handler);

        let field = self.page.create_offscreen_field(
            &self.container,
            OffscreenField {
                text: text.to_string(),
                edge: self.page.reading_direction().offscreen_edge(),
                top: self.page.scroll_offset(),
            },
        );

        self.selected_text = self.selector.select(&field);
        *self.surface.borrow_mut() = Some(FakeSurface { field, listener });
    }

    fn select_target(&mut self, target: &ElementId) {
        self.selected_text = self.selector.select(target);
    }

    /// Invoke the platform command and emit exactly one outcome event.
    /// Command errors are captured as a failed outcome, never raised.
    fn exec_and_report(&self) {
        let succeeded = matches!(self.page.exec_command(self.action), Ok(true));

        let kind = if succeeded {
            OutcomeKind::Success
        } else {
            OutcomeKind::Error
        };

        self.notifier.emit(OutcomeEvent {
            kind,
            action: self.action,
            text: self.selected_text.clone(),
            trigger: self.trigger.clone(),
            clear_selection: self.clear_selection_callback(),
        });
    }

    fn clear_selection_callback(&self) -> ClearSelection {
        let page = Rc::clone(&self.page);
        let trigger = self.trigger.clone();
        ClearSelection::new(move || {
            if let Some(ref trigger) = trigger {
                page.focus(trigger);
            }
            page.clear_selection_ranges();
        })
    }

    /// Restore focus to the trigger, if any, and remove all ranges from
    /// the host selection. Idempotent.
    pub fn clear_selection(&self) {
        self.clear_selection_callback().clear();
    }

    /// Remove the temporary surface and detach its dismissal listener.
    /// No-op when neither exists.
    pub fn teardown(&mut self) {
        self.remove_surface();
    }

    fn remove_surface(&self) {
        Self::discard_surface(&self.page, &self.container, &self.surface);
    }

    fn discard_surface(page: &P, container: &ElementId, surface: &RefCell<Option<FakeSurface>>) {
        if let Some(fake) = surface.borrow_mut().take() {
            page.remove_click_listener(container, fake.listener);
            page.remove_element(&fake.field);
        }
    }
}

impl<P, S, N> fmt::Debug for ClipboardRequest<P, S, N>
where
    P: HostPage + 'static,
    S: TextSelector,
    N: OutcomeNotifier,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardRequest")
            .field("action", &self.action)
            .field("strategy", &self.strategy)
            .field("container", &self.container)
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

impl<P, S, N> Drop for ClipboardRequest<P, S, N>
where
    P: HostPage + 'static,
    S: TextSelector,
    N: OutcomeNotifier,
{
    fn drop(&mut self) {
        self.remove_surface();
    }
}
