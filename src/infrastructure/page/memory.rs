//! In-memory host page adapter
//!
//! A headless element tree with a single ambient selection, focus, click
//! dispatch and a copy/cut command primitive. Serves both as the CLI's
//! host environment and as the substitute page for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::application::ports::{
    ClickHandler, CommandError, HostPage, OffscreenField, TextSelector,
};
use crate::domain::{Action, Edge, ElementId, ListenerId, ReadingDirection};
use crate::infrastructure::clipboard::ClipboardSink;

/// How the page answers `exec_command`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandMode {
    /// Commands run against the current selection
    #[default]
    Supported,
    /// Commands report no support (`Ok(false)`)
    Unsupported,
    /// Commands blow up (`Err`)
    Failing,
}

/// Blueprint for an element mounted on the page
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    value: String,
    readonly: bool,
    disabled: bool,
}

impl ElementSpec {
    /// An element holding `value` as its content
    pub fn text(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Default::default()
        }
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

struct Element {
    value: String,
    readonly: bool,
    disabled: bool,
    parent: Option<u64>,
    /// Set for temporary off-screen fields only
    placement: Option<(Edge, i64)>,
}

struct SelectionRange {
    element: u64,
    text: String,
}

#[derive(Default)]
struct PageState {
    elements: HashMap<u64, Element>,
    listeners: HashMap<u64, Vec<(ListenerId, Rc<dyn Fn()>)>>,
    next_element: u64,
    next_listener: u64,
    selection: Option<SelectionRange>,
    focused: Option<u64>,
    direction: ReadingDirection,
    scroll_top: i64,
    clipboard: Option<String>,
    command_mode: CommandMode,
}

const ROOT: u64 = 0;

/// Headless in-memory page
pub struct MemoryPage {
    state: RefCell<PageState>,
    sink: Option<Box<dyn ClipboardSink>>,
}

impl MemoryPage {
    /// Create a page holding only the document root.
    pub fn new() -> Self {
        let mut elements = HashMap::new();
        elements.insert(
            ROOT,
            Element {
                value: String::new(),
                readonly: false,
                disabled: false,
                parent: None,
                placement: None,
            },
        );

        Self {
            state: RefCell::new(PageState {
                elements,
                next_element: ROOT + 1,
                ..Default::default()
            }),
            sink: None,
        }
    }

    /// Create a page whose copy/cut commands also write through to `sink`.
    pub fn with_sink(sink: Box<dyn ClipboardSink>) -> Self {
        Self {
            sink: Some(sink),
            ..Self::new()
        }
    }

    pub fn set_reading_direction(&self, direction: ReadingDirection) {
        self.state.borrow_mut().direction = direction;
    }

    pub fn set_scroll_offset(&self, top: i64) {
        self.state.borrow_mut().scroll_top = top;
    }

    pub fn set_command_mode(&self, mode: CommandMode) {
        self.state.borrow_mut().command_mode = mode;
    }

    /// Mount a new element under the root.
    pub fn insert_element(&self, spec: ElementSpec) -> ElementId {
        let mut state = self.state.borrow_mut();
        let id = state.next_element;
        state.next_element += 1;
        state.elements.insert(
            id,
            Element {
                value: spec.value,
                readonly: spec.readonly,
                disabled: spec.disabled,
                parent: Some(ROOT),
                placement: None,
            },
        );
        ElementId::new(id)
    }

    /// Select the full content of `element`, as a caller-made ambient
    /// selection (used to stage pass-through scenarios).
    pub fn select(&self, element: &ElementId) {
        let _ = TextSelector::select(self, element);
    }

    /// Dispatch a click on `element`. Listeners registered on the element
    /// and on each of its ancestors fire, innermost first.
    pub fn click(&self, element: &ElementId) {
        let handlers: Vec<Rc<dyn Fn()>> = {
            let state = self.state.borrow();
            let mut chain = Vec::new();
            let mut current = Some(element.raw());
            while let Some(id) = current {
                chain.push(id);
                current = state.elements.get(&id).and_then(|e| e.parent);
            }

            chain
                .iter()
                .flat_map(|id| state.listeners.get(id).into_iter().flatten())
                .map(|(_, handler)| Rc::clone(handler))
                .collect()
        };

        // State borrow released: handlers are free to mutate the page.
        for handler in handlers {
            handler();
        }
    }

    /// The text last written to the page clipboard, if any.
    pub fn clipboard_text(&self) -> Option<String> {
        self.state.borrow().clipboard.clone()
    }

    /// The text of the current ambient selection, if any.
    pub fn selection_text(&self) -> Option<String> {
        self.state
            .borrow()
            .selection
            .as_ref()
            .map(|s| s.text.clone())
    }

    /// The currently focused element, if any.
    pub fn focused(&self) -> Option<ElementId> {
        self.state.borrow().focused.map(ElementId::new)
    }

    /// Current content of `element`.
    pub fn element_value(&self, element: &ElementId) -> Option<String> {
        self.state
            .borrow()
            .elements
            .get(&element.raw())
            .map(|e| e.value.clone())
    }

    /// Number of elements mounted directly under `container`.
    pub fn child_count(&self, container: &ElementId) -> usize {
        self.state
            .borrow()
            .elements
            .values()
            .filter(|e| e.parent == Some(container.raw()))
            .count()
    }

    /// Number of click listeners registered on `element`.
    pub fn listener_count(&self, element: &ElementId) -> usize {
        self.state
            .borrow()
            .listeners
            .get(&element.raw())
            .map_or(0, Vec::len)
    }

    /// Temporary off-screen fields mounted directly under `container`.
    pub fn fields_under(&self, container: &ElementId) -> Vec<ElementId> {
        let state = self.state.borrow();
        let mut ids: Vec<u64> = state
            .elements
            .iter()
            .filter(|(_, e)| e.parent == Some(container.raw()) && e.placement.is_some())
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(ElementId::new).collect()
    }

    /// Placement details of a temporary field, if `element` is one.
    pub fn field_spec(&self, element: &ElementId) -> Option<OffscreenField> {
        let state = self.state.borrow();
        let elem = state.elements.get(&element.raw())?;
        let (edge, top) = elem.placement?;
        Some(OffscreenField {
            text: elem.value.clone(),
            edge,
            top,
        })
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPage for MemoryPage {
    fn root(&self) -> ElementId {
        ElementId::new(ROOT)
    }

    fn element_exists(&self, element: &ElementId) -> bool {
        self.state.borrow().elements.contains_key(&element.raw())
    }

    fn is_disabled(&self, element: &ElementId) -> bool {
        self.state
            .borrow()
            .elements
            .get(&element.raw())
            .is_some_and(|e| e.disabled)
    }

    fn is_readonly(&self, element: &ElementId) -> bool {
        self.state
            .borrow()
            .elements
            .get(&element.raw())
            .is_some_and(|e| e.readonly)
    }

    fn reading_direction(&self) -> ReadingDirection {
        self.state.borrow().direction
    }

    fn scroll_offset(&self) -> i64 {
        self.state.borrow().scroll_top
    }

    fn create_offscreen_field(&self, container: &ElementId, field: OffscreenField) -> ElementId {
        let mut state = self.state.borrow_mut();
        let id = state.next_element;
        state.next_element += 1;
        state.elements.insert(
            id,
            Element {
                value: field.text,
                // Read-only so a real host would not pop a keyboard.
                readonly: true,
                disabled: false,
                parent: Some(container.raw()),
                placement: Some((field.edge, field.top)),
            },
        );
        ElementId::new(id)
    }

    fn remove_element(&self, element: &ElementId) {
        let mut state = self.state.borrow_mut();
        if state.elements.remove(&element.raw()).is_none() {
            return;
        }
        if state.selection.as_ref().map(|s| s.element) == Some(element.raw()) {
            state.selection = None;
        }
        if state.focused == Some(element.raw()) {
            state.focused = None;
        }
    }

    fn add_click_listener(&self, element: &ElementId, handler: ClickHandler) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_listener);
        state.next_listener += 1;
        state
            .listeners
            .entry(element.raw())
            .or_default()
            .push((id, Rc::from(handler)));
        id
    }

    fn remove_click_listener(&self, element: &ElementId, listener: ListenerId) {
        let mut state = self.state.borrow_mut();
        if let Some(listeners) = state.listeners.get_mut(&element.raw()) {
            listeners.retain(|(id, _)| *id != listener);
            if !listeners.is_empty() {
                return;
            }
        }
        state.listeners.remove(&element.raw());
    }

    fn focus(&self, element: &ElementId) {
        let mut state = self.state.borrow_mut();
        if state.elements.contains_key(&element.raw()) {
            state.focused = Some(element.raw());
        }
    }

    fn clear_selection_ranges(&self) {
        self.state.borrow_mut().selection = None;
    }

    fn exec_command(&self, action: Action) -> Result<bool, CommandError> {
        let mut state = self.state.borrow_mut();

        match state.command_mode {
            CommandMode::Failing => {
                return Err(CommandError("command rejected by host".to_string()))
            }
            CommandMode::Unsupported => return Ok(false),
            CommandMode::Supported => {}
        }

        let Some(range) = state.selection.as_ref() else {
            // Nothing selected; the host reports the command as a no-op.
            return Ok(false);
        };
        let text = range.text.clone();
        let selected = range.element;

        if let Some(ref sink) = self.sink {
            sink.write(&text)
                .map_err(|e| CommandError(e.to_string()))?;
        }

        state.clipboard = Some(text);

        if action == Action::Cut {
            if let Some(elem) = state.elements.get_mut(&selected) {
                if !elem.readonly && !elem.disabled {
                    elem.value.clear();
                }
            }
            // Cut collapses the selection.
            state.selection = None;
        }

        Ok(true)
    }
}

impl TextSelector for MemoryPage {
    fn select(&self, element: &ElementId) -> String {
        let mut state = self.state.borrow_mut();
        match state.elements.get(&element.raw()) {
            Some(elem) => {
                let text = elem.value.clone();
                state.selection = Some(SelectionRange {
                    element: element.raw(),
                    text: text.clone(),
                });
                state.focused = Some(element.raw());
                text
            }
            None => String::new(),
        }
    }
}
