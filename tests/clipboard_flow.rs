//! End-to-end flows through the public library API

use std::rc::Rc;

use clipact::application::ports::{HostPage, OutcomeKind};
use clipact::application::{ClipboardRequest, RequestOptions};
use clipact::domain::{Action, RequestError};
use clipact::infrastructure::{CollectingNotifier, CommandMode, ElementSpec, MemoryPage};

#[test]
fn copy_button_flow() {
    // A page with a text element and a button that triggers the copy.
    let page = Rc::new(MemoryPage::new());
    let notifier = CollectingNotifier::new();
    let snippet = page.insert_element(ElementSpec::text("cargo install clipact"));
    let button = page.insert_element(ElementSpec::text("Copy"));

    let mut request = ClipboardRequest::new(
        Rc::clone(&page),
        Rc::clone(&page),
        notifier.clone(),
        RequestOptions {
            action: Action::Copy,
            target: Some(snippet),
            trigger: Some(button.clone()),
            ..Default::default()
        },
    )
    .expect("valid request");

    request.run();

    let events = notifier.take_events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.kind, OutcomeKind::Success);
    assert_eq!(event.text, "cargo install clipact");
    assert_eq!(page.clipboard_text().as_deref(), Some("cargo install clipact"));

    // Consumer resets the visual selection; focus returns to the button.
    event.clear_selection.clear();
    assert!(page.selection_text().is_none());
    assert_eq!(page.focused(), Some(button));
}

#[test]
fn literal_text_flow_cleans_up_after_a_click() {
    let page = Rc::new(MemoryPage::new());
    let notifier = CollectingNotifier::new();

    let mut request = ClipboardRequest::new(
        Rc::clone(&page),
        Rc::clone(&page),
        notifier.clone(),
        RequestOptions {
            text: Some("hello".to_string()),
            ..Default::default()
        },
    )
    .expect("valid request");

    request.run();
    assert_eq!(page.clipboard_text().as_deref(), Some("hello"));

    // The temporary field lives on so a keyboard copy still works...
    assert_eq!(page.fields_under(&page.root()).len(), 1);
    assert_eq!(page.selection_text().as_deref(), Some("hello"));

    // ...until the next click inside the container.
    page.click(&page.root());
    assert!(page.fields_under(&page.root()).is_empty());
}

#[test]
fn unsupported_host_reports_error_not_panic() {
    let page = Rc::new(MemoryPage::new());
    page.set_command_mode(CommandMode::Failing);
    let notifier = CollectingNotifier::new();

    let mut request = ClipboardRequest::new(
        Rc::clone(&page),
        Rc::clone(&page),
        notifier.clone(),
        RequestOptions {
            text: Some("hello".to_string()),
            ..Default::default()
        },
    )
    .expect("valid request");

    request.run();

    let events = notifier.take_events();
    assert_eq!(events[0].kind, OutcomeKind::Error);
    assert_eq!(events[0].text, "hello");
}

#[test]
fn cut_validation_runs_before_any_work() {
    let page = Rc::new(MemoryPage::new());
    let notifier = CollectingNotifier::new();
    let field = page.insert_element(ElementSpec::text("secret").readonly());

    let result = ClipboardRequest::new(
        Rc::clone(&page),
        Rc::clone(&page),
        notifier.clone(),
        RequestOptions {
            action: Action::Cut,
            target: Some(field.clone()),
            ..Default::default()
        },
    );

    assert_eq!(result.err(), Some(RequestError::CutFromImmutable));
    assert!(notifier.events().is_empty());
    assert!(page.clipboard_text().is_none());
    assert_eq!(page.element_value(&field).as_deref(), Some("secret"));
}
