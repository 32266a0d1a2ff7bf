use std::sync::{Arc, Mutex};

use ninjadom::{Document, DomError, Element, Event, EventKind, ListenerTarget};

fn doc() -> Document {
    Document::new(
        Element::box_().id("root").child(
            Element::box_()
                .id("outer")
                .child(Element::button("Go").id("inner")),
        ),
    )
}

/// Listener that records `name` into the shared log.
fn recorder(log: &Arc<Mutex<Vec<String>>>, name: &str) -> impl FnMut(&mut Document, &Event) + Send {
    let log = Arc::clone(log);
    let name = name.to_string();
    move |_doc, _event| {
        if let Ok(mut guard) = log.lock() {
            guard.push(name.clone());
        }
    }
}

fn entries(log: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    log.lock().map(|guard| guard.clone()).unwrap_or_default()
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_click_bubbles_to_ancestors_then_document() {
    let mut doc = doc();
    let log = Arc::new(Mutex::new(Vec::new()));

    doc.add_listener(ListenerTarget::Document, EventKind::Click, recorder(&log, "document"));
    doc.add_listener(ListenerTarget::element("root"), EventKind::Click, recorder(&log, "root"));
    doc.add_listener(ListenerTarget::element("outer"), EventKind::Click, recorder(&log, "outer"));
    doc.add_listener(ListenerTarget::element("inner"), EventKind::Click, recorder(&log, "inner"));

    assert_eq!(doc.dispatch(Event::click("inner")), Ok(4));
    assert_eq!(entries(&log), vec!["inner", "outer", "root", "document"]);
}

#[test]
fn test_click_on_nothing_reaches_document_only() {
    let mut doc = doc();
    let log = Arc::new(Mutex::new(Vec::new()));

    doc.add_listener(ListenerTarget::Document, EventKind::Click, recorder(&log, "document"));
    doc.add_listener(ListenerTarget::element("root"), EventKind::Click, recorder(&log, "root"));

    assert_eq!(doc.dispatch(Event::click_outside()), Ok(1));
    assert_eq!(entries(&log), vec!["document"]);
}

#[test]
fn test_pointer_events_do_not_bubble() {
    let mut doc = doc();
    let log = Arc::new(Mutex::new(Vec::new()));

    doc.add_listener(ListenerTarget::element("outer"), EventKind::PointerEnter, recorder(&log, "outer"));
    doc.add_listener(ListenerTarget::Document, EventKind::PointerEnter, recorder(&log, "document"));

    assert_eq!(doc.dispatch(Event::pointer_enter("inner")), Ok(0));
    assert_eq!(doc.dispatch(Event::pointer_enter("outer")), Ok(1));
    assert_eq!(entries(&log), vec!["outer"]);
}

#[test]
fn test_listener_kind_filter() {
    let mut doc = doc();
    let log = Arc::new(Mutex::new(Vec::new()));

    doc.add_listener(ListenerTarget::element("inner"), EventKind::PointerLeave, recorder(&log, "leave"));

    assert_eq!(doc.dispatch(Event::pointer_enter("inner")), Ok(0));
    assert_eq!(doc.dispatch(Event::click("inner")), Ok(0));
    assert_eq!(doc.dispatch(Event::pointer_leave("inner")), Ok(1));
}

#[test]
fn test_dispatch_unknown_target() {
    let mut doc = doc();
    assert_eq!(
        doc.dispatch(Event::click("ghost")),
        Err(DomError::NotFound("ghost".to_string()))
    );
    assert_eq!(
        doc.dispatch(Event::pointer_enter("ghost")),
        Err(DomError::NotFound("ghost".to_string()))
    );
}

// ============================================================================
// Callbacks mutating the document
// ============================================================================

#[test]
fn test_callback_can_mutate_tree() {
    let mut doc = doc();
    doc.add_listener(ListenerTarget::element("inner"), EventKind::Click, |doc, _event| {
        let _ = doc.toggle_class("outer", "open");
    });

    doc.dispatch(Event::click("inner")).unwrap();
    assert_eq!(doc.has_class("outer", "open"), Ok(true));
    doc.dispatch(Event::click("inner")).unwrap();
    assert_eq!(doc.has_class("outer", "open"), Ok(false));
}

#[test]
fn test_listener_added_during_dispatch_waits_for_next_event() {
    let mut doc = doc();
    let log = Arc::new(Mutex::new(Vec::new()));
    let inner_log = Arc::clone(&log);

    doc.add_listener(ListenerTarget::element("inner"), EventKind::Click, move |doc, _event| {
        doc.add_listener(ListenerTarget::Document, EventKind::Click, recorder(&inner_log, "late"));
    });

    assert_eq!(doc.dispatch(Event::click("inner")), Ok(1));
    assert!(entries(&log).is_empty());

    // One "late" listener from the first click fires; the second click adds another
    assert_eq!(doc.dispatch(Event::click("inner")), Ok(2));
    assert_eq!(entries(&log), vec!["late"]);
}

#[test]
fn test_listener_removed_during_dispatch_is_skipped() {
    let mut doc = doc();
    let log = Arc::new(Mutex::new(Vec::new()));

    let victim = doc.add_listener(ListenerTarget::Document, EventKind::Click, recorder(&log, "victim"));
    doc.add_listener(ListenerTarget::element("inner"), EventKind::Click, move |doc, _event| {
        doc.remove_listener(victim);
    });

    assert_eq!(doc.dispatch(Event::click("inner")), Ok(1));
    assert!(entries(&log).is_empty());
}

#[test]
fn test_remove_listener() {
    let mut doc = doc();
    let id = doc.add_listener(ListenerTarget::element("inner"), EventKind::Click, |_, _| {});
    assert_eq!(doc.listener_count(), 1);
    assert!(doc.remove_listener(id));
    assert!(!doc.remove_listener(id));
    assert_eq!(doc.dispatch(Event::click("inner")), Ok(0));
}
