use ninjadom::element::find_element_mut;
use ninjadom::{
    contains, find_element, outline, path_to, query_class, query_class_bounded, query_class_within,
    Document, DomError, Element,
};

fn sample_tree() -> Element {
    Element::box_()
        .id("root")
        .child(
            Element::box_()
                .id("menu")
                .class("dropdown")
                .child(Element::button("Open").id("trigger").class("trigger"))
                .child(Element::box_().id("content").class("content")),
        )
        .child(Element::text("footer").id("footer").class("content"))
}

// ============================================================================
// Builder & markers
// ============================================================================

#[test]
fn test_class_list_has_no_duplicates() {
    let mut el = Element::box_().class("a").class("a").class("b");
    assert_eq!(el.classes(), &["a".to_string(), "b".to_string()]);

    assert!(!el.add_class("b"));
    assert!(el.remove_class("a"));
    assert!(!el.remove_class("a"));
    assert_eq!(el.classes(), &["b".to_string()]);
}

#[test]
fn test_toggle_class_reports_presence() {
    let mut el = Element::box_();
    assert!(el.toggle_class("open"));
    assert!(el.has_class("open"));
    assert!(!el.toggle_class("open"));
    assert!(!el.has_class("open"));
}

#[test]
fn test_attributes() {
    let el = Element::box_().attr("data-message", "hello");
    assert_eq!(el.get_attr("data-message"), Some("hello"));
    assert_eq!(el.get_attr("missing"), None);
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("box-"));
}

#[test]
fn test_append_child_keeps_existing_text() {
    let mut el = Element::text("hover me");
    el.append_child(Element::text("tip"));

    assert_eq!(el.child_elements().len(), 2);
    assert_eq!(el.text_content(), "hover metip");
}

#[test]
fn test_set_text_replaces_children() {
    let mut el = Element::box_().child(Element::text("a")).child(Element::text("b"));
    el.set_text("c");
    assert!(el.child_elements().is_empty());
    assert_eq!(el.text_content(), "c");
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_element() {
    let root = sample_tree();
    assert_eq!(find_element(&root, "trigger").map(|e| e.tag.as_str()), Some("button"));
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_find_element_mut() {
    let mut root = sample_tree();
    if let Some(el) = find_element_mut(&mut root, "content") {
        el.set_hidden(true);
    }
    assert!(find_element(&root, "content").is_some_and(|e| e.is_hidden()));
}

#[test]
fn test_path_to() {
    let root = sample_tree();
    assert_eq!(
        path_to(&root, "trigger"),
        Some(vec!["root".to_string(), "menu".to_string(), "trigger".to_string()])
    );
    assert_eq!(path_to(&root, "root"), Some(vec!["root".to_string()]));
    assert_eq!(path_to(&root, "nope"), None);
}

#[test]
fn test_contains_is_inclusive() {
    let root = sample_tree();
    assert!(contains(&root, "menu", "trigger"));
    assert!(contains(&root, "menu", "menu"));
    assert!(!contains(&root, "menu", "footer"));
    assert!(!contains(&root, "missing", "trigger"));
}

#[test]
fn test_query_class_document_order() {
    let root = sample_tree();
    assert_eq!(
        query_class(&root, "content"),
        vec!["content".to_string(), "footer".to_string()]
    );
}

#[test]
fn test_query_class_within_scope() {
    let root = sample_tree();
    assert_eq!(
        query_class_within(&root, "menu", "content"),
        Some(vec!["content".to_string()])
    );
    // The scope itself is not a candidate
    assert_eq!(
        query_class_within(&root, "menu", "dropdown"),
        Some(Vec::new())
    );
    assert_eq!(query_class_within(&root, "missing", "content"), None);
}

#[test]
fn test_query_class_bounded_skips_nested_containers() {
    let root = Element::box_().id("outer").class("group").children([
        Element::text("a").id("a").class("item"),
        Element::box_().id("inner").class("group").children([
            Element::text("b").id("b").class("item"),
        ]),
        Element::box_().id("wrapper").child(Element::text("c").id("c").class("item")),
    ]);

    assert_eq!(
        query_class_bounded(&root, "outer", "item", "group"),
        Some(vec!["a".to_string(), "c".to_string()])
    );
    assert_eq!(
        query_class_bounded(&root, "inner", "item", "group"),
        Some(vec!["b".to_string()])
    );
    assert_eq!(
        query_class_within(&root, "outer", "item"),
        Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
    );
    assert_eq!(query_class_bounded(&root, "missing", "item", "group"), None);
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_document_mutation_by_id() {
    let mut doc = Document::new(sample_tree());

    assert_eq!(doc.add_class("menu", "open"), Ok(true));
    assert_eq!(doc.has_class("menu", "open"), Ok(true));
    assert_eq!(doc.toggle_class("menu", "open"), Ok(false));
    assert_eq!(doc.remove_class("menu", "open"), Ok(false));

    doc.set_hidden("content", true).unwrap();
    assert_eq!(doc.is_hidden("content"), Ok(true));

    doc.set_text("footer", "bye").unwrap();
    assert_eq!(doc.text_content("footer"), Ok("bye".to_string()));
}

#[test]
fn test_document_unknown_id() {
    let mut doc = Document::new(sample_tree());
    assert_eq!(
        doc.add_class("ghost", "x"),
        Err(DomError::NotFound("ghost".to_string()))
    );
    assert!(doc.attr("ghost", "data-message").is_err());
    assert_eq!(doc.attr("menu", "data-message"), Ok(None));
}

#[test]
fn test_append_child_rejects_duplicate_ids() {
    let mut doc = Document::new(sample_tree());
    let result = doc.append_child("root", Element::box_().child(Element::box_().id("trigger")));
    assert_eq!(result, Err(DomError::DuplicateId("trigger".to_string())));
    // Nothing was inserted
    assert_eq!(doc.root().child_elements().len(), 2);
}

#[test]
fn test_default_document_has_body() {
    let mut doc = Document::default();
    assert_eq!(doc.body_id(), "body");
    doc.append_child("body", Element::box_().id("x")).unwrap();
    assert!(doc.exists("x"));
}

// ============================================================================
// Outline
// ============================================================================

#[test]
fn test_outline() {
    let root = Element::box_()
        .id("body")
        .tag("body")
        .child(Element::button("One").id("t0").class("tab").class("active"))
        .child(Element::box_().id("p1").class("panel").hidden(true));

    assert_eq!(
        outline(&root),
        "body#body\n  button#t0.tab.active \"One\"\n  div#p1.panel [hidden]\n"
    );
}
