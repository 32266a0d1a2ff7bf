use ninja_ui::prelude::*;

fn doc_with(target: Element) -> Document {
    let mut doc = Document::default();
    doc.append_child("body", target).unwrap();
    doc
}

#[test]
fn test_caption_read_from_attribute() {
    let doc = doc_with(Element::text("hover me").id("target").attr("data-message", "I'm a tooltip!"));
    let tooltip = Tooltip::new(&doc, "target", &UiConfig::default()).unwrap();
    assert_eq!(tooltip.caption(), "I'm a tooltip!");
    assert_eq!(tooltip.target(), "target");
}

#[test]
fn test_missing_attribute_gives_empty_caption() {
    let mut doc = doc_with(Element::text("hover me").id("target"));
    let mut tooltip = Tooltip::new(&doc, "target", &UiConfig::default()).unwrap();
    assert_eq!(tooltip.caption(), "");

    tooltip.init(&mut doc).unwrap();
    assert_eq!(doc.text_content(tooltip.caption_id()), Ok(String::new()));
}

#[test]
fn test_missing_target() {
    let doc = Document::default();
    let err = Tooltip::new(&doc, "ghost", &UiConfig::default()).unwrap_err();
    assert_eq!(
        err,
        WidgetError::Config(ConfigError::MissingElement {
            role: "tooltip target",
            id: "ghost".to_string(),
        })
    );
}

#[test]
fn test_caption_is_read_once() {
    let mut doc = doc_with(Element::text("hover me").id("target").attr("data-message", "first"));
    let mut tooltip = Tooltip::new(&doc, "target", &UiConfig::default()).unwrap();

    doc.element_mut("target")
        .unwrap()
        .attributes
        .insert("data-message".to_string(), "second".to_string());
    tooltip.init(&mut doc).unwrap();

    assert_eq!(tooltip.caption(), "first");
    assert_eq!(doc.text_content(tooltip.caption_id()), Ok("first".to_string()));
}

#[test]
fn test_init_appends_caption_and_keeps_label() {
    let mut doc = doc_with(Element::text("hover me").id("target").attr("data-message", "tip"));
    let mut tooltip = Tooltip::new(&doc, "target", &UiConfig::default()).unwrap();
    tooltip.init(&mut doc).unwrap();

    let caption = tooltip.caption_id();
    assert_eq!(doc.has_class(caption, "tip"), Ok(true));
    assert_eq!(doc.text_content("target"), Ok("hover metip".to_string()));
    assert!(!tooltip.is_showing(&doc));
}

#[test]
fn test_hover_toggles_caption() {
    let mut doc = doc_with(Element::text("hover me").id("target").attr("data-message", "tip"));
    let mut tooltip = Tooltip::new(&doc, "target", &UiConfig::default()).unwrap();
    tooltip.init(&mut doc).unwrap();

    doc.dispatch(Event::pointer_enter("target")).unwrap();
    assert!(tooltip.is_showing(&doc));

    doc.dispatch(Event::pointer_leave("target")).unwrap();
    assert!(!tooltip.is_showing(&doc));
}

#[test]
fn test_hover_after_caption_removed_is_harmless() {
    let mut doc = doc_with(Element::text("hover me").id("target").attr("data-message", "tip"));
    let mut tooltip = Tooltip::new(&doc, "target", &UiConfig::default()).unwrap();
    tooltip.init(&mut doc).unwrap();

    // Replacing the label drops the caption child
    doc.set_text("target", "relabelled").unwrap();
    assert!(!doc.exists(tooltip.caption_id()));

    assert_eq!(doc.dispatch(Event::pointer_enter("target")), Ok(1));
    assert_eq!(doc.dispatch(Event::pointer_leave("target")), Ok(1));
    assert!(!tooltip.is_showing(&doc));
    assert_eq!(doc.text_content("target"), Ok("relabelled".to_string()));
}

#[test]
fn test_custom_attribute() {
    let doc = doc_with(Element::box_().id("target").attr("title", "custom"));
    let config = UiConfig::default().tooltip_attribute("title");
    let tooltip = Tooltip::new(&doc, "target", &config).unwrap();
    assert_eq!(tooltip.caption(), "custom");
}

#[test]
fn test_init_twice() {
    let mut doc = doc_with(Element::box_().id("target"));
    let mut tooltip = Tooltip::new(&doc, "target", &UiConfig::default()).unwrap();
    tooltip.init(&mut doc).unwrap();
    assert!(matches!(
        tooltip.init(&mut doc),
        Err(WidgetError::AlreadyInitialized { .. })
    ));
    assert_eq!(doc.listener_count(), 2);
}
