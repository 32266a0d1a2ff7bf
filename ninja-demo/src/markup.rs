//! The demo page markup.

use ninjadom::{Document, DomError, Element};

/// ID of the button that shows the snackbar.
pub const SNACKBAR_BUTTON: &str = "button";

/// Build the demo page: a tooltip, two dropdowns, a tab group and a button.
pub fn demo_page() -> Result<Document, DomError> {
    let mut doc = Document::default();

    doc.append_child(
        "body",
        Element::text("hover me")
            .id("tooltip")
            .class("tooltip")
            .attr("data-message", "I'm a tooltip!!"),
    )?;

    for (id, label, items) in [
        ("dropdown-1", "menu one", ["first", "second"]),
        ("dropdown-2", "menu two", ["third", "fourth"]),
    ] {
        let menu = Element::box_()
            .id(format!("{id}-menu"))
            .class("content")
            .children(items.iter().map(|item| Element::text(*item)));
        doc.append_child(
            "body",
            Element::box_()
                .id(id)
                .class("dropdown")
                .child(Element::button(label).id(format!("{id}-trigger")).class("trigger"))
                .child(menu),
        )?;
    }

    let mut tabs = Element::box_().id("tabs").class("tabs");
    for (index, title) in ["Home", "About", "Contact"].iter().enumerate() {
        tabs = tabs.child(Element::button(*title).id(format!("tab-{index}")).class("tab"));
    }
    for (index, body) in [
        "Welcome to the home tab",
        "All about the widgets",
        "Get in touch",
    ]
    .iter()
    .enumerate()
    {
        tabs = tabs.child(Element::text(*body).id(format!("panel-{index}")).class("panel"));
    }
    doc.append_child("body", tabs)?;

    doc.append_child("body", Element::button("click me").id(SNACKBAR_BUTTON))?;

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninja_ui::prelude::*;

    #[test]
    fn test_demo_page_wires_every_widget() {
        let page = Page::setup(demo_page().unwrap(), UiConfig::default()).unwrap();
        assert_eq!(page.tooltips().len(), 1);
        assert_eq!(page.dropdowns().len(), 2);
        assert_eq!(page.tabs_for("tabs").map(Tabs::len), Some(3));
    }
}
