//! Plain-text dump of an element tree.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Render `root` as one line per element, indented two spaces per level:
///
/// ```text
/// body#body
///   div#tabs.tabs
///     button#t0.tab.active "One"
///     div#p1.panel [hidden]
/// ```
pub fn outline(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    let _ = write!(out, "{:indent$}{}#{}", "", element.tag, element.id, indent = depth * 2);
    for class in &element.classes {
        let _ = write!(out, ".{class}");
    }
    if element.hidden {
        out.push_str(" [hidden]");
    }
    match &element.content {
        Content::Text(text) => {
            let _ = writeln!(out, " {text:?}");
        }
        Content::None => out.push('\n'),
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                write_element(out, child, depth + 1);
            }
        }
    }
}
