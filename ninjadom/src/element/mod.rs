mod content;
mod node;

pub use content::Content;
pub use node::{generate_id, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to (and including) the element with `id`.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}

/// Whether `descendant` is `ancestor` or lies somewhere beneath it.
pub fn contains(root: &Element, ancestor: &str, descendant: &str) -> bool {
    find_element(root, ancestor).is_some_and(|scope| find_element(scope, descendant).is_some())
}

/// IDs of all elements carrying `class`, in document order.
pub fn query_class(root: &Element, class: &str) -> Vec<String> {
    let mut found = Vec::new();
    collect_class(root, class, None, &mut found);
    found
}

/// Like [`query_class`], limited to the subtree rooted at `scope`.
///
/// The scope element itself is not a candidate. Returns None if `scope`
/// does not exist.
pub fn query_class_within(root: &Element, scope: &str, class: &str) -> Option<Vec<String>> {
    collect_within(root, scope, class, None)
}

/// Like [`query_class_within`], but descendants carrying `boundary` are
/// skipped along with their whole subtree.
///
/// Keeps a container from claiming the parts of another container of the
/// same kind nested inside it.
pub fn query_class_bounded(
    root: &Element,
    scope: &str,
    class: &str,
    boundary: &str,
) -> Option<Vec<String>> {
    collect_within(root, scope, class, Some(boundary))
}

fn collect_within(
    root: &Element,
    scope: &str,
    class: &str,
    boundary: Option<&str>,
) -> Option<Vec<String>> {
    let scope = find_element(root, scope)?;
    let mut found = Vec::new();
    for child in scope.child_elements() {
        collect_class(child, class, boundary, &mut found);
    }
    Some(found)
}

fn collect_class(element: &Element, class: &str, boundary: Option<&str>, found: &mut Vec<String>) {
    if boundary.is_some_and(|boundary| element.has_class(boundary)) {
        return;
    }
    if element.has_class(class) {
        found.push(element.id.clone());
    }
    for child in element.child_elements() {
        collect_class(child, class, boundary, found);
    }
}
