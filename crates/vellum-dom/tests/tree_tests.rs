//! Tests for tree structure: attaching, sibling navigation, cloning.

use vellum_common::warning::has_warned;
use vellum_dom::{Document, ElementId, NodeId, NodeKind, PropertyId, Rect};

// ========== add_child ==========

#[test]
fn test_add_child_sets_parent_and_appends() {
    let mut doc = Document::new(ElementId::Svg);
    let a = doc.alloc_element(ElementId::G);
    let b = doc.alloc_text("b");

    assert_eq!(doc.add_child(NodeId::ROOT, a), a);
    assert_eq!(doc.add_child(NodeId::ROOT, b), b);

    assert_eq!(doc.parent(a), Some(NodeId::ROOT));
    assert_eq!(doc.parent(b), Some(NodeId::ROOT));
    assert_eq!(doc.children(NodeId::ROOT), &[a, b]);
}

#[test]
fn test_add_child_relocates_attached_node() {
    let mut doc = Document::new(ElementId::Svg);
    let first = doc.append_element(NodeId::ROOT, ElementId::G);
    let second = doc.append_element(NodeId::ROOT, ElementId::G);
    let moved = doc.append_element(first, ElementId::Rect);

    let _ = doc.add_child(second, moved);

    assert_eq!(doc.parent(moved), Some(second));
    assert!(doc.children(first).is_empty());
    assert_eq!(doc.children(second), &[moved]);
}

#[test]
fn test_add_child_again_moves_to_end() {
    let mut doc = Document::new(ElementId::Svg);
    let a = doc.append_element(NodeId::ROOT, ElementId::G);
    let b = doc.append_element(NodeId::ROOT, ElementId::G);

    let _ = doc.add_child(NodeId::ROOT, a);

    assert_eq!(doc.children(NodeId::ROOT), &[b, a]);
}

#[test]
fn test_add_child_refuses_cycles() {
    let mut doc = Document::new(ElementId::Svg);
    let g = doc.append_element(NodeId::ROOT, ElementId::G);
    let inner = doc.append_element(g, ElementId::G);

    let _ = doc.add_child(inner, g);

    assert_eq!(doc.parent(g), Some(NodeId::ROOT));
    assert_eq!(doc.children(inner), &[] as &[NodeId]);
    assert!(has_warned("DOM", &format!("cannot attach {g} under its own descendant {inner}")));
}

#[test]
fn test_add_child_refuses_text_parent() {
    let mut doc = Document::new(ElementId::Svg);
    let text = doc.append_text(NodeId::ROOT, "t");
    let g = doc.alloc_element(ElementId::G);

    let _ = doc.add_child(text, g);

    assert_eq!(doc.parent(g), None);
    assert!(doc.children(text).is_empty());
}

#[test]
fn test_add_child_refuses_root() {
    let mut doc = Document::new(ElementId::Svg);
    doc.set(NodeId::ROOT, PropertyId::ViewBox, "0 0 10 10", 0);
    let loose = doc.alloc_element(ElementId::G);
    doc.set(loose, PropertyId::Fill, "red", 0);

    let _ = doc.add_child(loose, NodeId::ROOT);

    assert_eq!(doc.parent(NodeId::ROOT), None);
    assert!(doc.children(loose).is_empty());
    assert_eq!(doc.find(NodeId::ROOT, PropertyId::Fill), "");
    assert!(has_warned("DOM", &format!("cannot attach the root under {loose}")));

    // Children of the root still see its viewBox.
    let rect = doc.append_element(NodeId::ROOT, ElementId::Rect);
    assert_eq!(doc.nearest_view_box(rect), Rect::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_add_child_unknown_node_names_the_child() {
    let mut doc = Document::new(ElementId::Svg);
    let missing = NodeId(42);

    let _ = doc.add_child(NodeId::ROOT, missing);

    assert!(doc.children(NodeId::ROOT).is_empty());
    assert!(has_warned("DOM", &format!("cannot attach unknown node {missing}")));
    assert!(!has_warned(
        "DOM",
        &format!("cannot attach {missing} under {}: not an element", NodeId::ROOT)
    ));
}

// ========== siblings ==========

/// `[Text("a"), X, Text("b"), Y]` under the root.
fn mixed_children() -> (Document, NodeId, NodeId) {
    let mut doc = Document::new(ElementId::Svg);
    let _ = doc.append_text(NodeId::ROOT, "a");
    let x = doc.append_element(NodeId::ROOT, ElementId::Rect);
    let _ = doc.append_text(NodeId::ROOT, "b");
    let y = doc.append_element(NodeId::ROOT, ElementId::Circle);
    (doc, x, y)
}

#[test]
fn test_siblings_skip_text() {
    let (doc, x, y) = mixed_children();

    assert_eq!(doc.next_sibling(x), Some(y));
    assert_eq!(doc.previous_sibling(y), Some(x));
    assert_eq!(doc.previous_sibling(x), None);
    assert_eq!(doc.next_sibling(y), None);
}

#[test]
fn test_siblings_of_root_are_none() {
    let doc = Document::new(ElementId::Svg);

    assert_eq!(doc.previous_sibling(NodeId::ROOT), None);
    assert_eq!(doc.next_sibling(NodeId::ROOT), None);
}

#[test]
fn test_siblings_of_three() {
    let mut doc = Document::new(ElementId::Svg);
    let a = doc.append_element(NodeId::ROOT, ElementId::Rect);
    let b = doc.append_element(NodeId::ROOT, ElementId::Rect);
    let c = doc.append_element(NodeId::ROOT, ElementId::Rect);

    assert_eq!(doc.previous_sibling(b), Some(a));
    assert_eq!(doc.next_sibling(b), Some(c));
    assert_eq!(doc.previous_sibling(c), Some(b));
    assert_eq!(doc.next_sibling(a), Some(b));
}

// ========== clone_node ==========

#[test]
fn test_clone_text_is_detached_copy() {
    let mut doc = Document::new(ElementId::Svg);
    let text = doc.append_text(NodeId::ROOT, "hello");

    let copy = doc.clone_node(text).unwrap();

    assert_ne!(copy, text);
    assert_eq!(doc.as_text(copy), Some("hello"));
    assert_eq!(doc.parent(copy), None);
    assert_eq!(doc.children(NodeId::ROOT), &[text]);
}

#[test]
fn test_clone_element_is_deep() {
    let mut doc = Document::new(ElementId::Svg);
    let g = doc.append_element(NodeId::ROOT, ElementId::G);
    doc.set(g, PropertyId::Fill, "red", 3);
    let rect = doc.append_element(g, ElementId::Rect);
    let _ = doc.append_text(g, "caption");

    let copy = doc.clone_node(g).unwrap();

    assert_eq!(doc.parent(copy), None);
    assert_eq!(doc.element_id(copy), Some(ElementId::G));
    assert_eq!(doc.get(copy, PropertyId::Fill), "red");

    let children = doc.children(copy).to_vec();
    assert_eq!(children.len(), 2);
    assert_ne!(children[0], rect);
    assert_eq!(doc.element_id(children[0]), Some(ElementId::Rect));
    assert_eq!(doc.as_text(children[1]), Some("caption"));
    assert!(children.iter().all(|&child| doc.parent(child) == Some(copy)));

    // Changing the copy leaves the original alone.
    doc.set(copy, PropertyId::Fill, "blue", 3);
    assert_eq!(doc.get(g, PropertyId::Fill), "red");
}

#[test]
fn test_clone_then_attach() {
    let mut doc = Document::new(ElementId::Svg);
    let text = doc.append_text(NodeId::ROOT, "x");
    let copy = doc.clone_node(text).unwrap();

    let _ = doc.add_child(NodeId::ROOT, copy);

    assert_eq!(doc.children(NodeId::ROOT), &[text, copy]);
    assert!(matches!(doc.node(copy).map(|n| n.kind()), Some(NodeKind::Text(t)) if t == "x"));
}

#[test]
fn test_clone_unknown_id() {
    let mut doc = Document::new(ElementId::Svg);
    assert_eq!(doc.clone_node(NodeId(99)), None);
}
