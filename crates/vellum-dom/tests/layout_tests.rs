//! Tests for handing children to a layout pass.

use vellum_dom::{Document, ElementId, LayoutContext, NodeId, PropertyId};

/// Records every element it is given and descends into groups.
struct Recorder {
    depth: usize,
}

impl LayoutContext for Recorder {
    type Container = Vec<(usize, ElementId)>;

    fn layout_element(
        &mut self,
        document: &Document,
        element: NodeId,
        container: &mut Self::Container,
    ) {
        if let Some(kind) = document.element_id(element) {
            container.push((self.depth, kind));
        }
        if document.element_id(element) == Some(ElementId::G) {
            self.depth += 1;
            document.layout_children(element, self, container);
            self.depth -= 1;
        }
    }
}

#[test]
fn test_layout_children_in_order_skipping_text() {
    let mut doc = Document::new(ElementId::Svg);
    let _ = doc.append_element(NodeId::ROOT, ElementId::Rect);
    let _ = doc.append_text(NodeId::ROOT, "ignored");
    let g = doc.append_element(NodeId::ROOT, ElementId::G);
    let _ = doc.append_element(g, ElementId::Circle);
    let _ = doc.append_element(NodeId::ROOT, ElementId::Path);

    let mut recorder = Recorder { depth: 0 };
    let mut out = Vec::new();
    doc.layout_children(NodeId::ROOT, &mut recorder, &mut out);

    assert_eq!(
        out,
        vec![
            (0, ElementId::Rect),
            (0, ElementId::G),
            (1, ElementId::Circle),
            (0, ElementId::Path),
        ]
    );
}

#[test]
fn test_layout_does_not_filter_children() {
    let mut doc = Document::new(ElementId::Svg);
    let hidden = doc.append_element(NodeId::ROOT, ElementId::Rect);
    doc.set(hidden, PropertyId::Display, "none", 0);

    let mut recorder = Recorder { depth: 0 };
    let mut out = Vec::new();
    doc.layout_children(NodeId::ROOT, &mut recorder, &mut out);

    // Whether `display: none` matters is the pass's decision.
    assert_eq!(out, vec![(0, ElementId::Rect)]);
}

#[test]
fn test_layout_text_node_is_noop() {
    let mut doc = Document::new(ElementId::Svg);
    let text = doc.append_text(NodeId::ROOT, "t");

    let mut recorder = Recorder { depth: 0 };
    let mut out = Vec::new();
    doc.layout(text, &mut recorder, &mut out);

    assert!(out.is_empty());
}
