//! Arena-based document tree.
//!
//! Every node lives in the [`Document`]'s arena and is addressed by a
//! [`NodeId`]. A parent's child list is the owning edge; the `parent` link on
//! each node is a plain index used only for lookups (cascade walks, sibling
//! scans, viewport resolution). Dropping the document drops the whole tree.

use std::fmt;

use vellum_common::warning::warn_once;

use crate::element::ElementId;
use crate::property::{INHERIT, PropertyId, PropertyList};

/// A type-safe index into a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root element is always at index 0.
    pub const ROOT: Self = Self(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node is. The set of variants is closed.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Character data. Has no properties and never has children.
    Text(String),
    /// An element with its own declarations.
    Element(ElementData),
}

/// Element-specific data.
#[derive(Debug, Clone)]
pub struct ElementData {
    id: ElementId,
    properties: PropertyList,
}

impl ElementData {
    /// Create an element of the given kind with no declarations.
    #[must_use]
    pub const fn new(id: ElementId) -> Self {
        Self {
            id,
            properties: PropertyList::new(),
        }
    }

    /// The element's kind.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// The element's own declarations.
    #[must_use]
    pub const fn properties(&self) -> &PropertyList {
        &self.properties
    }

    /// Mutable access to the element's own declarations.
    pub const fn properties_mut(&mut self) -> &mut PropertyList {
        &mut self.properties
    }
}

/// A node slot in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// What this node is.
    #[must_use]
    pub const fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node this one is attached under, `None` for the root or a
    /// detached node.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Attached children in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A document: an arena of nodes rooted at [`NodeId::ROOT`].
///
/// Nodes are created detached with [`alloc_element`](Self::alloc_element) /
/// [`alloc_text`](Self::alloc_text) and attached with
/// [`add_child`](Self::add_child), the only way structure changes.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document whose root element has the given kind.
    #[must_use]
    pub fn new(root: ElementId) -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Element(ElementData::new(root)))],
        }
    }

    /// The root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of allocated nodes, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a document has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    /// Allocate a detached element.
    pub fn alloc_element(&mut self, id: ElementId) -> NodeId {
        self.alloc(NodeKind::Element(ElementData::new(id)))
    }

    /// Allocate a detached text node.
    pub fn alloc_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text(text.into()))
    }

    /// Allocate an element and attach it as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, id: ElementId) -> NodeId {
        let child = self.alloc_element(id);
        self.add_child(parent, child)
    }

    /// Allocate a text node and attach it as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let child = self.alloc_text(text);
        self.add_child(parent, child)
    }

    /// Attach `child` as the last child of `parent` and return `child`.
    ///
    /// A child that is already attached elsewhere is moved. Attaching the
    /// root, attaching under a text node, or under the child itself or one of
    /// its descendants would break the tree; such calls are reported and leave
    /// it unchanged.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        if self.node(child).is_none() {
            warn_once("DOM", &format!("cannot attach unknown node {child}"));
            return child;
        }
        if !self.is_element(parent) {
            warn_once(
                "DOM",
                &format!("cannot attach {child} under {parent}: not an element"),
            );
            return child;
        }
        if child == NodeId::ROOT {
            warn_once("DOM", &format!("cannot attach the root under {parent}"));
            return child;
        }
        if parent == child || self.is_descendant_of(parent, child) {
            warn_once(
                "DOM",
                &format!("cannot attach {child} under its own descendant {parent}"),
            );
            return child;
        }

        if let Some(previous) = self.nodes[child.0].parent {
            self.nodes[previous.0].children.retain(|&id| id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        child
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    /// Element children only, in document order.
    pub fn child_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.is_element(child))
    }

    /// The first element child, skipping text.
    #[must_use]
    pub fn first_child_element(&self, id: NodeId) -> Option<NodeId> {
        self.child_elements(id).next()
    }

    /// The last element child, skipping text.
    #[must_use]
    pub fn last_child_element(&self, id: NodeId) -> Option<NodeId> {
        self.children(id)
            .iter()
            .rev()
            .copied()
            .find(|&child| self.is_element(child))
    }

    /// Check if `descendant` is a descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            document: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(|n| match &n.kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        })
    }

    /// Mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id.0).and_then(|n| match &mut n.kind {
            NodeKind::Element(data) => Some(data),
            NodeKind::Text(_) => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| match &n.kind {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element(_) => None,
        })
    }

    /// Whether the node is a text node.
    #[must_use]
    pub fn is_text(&self, id: NodeId) -> bool {
        self.as_text(id).is_some()
    }

    /// Whether the node is an element.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.as_element(id).is_some()
    }

    /// The element kind, if the node is an element.
    #[must_use]
    pub fn element_id(&self, id: NodeId) -> Option<ElementId> {
        self.as_element(id).map(ElementData::id)
    }

    // ---------------------------------------------------------------------
    // Cascade
    // ---------------------------------------------------------------------

    /// Declare `property: value` on an element with the given specificity.
    pub fn set(&mut self, id: NodeId, property: PropertyId, value: &str, specificity: i32) {
        match self.as_element_mut(id) {
            Some(element) => element.properties.set(property, value, specificity),
            None => warn_once("DOM", &format!("ignoring {property} on non-element {id}")),
        }
    }

    /// Apply a batch of declarations (e.g. a matched style rule).
    pub fn add_properties(&mut self, id: NodeId, properties: &PropertyList) {
        match self.as_element_mut(id) {
            Some(element) => element.properties.add_list(properties),
            None => warn_once("DOM", &format!("ignoring declarations on non-element {id}")),
        }
    }

    /// The node's own declarations, if it is an element.
    #[must_use]
    pub fn properties(&self, id: NodeId) -> Option<&PropertyList> {
        self.as_element(id).map(ElementData::properties)
    }

    /// The node's own declared value, or `""`. Ancestors are not consulted.
    #[must_use]
    pub fn get(&self, id: NodeId, property: PropertyId) -> &str {
        self.properties(id)
            .and_then(|properties| properties.get(property))
            .map_or("", |p| p.value.as_str())
    }

    /// Whether the node declares `property` itself.
    #[must_use]
    pub fn has(&self, id: NodeId, property: PropertyId) -> bool {
        self.properties(id)
            .is_some_and(|properties| properties.get(property).is_some())
    }

    /// The cascaded value of `property`.
    ///
    /// Starting at `id` and walking up, returns the first own value that is
    /// neither empty nor `inherit`. Returns `""` when no ancestor has one.
    #[must_use]
    pub fn find(&self, id: NodeId, property: PropertyId) -> &str {
        for node in std::iter::successors(Some(id), |&node| self.parent(node)) {
            let value = self.get(node, property);
            #[cfg(feature = "cascade-trace")]
            eprintln!("[cascade] {property} at {node}: {value:?}");
            if !value.is_empty() && value != INHERIT {
                return value;
            }
        }
        ""
    }

    // ---------------------------------------------------------------------
    // Siblings
    // ---------------------------------------------------------------------

    /// The closest preceding element sibling. Text nodes are skipped.
    #[must_use]
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let mut previous = None;
        for &child in self.children(parent) {
            if self.is_text(child) {
                continue;
            }
            if child == id {
                return previous;
            }
            previous = Some(child);
        }
        None
    }

    /// The closest following element sibling. Text nodes are skipped.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let mut next = None;
        for &child in self.children(parent).iter().rev() {
            if self.is_text(child) {
                continue;
            }
            if child == id {
                return next;
            }
            next = Some(child);
        }
        None
    }

    // ---------------------------------------------------------------------
    // Cloning
    // ---------------------------------------------------------------------

    /// Copy a node into a new detached node and return its ID.
    ///
    /// Text nodes copy their payload. Elements copy their kind and
    /// declarations, and their children are cloned recursively under the
    /// copy. Returns `None` for an unknown ID.
    pub fn clone_node(&mut self, id: NodeId) -> Option<NodeId> {
        let kind = self.node(id)?.kind.clone();
        let children = self.children(id).to_vec();
        let copy = self.alloc(kind);
        for child in children {
            if let Some(child_copy) = self.clone_node(child) {
                let _ = self.add_child(copy, child_copy);
            }
        }
        Some(copy)
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    document: &'a Document,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.document.parent(id);
        Some(id)
    }
}
