//! Handing the tree to a layout pass.
//!
//! The tree does no layout itself. A pass implements [`LayoutContext`] and
//! receives each element it reaches; it decides whether to descend by calling
//! [`Document::layout_children`] again.

use crate::tree::{Document, NodeId};

/// A layout pass over a document.
pub trait LayoutContext {
    /// Where the pass collects results for the subtree being laid out.
    type Container;

    /// Lay out one element into `container`.
    fn layout_element(
        &mut self,
        document: &Document,
        element: NodeId,
        container: &mut Self::Container,
    );
}

impl Document {
    /// Lay out a single node. Text nodes do nothing.
    pub fn layout<C>(&self, id: NodeId, context: &mut C, container: &mut C::Container)
    where
        C: LayoutContext + ?Sized,
    {
        if self.is_element(id) {
            context.layout_element(self, id, container);
        }
    }

    /// Lay out every child of `id` in order.
    pub fn layout_children<C>(&self, id: NodeId, context: &mut C, container: &mut C::Container)
    where
        C: LayoutContext + ?Sized,
    {
        for &child in self.children(id) {
            self.layout(child, context, container);
        }
    }
}
