//! Document tree and style cascade for the Vellum SVG pipeline.
//!
//! # Scope
//!
//! This crate implements:
//! - **Document tree** - an arena of element and text nodes with
//!   [`NodeId`] parent links and ordered child lists
//! - **Property cascade** - per-element declarations settled by specificity,
//!   with `inherit` / absent values deferring to the parent
//! - **Navigation** - element siblings that skip text nodes, ancestors
//! - **Viewport resolution** - the rectangle percentages resolve against
//! - **Layout delegation** - fan-out of a [`LayoutContext`] over children
//!
//! # Not Implemented Here
//!
//! - Markup parsing (callers build the tree with `alloc_*` and `add_child`)
//! - Meaning of individual property values
//! - Path construction, painting

/// Element kinds.
pub mod element;
/// Attribute parse errors.
pub mod error;
/// Rectangles and `viewBox` parsing.
pub mod geometry;
/// Layout pass hook.
pub mod layout;
/// Lengths and unit resolution.
pub mod length;
/// Declarations and specificity-ordered storage.
pub mod property;
/// The arena tree, cascade queries and navigation.
pub mod tree;
mod viewport;

pub use element::ElementId;
pub use error::ParseError;
pub use geometry::{DEFAULT_VIEWPORT, Rect};
pub use layout::LayoutContext;
pub use length::{DEFAULT_FONT_SIZE_PX, Length, LengthContext, LengthMode, LengthUnit};
pub use property::{INHERIT, Property, PropertyId, PropertyList};
pub use tree::{AncestorIterator, Document, ElementData, Node, NodeId, NodeKind};
