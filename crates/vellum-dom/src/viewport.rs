//! Nearest viewport resolution.

use vellum_common::warning::warn_once;

use crate::geometry::{DEFAULT_VIEWPORT, Rect};
use crate::length::{Length, LengthContext, LengthMode};
use crate::property::PropertyId;
use crate::tree::{Document, ElementData, NodeId};

impl Document {
    /// The rectangle percentages on `id` resolve against.
    ///
    /// Walks up to the closest ancestor that establishes a viewport. Its
    /// declared `viewBox` wins; otherwise the rectangle is built from its
    /// `x`, `y`, `width` and `height`, resolved for the child on the path.
    /// A node with no such ancestor gets [`DEFAULT_VIEWPORT`].
    ///
    /// Only direct declarations are consulted; nothing here inherits.
    #[must_use]
    pub fn nearest_view_box(&self, id: NodeId) -> Rect {
        let mut node = id;
        loop {
            let Some(parent) = self.parent(node) else {
                return DEFAULT_VIEWPORT;
            };
            if let Some(element) = self
                .as_element(parent)
                .filter(|element| element.id().establishes_viewport())
            {
                return self.viewport_of(element, node);
            }
            node = parent;
        }
    }

    fn viewport_of(&self, element: &ElementData, child: NodeId) -> Rect {
        if let Some(view_box) = element.properties().get(PropertyId::ViewBox) {
            match Rect::parse_view_box(&view_box.value) {
                Ok(rect) => return rect,
                Err(err) => warn_once(
                    "DOM",
                    &format!("ignoring viewBox '{}': {err}", view_box.value),
                ),
            }
        }

        let context = LengthContext::new(self, child);
        let resolve = |property, fallback, mode| {
            context.value_for_length(&declared_length(element, property, fallback), mode)
        };
        Rect::new(
            resolve(PropertyId::X, Length::ZERO, LengthMode::Width),
            resolve(PropertyId::Y, Length::ZERO, LengthMode::Height),
            resolve(PropertyId::Width, Length::FULL, LengthMode::Width),
            resolve(PropertyId::Height, Length::FULL, LengthMode::Height),
        )
    }
}

fn declared_length(element: &ElementData, property: PropertyId, fallback: Length) -> Length {
    let Some(declared) = element.properties().get(property) else {
        return fallback;
    };
    Length::parse(&declared.value).unwrap_or_else(|err| {
        warn_once(
            "DOM",
            &format!("ignoring {property}='{}': {err}", declared.value),
        );
        fallback
    })
}
