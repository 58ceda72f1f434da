//! Rectangles for viewports and view boxes.

use serde::Serialize;

use crate::error::{ParseError, Result};

/// Canvas used when nothing in the tree sizes the document.
pub const DEFAULT_VIEWPORT: Rect = Rect::new(0.0, 0.0, 512.0, 512.0);

/// An axis-aligned rectangle in user units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle covers no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Parse a `viewBox` value: `min-x min-y width height`, separated by
    /// whitespace and/or commas.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the value is empty, does not have four
    /// numeric components, or declares a negative width or height.
    pub fn parse_view_box(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            return Err(ParseError::Empty);
        }
        let &[x, y, width, height] = parts.as_slice() else {
            return Err(ParseError::ViewBoxArity(parts.len()));
        };

        let rect = Self::new(
            parse_finite(x)?,
            parse_finite(y)?,
            parse_finite(width)?,
            parse_finite(height)?,
        );
        if rect.width < 0.0 || rect.height < 0.0 {
            return Err(ParseError::NegativeViewBox {
                width: rect.width,
                height: rect.height,
            });
        }
        Ok(rect)
    }
}

/// Parse a plain number, rejecting `inf` and `NaN`.
pub(crate) fn parse_finite(text: &str) -> Result<f32> {
    text.parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber(text.to_owned()))
}
