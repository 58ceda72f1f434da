//! Lengths and their resolution to user units.
//!
//! A [`LengthContext`] is anchored at one node of a [`Document`]. Absolute
//! units convert at 96 dpi, font-relative units use
//! [`DEFAULT_FONT_SIZE_PX`], and percentages resolve against the viewport
//! enclosing the anchor's parent.

use std::f32::consts::SQRT_2;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::error::{ParseError, Result};
use crate::geometry::{DEFAULT_VIEWPORT, Rect, parse_finite};
use crate::tree::{Document, NodeId};

/// Font size used for `em` and `ex` when nothing else is known.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

const DPI: f32 = 96.0;

/// Unit suffix of a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
pub enum LengthUnit {
    /// Unitless number, same as `px`.
    #[strum(serialize = "")]
    Number,
    /// `px`
    #[strum(serialize = "px")]
    Px,
    /// `pt`, 1/72 in
    #[strum(serialize = "pt")]
    Pt,
    /// `pc`, 1/6 in
    #[strum(serialize = "pc")]
    Pc,
    /// `in`
    #[strum(serialize = "in")]
    In,
    /// `cm`
    #[strum(serialize = "cm")]
    Cm,
    /// `mm`
    #[strum(serialize = "mm")]
    Mm,
    /// `em`
    #[strum(serialize = "em")]
    Em,
    /// `ex`
    #[strum(serialize = "ex")]
    Ex,
    /// `%`
    #[strum(serialize = "%")]
    Percent,
}

/// Which extent of the viewport a percentage refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMode {
    /// Horizontal: `x`, `width`, `cx`, ...
    Width,
    /// Vertical: `y`, `height`, `cy`, ...
    Height,
    /// Neither axis (e.g. `r`): the normalized diagonal.
    Other,
}

/// A number with a unit, as written in an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// The numeric part.
    pub value: f32,
    /// The unit suffix.
    pub unit: LengthUnit,
}

impl Length {
    /// `0`
    pub const ZERO: Self = Self::new(0.0, LengthUnit::Number);
    /// `100%`
    pub const FULL: Self = Self::new(100.0, LengthUnit::Percent);

    /// Create a length.
    #[must_use]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Parse `<number><unit>?`, e.g. `12`, `-1.5e2px`, `50%`, `2em`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the value is empty, the number is
    /// malformed, or the suffix is not a known unit.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let (number, unit) = text.split_at(number_prefix_len(text));
        let value = parse_finite(number)?;
        let unit = unit
            .parse::<LengthUnit>()
            .map_err(|_| ParseError::UnknownUnit(unit.to_owned()))?;
        Ok(Self::new(value, unit))
    }
}

/// Length in bytes of the leading number in `text`.
///
/// An `e` only starts an exponent when digits follow, so `2em` splits as
/// `2` + `em`.
fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };
    let sign_from = |i: usize| {
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i + 1
        } else {
            i
        }
    };

    let mut end = digits_from(sign_from(0));
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent = sign_from(end + 1);
        if bytes.get(exponent).is_some_and(u8::is_ascii_digit) {
            end = digits_from(exponent);
        }
    }
    end
}

/// Resolves lengths for one node of a document.
#[derive(Debug, Clone, Copy)]
pub struct LengthContext<'a> {
    document: &'a Document,
    anchor: NodeId,
}

impl<'a> LengthContext<'a> {
    /// A context resolving lengths declared for `anchor`.
    #[must_use]
    pub const fn new(document: &'a Document, anchor: NodeId) -> Self {
        Self { document, anchor }
    }

    /// Convert `length` to user units.
    #[must_use]
    pub fn value_for_length(&self, length: &Length, mode: LengthMode) -> f32 {
        let Length { value, unit } = *length;
        match unit {
            LengthUnit::Number | LengthUnit::Px => value,
            LengthUnit::In => value * DPI,
            LengthUnit::Cm => value * DPI / 2.54,
            LengthUnit::Mm => value * DPI / 25.4,
            LengthUnit::Pt => value * DPI / 72.0,
            LengthUnit::Pc => value * DPI / 6.0,
            LengthUnit::Em => value * DEFAULT_FONT_SIZE_PX,
            LengthUnit::Ex => value * DEFAULT_FONT_SIZE_PX / 2.0,
            LengthUnit::Percent => {
                let viewport = self.percentage_basis();
                let extent = match mode {
                    LengthMode::Width => viewport.width,
                    LengthMode::Height => viewport.height,
                    LengthMode::Other => viewport.width.hypot(viewport.height) / SQRT_2,
                };
                value * extent / 100.0
            }
        }
    }

    /// The viewport enclosing the anchor's parent. Using the parent keeps a
    /// viewport element's own `width="100%"` relative to its container.
    fn percentage_basis(&self) -> Rect {
        self.document
            .parent(self.anchor)
            .map_or(DEFAULT_VIEWPORT, |parent| {
                self.document.nearest_view_box(parent)
            })
    }
}
