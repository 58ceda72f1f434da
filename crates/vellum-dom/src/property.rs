//! Declared properties and their specificity-ordered storage.
//!
//! Every element owns a [`PropertyList`]. Presentation attributes, inline
//! `style` declarations and matched style rules all land in the same list;
//! conflicts for one [`PropertyId`] are settled by specificity, with the most
//! recent declaration winning a tie.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// The value that defers a property to the parent element.
pub const INHERIT: &str = "inherit";

/// Identifier of a presentation attribute or style property.
///
/// The string form (via `Display` / `FromStr`) is the attribute name as it
/// appears in markup. What each value means is up to the consumers of the
/// tree; the cascade treats every value as an opaque string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
pub enum PropertyId {
    /// `clip-path`
    #[strum(serialize = "clip-path")]
    ClipPath,
    /// `clip-rule`
    #[strum(serialize = "clip-rule")]
    ClipRule,
    /// `clipPathUnits`
    #[strum(serialize = "clipPathUnits")]
    ClipPathUnits,
    /// `color`
    #[strum(serialize = "color")]
    Color,
    /// `cx`
    #[strum(serialize = "cx")]
    Cx,
    /// `cy`
    #[strum(serialize = "cy")]
    Cy,
    /// `d`
    #[strum(serialize = "d")]
    D,
    /// `display`
    #[strum(serialize = "display")]
    Display,
    /// `fill`
    #[strum(serialize = "fill")]
    Fill,
    /// `fill-opacity`
    #[strum(serialize = "fill-opacity")]
    FillOpacity,
    /// `fill-rule`
    #[strum(serialize = "fill-rule")]
    FillRule,
    /// `font-size`
    #[strum(serialize = "font-size")]
    FontSize,
    /// `fx`
    #[strum(serialize = "fx")]
    Fx,
    /// `fy`
    #[strum(serialize = "fy")]
    Fy,
    /// `gradientTransform`
    #[strum(serialize = "gradientTransform")]
    GradientTransform,
    /// `gradientUnits`
    #[strum(serialize = "gradientUnits")]
    GradientUnits,
    /// `height`
    #[strum(serialize = "height")]
    Height,
    /// `href` (also accepted as `xlink:href`)
    #[strum(to_string = "href", serialize = "xlink:href")]
    Href,
    /// `id`
    #[strum(serialize = "id")]
    Id,
    /// `marker-end`
    #[strum(serialize = "marker-end")]
    MarkerEnd,
    /// `marker-mid`
    #[strum(serialize = "marker-mid")]
    MarkerMid,
    /// `marker-start`
    #[strum(serialize = "marker-start")]
    MarkerStart,
    /// `markerHeight`
    #[strum(serialize = "markerHeight")]
    MarkerHeight,
    /// `markerUnits`
    #[strum(serialize = "markerUnits")]
    MarkerUnits,
    /// `markerWidth`
    #[strum(serialize = "markerWidth")]
    MarkerWidth,
    /// `mask`
    #[strum(serialize = "mask")]
    Mask,
    /// `maskContentUnits`
    #[strum(serialize = "maskContentUnits")]
    MaskContentUnits,
    /// `maskUnits`
    #[strum(serialize = "maskUnits")]
    MaskUnits,
    /// `offset`
    #[strum(serialize = "offset")]
    Offset,
    /// `opacity`
    #[strum(serialize = "opacity")]
    Opacity,
    /// `orient`
    #[strum(serialize = "orient")]
    Orient,
    /// `overflow`
    #[strum(serialize = "overflow")]
    Overflow,
    /// `patternContentUnits`
    #[strum(serialize = "patternContentUnits")]
    PatternContentUnits,
    /// `patternTransform`
    #[strum(serialize = "patternTransform")]
    PatternTransform,
    /// `patternUnits`
    #[strum(serialize = "patternUnits")]
    PatternUnits,
    /// `points`
    #[strum(serialize = "points")]
    Points,
    /// `preserveAspectRatio`
    #[strum(serialize = "preserveAspectRatio")]
    PreserveAspectRatio,
    /// `r`
    #[strum(serialize = "r")]
    R,
    /// `refX`
    #[strum(serialize = "refX")]
    RefX,
    /// `refY`
    #[strum(serialize = "refY")]
    RefY,
    /// `rx`
    #[strum(serialize = "rx")]
    Rx,
    /// `ry`
    #[strum(serialize = "ry")]
    Ry,
    /// `solid-color`
    #[strum(serialize = "solid-color")]
    SolidColor,
    /// `solid-opacity`
    #[strum(serialize = "solid-opacity")]
    SolidOpacity,
    /// `spreadMethod`
    #[strum(serialize = "spreadMethod")]
    SpreadMethod,
    /// `stop-color`
    #[strum(serialize = "stop-color")]
    StopColor,
    /// `stop-opacity`
    #[strum(serialize = "stop-opacity")]
    StopOpacity,
    /// `stroke`
    #[strum(serialize = "stroke")]
    Stroke,
    /// `stroke-dasharray`
    #[strum(serialize = "stroke-dasharray")]
    StrokeDasharray,
    /// `stroke-dashoffset`
    #[strum(serialize = "stroke-dashoffset")]
    StrokeDashoffset,
    /// `stroke-linecap`
    #[strum(serialize = "stroke-linecap")]
    StrokeLinecap,
    /// `stroke-linejoin`
    #[strum(serialize = "stroke-linejoin")]
    StrokeLinejoin,
    /// `stroke-miterlimit`
    #[strum(serialize = "stroke-miterlimit")]
    StrokeMiterlimit,
    /// `stroke-opacity`
    #[strum(serialize = "stroke-opacity")]
    StrokeOpacity,
    /// `stroke-width`
    #[strum(serialize = "stroke-width")]
    StrokeWidth,
    /// `style`
    #[strum(serialize = "style")]
    Style,
    /// `transform`
    #[strum(serialize = "transform")]
    Transform,
    /// `viewBox`
    #[strum(serialize = "viewBox")]
    ViewBox,
    /// `visibility`
    #[strum(serialize = "visibility")]
    Visibility,
    /// `width`
    #[strum(serialize = "width")]
    Width,
    /// `x`
    #[strum(serialize = "x")]
    X,
    /// `x1`
    #[strum(serialize = "x1")]
    X1,
    /// `x2`
    #[strum(serialize = "x2")]
    X2,
    /// `y`
    #[strum(serialize = "y")]
    Y,
    /// `y1`
    #[strum(serialize = "y1")]
    Y1,
    /// `y2`
    #[strum(serialize = "y2")]
    Y2,
}

/// A single declaration: which property, its raw value, and how strongly it
/// was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// The declared property.
    pub id: PropertyId,
    /// Unparsed value text.
    pub value: String,
    /// Cascade priority; higher wins.
    pub specificity: i32,
}

impl Property {
    /// Create a declaration.
    #[must_use]
    pub fn new(id: PropertyId, value: &str, specificity: i32) -> Self {
        Self {
            id,
            value: value.to_owned(),
            specificity,
        }
    }
}

/// An element's own declarations, at most one per [`PropertyId`].
///
/// Lookup is a linear scan; an element only ever carries a handful of
/// declarations out of a small fixed vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyList {
    properties: Vec<Property>,
}

impl PropertyList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    /// The stored declaration for `id`, if any.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    /// Mutable access to the stored declaration for `id`, if any.
    pub fn get_mut(&mut self, id: PropertyId) -> Option<&mut Property> {
        self.properties.iter_mut().find(|property| property.id == id)
    }

    /// Declare `id: value` with the given specificity.
    ///
    /// A stored declaration with strictly greater specificity is kept.
    /// Otherwise the stored value and specificity are replaced, so an equal
    /// specificity lets the newer value win.
    pub fn set(&mut self, id: PropertyId, value: &str, specificity: i32) {
        let Some(property) = self.get_mut(id) else {
            self.properties.push(Property::new(id, value, specificity));
            return;
        };

        if property.specificity > specificity {
            return;
        }

        property.specificity = specificity;
        value.clone_into(&mut property.value);
    }

    /// Apply one declaration with [`set`](Self::set) semantics.
    pub fn add(&mut self, property: &Property) {
        self.set(property.id, &property.value, property.specificity);
    }

    /// Apply every declaration of `other`, in its order.
    pub fn add_list(&mut self, other: &Self) {
        for property in &other.properties {
            self.add(property);
        }
    }

    /// Number of stored declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Declarations in the order they were first stored.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Property> for PropertyList {
    fn extend<T: IntoIterator<Item = Property>>(&mut self, iter: T) {
        for property in iter {
            self.add(&property);
        }
    }
}

impl FromIterator<Property> for PropertyList {
    fn from_iter<T: IntoIterator<Item = Property>>(iter: T) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
