//! Element kinds.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// The tag of an element, fixed when the element is created.
///
/// Tags the tree does not know about parse as [`ElementId::Unknown`] via
/// [`ElementId::from_tag`]; such elements still take part in the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
pub enum ElementId {
    /// Any tag without a dedicated kind.
    #[strum(serialize = "unknown")]
    Unknown,
    /// `<circle>`
    #[strum(serialize = "circle")]
    Circle,
    /// `<clipPath>`
    #[strum(serialize = "clipPath")]
    ClipPath,
    /// `<defs>`
    #[strum(serialize = "defs")]
    Defs,
    /// `<ellipse>`
    #[strum(serialize = "ellipse")]
    Ellipse,
    /// `<g>`
    #[strum(serialize = "g")]
    G,
    /// `<line>`
    #[strum(serialize = "line")]
    Line,
    /// `<linearGradient>`
    #[strum(serialize = "linearGradient")]
    LinearGradient,
    /// `<marker>`
    #[strum(serialize = "marker")]
    Marker,
    /// `<mask>`
    #[strum(serialize = "mask")]
    Mask,
    /// `<path>`
    #[strum(serialize = "path")]
    Path,
    /// `<pattern>`
    #[strum(serialize = "pattern")]
    Pattern,
    /// `<polygon>`
    #[strum(serialize = "polygon")]
    Polygon,
    /// `<polyline>`
    #[strum(serialize = "polyline")]
    Polyline,
    /// `<radialGradient>`
    #[strum(serialize = "radialGradient")]
    RadialGradient,
    /// `<rect>`
    #[strum(serialize = "rect")]
    Rect,
    /// `<solidColor>`
    #[strum(serialize = "solidColor")]
    SolidColor,
    /// `<stop>`
    #[strum(serialize = "stop")]
    Stop,
    /// `<style>`
    #[strum(serialize = "style")]
    Style,
    /// `<svg>`, the only kind that establishes a viewport.
    #[strum(serialize = "svg")]
    Svg,
    /// `<symbol>`
    #[strum(serialize = "symbol")]
    Symbol,
    /// `<use>`
    #[strum(serialize = "use")]
    Use,
}

impl ElementId {
    /// Map a tag name to its kind, falling back to [`ElementId::Unknown`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Unknown)
    }

    /// Whether children of this element resolve lengths against its viewport.
    #[must_use]
    pub const fn establishes_viewport(self) -> bool {
        matches!(self, Self::Svg)
    }
}
