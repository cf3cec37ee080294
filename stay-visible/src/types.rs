use core::str::FromStr;

use crate::ParseOverflowError;

/// The viewport edge the tracked element is kept away from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Edge {
    Top,
    Bottom,
}

/// An element's border box in viewport coordinates (aka `getBoundingClientRect()`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl BoundingBox {
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// A box spanning `top..bottom` with zero width.
    pub fn vertical(top: f64, bottom: f64) -> Self {
        Self::new(top, bottom, 0.0, 0.0)
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Scroll geometry of a candidate ancestor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    /// Whether the content overflows the box on either axis.
    pub fn has_scrollable_space(&self) -> bool {
        self.client_height < self.scroll_height || self.client_width < self.scroll_width
    }
}

/// The computed `overflow` of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    fn parse_keyword(s: &str) -> Result<Self, ParseOverflowError> {
        const KEYWORDS: [(&str, Overflow); 5] = [
            ("visible", Overflow::Visible),
            ("hidden", Overflow::Hidden),
            ("clip", Overflow::Clip),
            ("scroll", Overflow::Scroll),
            ("auto", Overflow::Auto),
        ];
        KEYWORDS
            .iter()
            .find(|(kw, _)| kw.eq_ignore_ascii_case(s))
            .map(|&(_, v)| v)
            .ok_or(ParseOverflowError)
    }
}

/// Parses a computed `overflow` value.
///
/// The two-value shorthand (`overflow-x overflow-y`) only counts as `Visible` when both axes
/// are visible; otherwise the first non-visible axis wins.
impl FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_ascii_whitespace();
        let first = Self::parse_keyword(parts.next().ok_or(ParseOverflowError)?)?;
        let Some(second) = parts.next() else {
            return Ok(first);
        };
        let second = Self::parse_keyword(second)?;
        if parts.next().is_some() {
            return Err(ParseOverflowError);
        }
        Ok(if first.is_visible() { second } else { first })
    }
}

/// How the host should animate a scroll command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
    Auto,
}

/// Arguments for [`crate::Host::scroll_to`] (aka DOM `ScrollToOptions`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Where a correction should scroll to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollTarget {
    /// Added to the ancestor's current `scroll_top`.
    Relative(f64),
    /// Used as the new `scroll_top` as is.
    Absolute(f64),
}

/// A pending visibility correction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollIntent {
    pub edge: Edge,
    pub target: ScrollTarget,
}

impl ScrollIntent {
    /// Resolves the intent against the ancestor's current scroll position.
    ///
    /// The result is not clamped to the content bounds; hosts clamp in `scroll_to`.
    pub fn resolve(&self, scroll_top: f64) -> f64 {
        match self.target {
            ScrollTarget::Relative(delta) => scroll_top + delta,
            ScrollTarget::Absolute(top) => top,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MutationKind {
    ChildList,
    CharacterData,
    Attributes,
}

/// One raw record of a mutation batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationRecord {
    pub kind: MutationKind,
}

impl MutationRecord {
    pub fn new(kind: MutationKind) -> Self {
        Self { kind }
    }

    pub fn child_list() -> Self {
        Self::new(MutationKind::ChildList)
    }

    pub fn character_data() -> Self {
        Self::new(MutationKind::CharacterData)
    }

    pub fn attributes() -> Self {
        Self::new(MutationKind::Attributes)
    }
}
