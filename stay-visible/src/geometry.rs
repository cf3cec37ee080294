use crate::{BoundingBox, Edge, ScrollIntent, ScrollTarget};

/// Decides whether `bbox` crossed the safe zone of `edge`.
///
/// - `Bottom`: violated when `bbox.bottom > viewport_height - offset`. The intent is relative:
///   scroll to the ancestor's current `scroll_top + bbox.bottom`.
/// - `Top`: violated when `bbox.top < offset`. The intent is absolute: scroll to `bbox.top`.
///
/// The two edges intentionally resolve differently; callers observe both behaviors.
pub fn evaluate(
    edge: Edge,
    offset: f64,
    bbox: BoundingBox,
    viewport_height: f64,
) -> Option<ScrollIntent> {
    let target = match edge {
        Edge::Bottom if bbox.bottom > viewport_height - offset => {
            ScrollTarget::Relative(bbox.bottom)
        }
        Edge::Top if bbox.top < offset => ScrollTarget::Absolute(bbox.top),
        _ => return None,
    };
    Some(ScrollIntent { edge, target })
}

/// Like [`evaluate`], but resolves the intent against `scroll_top`.
pub fn evaluate_target(
    edge: Edge,
    offset: f64,
    bbox: BoundingBox,
    viewport_height: f64,
    scroll_top: f64,
) -> Option<f64> {
    evaluate(edge, offset, bbox, viewport_height).map(|intent| intent.resolve(scroll_top))
}
