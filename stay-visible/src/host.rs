use alloc::vec::Vec;

use crate::{
    BoundingBox, MutationRecord, ObserveError, ObserveOptions, Overflow, ScrollError,
    ScrollMetrics, ScrollToOptions,
};

/// The document a tracked element lives in.
///
/// This is the only seam between the engine and a UI platform. Methods take `&self`: hosts
/// are single-threaded and use interior mutability where a call changes state (`scroll_to`,
/// `observe`).
pub trait Host {
    /// A borrowed handle to an element. Cloning must not create or move the element.
    type Node: Clone + PartialEq;
    type Observer: MutationObserver;

    /// The parent of `node`, or `None` when there is no parent or it is not an element.
    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The root scrolling element (aka `document.documentElement`).
    fn document_element(&self) -> Option<Self::Node>;

    /// Whether `node` is still attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    fn bounding_client_rect(&self, node: &Self::Node) -> BoundingBox;

    /// Height of the layout viewport (aka `window.innerHeight`).
    fn viewport_height(&self) -> f64;

    fn scroll_metrics(&self, node: &Self::Node) -> ScrollMetrics;

    fn computed_overflow(&self, node: &Self::Node) -> Overflow;

    fn scroll_to(&self, node: &Self::Node, options: ScrollToOptions) -> Result<(), ScrollError>;

    /// Starts observing `node` for the mutation kinds enabled in `options`.
    ///
    /// Batches are handed back to the engine by the host's event loop; the returned observer is
    /// only used to stop delivery.
    fn observe(
        &self,
        node: &Self::Node,
        options: ObserveOptions,
    ) -> Result<Self::Observer, ObserveError>;
}

/// A live platform observer.
pub trait MutationObserver {
    /// Stops delivery. Must be idempotent.
    fn disconnect(&mut self);

    /// Drains records that were queued but not yet delivered.
    fn take_records(&mut self) -> Vec<MutationRecord> {
        Vec::new()
    }
}
