use crate::{
    Host, ScrollError, ScrollIntent, ScrollToOptions, TrackConfig, evaluate,
    find_scrollable_parent,
};

/// Why a reconciliation tick did nothing.
///
/// Both conditions can clear up on a later tick, so they are outcomes rather than errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The tracked node is no longer part of the document.
    NodeDetached,
    /// Neither a pinned ancestor nor a document root was available.
    NoScrollableAncestor,
}

/// The result of one reconciliation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reconcile {
    Skipped(SkipReason),
    /// The tracked node is inside the safe zone; nothing was scrolled.
    InBounds,
    /// A scroll command to `target` was issued.
    Scrolled { intent: ScrollIntent, target: f64 },
    /// The host refused the scroll command. Not retried.
    ScrollFailed {
        intent: ScrollIntent,
        target: f64,
        error: ScrollError,
    },
}

impl Reconcile {
    pub fn scrolled_to(&self) -> Option<f64> {
        match self {
            Self::Scrolled { target, .. } => Some(*target),
            _ => None,
        }
    }
}

/// Re-checks a tracked node against its edge and issues the correcting scroll.
///
/// Every tick recomputes geometry from the host, so ticks without a net layout change do not
/// issue further scroll commands once the node is back inside the safe zone.
#[derive(Clone, Debug)]
pub struct Reconciler<N> {
    config: TrackConfig<N>,
}

impl<N: Clone + PartialEq> Reconciler<N> {
    pub fn new(config: TrackConfig<N>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrackConfig<N> {
        &self.config
    }

    pub fn into_config(self) -> TrackConfig<N> {
        self.config
    }

    /// The ancestor that receives scroll commands for `node` right now.
    pub fn scrollable_for<H: Host<Node = N>>(&self, host: &H, node: &N) -> Option<N> {
        match &self.config.scrollable {
            Some(pinned) => Some(pinned.clone()),
            None => find_scrollable_parent(host, node),
        }
    }

    pub fn reconcile<H: Host<Node = N>>(&self, host: &H, node: &N) -> Reconcile {
        if !host.is_connected(node) {
            svtrace!("Reconciler::reconcile: tracked node detached");
            return Reconcile::Skipped(SkipReason::NodeDetached);
        }

        let bbox = host.bounding_client_rect(node);
        let viewport_height = host.viewport_height();

        let Some(scrollable) = self.scrollable_for(host, node) else {
            svtrace!("Reconciler::reconcile: no scrollable ancestor");
            return Reconcile::Skipped(SkipReason::NoScrollableAncestor);
        };

        let Some(intent) = evaluate(self.config.side, self.config.offset, bbox, viewport_height)
        else {
            svtrace!(
                top = bbox.top,
                bottom = bbox.bottom,
                viewport_height,
                "Reconciler::reconcile: in bounds"
            );
            return Reconcile::InBounds;
        };

        let scroll_top = host.scroll_metrics(&scrollable).scroll_top;
        let target = intent.resolve(scroll_top);
        let options = ScrollToOptions {
            top: target,
            behavior: self.config.behavior,
        };
        match host.scroll_to(&scrollable, options) {
            Ok(()) => {
                svdebug!(?intent, scroll_top, target, "Reconciler::reconcile: scrolled");
                Reconcile::Scrolled { intent, target }
            }
            Err(error) => {
                svwarn!(?intent, target, %error, "Reconciler::reconcile: scroll command failed");
                Reconcile::ScrollFailed {
                    intent,
                    target,
                    error,
                }
            }
        }
    }
}
