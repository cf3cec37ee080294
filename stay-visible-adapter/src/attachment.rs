use core::fmt;
use core::mem;

use stay_visible::{
    Host, MutationObserver, MutationRecord, Reconcile, Reconciler, Throttle, TrackConfig,
};

use crate::{AttachError, MutationPump, PumpStats};

/// Whether an [`Attachment`] is still tracking its node.
///
/// Once `Detached`, every entry point of the attachment is a no-op.
pub enum AttachmentState<N, O: MutationObserver> {
    Attached { node: N, pump: MutationPump<O> },
    Detached,
}

impl<N, O: MutationObserver> AttachmentState<N, O> {
    pub fn is_attached(&self) -> bool {
        matches!(self, Self::Attached { .. })
    }
}

impl<N: fmt::Debug, O: MutationObserver> fmt::Debug for AttachmentState<N, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attached { node, pump } => f
                .debug_struct("Attached")
                .field("node", node)
                .field("stats", &pump.stats())
                .finish_non_exhaustive(),
            Self::Detached => f.write_str("Detached"),
        }
    }
}

/// Keeps one node visible while its subtree mutates.
///
/// Created by [`attach`] when the host mounts the node. The host forwards every observer
/// batch to [`Attachment::on_mutations`], calls [`Attachment::poll`] from a timer when trailing
/// ticks are enabled, and calls [`Attachment::detach`] on unmount. Dropping the attachment
/// detaches it as well.
pub struct Attachment<H: Host> {
    reconciler: Reconciler<H::Node>,
    state: AttachmentState<H::Node, H::Observer>,
    last_outcome: Option<Reconcile>,
}

/// Starts tracking `node`.
///
/// Fails with [`AttachError::NodeUnavailable`] when `node` is missing or not connected to the
/// document, and with the matching variant when the config is invalid or the host cannot
/// observe the node.
pub fn attach<H: Host>(
    host: &H,
    node: Option<H::Node>,
    config: TrackConfig<H::Node>,
) -> Result<Attachment<H>, AttachError> {
    let Some(node) = node.filter(|node| host.is_connected(node)) else {
        svwarn!("attach: tracked node is not mounted");
        return Err(AttachError::NodeUnavailable);
    };
    config.validate()?;

    let throttle = Throttle::new(config.throttle_ms).with_trailing(config.trailing);
    let pump = MutationPump::subscribe(host, &node, config.observe, throttle)?;
    svdebug!(
        side = ?config.side,
        offset = config.offset,
        pinned = config.scrollable.is_some(),
        "attach"
    );

    Ok(Attachment {
        reconciler: Reconciler::new(config),
        state: AttachmentState::Attached { node, pump },
        last_outcome: None,
    })
}

/// Stops tracking. See [`Attachment::detach`].
pub fn detach<H: Host>(attachment: &mut Attachment<H>) -> bool {
    attachment.detach()
}

impl<H: Host> Attachment<H> {
    pub fn is_attached(&self) -> bool {
        self.state.is_attached()
    }

    pub fn state(&self) -> &AttachmentState<H::Node, H::Observer> {
        &self.state
    }

    pub fn node(&self) -> Option<&H::Node> {
        match &self.state {
            AttachmentState::Attached { node, .. } => Some(node),
            AttachmentState::Detached => None,
        }
    }

    pub fn config(&self) -> &TrackConfig<H::Node> {
        self.reconciler.config()
    }

    /// The outcome of the most recent reconciliation tick, if any ran.
    pub fn last_outcome(&self) -> Option<Reconcile> {
        self.last_outcome
    }

    pub fn stats(&self) -> Option<PumpStats> {
        match &self.state {
            AttachmentState::Attached { pump, .. } => Some(pump.stats()),
            AttachmentState::Detached => None,
        }
    }

    /// Handles one batch delivered by the host's observer.
    ///
    /// Returns the number of reconciliation ticks that ran; always zero once detached.
    pub fn on_mutations(&mut self, host: &H, batch: &[MutationRecord], now_ms: u64) -> usize {
        let AttachmentState::Attached { node, pump } = &mut self.state else {
            return 0;
        };
        let node = &*node;
        let reconciler = &self.reconciler;
        let last_outcome = &mut self.last_outcome;
        pump.deliver(batch, now_ms, || {
            *last_outcome = Some(reconciler.reconcile(host, node));
        })
    }

    /// Runs the trailing tick if one is armed and due.
    pub fn poll(&mut self, host: &H, now_ms: u64) -> Option<Reconcile> {
        let AttachmentState::Attached { node, pump } = &mut self.state else {
            return None;
        };
        let node = &*node;
        let reconciler = &self.reconciler;
        let mut outcome = None;
        pump.poll(now_ms, || outcome = Some(reconciler.reconcile(host, node)));
        if outcome.is_some() {
            self.last_outcome = outcome;
        }
        outcome
    }

    /// When [`Attachment::poll`] should run next, if a trailing tick is armed.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        match &self.state {
            AttachmentState::Attached { pump, .. } => pump.next_deadline_ms(),
            AttachmentState::Detached => None,
        }
    }

    /// Disconnects the observer and drops all pending work.
    ///
    /// Idempotent: returns `true` only for the call that tore down a live observer.
    pub fn detach(&mut self) -> bool {
        match mem::replace(&mut self.state, AttachmentState::Detached) {
            AttachmentState::Attached { mut pump, .. } => {
                let disposed = pump.dispose();
                svdebug!(stats = ?pump.stats(), "Attachment::detach");
                disposed
            }
            AttachmentState::Detached => false,
        }
    }
}

impl<H: Host> fmt::Debug for Attachment<H>
where
    H::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("config", self.reconciler.config())
            .field("state", &self.state)
            .field("last_outcome", &self.last_outcome)
            .finish()
    }
}
