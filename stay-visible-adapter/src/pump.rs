use stay_visible::{
    Host, MutationObserver, MutationRecord, ObserveError, ObserveOptions, Throttle,
};

/// Counters for one pump, useful when tuning the throttle window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PumpStats {
    /// Records handed to `deliver` while the pump was live.
    pub delivered: u64,
    /// Records of a kind not enabled in `ObserveOptions`.
    pub ignored: u64,
    /// Records dropped by the throttle gate (including ones that armed a trailing tick).
    pub suppressed: u64,
    /// Records that arrived after disposal or were still queued when it happened.
    pub discarded: u64,
    /// Reactions fired, leading and trailing.
    pub ticks: u64,
}

/// Owns the platform observer of one attachment and throttles its batches into ticks.
///
/// Each batch is split record by record and every record is offered to the throttle gate; at
/// most one tick fires per window. After [`MutationPump::dispose`] no tick fires again, even
/// for records the platform had already queued.
#[derive(Debug)]
pub struct MutationPump<O: MutationObserver> {
    observer: Option<O>,
    observe: ObserveOptions,
    throttle: Throttle,
    stats: PumpStats,
}

impl<O: MutationObserver> MutationPump<O> {
    /// Starts observing `node` through the host.
    pub fn subscribe<H: Host<Observer = O>>(
        host: &H,
        node: &H::Node,
        observe: ObserveOptions,
        throttle: Throttle,
    ) -> Result<Self, ObserveError> {
        let observer = host.observe(node, observe)?;
        svdebug!(
            window_ms = throttle.window_ms(),
            trailing = throttle.trailing(),
            "MutationPump::subscribe"
        );
        Ok(Self {
            observer: Some(observer),
            observe,
            throttle,
            stats: PumpStats::default(),
        })
    }

    pub fn is_live(&self) -> bool {
        self.observer.is_some()
    }

    pub fn stats(&self) -> PumpStats {
        self.stats
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    /// Feeds one batch through the gate, calling `on_tick` for every admitted record.
    ///
    /// Returns the number of ticks fired.
    pub fn deliver(
        &mut self,
        batch: &[MutationRecord],
        now_ms: u64,
        mut on_tick: impl FnMut(),
    ) -> usize {
        if !self.is_live() {
            self.stats.discarded = self.stats.discarded.saturating_add(batch.len() as u64);
            svtrace!(records = batch.len(), "MutationPump::deliver: disposed, discarding");
            return 0;
        }

        let mut fired = 0usize;
        for record in batch {
            self.stats.delivered = self.stats.delivered.saturating_add(1);
            if !self.observe.accepts(record.kind) {
                self.stats.ignored = self.stats.ignored.saturating_add(1);
                continue;
            }
            if !self.throttle.call(now_ms) {
                self.stats.suppressed = self.stats.suppressed.saturating_add(1);
                continue;
            }
            self.stats.ticks = self.stats.ticks.saturating_add(1);
            fired += 1;
            on_tick();
        }
        svtrace!(records = batch.len(), fired, now_ms, "MutationPump::deliver");
        fired
    }

    /// Fires the trailing tick if one is armed and due.
    pub fn poll(&mut self, now_ms: u64, on_tick: impl FnOnce()) -> bool {
        if !self.is_live() || !self.throttle.poll(now_ms) {
            return false;
        }
        self.stats.ticks = self.stats.ticks.saturating_add(1);
        svtrace!(now_ms, "MutationPump::poll: trailing tick");
        on_tick();
        true
    }

    /// When the host should call [`MutationPump::poll`] next, if a trailing tick is armed.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        if !self.is_live() {
            return None;
        }
        self.throttle.trailing_deadline_ms()
    }

    /// Disconnects the observer, discards queued records, and clears throttle state.
    ///
    /// Returns `false` if the pump was already disposed.
    pub fn dispose(&mut self) -> bool {
        let Some(mut observer) = self.observer.take() else {
            return false;
        };
        let queued = observer.take_records();
        observer.disconnect();
        self.stats.discarded = self.stats.discarded.saturating_add(queued.len() as u64);
        self.throttle.reset();
        svdebug!(discarded = queued.len(), "MutationPump::dispose");
        true
    }
}

impl<O: MutationObserver> Drop for MutationPump<O> {
    fn drop(&mut self) {
        self.dispose();
    }
}
