use crate::{ConfigError, Edge, MutationKind, ScrollBehavior};

/// Default throttle window between two reconciliation ticks.
pub const DEFAULT_THROTTLE_MS: u64 = 300;

/// Which subtree mutations wake the reconciler (aka DOM `MutationObserverInit`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserveOptions {
    pub child_list: bool,
    pub character_data: bool,
    pub attributes: bool,
    pub subtree: bool,
}

impl ObserveOptions {
    /// Returns `true` if records of `kind` should reach the throttle gate.
    pub fn accepts(&self, kind: MutationKind) -> bool {
        match kind {
            MutationKind::ChildList => self.child_list,
            MutationKind::CharacterData => self.character_data,
            MutationKind::Attributes => self.attributes,
        }
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            child_list: true,
            character_data: true,
            attributes: true,
            subtree: true,
        }
    }
}

/// Configuration for one attachment.
///
/// `N` is the host's node handle. The config is immutable for the lifetime of an attachment;
/// build a new one and re-attach to change it.
#[derive(Clone)]
pub struct TrackConfig<N> {
    pub side: Edge,
    /// Distance in pixels from `side` that defines the safe zone.
    pub offset: f64,
    /// Pins the ancestor that receives scroll commands, bypassing ancestor resolution.
    pub scrollable: Option<N>,

    /// Minimum time between two reconciliation ticks.
    pub throttle_ms: u64,
    /// Also fire once at the end of a window that suppressed at least one mutation.
    ///
    /// Trailing ticks are driven by the adapter's `poll(now_ms)`.
    pub trailing: bool,
    pub behavior: ScrollBehavior,
    pub observe: ObserveOptions,
}

impl<N> TrackConfig<N> {
    pub fn new(side: Edge, offset: f64) -> Self {
        Self {
            side,
            offset,
            scrollable: None,
            throttle_ms: DEFAULT_THROTTLE_MS,
            trailing: false,
            behavior: ScrollBehavior::Smooth,
            observe: ObserveOptions::default(),
        }
    }

    pub fn top(offset: f64) -> Self {
        Self::new(Edge::Top, offset)
    }

    pub fn bottom(offset: f64) -> Self {
        Self::new(Edge::Bottom, offset)
    }

    pub fn with_scrollable(mut self, scrollable: Option<N>) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_observe(mut self, observe: ObserveOptions) -> Self {
        self.observe = observe;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset);
        }
        if self.offset < 0.0 {
            return Err(ConfigError::NegativeOffset(self.offset));
        }
        if self.throttle_ms == 0 {
            return Err(ConfigError::ZeroThrottleWindow);
        }
        Ok(())
    }
}

impl<N> core::fmt::Debug for TrackConfig<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TrackConfig")
            .field("side", &self.side)
            .field("offset", &self.offset)
            .field("scrollable", &self.scrollable.is_some())
            .field("throttle_ms", &self.throttle_ms)
            .field("trailing", &self.trailing)
            .field("behavior", &self.behavior)
            .field("observe", &self.observe)
            .finish()
    }
}
