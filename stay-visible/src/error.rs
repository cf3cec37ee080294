use thiserror::Error;

/// A [`crate::TrackConfig`] that cannot drive an attachment.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("offset must be non-negative (got {0})")]
    NegativeOffset(f64),
    #[error("offset must be a finite number")]
    NonFiniteOffset,
    #[error("throttle window must be at least 1ms")]
    ZeroThrottleWindow,
}

/// Reported by [`crate::Host::scroll_to`] when the platform refuses a scroll command.
///
/// Scroll corrections are best-effort, so this never escapes a reconciliation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("smooth scrolling is not supported by the host")]
    Unsupported,
    #[error("the host rejected the scroll command")]
    Rejected,
}

/// Reported by [`crate::Host::observe`] when a mutation observer cannot be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("mutation observation is not supported by the host")]
    Unsupported,
    #[error("the node cannot be observed")]
    InvalidTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unrecognized overflow keyword")]
pub struct ParseOverflowError;
