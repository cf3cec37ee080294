use stay_visible::{ConfigError, ObserveError};
use thiserror::Error;

/// Why [`crate::attach`] could not start tracking a node.
///
/// This is the only error surfaced to the host; per-tick problems are reported as
/// [`stay_visible::Reconcile`] outcomes instead.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum AttachError {
    #[error("tracked node is not mounted")]
    NodeUnavailable,
    #[error("invalid track config: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot observe tracked node: {0}")]
    Observe(#[from] ObserveError),
}
