//! A headless engine that keeps a tracked element visible inside its scrollable ancestor.
//!
//! For lifecycle utilities (attach/detach, throttled mutation pumping), see the
//! `stay-visible-adapter` crate.
//!
//! This crate focuses on the decisions behind "auto-follow" views such as chat logs and live
//! feeds: which ancestor scrolls, whether the tracked element crossed the configured edge, and
//! where to scroll to bring it back.
//!
//! It is UI-agnostic. A host layer (DOM bindings, a retained-mode GUI, a test fake) is expected
//! to provide, through [`Host`]:
//! - parent lookup and the document root
//! - bounding boxes, viewport height, and scroll metrics
//! - computed overflow
//! - a smooth `scroll_to` primitive and a subtree mutation observer
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod host;
mod options;
mod reconciler;
mod resolver;
mod throttle;
mod types;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ObserveError, ParseOverflowError, ScrollError};
pub use geometry::{evaluate, evaluate_target};
pub use host::{Host, MutationObserver};
pub use options::{DEFAULT_THROTTLE_MS, ObserveOptions, TrackConfig};
pub use reconciler::{Reconcile, Reconciler, SkipReason};
pub use resolver::find_scrollable_parent;
pub use throttle::Throttle;
pub use types::{
    BoundingBox, Edge, MutationKind, MutationRecord, Overflow, ScrollBehavior, ScrollIntent,
    ScrollMetrics, ScrollTarget, ScrollToOptions,
};
