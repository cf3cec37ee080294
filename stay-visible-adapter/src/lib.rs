//! Lifecycle utilities for the `stay-visible` crate.
//!
//! The `stay-visible` crate is UI-agnostic and focuses on the visibility decisions. This crate
//! provides the pieces a host framework wires into its mount/unmount hooks:
//!
//! - A throttled mutation pump that owns the platform observer for one attachment
//! - `attach`/`detach` entry points with an explicit attachment state
//!
//! This crate is intentionally framework-agnostic (no DOM/web-sys bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod attachment;
mod error;
mod pump;


pub use attachment::{Attachment, AttachmentState, attach, detach};
pub use error::AttachError;
pub use pump::{MutationPump, PumpStats};
