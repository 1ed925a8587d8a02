//! Error surface for this crate.
//!
//! `spec.md` §7 lists three error kinds: `AllocationFailure`,
//! `DuplicateKey`, and `NotFound`. This crate narrows that down —
//! see `SPEC_FULL.md` §7 and `DESIGN.md` for the reasoning: allocation
//! failure is not modeled because this crate's arena has the same
//! infallible-allocator contract as `Vec`/`Box`; duplicate keys are
//! handled by `InsertOutcome::Replaced` rather than rejected; and a
//! missing key is `None`, not a fault.

use thiserror::Error;

/// The one synchronous fault condition `ArtTree` can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtError {
    /// The key (plus its internal terminator byte) would not fit in a
    /// `u32` byte offset, which the descent engine uses for depth
    /// bookkeeping.
    #[error("key exceeds the maximum representable length ({0} bytes)")]
    KeyTooLong(usize),
}
