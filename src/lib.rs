//! A runtime machine-code emitter for 32-bit PowerPC.
//!
//! This crate builds instruction words and appends them to a byte buffer at
//! runtime — a JIT assembler, not a parser of PowerPC assembly text. Typed
//! register newtypes ([`reg`]) and a condition-code/branch-kind vocabulary
//! ([`cond`]) sit underneath a pure encoding layer ([`encode`]) that never
//! touches a buffer, and underneath the public façade, [`Emitter`], which
//! owns a [`Buffer`] and exposes one method per mnemonic plus the pseudo-op
//! and directive layer built on top of them.
//!
//! Every geometry, overflow, or branch-range violation is fatal (see
//! [`error`]): there is no `Result`-returning surface to thread through
//! caller code that has no way to repair a malformed buffer mid-emission.
//!
//! This crate's `no-std` category tag is inherited from the runtime it was
//! split out of; in practice it depends unconditionally on `thiserror` and
//! needs `std` (see `DESIGN.md`). It's a host-side build tool, not part of
//! the no_std target it emits code for, so that's a fine place to be.

#![warn(missing_docs)]

pub mod buffer;
pub mod cond;
pub mod emitter;
pub mod encode;
pub mod error;
pub mod label;
pub mod reg;

pub use buffer::{Buffer, GrowthMode};
pub use cond::{BranchKind, ConditionCode};
pub use emitter::Emitter;
pub use error::AsmError;
pub use label::Label;
