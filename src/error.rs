//! The error taxonomy of spec.md §7.
//!
//! Every condition below is fatal: the crate has no `Result`-returning
//! fallible surface. `AsmError` exists so the one decision point — "did a
//! buffer-geometry or branch-range check fail, and why" — has a name and a
//! well-formatted `Display`, not so callers can recover from it. Every
//! occurrence is logged at `error` level before the process aborts, which is
//! the host-targeted substitute spec.md §7 calls for in place of the
//! reference implementation's infinite busy-loop.

/// A fatal condition raised by the buffer, encoder, or label fixup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AsmError {
    /// A buffer byte count or grow step was not a multiple of 4.
    #[error("unaligned buffer geometry: {0} is not a multiple of 4")]
    UnalignedGeometry(usize),

    /// `Buffer::new` or a grow could not obtain memory.
    #[error("allocation failure while reserving {0} bytes")]
    AllocationFailure(usize),

    /// An append in `FixedSize` mode would exceed the reserved region.
    #[error("buffer overflow: cursor {cursor} + {len} exceeds reserved {reserved}")]
    FixedSizeOverflow {
        /// Cursor position before the failed append.
        cursor: usize,
        /// Number of bytes the append attempted to write.
        len: usize,
        /// Total bytes reserved for the buffer.
        reserved: usize,
    },

    /// A branch displacement was not a multiple of 4.
    #[error("unaligned branch displacement: {0}")]
    UnalignedDisplacement(i64),

    /// A branch displacement exceeded the legal range for its form, in both
    /// the relative and the absolute encodings.
    #[error(
        "branch displacement {disp} out of range for {kind:?} (relative range {lo}..={hi})"
    )]
    DisplacementOutOfRange {
        /// The offending displacement, in bytes.
        disp: i64,
        /// Which branch form was being resolved.
        kind: crate::cond::BranchKind,
        /// Low end of the legal relative range.
        lo: i32,
        /// High end of the legal relative range.
        hi: i32,
    },

    /// `align(n)` was called with `n < 1`.
    #[error("illegal alignment: {0}")]
    IllegalAlignment(i64),

    /// An external region was requested for `AutoGrow`, which the library
    /// cannot honor because it does not own that memory.
    #[error("AutoGrow is not supported for a caller-supplied buffer")]
    AutoGrowOnBorrowedBuffer,
}

/// Logs `err` and aborts the process. There is no return.
///
/// This is the crate's sole error-handling primitive: spec.md §7 requires
/// every geometry, overflow, and range violation to be fatal, so there is
/// nothing for a caller to catch and nothing useful a `Result` would add.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: AsmError) -> ! {
    tracing::error!(error = %err, "ppc_asm: fatal error");
    panic!("ppc_asm: {err}");
}
