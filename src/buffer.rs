//! The Buffer: a contiguous, word-aligned region of emitted code plus a
//! write cursor and a growth policy.

use crate::error::{fatal, AsmError};

/// Default grow step used by [`GrowthMode::AutoGrow`] when none is given:
/// 64 KiB, word-aligned.
pub const DEFAULT_GROW_STEP: usize = 0x1_0000;

/// How a [`Buffer`] behaves when an append would exceed its reserved size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthMode {
    /// Exceeding the reserved size is a fatal error.
    FixedSize,
    /// Exceeding the reserved size reallocates to `current + grow_step`,
    /// copies the used bytes, and continues.
    AutoGrow {
        /// Bytes added on each grow. Must stay word-aligned.
        grow_step: usize,
    },
}

impl Default for GrowthMode {
    fn default() -> Self {
        GrowthMode::FixedSize
    }
}

enum Storage {
    /// Library-allocated and library-owned.
    Owned(Vec<u8>),
    /// Caller-allocated; the library only ever writes within `len` bytes
    /// starting at `ptr` and never frees it.
    Borrowed { ptr: *mut u8, len: usize },
}

/// Owns the emitted code region, the write cursor, and the growth policy.
///
/// Append primitives (`append_byte`, `append_u16`, `append_u32`,
/// `append_u64`, `append_bytes`) are the only way bytes enter the buffer;
/// every Emitter mnemonic and directive is built on top of them.
pub struct Buffer {
    storage: Storage,
    cursor: usize,
    mode: GrowthMode,
}

impl Buffer {
    /// Allocates a library-owned buffer of `bytes` bytes. `bytes == 0` is
    /// allowed: it means "I will supply the buffer later is not supported
    /// here; grow it with `AutoGrow` or construct with the final size up
    /// front."
    ///
    /// Fatal if `bytes` is not a multiple of 4.
    pub fn new(bytes: usize) -> Self {
        if bytes % 4 != 0 {
            fatal(AsmError::UnalignedGeometry(bytes));
        }
        Buffer {
            storage: Storage::Owned(vec![0u8; bytes]),
            cursor: 0,
            mode: GrowthMode::FixedSize,
        }
    }

    /// Wraps a caller-supplied region. The library never frees this memory;
    /// releasing the `Buffer` simply drops the pointer.
    ///
    /// Always `FixedSize`: the library does not own this memory and cannot
    /// safely reallocate it, so [`Buffer::set_growth_mode`] with
    /// [`GrowthMode::AutoGrow`] is rejected afterward.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes for `len` bytes for the
    /// lifetime of this `Buffer`, and `len` must be a multiple of 4.
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Self {
        if len % 4 != 0 {
            fatal(AsmError::UnalignedGeometry(len));
        }
        Buffer {
            storage: Storage::Borrowed { ptr, len },
            cursor: 0,
            mode: GrowthMode::FixedSize,
        }
    }

    /// Switches the growth policy. Fatal if `AutoGrow`'s step is unaligned,
    /// or if the buffer is caller-supplied (see [`Buffer::from_raw_parts`]).
    pub fn set_growth_mode(&mut self, mode: GrowthMode) {
        if let GrowthMode::AutoGrow { grow_step } = mode {
            if grow_step % 4 != 0 {
                fatal(AsmError::UnalignedGeometry(grow_step));
            }
            if matches!(self.storage, Storage::Borrowed { .. }) {
                fatal(AsmError::AutoGrowOnBorrowedBuffer);
            }
        }
        self.mode = mode;
    }

    /// Convenience: allocates a library-owned buffer in `AutoGrow` mode.
    pub fn new_auto_grow(initial_bytes: usize, grow_step: usize) -> Self {
        let mut buf = Self::new(initial_bytes);
        buf.set_growth_mode(GrowthMode::AutoGrow { grow_step });
        buf
    }

    /// Base pointer of the region currently backing the buffer.
    ///
    /// Not stable across a grow: do not cache this across an `AutoGrow`
    /// append. Label tokens use a byte offset for exactly this reason (see
    /// [`crate::label`]).
    pub fn base_ptr(&self) -> *const u8 {
        match &self.storage {
            Storage::Owned(v) => v.as_ptr(),
            Storage::Borrowed { ptr, .. } => *ptr as *const u8,
        }
    }

    /// Current write cursor, as a byte offset from the base pointer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Alias for [`Buffer::cursor`]: the address at which the next emitted
    /// word will land (the "Current Instruction Address").
    pub fn current_address(&self) -> usize {
        self.cursor
    }

    /// Bytes written so far (`cursor - base`, trivially `cursor` here since
    /// the cursor is always expressed relative to the base).
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total bytes currently reserved.
    pub fn reserved(&self) -> usize {
        match &self.storage {
            Storage::Owned(v) => v.len(),
            Storage::Borrowed { len, .. } => *len,
        }
    }

    /// Read-only view of the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        match &self.storage {
            Storage::Owned(v) => &v[..self.cursor],
            // SAFETY: constructor contract guarantees `ptr..ptr+len` is
            // valid; `cursor <= len` is an append-time invariant.
            Storage::Borrowed { ptr, .. } => unsafe {
                core::slice::from_raw_parts(*ptr, self.cursor)
            },
        }
    }

    fn reserve(&mut self, additional: usize) {
        let end = self.cursor + additional;
        if end <= self.reserved() {
            return;
        }
        match self.mode {
            GrowthMode::FixedSize => fatal(AsmError::FixedSizeOverflow {
                cursor: self.cursor,
                len: additional,
                reserved: self.reserved(),
            }),
            GrowthMode::AutoGrow { grow_step } => {
                let old_reserved = self.reserved();
                let mut new_reserved = old_reserved + grow_step;
                while end > new_reserved {
                    new_reserved += grow_step;
                }
                let used = self.cursor;
                match &mut self.storage {
                    Storage::Owned(v) => {
                        v.resize(new_reserved, 0);
                    }
                    Storage::Borrowed { .. } => {
                        // set_growth_mode rejects AutoGrow for a borrowed
                        // buffer, so this arm is unreachable in practice.
                        fatal(AsmError::AutoGrowOnBorrowedBuffer);
                    }
                }
                tracing::debug!(
                    old_reserved,
                    new_reserved,
                    used,
                    "ppc_asm buffer grew"
                );
            }
        }
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Owned(v) => v.as_mut_slice(),
            Storage::Borrowed { ptr, len } => unsafe {
                core::slice::from_raw_parts_mut(*ptr, *len)
            },
        }
    }

    /// Appends raw bytes, growing (or failing) as the growth policy
    /// dictates. Advances the cursor by `bytes.len()`.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        let cursor = self.cursor;
        self.as_mut_slice()[cursor..cursor + bytes.len()].copy_from_slice(bytes);
        self.cursor += bytes.len();
    }

    /// Appends a single byte.
    pub fn append_byte(&mut self, byte: u8) {
        self.append_bytes(&[byte]);
    }

    /// Appends a halfword in big-endian byte order, matching the PPC target
    /// this buffer is ultimately executed on.
    pub fn append_u16(&mut self, value: u16) {
        self.append_bytes(&value.to_be_bytes());
    }

    /// Appends a word in big-endian byte order. Every instruction-emitting
    /// operation in the crate goes through this.
    pub fn append_u32(&mut self, value: u32) {
        self.append_bytes(&value.to_be_bytes());
    }

    /// Appends a doubleword in big-endian byte order.
    pub fn append_u64(&mut self, value: u64) {
        self.append_bytes(&value.to_be_bytes());
    }

    /// Rewrites the 4 bytes at `address` (a byte offset from the base) in
    /// place. Used exclusively by label fixup; does not move the cursor.
    pub(crate) fn patch_u32(&mut self, address: usize, value: u32) {
        let bytes = value.to_be_bytes();
        self.as_mut_slice()[address..address + 4].copy_from_slice(&bytes);
    }

    /// Reads the 4 bytes at `address` (a byte offset from the base) as a
    /// word. Used by label fixup to recover the placeholder word.
    pub(crate) fn read_u32(&self, address: usize) -> u32 {
        let bytes = &self.as_slice()[address..address + 4];
        u32::from_be_bytes(bytes.try_into().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_size_append() {
        let mut buf = Buffer::new(8);
        buf.append_u32(0x1234_5678);
        buf.append_u32(0xdead_beef);
        assert_eq!(buf.used(), 8);
        assert_eq!(buf.reserved(), 8);
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn fixed_size_overflow_is_fatal() {
        let mut buf = Buffer::new(4);
        buf.append_u32(1);
        buf.append_u32(2);
    }

    #[test]
    #[should_panic(expected = "not a multiple of 4")]
    fn unaligned_size_is_fatal() {
        let _ = Buffer::new(5);
    }

    #[test]
    fn auto_grow_reallocates_and_preserves_content() {
        let mut buf = Buffer::new_auto_grow(4, 4);
        buf.append_u32(0x1111_1111);
        assert_eq!(buf.reserved(), 4);
        buf.append_u32(0x2222_2222);
        assert!(buf.reserved() >= 8);
        assert_eq!(buf.used(), 8);
        let slice = buf.as_slice();
        assert_eq!(&slice[0..4], &0x1111_1111u32.to_be_bytes());
        assert_eq!(&slice[4..8], &0x2222_2222u32.to_be_bytes());
    }

    #[test]
    fn auto_grow_across_many_words_matches_non_growing_run() {
        let grown = {
            let mut buf = Buffer::new_auto_grow(4, 4);
            for i in 0..4096u32 {
                buf.append_u32(i);
            }
            buf.as_slice().to_vec()
        };
        let flat = {
            let mut buf = Buffer::new(4096 * 4);
            for i in 0..4096u32 {
                buf.append_u32(i);
            }
            buf.as_slice().to_vec()
        };
        assert_eq!(grown, flat);
    }

    #[test]
    fn patch_rewrites_in_place_without_moving_cursor() {
        let mut buf = Buffer::new(8);
        buf.append_u32(0);
        buf.append_u32(0);
        let cursor_before = buf.cursor();
        buf.patch_u32(0, 0xCAFEBABE);
        assert_eq!(buf.cursor(), cursor_before);
        assert_eq!(buf.read_u32(0), 0xCAFEBABE);
    }
}
