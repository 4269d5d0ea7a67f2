//! Cache/TLB maintenance, memory barriers, and the trap/syscall words.

use super::fields3;
use crate::reg::Gpr;

use super::consts::*;

const fn cache_op(ra: Gpr, rb: Gpr, xo: u16) -> u32 {
    fields3(OP_X31, 0, ra.id(), rb.id()) | ((xo as u32) << 1)
}

pub const fn icbi(ra: Gpr, rb: Gpr) -> u32 {
    cache_op(ra, rb, XO_ICBI)
}

pub const fn dcbf(ra: Gpr, rb: Gpr) -> u32 {
    cache_op(ra, rb, XO_DCBF)
}

pub const fn dcbi(ra: Gpr, rb: Gpr) -> u32 {
    cache_op(ra, rb, XO_DCBI)
}

pub const fn dcbst(ra: Gpr, rb: Gpr) -> u32 {
    cache_op(ra, rb, XO_DCBST)
}

pub const fn dcbt(ra: Gpr, rb: Gpr) -> u32 {
    cache_op(ra, rb, XO_DCBT)
}

pub const fn dcbtst(ra: Gpr, rb: Gpr) -> u32 {
    cache_op(ra, rb, XO_DCBTST)
}

pub const fn dcbz(ra: Gpr, rb: Gpr) -> u32 {
    cache_op(ra, rb, XO_DCBZ)
}

/// Gekko/Broadway locked variant of `dcbz`; lives under the paired-single
/// primary opcode, not primary 31.
pub const fn dcbz_l(ra: Gpr, rb: Gpr) -> u32 {
    fields3(OP_PS, 0, ra.id(), rb.id()) | ((XO_DCBZ_L as u32) << 1)
}

pub const fn tlbie(rb: Gpr) -> u32 {
    fields3(OP_X31, 0, 0, rb.id()) | ((XO_TLBIE as u32) << 1)
}

pub const fn tlbsync() -> u32 {
    fields3(OP_X31, 0, 0, 0) | ((XO_TLBSYNC as u32) << 1)
}

/// `sync() -> 7C 00 04 AC`, per the worked example this crate's own test
/// suite checks against.
pub const fn sync() -> u32 {
    fields3(OP_X31, 0, 0, 0) | ((XO_SYNC as u32) << 1)
}

pub const fn eieio() -> u32 {
    fields3(OP_X31, 0, 0, 0) | ((XO_EIEIO as u32) << 1)
}

pub const fn isync() -> u32 {
    fields3(OP_CR_XL, 0, 0, 0) | ((XO_ISYNC as u32) << 1)
}

pub const fn rfi() -> u32 {
    fields3(OP_CR_XL, 0, 0, 0) | ((XO_RFI as u32) << 1)
}

/// `sc`: the only SC-form instruction in the ISA. Fixed word; the LEV field
/// this crate exposes is always zero.
pub const fn sc() -> u32 {
    0x4400_0002
}

/// Raw trap-on-condition word; `TO` selects which comparisons trigger the
/// trap (`31` = unconditional, used by [`crate::emitter::Emitter::trap`]).
pub const fn tw(to: u8, ra: Gpr, rb: Gpr) -> u32 {
    fields3(OP_X31, to, ra.id(), rb.id()) | ((XO_TW as u32) << 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::R0;

    #[test]
    fn sync_matches_spec_worked_example() {
        assert_eq!(sync(), 0x7C00_04AC);
    }

    #[test]
    fn rfi_uses_the_xl_form_primary_opcode() {
        assert_eq!(rfi(), 0x4C00_0064);
    }

    #[test]
    fn unconditional_trap_uses_to_31() {
        let word = tw(31, R0, R0);
        assert_eq!((word >> 21) & 0x1F, 31);
    }
}
