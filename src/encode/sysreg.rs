//! Condition-register bit operations and system-register moves.

use super::{fields3, xl_form};
use crate::reg::{Cr, Gpr, Sr};

use super::consts::*;

// ---- condition-register bit ops (XL-form) --------------------------------
//
// Operands are raw CR bit indices (0..31), not [`Cr`] field numbers: these
// instructions address individual bits of the 32-bit Condition Register,
// not one of its eight 4-bit fields.

pub const fn crand(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CRAND)
}

pub const fn cror(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CROR)
}

pub const fn crxor(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CRXOR)
}

pub const fn crnand(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CRNAND)
}

pub const fn crnor(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CRNOR)
}

pub const fn creqv(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CREQV)
}

pub const fn crandc(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CRANDC)
}

pub const fn crorc(bt: u8, ba: u8, bb: u8) -> u32 {
    xl_form(OP_CR_XL, bt, ba, bb, XO_CRORC)
}

/// Copies one 4-bit CR field to another.
pub const fn mcrf(bf: Cr, bfa: Cr) -> u32 {
    xl_form(OP_CR_XL, bf.id() << 2, bfa.id() << 2, 0, XO_MCRF)
}

// ---- system-register moves ------------------------------------------------

/// The SPR field is split into two 5-bit halves in reversed nibble order:
/// bits 16..20 hold the low 5 bits of the SPR number, bits 11..15 hold the
/// high 5 bits.
const fn spr_halves(spr: u16) -> (u8, u8) {
    ((spr & 0x1F) as u8, ((spr >> 5) & 0x1F) as u8)
}

pub const fn mfspr(rt: Gpr, spr: u16) -> u32 {
    let (lo, hi) = spr_halves(spr);
    fields3(OP_X31, rt.id(), lo, hi) | ((XO_MFSPR as u32) << 1)
}

pub const fn mtspr(spr: u16, rs: Gpr) -> u32 {
    let (lo, hi) = spr_halves(spr);
    fields3(OP_X31, rs.id(), lo, hi) | ((XO_MTSPR as u32) << 1)
}

pub const fn mflr(rt: Gpr) -> u32 {
    mfspr(rt, SPR_LR)
}

pub const fn mtlr(rs: Gpr) -> u32 {
    mtspr(SPR_LR, rs)
}

pub const fn mfctr(rt: Gpr) -> u32 {
    mfspr(rt, SPR_CTR)
}

pub const fn mtctr(rs: Gpr) -> u32 {
    mtspr(SPR_CTR, rs)
}

pub const fn mfcr(rt: Gpr) -> u32 {
    fields3(OP_X31, rt.id(), 0, 0) | ((XO_MFCR as u32) << 1)
}

/// `mtcrf(fxm, rs)`: `fxm` is the 8-bit field mask selecting which of the
/// eight CR fields are updated from `rs`.
pub const fn mtcrf(fxm: u8, rs: Gpr) -> u32 {
    ((OP_X31 as u32) << 26) | ((rs.id() as u32) << 21) | ((fxm as u32) << 12) | ((XO_MTCRF as u32) << 1)
}

pub const fn mfmsr(rt: Gpr) -> u32 {
    fields3(OP_X31, rt.id(), 0, 0) | ((XO_MFMSR as u32) << 1)
}

pub const fn mtmsr(rs: Gpr) -> u32 {
    fields3(OP_X31, rs.id(), 0, 0) | ((XO_MTMSR as u32) << 1)
}

pub const fn mfsr(rt: Gpr, sr: Sr) -> u32 {
    fields3(OP_X31, rt.id(), sr.id(), 0) | ((XO_MFSR as u32) << 1)
}

pub const fn mtsr(sr: Sr, rs: Gpr) -> u32 {
    fields3(OP_X31, rs.id(), sr.id(), 0) | ((XO_MTSR as u32) << 1)
}

pub const fn mfsrin(rt: Gpr, rb: Gpr) -> u32 {
    fields3(OP_X31, rt.id(), 0, rb.id()) | ((XO_MFSRIN as u32) << 1)
}

pub const fn mtsrin(rs: Gpr, rb: Gpr) -> u32 {
    fields3(OP_X31, rs.id(), 0, rb.id()) | ((XO_MTSRIN as u32) << 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::R3;

    #[test]
    fn mflr_matches_known_encoding() {
        assert_eq!(mflr(R3), 0x7C68_02A6);
    }

    #[test]
    fn mtlr_matches_known_encoding() {
        assert_eq!(mtlr(R3), 0x7C68_03A6);
    }

    #[test]
    fn mtcrf_places_fxm_at_bits_12_19() {
        let word = mtcrf(0xFF, R3);
        assert_eq!((word >> 12) & 0xFF, 0xFF);
    }
}
