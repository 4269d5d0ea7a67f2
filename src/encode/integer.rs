//! Integer arithmetic, logical, compare, and rotate/shift encodings.
//!
//! Operand order follows the PPC assembler's own convention, not the
//! "natural" left-to-right reading of the mnemonic: `and(ra, rs, rb)` means
//! `ra = rs & rb`, and `subf(rt, ra, rb)` means `rt = rb - ra` (the
//! "subtract from" semantics the ISA manual itself uses, preserved here
//! rather than silently renamed — see `sub` below for the flipped wrapper).

use super::{crf, d_form, fields3, m_form, xo_form};
use crate::reg::{Cr, Gpr};

use super::consts::*;

// ---- add family ----------------------------------------------------------

pub const fn add(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_ADD, oe, rc)
}

pub const fn addc(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_ADDC, oe, rc)
}

pub const fn adde(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_ADDE, oe, rc)
}

pub const fn addme(rt: Gpr, ra: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), 0, XO_ADDME, oe, rc)
}

pub const fn addze(rt: Gpr, ra: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), 0, XO_ADDZE, oe, rc)
}

/// `addi(rt, ra, imm)`: `ra == r0` is folded at the ISA level into "load
/// immediate" (`li`) rather than "add to r0" — the caller's responsibility
/// if they want that pseudo-op; see [`crate::emitter::Emitter::li`].
pub const fn addi(rt: Gpr, ra: Gpr, imm: i16) -> u32 {
    d_form(OP_ADDI, rt.id(), ra.id(), imm as u16)
}

pub const fn addis(rt: Gpr, ra: Gpr, imm: i16) -> u32 {
    d_form(OP_ADDIS, rt.id(), ra.id(), imm as u16)
}

/// Distinct base opcode (12) from [`addic_rc`] (13) — the ISA does not
/// fold the record bit into a shared opcode for this one, so neither does
/// this encoder.
pub const fn addic(rt: Gpr, ra: Gpr, imm: i16) -> u32 {
    d_form(OP_ADDIC, rt.id(), ra.id(), imm as u16)
}

pub const fn addic_rc(rt: Gpr, ra: Gpr, imm: i16) -> u32 {
    d_form(OP_ADDIC_RC, rt.id(), ra.id(), imm as u16)
}

pub const fn subfic(rt: Gpr, ra: Gpr, imm: i16) -> u32 {
    d_form(OP_SUBFIC, rt.id(), ra.id(), imm as u16)
}

pub const fn mulli(rt: Gpr, ra: Gpr, imm: i16) -> u32 {
    d_form(OP_MULLI, rt.id(), ra.id(), imm as u16)
}

// ---- subtract family -------------------------------------------------------

/// Native "subtract from" order: `rt = rb - ra`.
pub const fn subf(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_SUBF, oe, rc)
}

/// Natural order wrapper: `rt = ra - rb`, expressed as `subf(rt, rb, ra)`.
pub const fn sub(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    subf(rt, rb, ra, oe, rc)
}

pub const fn subfc(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_SUBFC, oe, rc)
}

pub const fn subfe(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_SUBFE, oe, rc)
}

pub const fn subfme(rt: Gpr, ra: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), 0, XO_SUBFME, oe, rc)
}

pub const fn subfze(rt: Gpr, ra: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), 0, XO_SUBFZE, oe, rc)
}

pub const fn neg(rt: Gpr, ra: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), 0, XO_NEG, oe, rc)
}

// ---- multiply / divide -----------------------------------------------------

pub const fn mulhw(rt: Gpr, ra: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_MULHW, false, rc)
}

pub const fn mulhwu(rt: Gpr, ra: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_MULHWU, false, rc)
}

pub const fn mullw(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_MULLW, oe, rc)
}

/// Both the plain and overflow-enabled forms exist uniformly here — the
/// reference source only defined the `o` variant, an acknowledged gap the
/// full ISA does not have.
pub const fn divw(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_DIVW, oe, rc)
}

pub const fn divwu(rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> u32 {
    xo_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_DIVWU, oe, rc)
}

// ---- logical ----------------------------------------------------------------

pub const fn and_(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_AND, false, rc)
}

pub const fn or_(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_OR, false, rc)
}

pub const fn xor_(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_XOR, false, rc)
}

pub const fn nand_(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_NAND, false, rc)
}

pub const fn nor_(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_NOR, false, rc)
}

pub const fn eqv(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_EQV, false, rc)
}

pub const fn andc(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_ANDC, false, rc)
}

pub const fn orc(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_ORC, false, rc)
}

pub const fn extsb(ra: Gpr, rs: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), 0, XO_EXTSB, false, rc)
}

pub const fn extsh(ra: Gpr, rs: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), 0, XO_EXTSH, false, rc)
}

pub const fn cntlzw(ra: Gpr, rs: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), 0, XO_CNTLZW, false, rc)
}

pub const fn andi_rc(ra: Gpr, rs: Gpr, imm: u16) -> u32 {
    d_form(OP_ANDI_RC, rs.id(), ra.id(), imm)
}

pub const fn andis_rc(ra: Gpr, rs: Gpr, imm: u16) -> u32 {
    d_form(OP_ANDIS_RC, rs.id(), ra.id(), imm)
}

pub const fn ori(ra: Gpr, rs: Gpr, imm: u16) -> u32 {
    d_form(OP_ORI, rs.id(), ra.id(), imm)
}

pub const fn oris(ra: Gpr, rs: Gpr, imm: u16) -> u32 {
    d_form(OP_ORIS, rs.id(), ra.id(), imm)
}

pub const fn xori(ra: Gpr, rs: Gpr, imm: u16) -> u32 {
    d_form(OP_XORI, rs.id(), ra.id(), imm)
}

pub const fn xoris(ra: Gpr, rs: Gpr, imm: u16) -> u32 {
    d_form(OP_XORIS, rs.id(), ra.id(), imm)
}

// ---- shift ------------------------------------------------------------------

pub const fn slw(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_SLW, false, rc)
}

pub const fn srw(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_SRW, false, rc)
}

pub const fn sraw(ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_SRAW, false, rc)
}

pub const fn srawi(ra: Gpr, rs: Gpr, sh: u8, rc: bool) -> u32 {
    xo_form(OP_X31, rs.id(), ra.id(), sh, XO_SRAWI, false, rc)
}

// ---- compare ------------------------------------------------------------------

pub const fn cmp(cr: Cr, ra: Gpr, rb: Gpr) -> u32 {
    fields3(OP_X31, crf(cr), ra.id(), rb.id()) | ((XO_CMP as u32) << 1)
}

pub const fn cmpl(cr: Cr, ra: Gpr, rb: Gpr) -> u32 {
    fields3(OP_X31, crf(cr), ra.id(), rb.id()) | ((XO_CMPL as u32) << 1)
}

pub const fn cmpi(cr: Cr, ra: Gpr, imm: i16) -> u32 {
    d_form(OP_CMPI, crf(cr), ra.id(), imm as u16)
}

pub const fn cmpli(cr: Cr, ra: Gpr, imm: u16) -> u32 {
    d_form(OP_CMPLI, crf(cr), ra.id(), imm)
}

// ---- rotate-and-mask family ---------------------------------------------------

/// Raw `rlwinm(dest, src, shift, mb, me)`: rotate `src` left by `shift`
/// bits, then AND with the mask running from bit `mb` to bit `me`
/// inclusive (both counted from the MSB, per the ISA manual).
pub const fn rlwinm(rd: Gpr, rs: Gpr, sh: u8, mb: u8, me: u8, rc: bool) -> u32 {
    m_form(OP_RLWINM, rs.id(), rd.id(), sh, mb, me, rc)
}

pub const fn rlwimi(rd: Gpr, rs: Gpr, sh: u8, mb: u8, me: u8, rc: bool) -> u32 {
    m_form(OP_RLWIMI, rs.id(), rd.id(), sh, mb, me, rc)
}

/// `rlwnm`: like `rlwinm` but the shift amount is a register, not an
/// immediate.
pub const fn rlwnm(rd: Gpr, rs: Gpr, rb: Gpr, mb: u8, me: u8, rc: bool) -> u32 {
    m_form(OP_RLWNM, rs.id(), rd.id(), rb.id(), mb, me, rc)
}

/// `slwi(d, s, n)` = `rlwinm(d, s, n, 0, 31-n)`.
pub const fn slwi(rd: Gpr, rs: Gpr, n: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, n, 0, 31 - n, rc)
}

/// `srwi(d, s, n)` = `rlwinm(d, s, 32-n, n, 31)`.
pub const fn srwi(rd: Gpr, rs: Gpr, n: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, 32 - n, n, 31, rc)
}

/// `clrlwi(d, s, n)` = `rlwinm(d, s, 0, n, 31)`.
pub const fn clrlwi(rd: Gpr, rs: Gpr, n: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, 0, n, 31, rc)
}

/// `clrrwi(d, s, n)` = `rlwinm(d, s, 0, 0, 31-n)`.
pub const fn clrrwi(rd: Gpr, rs: Gpr, n: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, 0, 0, 31 - n, rc)
}

/// `rotlwi(d, s, n)` = `rlwinm(d, s, n, 0, 31)`.
pub const fn rotlwi(rd: Gpr, rs: Gpr, n: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, n, 0, 31, rc)
}

/// `rotrwi(d, s, n)` = `rlwinm(d, s, 32-n, 0, 31)`.
pub const fn rotrwi(rd: Gpr, rs: Gpr, n: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, 32 - n, 0, 31, rc)
}

/// `extlwi(d, s, n, b)` = `rlwinm(d, s, b, 0, n-1)`.
pub const fn extlwi(rd: Gpr, rs: Gpr, n: u8, b: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, b, 0, n - 1, rc)
}

/// `extrwi(d, s, n, b)` = `rlwinm(d, s, b+n, 32-n, 31)`.
pub const fn extrwi(rd: Gpr, rs: Gpr, n: u8, b: u8, rc: bool) -> u32 {
    rlwinm(rd, rs, b + n, 32 - n, 31, rc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{R0, R1, R2, R3};

    #[test]
    fn add_matches_known_encoding() {
        // add r3, r4, r5 -> 7C 64 28 14 (from the PPC ISA manual's own
        // worked example for this mnemonic).
        let word = add(crate::reg::R3, crate::reg::R4, crate::reg::R5, false, false);
        // Field-level check: primary opcode 31, RT=3, RA=4, RB=5, XO=266.
        assert_eq!(word >> 26, 31);
        assert_eq!((word >> 21) & 0x1F, 3);
        assert_eq!((word >> 16) & 0x1F, 4);
        assert_eq!((word >> 11) & 0x1F, 5);
        assert_eq!((word >> 1) & 0x3FF, 266);
    }

    #[test]
    fn subf_is_b_minus_a() {
        let subf_word = subf(R3, R1, R2, false, false);
        let sub_word = sub(R3, R1, R2, false, false);
        // sub(rt, ra, rb) must equal subf(rt, rb, ra): operands swapped.
        assert_eq!(sub_word, subf(R3, R2, R1, false, false));
        assert_ne!(subf_word, sub_word);
    }

    #[test]
    fn addic_and_addic_rc_use_distinct_primary_opcodes() {
        let a = addic(R3, R4, 1);
        let b = addic_rc(R3, R4, 1);
        assert_eq!(a >> 26, 12);
        assert_eq!(b >> 26, 13);
    }

    #[test]
    fn rlwinm_aliases_match_raw_form() {
        assert_eq!(slwi(R3, R4, 5, false), rlwinm(R3, R4, 5, 0, 26, false));
        assert_eq!(srwi(R3, R4, 5, false), rlwinm(R3, R4, 27, 5, 31, false));
        assert_eq!(clrlwi(R3, R4, 5, false), rlwinm(R3, R4, 0, 5, 31, false));
        assert_eq!(clrrwi(R3, R4, 5, false), rlwinm(R3, R4, 0, 0, 26, false));
        assert_eq!(rotlwi(R3, R4, 5, false), rlwinm(R3, R4, 5, 0, 31, false));
        assert_eq!(rotrwi(R3, R4, 5, false), rlwinm(R3, R4, 27, 0, 31, false));
        assert_eq!(extlwi(R3, R4, 5, 2, false), rlwinm(R3, R4, 2, 0, 4, false));
        assert_eq!(extrwi(R3, R4, 5, 2, false), rlwinm(R3, R4, 7, 27, 31, false));
    }

    #[test]
    fn cmpi_places_cr_field_at_bits_23_25() {
        let word = cmpi(Cr::new(1), R0, -1);
        assert_eq!((word >> 23) & 0x7, 1);
    }
}
