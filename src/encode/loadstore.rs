//! Byte/halfword/word load-store encodings: immediate-offset, indexed,
//! update, byte-reversed, reserve (lwarx/stwcx.), and multiple-word forms.

use super::{d_form, fields3};
use crate::reg::Gpr;

use super::consts::*;

// ---- immediate-offset (D-form) -------------------------------------------

pub const fn lwz(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LWZ, rt.id(), ra.id(), offset as u16)
}

pub const fn lwzu(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LWZU, rt.id(), ra.id(), offset as u16)
}

pub const fn lbz(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LBZ, rt.id(), ra.id(), offset as u16)
}

pub const fn lbzu(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LBZU, rt.id(), ra.id(), offset as u16)
}

pub const fn stw(rs: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STW, rs.id(), ra.id(), offset as u16)
}

pub const fn stwu(rs: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STWU, rs.id(), ra.id(), offset as u16)
}

pub const fn stb(rs: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STB, rs.id(), ra.id(), offset as u16)
}

pub const fn stbu(rs: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STBU, rs.id(), ra.id(), offset as u16)
}

pub const fn lhz(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LHZ, rt.id(), ra.id(), offset as u16)
}

pub const fn lhzu(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LHZU, rt.id(), ra.id(), offset as u16)
}

pub const fn lha(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LHA, rt.id(), ra.id(), offset as u16)
}

pub const fn lhau(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LHAU, rt.id(), ra.id(), offset as u16)
}

pub const fn sth(rs: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STH, rs.id(), ra.id(), offset as u16)
}

pub const fn sthu(rs: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STHU, rs.id(), ra.id(), offset as u16)
}

pub const fn lmw(rt: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LMW, rt.id(), ra.id(), offset as u16)
}

pub const fn stmw(rs: Gpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STMW, rs.id(), ra.id(), offset as u16)
}

// ---- indexed (X-form) ------------------------------------------------------

const fn x_form(primary: u8, t: u8, a: u8, b: u8, xo: u16) -> u32 {
    fields3(primary, t, a, b) | ((xo as u32) << 1)
}

pub const fn lwzx(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LWZX)
}

pub const fn lwzux(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LWZUX)
}

pub const fn lbzx(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LBZX)
}

pub const fn lbzux(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LBZUX)
}

pub const fn stwx(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STWX)
}

pub const fn stwux(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STWUX)
}

pub const fn stbx(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STBX)
}

pub const fn stbux(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STBUX)
}

pub const fn lhzx(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LHZX)
}

pub const fn lhzux(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LHZUX)
}

pub const fn lhax(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LHAX)
}

pub const fn lhaux(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LHAUX)
}

pub const fn sthx(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STHX)
}

pub const fn sthux(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STHUX)
}

// ---- byte-reversed ----------------------------------------------------------

pub const fn lwbrx(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LWBRX)
}

pub const fn stwbrx(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STWBRX)
}

pub const fn lhbrx(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LHBRX)
}

pub const fn sthbrx(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STHBRX)
}

// ---- reserve (lwarx/stwcx.) ---------------------------------------------------

/// Load word and reserve. No record-bit parameter: the ISA defines only
/// the plain form.
pub const fn lwarx(rt: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rt.id(), ra.id(), rb.id(), XO_LWARX)
}

/// Store word conditional. Always the record form (`stwcx.`); the ISA does
/// not define a non-recording variant, so there is no `rc` parameter here.
pub const fn stwcx_rc(rs: Gpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, rs.id(), ra.id(), rb.id(), XO_STWCX_RC) | 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{R0, R1, R2, R3};

    #[test]
    fn lwz_matches_field_layout() {
        let word = lwz(R3, R1, 4);
        assert_eq!(word >> 26, 32);
        assert_eq!((word >> 21) & 0x1F, 3);
        assert_eq!((word >> 16) & 0x1F, 1);
        assert_eq!(word & 0xFFFF, 4);
    }

    #[test]
    fn stwcx_rc_always_sets_record_bit() {
        let word = stwcx_rc(R3, R0, R2);
        assert_eq!(word & 1, 1);
    }
}
