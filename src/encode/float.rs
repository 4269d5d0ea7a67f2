//! Floating-point load/store, scalar arithmetic, and the Gekko/Broadway
//! paired-single extension.
//!
//! The four-operand forms (`fmadd` and friends) follow the convention fixed
//! in [`super::a_form`]: public signature `(dest, a, b, c)` means
//! `dest = a * c +/- b`. Two- and three-operand forms reuse the same
//! primitive with the unused slots zeroed, matching how the ISA itself
//! defines them as an A-form with some fields ignored rather than a
//! separate instruction format.

use super::{a_form, crf, d_form, fields3};
use crate::reg::{Cr, Fpr, Gpr};

use super::consts::*;

// ---- load/store (D-form) ---------------------------------------------------

pub const fn lfs(frt: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LFS, frt.id(), ra.id(), offset as u16)
}

pub const fn lfsu(frt: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LFSU, frt.id(), ra.id(), offset as u16)
}

pub const fn lfd(frt: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LFD, frt.id(), ra.id(), offset as u16)
}

pub const fn lfdu(frt: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_LFDU, frt.id(), ra.id(), offset as u16)
}

pub const fn stfs(frs: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STFS, frs.id(), ra.id(), offset as u16)
}

pub const fn stfsu(frs: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STFSU, frs.id(), ra.id(), offset as u16)
}

pub const fn stfd(frs: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STFD, frs.id(), ra.id(), offset as u16)
}

pub const fn stfdu(frs: Fpr, ra: Gpr, offset: i16) -> u32 {
    d_form(OP_STFDU, frs.id(), ra.id(), offset as u16)
}

// ---- indexed load/store (X-form) ------------------------------------------

const fn x_form(primary: u8, t: u8, a: u8, b: u8, xo: u16) -> u32 {
    fields3(primary, t, a, b) | ((xo as u32) << 1)
}

pub const fn lfsx(frt: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frt.id(), ra.id(), rb.id(), XO_LFSX)
}

pub const fn lfsux(frt: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frt.id(), ra.id(), rb.id(), XO_LFSUX)
}

pub const fn lfdx(frt: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frt.id(), ra.id(), rb.id(), XO_LFDX)
}

pub const fn lfdux(frt: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frt.id(), ra.id(), rb.id(), XO_LFDUX)
}

pub const fn stfsx(frs: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frs.id(), ra.id(), rb.id(), XO_STFSX)
}

pub const fn stfsux(frs: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frs.id(), ra.id(), rb.id(), XO_STFSUX)
}

pub const fn stfdx(frs: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frs.id(), ra.id(), rb.id(), XO_STFDX)
}

pub const fn stfdux(frs: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frs.id(), ra.id(), rb.id(), XO_STFDUX)
}

pub const fn stfiwx(frs: Fpr, ra: Gpr, rb: Gpr) -> u32 {
    x_form(OP_X31, frs.id(), ra.id(), rb.id(), XO_STFIWX)
}

// ---- scalar arithmetic: double precision (primary 63) ---------------------

pub const fn fadd(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), fra.id(), frb.id(), 0, XO_FADD, rc)
}

pub const fn fsub(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), fra.id(), frb.id(), 0, XO_FSUB, rc)
}

pub const fn fmul(frt: Fpr, fra: Fpr, frc: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), fra.id(), 0, frc.id(), XO_FMUL, rc)
}

pub const fn fdiv(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), fra.id(), frb.id(), 0, XO_FDIV, rc)
}

/// `dest = a * c + b`.
pub const fn fmadd(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, dest.id(), a.id(), b.id(), c.id(), XO_FMADD, rc)
}

/// `dest = a * c - b`.
pub const fn fmsub(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, dest.id(), a.id(), b.id(), c.id(), XO_FMSUB, rc)
}

/// `dest = -(a * c - b)`.
pub const fn fnmsub(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, dest.id(), a.id(), b.id(), c.id(), XO_FNMSUB, rc)
}

/// `dest = -(a * c + b)`.
pub const fn fnmadd(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, dest.id(), a.id(), b.id(), c.id(), XO_FNMADD, rc)
}

/// `dest = (a >= 0.0) ? c : b`.
pub const fn fsel(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, dest.id(), a.id(), b.id(), c.id(), XO_FSEL, rc)
}

pub const fn fres(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, frt.id(), 0, frb.id(), 0, XO_FRES, rc)
}

/// Reciprocal square root estimate. The reference source also defines a
/// misspelled `frsqte`; only the ISA-correct name is exposed here.
pub const fn frsqrte(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), 0, XO_FRSQRTE, rc)
}

pub const fn fneg(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), 0, XO_FNEG, rc)
}

pub const fn fmr(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), 0, XO_FMR, rc)
}

pub const fn fnabs(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), 0, XO_FNABS, rc)
}

pub const fn fabs(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    x_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), XO_FABS) | (rc as u32)
}

pub const fn fctiw(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), 0, XO_FCTIW, rc)
}

pub const fn fctiwz(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), 0, XO_FCTIWZ, rc)
}

pub const fn frsp(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_DOUBLE, frt.id(), 0, frb.id(), 0, XO_FRSP, rc)
}

pub const fn fcmpu(cr: Cr, fra: Fpr, frb: Fpr) -> u32 {
    fields3(OP_FLOAT_DOUBLE, crf(cr), fra.id(), frb.id()) | ((XO_FCMPU as u32) << 1)
}

pub const fn fcmpo(cr: Cr, fra: Fpr, frb: Fpr) -> u32 {
    fields3(OP_FLOAT_DOUBLE, crf(cr), fra.id(), frb.id()) | ((XO_FCMPO as u32) << 1)
}

pub const fn mffs(frt: Fpr, rc: bool) -> u32 {
    x_form(OP_FLOAT_DOUBLE, frt.id(), 0, 0, XO_MFFS) | (rc as u32)
}

/// `mtfsf(flm, frb)`: `flm` is the 8-bit field mask selecting which of the
/// eight FPSCR fields are updated from `frb`.
pub const fn mtfsf(flm: u8, frb: Fpr, rc: bool) -> u32 {
    ((OP_FLOAT_DOUBLE as u32) << 26)
        | ((flm as u32) << 17)
        | ((frb.id() as u32) << 11)
        | ((XO_MTFSF as u32) << 1)
        | (rc as u32)
}

// ---- scalar arithmetic: single precision (primary 59) ----------------------
// Same extended-opcode numbers as the double-precision forms; only the
// primary opcode differs.

pub const fn fadds(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, frt.id(), fra.id(), frb.id(), 0, XO_FADD, rc)
}

pub const fn fsubs(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, frt.id(), fra.id(), frb.id(), 0, XO_FSUB, rc)
}

pub const fn fmuls(frt: Fpr, fra: Fpr, frc: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, frt.id(), fra.id(), 0, frc.id(), XO_FMUL, rc)
}

pub const fn fdivs(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, frt.id(), fra.id(), frb.id(), 0, XO_FDIV, rc)
}

pub const fn fmadds(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, dest.id(), a.id(), b.id(), c.id(), XO_FMADD, rc)
}

pub const fn fmsubs(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, dest.id(), a.id(), b.id(), c.id(), XO_FMSUB, rc)
}

pub const fn fnmadds(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, dest.id(), a.id(), b.id(), c.id(), XO_FNMADD, rc)
}

pub const fn fnmsubs(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_FLOAT_SINGLE, dest.id(), a.id(), b.id(), c.id(), XO_FNMSUB, rc)
}

// ---- paired single (Gekko/Broadway, primary 4) -----------------------------

pub const fn ps_add(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), fra.id(), frb.id(), 0, XO_PS_ADD, rc)
}

pub const fn ps_sub(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), fra.id(), frb.id(), 0, XO_PS_SUB, rc)
}

pub const fn ps_mul(frt: Fpr, fra: Fpr, frc: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), fra.id(), 0, frc.id(), XO_PS_MUL, rc)
}

pub const fn ps_div(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), fra.id(), frb.id(), 0, XO_PS_DIV, rc)
}

pub const fn ps_madd(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, dest.id(), a.id(), b.id(), c.id(), XO_PS_MADD, rc)
}

pub const fn ps_msub(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, dest.id(), a.id(), b.id(), c.id(), XO_PS_MSUB, rc)
}

pub const fn ps_nmadd(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, dest.id(), a.id(), b.id(), c.id(), XO_PS_NMADD, rc)
}

pub const fn ps_nmsub(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, dest.id(), a.id(), b.id(), c.id(), XO_PS_NMSUB, rc)
}

pub const fn ps_sel(dest: Fpr, a: Fpr, b: Fpr, c: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, dest.id(), a.id(), b.id(), c.id(), XO_PS_SEL, rc)
}

pub const fn ps_res(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), 0, frb.id(), 0, XO_PS_RES, rc)
}

pub const fn ps_rsqrte(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), 0, frb.id(), 0, XO_PS_RSQRTE, rc)
}

pub const fn ps_neg(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), 0, frb.id(), 0, XO_PS_NEG, rc)
}

pub const fn ps_mr(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), 0, frb.id(), 0, XO_PS_MR, rc)
}

pub const fn ps_abs(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    x_form(OP_PS, frt.id(), 0, frb.id(), XO_PS_ABS) | (rc as u32)
}

pub const fn ps_nabs(frt: Fpr, frb: Fpr, rc: bool) -> u32 {
    a_form(OP_PS, frt.id(), 0, frb.id(), 0, XO_PS_NABS, rc)
}

pub const fn ps_cmpu0(cr: Cr, fra: Fpr, frb: Fpr) -> u32 {
    fields3(OP_PS, crf(cr), fra.id(), frb.id()) | ((XO_PS_CMPU0 as u32) << 1)
}

pub const fn ps_cmpo0(cr: Cr, fra: Fpr, frb: Fpr) -> u32 {
    fields3(OP_PS, crf(cr), fra.id(), frb.id()) | ((XO_PS_CMPO0 as u32) << 1)
}

pub const fn ps_cmpu1(cr: Cr, fra: Fpr, frb: Fpr) -> u32 {
    fields3(OP_PS, crf(cr), fra.id(), frb.id()) | ((XO_PS_CMPU1 as u32) << 1)
}

pub const fn ps_cmpo1(cr: Cr, fra: Fpr, frb: Fpr) -> u32 {
    fields3(OP_PS, crf(cr), fra.id(), frb.id()) | ((XO_PS_CMPO1 as u32) << 1)
}

pub const fn ps_merge00(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    x_form(OP_PS, frt.id(), fra.id(), frb.id(), XO_PS_MERGE00) | (rc as u32)
}

pub const fn ps_merge01(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    x_form(OP_PS, frt.id(), fra.id(), frb.id(), XO_PS_MERGE01) | (rc as u32)
}

pub const fn ps_merge10(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    x_form(OP_PS, frt.id(), fra.id(), frb.id(), XO_PS_MERGE10) | (rc as u32)
}

pub const fn ps_merge11(frt: Fpr, fra: Fpr, frb: Fpr, rc: bool) -> u32 {
    x_form(OP_PS, frt.id(), fra.id(), frb.id(), XO_PS_MERGE11) | (rc as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{F1, F2, F3, F4};

    #[test]
    fn fmadd_places_operands_per_spec_convention() {
        // dest = a*c + b: a at <<16 (fra slot), b at <<11 (frb slot), c at
        // <<6 (frc slot).
        let word = fmadd(F1, F2, F3, F4, false);
        assert_eq!((word >> 16) & 0x1F, 2);
        assert_eq!((word >> 11) & 0x1F, 3);
        assert_eq!((word >> 6) & 0x1F, 4);
    }

    #[test]
    fn fadd_and_fadds_share_extended_opcode() {
        let double = fadd(F1, F2, F3, false);
        let single = fadds(F1, F2, F3, false);
        assert_eq!((double >> 1) & 0x1F, (single >> 1) & 0x1F);
        assert_ne!(double >> 26, single >> 26);
    }
}
