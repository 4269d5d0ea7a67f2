//! The small AltiVec subset named in spec: basic arithmetic/logical vector
//! ops, `vperm`, `vrefp`, and the stream-hint `dss`/`dssall` pair.
//!
//! This is a minimal slice of a large extension (the full AltiVec ISA runs
//! to hundreds of mnemonics); only what's named is implemented, following
//! the "design accommodates extension but does not mandate the full ISA"
//! stance.

use super::fields3;
use crate::reg::Vr;

use super::consts::{OP_PS, VPERM_OP, VXO_DSS, VXO_VADDFP, VXO_VAND, VXO_VANDC, VXO_VNOR, VXO_VOR, VXO_VREFP, VXO_VSUBFP, VXO_VXOR};

const fn vx_form(vd: Vr, va: Vr, vb: Vr, xo: u16) -> u32 {
    fields3(OP_PS, vd.id(), va.id(), vb.id()) | (xo as u32)
}

pub const fn vaddfp(vd: Vr, va: Vr, vb: Vr) -> u32 {
    vx_form(vd, va, vb, VXO_VADDFP)
}

pub const fn vsubfp(vd: Vr, va: Vr, vb: Vr) -> u32 {
    vx_form(vd, va, vb, VXO_VSUBFP)
}

pub const fn vand(vd: Vr, va: Vr, vb: Vr) -> u32 {
    vx_form(vd, va, vb, VXO_VAND)
}

pub const fn vandc(vd: Vr, va: Vr, vb: Vr) -> u32 {
    vx_form(vd, va, vb, VXO_VANDC)
}

pub const fn vor(vd: Vr, va: Vr, vb: Vr) -> u32 {
    vx_form(vd, va, vb, VXO_VOR)
}

pub const fn vnor(vd: Vr, va: Vr, vb: Vr) -> u32 {
    vx_form(vd, va, vb, VXO_VNOR)
}

pub const fn vxor(vd: Vr, va: Vr, vb: Vr) -> u32 {
    vx_form(vd, va, vb, VXO_VXOR)
}

pub const fn vrefp(vd: Vr, vb: Vr) -> u32 {
    vx_form(vd, Vr::new(0), vb, VXO_VREFP)
}

/// `vperm vD, vA, vB, vC`: VA-form, `vC` selects per-byte between `vA` and
/// `vB`.
pub const fn vperm(vd: Vr, va: Vr, vb: Vr, vc: Vr) -> u32 {
    fields3(OP_PS, vd.id(), va.id(), vb.id()) | ((vc.id() as u32) << 6) | (VPERM_OP as u32)
}

/// Data stream stop for one of the four stream ids (`0..=3`).
pub const fn dss(strm: u8) -> u32 {
    fields3(OP_PS, (strm & 0x3) << 2, 0, 0) | (VXO_DSS as u32)
}

/// Data stream stop, all four streams (the `A` bit set instead of a stream
/// id).
pub const fn dssall() -> u32 {
    fields3(OP_PS, 0x10, 0, 0) | (VXO_DSS as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{V0, V1, V2};

    #[test]
    fn vaddfp_uses_primary_four() {
        let word = vaddfp(V0, V1, V2);
        assert_eq!(word >> 26, 4);
    }

    #[test]
    fn dss_and_dssall_differ() {
        assert_ne!(dss(0), dssall());
    }
}
