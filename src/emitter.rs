//! The public façade: one operation per mnemonic, plus pseudo-ops and
//! directives built out of them.
//!
//! Every method here does exactly one of two things: compute a word via
//! [`crate::encode`] and append it, or call other `Emitter` methods. Nothing
//! in this file touches buffer internals directly except through
//! [`Buffer`]'s own public API — the encoder/buffer split spec calls for is
//! preserved at the type level, not just by convention.

use crate::buffer::{Buffer, GrowthMode};
use crate::cond::{BranchKind, ConditionCode};
use crate::encode;
use crate::error::{fatal, AsmError};
use crate::label::{self, Label};
use crate::reg::{Cr, Fpr, Gpr, Sr, Vr, R0};

/// The assembler. Owns a [`Buffer`] and exposes one method per PPC mnemonic
/// plus the pseudo-op and directive layer spec.md §4.4/§4.5 describe.
///
/// Deliberately `!Sync`-by-convention: nothing here adds cross-thread
/// coordination, so sharing one instance across threads is a caller bug the
/// type system does not prevent (see spec.md §5).
pub struct Emitter {
    buffer: Buffer,
}

// ---- construction & buffer accessors ---------------------------------------

impl Emitter {
    /// A library-owned, `FixedSize` emitter of `bytes` bytes.
    pub fn new(bytes: usize) -> Self {
        Emitter {
            buffer: Buffer::new(bytes),
        }
    }

    /// A library-owned, `AutoGrow` emitter.
    pub fn new_auto_grow(initial_bytes: usize, grow_step: usize) -> Self {
        Emitter {
            buffer: Buffer::new_auto_grow(initial_bytes, grow_step),
        }
    }

    /// Wraps a caller-supplied region. See [`Buffer::from_raw_parts`] for
    /// the safety contract.
    ///
    /// # Safety
    /// Same contract as [`Buffer::from_raw_parts`].
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Self {
        Emitter {
            buffer: Buffer::from_raw_parts(ptr, len),
        }
    }

    pub fn set_growth_mode(&mut self, mode: GrowthMode) {
        self.buffer.set_growth_mode(mode);
    }

    pub fn base_ptr(&self) -> *const u8 {
        self.buffer.base_ptr()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Current Instruction Address: where the next emitted word will land.
    pub fn current_address(&self) -> usize {
        self.buffer.current_address()
    }

    pub fn used(&self) -> usize {
        self.buffer.used()
    }

    pub fn reserved(&self) -> usize {
        self.buffer.reserved()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Writes the emitted bytes to `path`, no header, exactly as they sit in
    /// the buffer (big-endian, per the PPC target).
    #[cfg(feature = "std")]
    pub fn dump<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.as_slice())
    }

    /// The extension point: user wrapper types compose an `Emitter` and
    /// call this (or [`Emitter::emit_bytes`]) to append mnemonics this
    /// crate doesn't define, the same way every method below is built.
    pub fn emit_word(&mut self, word: u32) -> &mut Self {
        self.buffer.append_u32(word);
        self
    }

    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.append_bytes(bytes);
        self
    }
}

// ---- macros for the repetitive mnemonic shapes ------------------------------

macro_rules! wrap3_oe_rc {
    ($name:ident, $enc:path) => {
        pub fn $name(&mut self, rt: Gpr, ra: Gpr, rb: Gpr, oe: bool, rc: bool) -> &mut Self {
            self.emit_word($enc(rt, ra, rb, oe, rc))
        }
    };
}

macro_rules! wrap2_oe_rc {
    ($name:ident, $enc:path) => {
        pub fn $name(&mut self, rt: Gpr, ra: Gpr, oe: bool, rc: bool) -> &mut Self {
            self.emit_word($enc(rt, ra, oe, rc))
        }
    };
}

macro_rules! wrap3_rc {
    ($name:ident, $enc:path, $reg:ty) => {
        pub fn $name(&mut self, d: $reg, a: $reg, b: $reg, rc: bool) -> &mut Self {
            self.emit_word($enc(d, a, b, rc))
        }
    };
}

macro_rules! wrap2_rc {
    ($name:ident, $enc:path, $reg:ty) => {
        pub fn $name(&mut self, d: $reg, s: $reg, rc: bool) -> &mut Self {
            self.emit_word($enc(d, s, rc))
        }
    };
}

macro_rules! wrap4_rc {
    ($name:ident, $enc:path, $reg:ty) => {
        pub fn $name(&mut self, dest: $reg, a: $reg, b: $reg, c: $reg, rc: bool) -> &mut Self {
            self.emit_word($enc(dest, a, b, c, rc))
        }
    };
}

macro_rules! wrap_d_imm {
    ($name:ident, $enc:path, $imm:ty) => {
        pub fn $name(&mut self, rt: Gpr, ra: Gpr, imm: $imm) -> &mut Self {
            self.emit_word($enc(rt, ra, imm))
        }
    };
}

macro_rules! wrap_ls_d {
    ($name:ident, $enc:path, $reg:ty) => {
        pub fn $name(&mut self, rt: $reg, ra: Gpr, offset: i16) -> &mut Self {
            self.emit_word($enc(rt, ra, offset))
        }
    };
}

macro_rules! wrap_ls_x {
    ($name:ident, $enc:path, $reg:ty) => {
        pub fn $name(&mut self, rt: $reg, ra: Gpr, rb: Gpr) -> &mut Self {
            self.emit_word($enc(rt, ra, rb))
        }
    };
}

macro_rules! wrap3_plain {
    ($name:ident, $enc:path, $reg:ty) => {
        pub fn $name(&mut self, d: $reg, a: $reg, b: $reg) -> &mut Self {
            self.emit_word($enc(d, a, b))
        }
    };
}

macro_rules! wrap2_plain {
    ($name:ident, $enc:path) => {
        pub fn $name(&mut self, ra: Gpr, rb: Gpr) -> &mut Self {
            self.emit_word($enc(ra, rb))
        }
    };
}

macro_rules! wrap1_plain {
    ($name:ident, $enc:path) => {
        pub fn $name(&mut self, r: Gpr) -> &mut Self {
            self.emit_word($enc(r))
        }
    };
}

macro_rules! wrap0 {
    ($name:ident, $enc:path) => {
        pub fn $name(&mut self) -> &mut Self {
            self.emit_word($enc())
        }
    };
}

// ---- integer arithmetic ------------------------------------------------------

impl Emitter {
    wrap3_oe_rc!(add, encode::integer::add);
    wrap3_oe_rc!(addc, encode::integer::addc);
    wrap3_oe_rc!(adde, encode::integer::adde);
    wrap2_oe_rc!(addme, encode::integer::addme);
    wrap2_oe_rc!(addze, encode::integer::addze);
    wrap3_oe_rc!(subf, encode::integer::subf);
    wrap3_oe_rc!(sub, encode::integer::sub);
    wrap3_oe_rc!(subfc, encode::integer::subfc);
    wrap3_oe_rc!(subfe, encode::integer::subfe);
    wrap2_oe_rc!(subfme, encode::integer::subfme);
    wrap2_oe_rc!(subfze, encode::integer::subfze);
    wrap2_oe_rc!(neg, encode::integer::neg);

    wrap_d_imm!(addi, encode::integer::addi, i16);
    wrap_d_imm!(addis, encode::integer::addis, i16);
    wrap_d_imm!(addic, encode::integer::addic, i16);
    wrap_d_imm!(addic_rc, encode::integer::addic_rc, i16);
    wrap_d_imm!(subfic, encode::integer::subfic, i16);
    wrap_d_imm!(mulli, encode::integer::mulli, i16);

    pub fn mulhw(&mut self, rt: Gpr, ra: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::mulhw(rt, ra, rb, rc))
    }
    pub fn mulhwu(&mut self, rt: Gpr, ra: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::mulhwu(rt, ra, rb, rc))
    }
    wrap3_oe_rc!(mullw, encode::integer::mullw);
    wrap3_oe_rc!(divw, encode::integer::divw);
    wrap3_oe_rc!(divwu, encode::integer::divwu);

    pub fn and_(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::and_(ra, rs, rb, rc))
    }
    pub fn or_(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::or_(ra, rs, rb, rc))
    }
    pub fn xor_(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::xor_(ra, rs, rb, rc))
    }
    pub fn nand_(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::nand_(ra, rs, rb, rc))
    }
    pub fn nor_(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::nor_(ra, rs, rb, rc))
    }
    pub fn eqv(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::eqv(ra, rs, rb, rc))
    }
    pub fn andc(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::andc(ra, rs, rb, rc))
    }
    pub fn orc(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::orc(ra, rs, rb, rc))
    }
    pub fn extsb(&mut self, ra: Gpr, rs: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::extsb(ra, rs, rc))
    }
    pub fn extsh(&mut self, ra: Gpr, rs: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::extsh(ra, rs, rc))
    }
    pub fn cntlzw(&mut self, ra: Gpr, rs: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::cntlzw(ra, rs, rc))
    }

    pub fn andi_rc(&mut self, ra: Gpr, rs: Gpr, imm: u16) -> &mut Self {
        self.emit_word(encode::integer::andi_rc(ra, rs, imm))
    }
    pub fn andis_rc(&mut self, ra: Gpr, rs: Gpr, imm: u16) -> &mut Self {
        self.emit_word(encode::integer::andis_rc(ra, rs, imm))
    }
    pub fn ori(&mut self, ra: Gpr, rs: Gpr, imm: u16) -> &mut Self {
        self.emit_word(encode::integer::ori(ra, rs, imm))
    }
    pub fn oris(&mut self, ra: Gpr, rs: Gpr, imm: u16) -> &mut Self {
        self.emit_word(encode::integer::oris(ra, rs, imm))
    }
    pub fn xori(&mut self, ra: Gpr, rs: Gpr, imm: u16) -> &mut Self {
        self.emit_word(encode::integer::xori(ra, rs, imm))
    }
    pub fn xoris(&mut self, ra: Gpr, rs: Gpr, imm: u16) -> &mut Self {
        self.emit_word(encode::integer::xoris(ra, rs, imm))
    }

    pub fn slw(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::slw(ra, rs, rb, rc))
    }
    pub fn srw(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::srw(ra, rs, rb, rc))
    }
    pub fn sraw(&mut self, ra: Gpr, rs: Gpr, rb: Gpr, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::sraw(ra, rs, rb, rc))
    }
    pub fn srawi(&mut self, ra: Gpr, rs: Gpr, sh: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::srawi(ra, rs, sh, rc))
    }

    pub fn cmp(&mut self, cr: Cr, ra: Gpr, rb: Gpr) -> &mut Self {
        self.emit_word(encode::integer::cmp(cr, ra, rb))
    }
    pub fn cmpl(&mut self, cr: Cr, ra: Gpr, rb: Gpr) -> &mut Self {
        self.emit_word(encode::integer::cmpl(cr, ra, rb))
    }
    pub fn cmpi(&mut self, cr: Cr, ra: Gpr, imm: i16) -> &mut Self {
        self.emit_word(encode::integer::cmpi(cr, ra, imm))
    }
    pub fn cmpli(&mut self, cr: Cr, ra: Gpr, imm: u16) -> &mut Self {
        self.emit_word(encode::integer::cmpli(cr, ra, imm))
    }

    /// Ambient convenience: `cmpwi` against CR0, trailing underscore per the
    /// crate's Rust-keyword-collision convention.
    pub fn cmpwi_(&mut self, cr: Cr, ra: Gpr, imm: i16) -> &mut Self {
        self.cmpi(cr, ra, imm)
    }
    /// Ambient convenience: `cmplwi` against CR0.
    pub fn cmplwi_(&mut self, cr: Cr, ra: Gpr, imm: u16) -> &mut Self {
        self.cmpli(cr, ra, imm)
    }

    pub fn rlwinm(&mut self, rd: Gpr, rs: Gpr, sh: u8, mb: u8, me: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::rlwinm(rd, rs, sh, mb, me, rc))
    }
    pub fn rlwimi(&mut self, rd: Gpr, rs: Gpr, sh: u8, mb: u8, me: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::rlwimi(rd, rs, sh, mb, me, rc))
    }
    pub fn rlwnm(&mut self, rd: Gpr, rs: Gpr, rb: Gpr, mb: u8, me: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::rlwnm(rd, rs, rb, mb, me, rc))
    }
    pub fn slwi(&mut self, rd: Gpr, rs: Gpr, n: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::slwi(rd, rs, n, rc))
    }
    pub fn srwi(&mut self, rd: Gpr, rs: Gpr, n: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::srwi(rd, rs, n, rc))
    }
    pub fn clrlwi(&mut self, rd: Gpr, rs: Gpr, n: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::clrlwi(rd, rs, n, rc))
    }
    pub fn clrrwi(&mut self, rd: Gpr, rs: Gpr, n: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::clrrwi(rd, rs, n, rc))
    }
    pub fn rotlwi(&mut self, rd: Gpr, rs: Gpr, n: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::rotlwi(rd, rs, n, rc))
    }
    pub fn rotrwi(&mut self, rd: Gpr, rs: Gpr, n: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::rotrwi(rd, rs, n, rc))
    }
    pub fn extlwi(&mut self, rd: Gpr, rs: Gpr, n: u8, b: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::extlwi(rd, rs, n, b, rc))
    }
    pub fn extrwi(&mut self, rd: Gpr, rs: Gpr, n: u8, b: u8, rc: bool) -> &mut Self {
        self.emit_word(encode::integer::extrwi(rd, rs, n, b, rc))
    }
}

// ---- load/store ---------------------------------------------------------------

impl Emitter {
    wrap_ls_d!(lwz, encode::loadstore::lwz, Gpr);
    wrap_ls_d!(lwzu, encode::loadstore::lwzu, Gpr);
    wrap_ls_d!(lbz, encode::loadstore::lbz, Gpr);
    wrap_ls_d!(lbzu, encode::loadstore::lbzu, Gpr);
    wrap_ls_d!(stw, encode::loadstore::stw, Gpr);
    wrap_ls_d!(stwu, encode::loadstore::stwu, Gpr);
    wrap_ls_d!(stb, encode::loadstore::stb, Gpr);
    wrap_ls_d!(stbu, encode::loadstore::stbu, Gpr);
    wrap_ls_d!(lhz, encode::loadstore::lhz, Gpr);
    wrap_ls_d!(lhzu, encode::loadstore::lhzu, Gpr);
    wrap_ls_d!(lha, encode::loadstore::lha, Gpr);
    wrap_ls_d!(lhau, encode::loadstore::lhau, Gpr);
    wrap_ls_d!(sth, encode::loadstore::sth, Gpr);
    wrap_ls_d!(sthu, encode::loadstore::sthu, Gpr);
    wrap_ls_d!(lmw, encode::loadstore::lmw, Gpr);
    wrap_ls_d!(stmw, encode::loadstore::stmw, Gpr);

    wrap_ls_x!(lwzx, encode::loadstore::lwzx, Gpr);
    wrap_ls_x!(lwzux, encode::loadstore::lwzux, Gpr);
    wrap_ls_x!(lbzx, encode::loadstore::lbzx, Gpr);
    wrap_ls_x!(lbzux, encode::loadstore::lbzux, Gpr);
    wrap_ls_x!(stwx, encode::loadstore::stwx, Gpr);
    wrap_ls_x!(stwux, encode::loadstore::stwux, Gpr);
    wrap_ls_x!(stbx, encode::loadstore::stbx, Gpr);
    wrap_ls_x!(stbux, encode::loadstore::stbux, Gpr);
    wrap_ls_x!(lhzx, encode::loadstore::lhzx, Gpr);
    wrap_ls_x!(lhzux, encode::loadstore::lhzux, Gpr);
    wrap_ls_x!(lhax, encode::loadstore::lhax, Gpr);
    wrap_ls_x!(lhaux, encode::loadstore::lhaux, Gpr);
    wrap_ls_x!(sthx, encode::loadstore::sthx, Gpr);
    wrap_ls_x!(sthux, encode::loadstore::sthux, Gpr);
    wrap_ls_x!(lwbrx, encode::loadstore::lwbrx, Gpr);
    wrap_ls_x!(stwbrx, encode::loadstore::stwbrx, Gpr);
    wrap_ls_x!(lhbrx, encode::loadstore::lhbrx, Gpr);
    wrap_ls_x!(sthbrx, encode::loadstore::sthbrx, Gpr);
    wrap_ls_x!(lwarx, encode::loadstore::lwarx, Gpr);

    pub fn stwcx_rc(&mut self, rs: Gpr, ra: Gpr, rb: Gpr) -> &mut Self {
        self.emit_word(encode::loadstore::stwcx_rc(rs, ra, rb))
    }
}

// ---- condition-register ops & system-register moves ----------------------------

impl Emitter {
    pub fn crand(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::crand(bt, ba, bb))
    }
    pub fn cror(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::cror(bt, ba, bb))
    }
    pub fn crxor(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::crxor(bt, ba, bb))
    }
    pub fn crnand(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::crnand(bt, ba, bb))
    }
    pub fn crnor(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::crnor(bt, ba, bb))
    }
    pub fn creqv(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::creqv(bt, ba, bb))
    }
    pub fn crandc(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::crandc(bt, ba, bb))
    }
    pub fn crorc(&mut self, bt: u8, ba: u8, bb: u8) -> &mut Self {
        self.emit_word(encode::sysreg::crorc(bt, ba, bb))
    }
    pub fn mcrf(&mut self, bf: Cr, bfa: Cr) -> &mut Self {
        self.emit_word(encode::sysreg::mcrf(bf, bfa))
    }

    wrap1_plain!(mflr, encode::sysreg::mflr);
    wrap1_plain!(mtlr, encode::sysreg::mtlr);
    wrap1_plain!(mfctr, encode::sysreg::mfctr);
    wrap1_plain!(mtctr, encode::sysreg::mtctr);
    wrap1_plain!(mfcr, encode::sysreg::mfcr);
    wrap1_plain!(mfmsr, encode::sysreg::mfmsr);
    wrap1_plain!(mtmsr, encode::sysreg::mtmsr);

    pub fn mfspr(&mut self, rt: Gpr, spr: u16) -> &mut Self {
        self.emit_word(encode::sysreg::mfspr(rt, spr))
    }
    pub fn mtspr(&mut self, spr: u16, rs: Gpr) -> &mut Self {
        self.emit_word(encode::sysreg::mtspr(spr, rs))
    }
    pub fn mtcrf(&mut self, fxm: u8, rs: Gpr) -> &mut Self {
        self.emit_word(encode::sysreg::mtcrf(fxm, rs))
    }
    pub fn mfsr(&mut self, rt: Gpr, sr: Sr) -> &mut Self {
        self.emit_word(encode::sysreg::mfsr(rt, sr))
    }
    pub fn mtsr(&mut self, sr: Sr, rs: Gpr) -> &mut Self {
        self.emit_word(encode::sysreg::mtsr(sr, rs))
    }
    pub fn mfsrin(&mut self, rt: Gpr, rb: Gpr) -> &mut Self {
        self.emit_word(encode::sysreg::mfsrin(rt, rb))
    }
    pub fn mtsrin(&mut self, rs: Gpr, rb: Gpr) -> &mut Self {
        self.emit_word(encode::sysreg::mtsrin(rs, rb))
    }
}

// ---- cache / TLB / misc system --------------------------------------------------

impl Emitter {
    wrap2_plain!(icbi, encode::cache::icbi);
    wrap2_plain!(dcbf, encode::cache::dcbf);
    wrap2_plain!(dcbi, encode::cache::dcbi);
    wrap2_plain!(dcbst, encode::cache::dcbst);
    wrap2_plain!(dcbt, encode::cache::dcbt);
    wrap2_plain!(dcbtst, encode::cache::dcbtst);
    wrap2_plain!(dcbz, encode::cache::dcbz);
    wrap2_plain!(dcbz_l, encode::cache::dcbz_l);

    pub fn tlbie(&mut self, rb: Gpr) -> &mut Self {
        self.emit_word(encode::cache::tlbie(rb))
    }

    wrap0!(tlbsync, encode::cache::tlbsync);
    wrap0!(sync, encode::cache::sync);
    wrap0!(eieio, encode::cache::eieio);
    wrap0!(isync, encode::cache::isync);
    wrap0!(rfi, encode::cache::rfi);
    wrap0!(sc, encode::cache::sc);

    pub fn tw(&mut self, to: u8, ra: Gpr, rb: Gpr) -> &mut Self {
        self.emit_word(encode::cache::tw(to, ra, rb))
    }

    /// Ambient pseudo-op: the unconditional trap, `tw 31, r0, r0`. Distinct
    /// from [`Emitter::ud`]: `ud` is an illegal opcode meant never to be
    /// decoded, `trap` is a deliberate trap exception.
    pub fn trap(&mut self) -> &mut Self {
        self.tw(31, R0, R0)
    }
}

// ---- floating point ----------------------------------------------------------

impl Emitter {
    wrap_ls_d!(lfs, encode::float::lfs, Fpr);
    wrap_ls_d!(lfsu, encode::float::lfsu, Fpr);
    wrap_ls_d!(lfd, encode::float::lfd, Fpr);
    wrap_ls_d!(lfdu, encode::float::lfdu, Fpr);
    wrap_ls_d!(stfs, encode::float::stfs, Fpr);
    wrap_ls_d!(stfsu, encode::float::stfsu, Fpr);
    wrap_ls_d!(stfd, encode::float::stfd, Fpr);
    wrap_ls_d!(stfdu, encode::float::stfdu, Fpr);

    wrap_ls_x!(lfsx, encode::float::lfsx, Fpr);
    wrap_ls_x!(lfsux, encode::float::lfsux, Fpr);
    wrap_ls_x!(lfdx, encode::float::lfdx, Fpr);
    wrap_ls_x!(lfdux, encode::float::lfdux, Fpr);
    wrap_ls_x!(stfsx, encode::float::stfsx, Fpr);
    wrap_ls_x!(stfsux, encode::float::stfsux, Fpr);
    wrap_ls_x!(stfdx, encode::float::stfdx, Fpr);
    wrap_ls_x!(stfdux, encode::float::stfdux, Fpr);
    wrap_ls_x!(stfiwx, encode::float::stfiwx, Fpr);

    wrap3_rc!(fadd, encode::float::fadd, Fpr);
    wrap3_rc!(fsub, encode::float::fsub, Fpr);
    wrap3_rc!(fmul, encode::float::fmul, Fpr);
    wrap3_rc!(fdiv, encode::float::fdiv, Fpr);
    wrap4_rc!(fmadd, encode::float::fmadd, Fpr);
    wrap4_rc!(fmsub, encode::float::fmsub, Fpr);
    wrap4_rc!(fnmsub, encode::float::fnmsub, Fpr);
    wrap4_rc!(fnmadd, encode::float::fnmadd, Fpr);
    wrap4_rc!(fsel, encode::float::fsel, Fpr);
    wrap2_rc!(fres, encode::float::fres, Fpr);
    wrap2_rc!(frsqrte, encode::float::frsqrte, Fpr);
    wrap2_rc!(fneg, encode::float::fneg, Fpr);
    wrap2_rc!(fmr, encode::float::fmr, Fpr);
    wrap2_rc!(fnabs, encode::float::fnabs, Fpr);
    wrap2_rc!(fabs, encode::float::fabs, Fpr);
    wrap2_rc!(fctiw, encode::float::fctiw, Fpr);
    wrap2_rc!(fctiwz, encode::float::fctiwz, Fpr);
    wrap2_rc!(frsp, encode::float::frsp, Fpr);

    pub fn fcmpu(&mut self, cr: Cr, fra: Fpr, frb: Fpr) -> &mut Self {
        self.emit_word(encode::float::fcmpu(cr, fra, frb))
    }
    pub fn fcmpo(&mut self, cr: Cr, fra: Fpr, frb: Fpr) -> &mut Self {
        self.emit_word(encode::float::fcmpo(cr, fra, frb))
    }
    pub fn mffs(&mut self, frt: Fpr, rc: bool) -> &mut Self {
        self.emit_word(encode::float::mffs(frt, rc))
    }
    pub fn mtfsf(&mut self, flm: u8, frb: Fpr, rc: bool) -> &mut Self {
        self.emit_word(encode::float::mtfsf(flm, frb, rc))
    }

    wrap3_rc!(fadds, encode::float::fadds, Fpr);
    wrap3_rc!(fsubs, encode::float::fsubs, Fpr);
    wrap3_rc!(fmuls, encode::float::fmuls, Fpr);
    wrap3_rc!(fdivs, encode::float::fdivs, Fpr);
    wrap4_rc!(fmadds, encode::float::fmadds, Fpr);
    wrap4_rc!(fmsubs, encode::float::fmsubs, Fpr);
    wrap4_rc!(fnmadds, encode::float::fnmadds, Fpr);
    wrap4_rc!(fnmsubs, encode::float::fnmsubs, Fpr);

    wrap3_rc!(ps_add, encode::float::ps_add, Fpr);
    wrap3_rc!(ps_sub, encode::float::ps_sub, Fpr);
    wrap3_rc!(ps_mul, encode::float::ps_mul, Fpr);
    wrap3_rc!(ps_div, encode::float::ps_div, Fpr);
    wrap4_rc!(ps_madd, encode::float::ps_madd, Fpr);
    wrap4_rc!(ps_msub, encode::float::ps_msub, Fpr);
    wrap4_rc!(ps_nmadd, encode::float::ps_nmadd, Fpr);
    wrap4_rc!(ps_nmsub, encode::float::ps_nmsub, Fpr);
    wrap4_rc!(ps_sel, encode::float::ps_sel, Fpr);
    wrap2_rc!(ps_res, encode::float::ps_res, Fpr);
    wrap2_rc!(ps_rsqrte, encode::float::ps_rsqrte, Fpr);
    wrap2_rc!(ps_neg, encode::float::ps_neg, Fpr);
    wrap2_rc!(ps_mr, encode::float::ps_mr, Fpr);
    wrap2_rc!(ps_abs, encode::float::ps_abs, Fpr);
    wrap2_rc!(ps_nabs, encode::float::ps_nabs, Fpr);
    wrap3_rc!(ps_merge00, encode::float::ps_merge00, Fpr);
    wrap3_rc!(ps_merge01, encode::float::ps_merge01, Fpr);
    wrap3_rc!(ps_merge10, encode::float::ps_merge10, Fpr);
    wrap3_rc!(ps_merge11, encode::float::ps_merge11, Fpr);

    pub fn ps_cmpu0(&mut self, cr: Cr, fra: Fpr, frb: Fpr) -> &mut Self {
        self.emit_word(encode::float::ps_cmpu0(cr, fra, frb))
    }
    pub fn ps_cmpo0(&mut self, cr: Cr, fra: Fpr, frb: Fpr) -> &mut Self {
        self.emit_word(encode::float::ps_cmpo0(cr, fra, frb))
    }
    pub fn ps_cmpu1(&mut self, cr: Cr, fra: Fpr, frb: Fpr) -> &mut Self {
        self.emit_word(encode::float::ps_cmpu1(cr, fra, frb))
    }
    pub fn ps_cmpo1(&mut self, cr: Cr, fra: Fpr, frb: Fpr) -> &mut Self {
        self.emit_word(encode::float::ps_cmpo1(cr, fra, frb))
    }
}

// ---- AltiVec subset -----------------------------------------------------------

impl Emitter {
    wrap3_plain!(vaddfp, encode::vector::vaddfp, Vr);
    wrap3_plain!(vsubfp, encode::vector::vsubfp, Vr);
    wrap3_plain!(vand, encode::vector::vand, Vr);
    wrap3_plain!(vandc, encode::vector::vandc, Vr);
    wrap3_plain!(vor, encode::vector::vor, Vr);
    wrap3_plain!(vnor, encode::vector::vnor, Vr);
    wrap3_plain!(vxor, encode::vector::vxor, Vr);

    pub fn vrefp(&mut self, vd: Vr, vb: Vr) -> &mut Self {
        self.emit_word(encode::vector::vrefp(vd, vb))
    }
    pub fn vperm(&mut self, vd: Vr, va: Vr, vb: Vr, vc: Vr) -> &mut Self {
        self.emit_word(encode::vector::vperm(vd, va, vb, vc))
    }
    pub fn dss(&mut self, strm: u8) -> &mut Self {
        self.emit_word(encode::vector::dss(strm))
    }
    wrap0!(dssall, encode::vector::dssall);
}

// ---- branch & label fixup ------------------------------------------------------

macro_rules! cond_branch {
    ($name:ident, $namel:ident, $cc:expr) => {
        pub fn $name(&mut self) -> Label {
            self.bc($cc, false)
        }
        pub fn $namel(&mut self) -> Label {
            self.bc($cc, true)
        }
    };
}

impl Emitter {
    /// Raw conditional branch against CR0. Returns a [`Label`] whose
    /// displacement field is resolved later by [`Emitter::set_label`].
    pub fn bc(&mut self, cc: ConditionCode, lk: bool) -> Label {
        let address = self.buffer.current_address();
        self.emit_word(encode::branch::bc_placeholder(cc, lk));
        Label::new(address, BranchKind::Branch14)
    }

    /// Raw unconditional branch. Returns a [`Label`].
    pub fn b(&mut self, lk: bool) -> Label {
        let address = self.buffer.current_address();
        self.emit_word(encode::branch::b_placeholder(lk));
        Label::new(address, BranchKind::Branch24)
    }

    /// Conditional branch to an address already known at emission time:
    /// the word is computed and emitted directly, no placeholder/patch.
    pub fn bc_to(&mut self, cc: ConditionCode, target: usize, lk: bool) -> &mut Self {
        let address = self.buffer.current_address();
        let placeholder = encode::branch::bc_placeholder(cc, lk);
        let word = label::resolve(placeholder, address, target, BranchKind::Branch14);
        self.emit_word(word)
    }

    /// Unconditional branch to an address already known at emission time.
    pub fn b_to(&mut self, target: usize, lk: bool) -> &mut Self {
        let address = self.buffer.current_address();
        let placeholder = encode::branch::b_placeholder(lk);
        let word = label::resolve(placeholder, address, target, BranchKind::Branch24);
        self.emit_word(word)
    }

    cond_branch!(blt, bltl, ConditionCode::Lt);
    cond_branch!(bgt, bgtl, ConditionCode::Gt);
    cond_branch!(beq, beql, ConditionCode::Eq);
    cond_branch!(bso, bsol, ConditionCode::Os);
    cond_branch!(bge, bgel, ConditionCode::Ge);
    cond_branch!(ble, blel, ConditionCode::Le);
    cond_branch!(bne, bnel, ConditionCode::Ne);
    cond_branch!(bns, bnsl, ConditionCode::Oc);

    /// Branch to the Link Register.
    pub fn blr(&mut self) -> &mut Self {
        self.emit_word(encode::branch::bclr(false))
    }

    /// Branch to the Count Register.
    pub fn bctr(&mut self) -> &mut Self {
        self.emit_word(encode::branch::bcctr(false))
    }

    /// Branch to the Count Register, linking.
    pub fn bctrl(&mut self) -> &mut Self {
        self.emit_word(encode::branch::bcctr(true))
    }

    /// Resolves `label` against the current cursor (a forward branch to
    /// "here"), patching the buffer in place.
    pub fn set_label(&mut self, label: Label) -> &mut Self {
        let target = self.buffer.current_address();
        label::set_label(&mut self.buffer, label, target);
        self
    }

    /// Resolves `label` against an explicit target address (used for
    /// backward branches, where the target was captured before the body
    /// that the branch jumps past).
    pub fn set_label_to(&mut self, label: Label, target: usize) -> &mut Self {
        label::set_label(&mut self.buffer, label, target);
        self
    }
}

// ---- other pseudo-ops -----------------------------------------------------------

impl Emitter {
    /// `li(reg, imm)` -> `addi(reg, r0, imm)`, sign-extended.
    pub fn li(&mut self, reg: Gpr, imm: i16) -> &mut Self {
        self.addi(reg, R0, imm)
    }

    /// `lis(reg, imm)` -> `addis(reg, r0, imm)`.
    pub fn lis(&mut self, reg: Gpr, imm: i16) -> &mut Self {
        self.addis(reg, R0, imm)
    }

    /// Loads a 16-bit value without the sign extension `li` would apply to
    /// bit 15.
    pub fn liu(&mut self, reg: Gpr, imm: u16) -> &mut Self {
        if imm < 0x8000 {
            self.li(reg, imm as i16)
        } else {
            self.li(reg, 0);
            self.ori(reg, reg, imm)
        }
    }

    /// Loads the exact 32-bit value `imm` in the minimal instruction
    /// sequence (one or two words).
    pub fn liw(&mut self, reg: Gpr, imm: u32) -> &mut Self {
        if imm <= 0x7FFF || imm >= 0xFFFF_8000 {
            self.li(reg, imm as u16 as i16)
        } else if imm & 0xFFFF == 0 {
            self.lis(reg, (imm >> 16) as u16 as i16)
        } else {
            self.lis(reg, (imm >> 16) as u16 as i16);
            self.ori(reg, reg, (imm & 0xFFFF) as u16)
        }
    }

    /// `mr(d, s)` -> `or_(d, s, s)`.
    pub fn mr(&mut self, d: Gpr, s: Gpr) -> &mut Self {
        self.or_(d, s, s, false)
    }

    /// Produces `1` in `d` iff `s == 0`.
    pub fn setz(&mut self, d: Gpr, s: Gpr) -> &mut Self {
        self.cntlzw(d, s, false);
        self.srwi(d, d, 5, false)
    }

    /// `nop()` -> `ori(r0, r0, 0)`.
    pub fn nop(&mut self) -> &mut Self {
        self.ori(R0, R0, 0)
    }
}

// ---- directives -----------------------------------------------------------------

impl Emitter {
    pub fn db(&mut self, byte: u8) -> &mut Self {
        self.buffer.append_byte(byte);
        self
    }

    pub fn db_many(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.append_bytes(bytes);
        self
    }

    pub fn dh(&mut self, value: u16) -> &mut Self {
        self.buffer.append_u16(value);
        self
    }

    pub fn dh_many(&mut self, values: &[u16]) -> &mut Self {
        for &v in values {
            self.buffer.append_u16(v);
        }
        self
    }

    pub fn dw(&mut self, value: u32) -> &mut Self {
        self.buffer.append_u32(value);
        self
    }

    pub fn dw_many(&mut self, values: &[u32]) -> &mut Self {
        for &v in values {
            self.buffer.append_u32(v);
        }
        self
    }

    pub fn dd(&mut self, value: u64) -> &mut Self {
        self.buffer.append_u64(value);
        self
    }

    pub fn dd_many(&mut self, values: &[u64]) -> &mut Self {
        for &v in values {
            self.buffer.append_u64(v);
        }
        self
    }

    pub fn df32(&mut self, value: f32) -> &mut Self {
        self.buffer.append_u32(value.to_bits());
        self
    }

    pub fn df64(&mut self, value: f64) -> &mut Self {
        self.buffer.append_u64(value.to_bits());
        self
    }

    /// Appends `string`'s bytes followed by a trailing NUL.
    pub fn ds(&mut self, string: &str) -> &mut Self {
        self.buffer.append_bytes(string.as_bytes());
        self.buffer.append_byte(0);
        self
    }

    /// Appends zero bytes until the cursor is a multiple of `n`. `n == 1`
    /// is a no-op; `n < 1` is fatal.
    pub fn align(&mut self, n: i64) -> &mut Self {
        if n < 1 {
            fatal(AsmError::IllegalAlignment(n));
        }
        let n = n as usize;
        while self.buffer.cursor() % n != 0 {
            self.buffer.append_byte(0);
        }
        self
    }

    /// Invokes `body` exactly `n` times with the iteration index.
    pub fn repeat(&mut self, n: usize, mut body: impl FnMut(&mut Self, usize)) -> &mut Self {
        for i in 0..n {
            body(self, i);
        }
        self
    }

    /// `loop_(counter, iterations, body)`: `liw(counter, iterations)`, a
    /// back-branch anchor, `body`, `addic.(counter, counter, -1)`, then a
    /// `bne` resolved back to the anchor. `iterations == 0` emits nothing.
    pub fn loop_(&mut self, counter: Gpr, iterations: u32, mut body: impl FnMut(&mut Self)) -> &mut Self {
        if iterations == 0 {
            return self;
        }
        self.liw(counter, iterations);
        let anchor = self.buffer.current_address();
        body(self);
        self.addic_rc(counter, counter, -1);
        let label = self.bne();
        self.set_label_to(label, anchor)
    }

    /// Appends the illegal-opcode word `0x00000000`.
    pub fn ud(&mut self) -> &mut Self {
        self.emit_word(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{R1, R3};

    #[test]
    fn li_negative_one_then_blr_matches_spec_scenario() {
        let mut em = Emitter::new(8);
        em.li(R3, -1).blr();
        assert_eq!(em.as_slice(), &[0x38, 0x60, 0xFF, 0xFF, 0x4E, 0x80, 0x00, 0x20]);
    }

    #[test]
    fn lis_then_ori_matches_spec_scenario() {
        let mut em = Emitter::new(8);
        em.lis(R3, 0x1234u16 as i16).ori(R3, R3, 0x5678);
        assert_eq!(em.as_slice(), &[0x3C, 0x60, 0x12, 0x34, 0x60, 0x63, 0x56, 0x78]);
    }

    #[test]
    fn liw_full_value_matches_spec_scenario() {
        let mut em = Emitter::new(8);
        em.liw(R1, 0x1234_5678);
        assert_eq!(em.as_slice(), &[0x3C, 0x20, 0x12, 0x34, 0x60, 0x21, 0x56, 0x78]);
    }

    #[test]
    fn liw_low_half_needs_ori_because_li_would_sign_extend() {
        let mut em = Emitter::new(8);
        em.liw(R1, 0x8000);
        assert_eq!(em.as_slice(), &[0x3C, 0x20, 0x00, 0x00, 0x60, 0x21, 0x80, 0x00]);
    }

    #[test]
    fn liw_negative_small_value_collapses_to_single_li() {
        let mut em = Emitter::new(4);
        em.liw(R1, 0xFFFF_F000);
        assert_eq!(em.as_slice(), &[0x38, 0x20, 0xF0, 0x00]);
    }

    #[test]
    fn forward_conditional_branch_matches_spec_scenario() {
        let mut em = Emitter::new(8);
        let label = em.bne();
        em.nop();
        em.set_label(label);
        assert_eq!(em.as_slice(), &[0x40, 0x82, 0x00, 0x08, 0x60, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn backward_branch_matches_spec_scenario() {
        let mut em = Emitter::new(8);
        let anchor = em.current_address();
        em.nop();
        let label = em.bne();
        em.set_label_to(label, anchor);
        assert_eq!(em.as_slice(), &[0x60, 0x00, 0x00, 0x00, 0x40, 0x82, 0xFF, 0xFC]);
    }

    #[test]
    fn nop_ud_blr_sync_match_spec_scenario() {
        let mut em = Emitter::new(4);
        em.nop();
        assert_eq!(em.as_slice(), &[0x60, 0x00, 0x00, 0x00]);

        let mut em = Emitter::new(4);
        em.ud();
        assert_eq!(em.as_slice(), &[0x00, 0x00, 0x00, 0x00]);

        let mut em = Emitter::new(4);
        em.blr();
        assert_eq!(em.as_slice(), &[0x4E, 0x80, 0x00, 0x20]);

        let mut em = Emitter::new(4);
        em.sync();
        assert_eq!(em.as_slice(), &[0x7C, 0x00, 0x04, 0xAC]);
    }

    #[test]
    fn align_leaves_cursor_at_multiple_of_n() {
        let mut em = Emitter::new_auto_grow(0, 16);
        em.db(1).db(2).db(3);
        em.align(4);
        assert_eq!(em.used() % 4, 0);
        assert_eq!(em.used(), 4);
    }

    #[test]
    #[should_panic(expected = "illegal")]
    fn align_zero_is_fatal() {
        let mut em = Emitter::new(4);
        em.align(0);
    }

    #[test]
    fn repeat_appends_exactly_n_copies() {
        let mut em = Emitter::new_auto_grow(0, 16);
        em.repeat(5, |e, _| {
            e.nop();
        });
        assert_eq!(em.used(), 20);
    }

    #[test]
    fn loop_with_zero_iterations_emits_nothing() {
        let mut em = Emitter::new(0);
        em.loop_(R3, 0, |e| {
            e.nop();
        });
        assert_eq!(em.used(), 0);
    }
}
