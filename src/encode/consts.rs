//! Primary opcodes and extended opcodes (XO) from the 32-bit PowerPC
//! architecture manual. One named constant per mnemonic family; the actual
//! word-building lives in the sibling category modules.

#![allow(dead_code)]

// ---- Primary (6-bit) opcodes -------------------------------------------

pub const OP_MULLI: u8 = 7;
pub const OP_SUBFIC: u8 = 8;
pub const OP_CMPLI: u8 = 10;
pub const OP_CMPI: u8 = 11;
pub const OP_ADDIC: u8 = 12;
pub const OP_ADDIC_RC: u8 = 13;
pub const OP_ADDI: u8 = 14;
pub const OP_ADDIS: u8 = 15;
pub const OP_BC: u8 = 16;
pub const OP_SC: u8 = 17;
pub const OP_B: u8 = 18;
pub const OP_CR_XL: u8 = 19; // bclr, bcctr, crand/cror/..., mcrf, isync
pub const OP_RLWIMI: u8 = 20;
pub const OP_RLWINM: u8 = 21;
pub const OP_RLWNM: u8 = 23;
pub const OP_ORI: u8 = 24;
pub const OP_ORIS: u8 = 25;
pub const OP_XORI: u8 = 26;
pub const OP_XORIS: u8 = 27;
pub const OP_ANDI_RC: u8 = 28;
pub const OP_ANDIS_RC: u8 = 29;
pub const OP_X31: u8 = 31; // integer arithmetic/logical/compare/load-store/system XO-form
pub const OP_LWZ: u8 = 32;
pub const OP_LWZU: u8 = 33;
pub const OP_LBZ: u8 = 34;
pub const OP_LBZU: u8 = 35;
pub const OP_STW: u8 = 36;
pub const OP_STWU: u8 = 37;
pub const OP_STB: u8 = 38;
pub const OP_STBU: u8 = 39;
pub const OP_LHZ: u8 = 40;
pub const OP_LHZU: u8 = 41;
pub const OP_LHA: u8 = 42;
pub const OP_LHAU: u8 = 43;
pub const OP_STH: u8 = 44;
pub const OP_STHU: u8 = 45;
pub const OP_LMW: u8 = 46;
pub const OP_STMW: u8 = 47;
pub const OP_LFS: u8 = 48;
pub const OP_LFSU: u8 = 49;
pub const OP_LFD: u8 = 50;
pub const OP_LFDU: u8 = 51;
pub const OP_STFS: u8 = 52;
pub const OP_STFSU: u8 = 53;
pub const OP_STFD: u8 = 54;
pub const OP_STFDU: u8 = 55;
pub const OP_PSQ_L: u8 = 56;
pub const OP_PSQ_LU: u8 = 57;
pub const OP_PS: u8 = 4; // paired-single / AltiVec extended opcode space
pub const OP_PSQ_ST: u8 = 60;
pub const OP_PSQ_STU: u8 = 61;
pub const OP_FLOAT_SINGLE: u8 = 59; // fadds/fsubs/... (A-form, single precision)
pub const OP_FLOAT_DOUBLE: u8 = 63; // fadd/fsub/.../fcmpu/mffs/... (A-form + X-form, double precision)

// ---- XO (extended) opcodes under primary 31: integer arithmetic --------

pub const XO_ADD: u16 = 266;
pub const XO_ADDC: u16 = 10;
pub const XO_ADDE: u16 = 138;
pub const XO_ADDME: u16 = 234;
pub const XO_ADDZE: u16 = 202;
pub const XO_SUBF: u16 = 40;
pub const XO_SUBFC: u16 = 8;
pub const XO_SUBFE: u16 = 136;
pub const XO_SUBFME: u16 = 232;
pub const XO_SUBFZE: u16 = 200;
pub const XO_NEG: u16 = 104;
pub const XO_MULHW: u16 = 75;
pub const XO_MULHWU: u16 = 11;
pub const XO_MULLW: u16 = 235;
pub const XO_DIVW: u16 = 491;
pub const XO_DIVWU: u16 = 459;

// ---- XO under primary 31: logical & shift -------------------------------

pub const XO_AND: u16 = 28;
pub const XO_OR: u16 = 444;
pub const XO_XOR: u16 = 316;
pub const XO_NAND: u16 = 476;
pub const XO_NOR: u16 = 124;
pub const XO_EQV: u16 = 284;
pub const XO_ANDC: u16 = 60;
pub const XO_ORC: u16 = 412;
pub const XO_EXTSB: u16 = 954;
pub const XO_EXTSH: u16 = 922;
pub const XO_CNTLZW: u16 = 26;
pub const XO_SLW: u16 = 24;
pub const XO_SRW: u16 = 536;
pub const XO_SRAW: u16 = 792;
pub const XO_SRAWI: u16 = 824;

// ---- XO under primary 31: compare ---------------------------------------

pub const XO_CMP: u16 = 0;
pub const XO_CMPL: u16 = 32;

// ---- XO under primary 31: indexed load/store ----------------------------

pub const XO_LWZX: u16 = 23;
pub const XO_LWZUX: u16 = 55;
pub const XO_LBZX: u16 = 87;
pub const XO_LBZUX: u16 = 119;
pub const XO_STWX: u16 = 151;
pub const XO_STWUX: u16 = 183;
pub const XO_STBX: u16 = 215;
pub const XO_STBUX: u16 = 247;
pub const XO_LHZX: u16 = 279;
pub const XO_LHZUX: u16 = 311;
pub const XO_LHAX: u16 = 343;
pub const XO_LHAUX: u16 = 375;
pub const XO_STHX: u16 = 407;
pub const XO_STHUX: u16 = 439;
pub const XO_LWARX: u16 = 20;
pub const XO_STWCX_RC: u16 = 150;
pub const XO_LWBRX: u16 = 534;
pub const XO_STWBRX: u16 = 662;
pub const XO_LHBRX: u16 = 790;
pub const XO_STHBRX: u16 = 918;

// ---- XO under primary 31: float indexed load/store ----------------------

pub const XO_LFSX: u16 = 535;
pub const XO_LFSUX: u16 = 567;
pub const XO_LFDX: u16 = 599;
pub const XO_LFDUX: u16 = 631;
pub const XO_STFSX: u16 = 663;
pub const XO_STFSUX: u16 = 695;
pub const XO_STFDX: u16 = 727;
pub const XO_STFDUX: u16 = 759;
pub const XO_STFIWX: u16 = 983;

// ---- XO under primary 31: system register moves -------------------------

pub const XO_MFSPR: u16 = 339;
pub const XO_MTSPR: u16 = 467;
pub const XO_MFCR: u16 = 19;
pub const XO_MTCRF: u16 = 144;
pub const XO_MFMSR: u16 = 83;
pub const XO_MTMSR: u16 = 146;
pub const XO_MFSR: u16 = 595;
pub const XO_MTSR: u16 = 210;
pub const XO_MFSRIN: u16 = 659;
pub const XO_MTSRIN: u16 = 242;

/// SPR number for the Link Register (used by `mflr`/`mtlr`).
pub const SPR_LR: u16 = 8;
/// SPR number for the Count Register (used by `mfctr`/`mtctr`).
pub const SPR_CTR: u16 = 9;

// ---- XO under primary 31: cache / TLB / misc system ---------------------

pub const XO_ICBI: u16 = 982;
pub const XO_DCBF: u16 = 86;
pub const XO_DCBI: u16 = 470;
pub const XO_DCBST: u16 = 54;
pub const XO_DCBT: u16 = 278;
pub const XO_DCBTST: u16 = 246;
pub const XO_DCBZ: u16 = 1014;
pub const XO_TLBIE: u16 = 306;
pub const XO_TLBSYNC: u16 = 566;
pub const XO_SYNC: u16 = 598;
pub const XO_EIEIO: u16 = 854;
pub const XO_TW: u16 = 4;

/// `dcbz_l`: Gekko/Broadway locked-cache variant of `dcbz`, under the
/// paired-single primary opcode rather than primary 31.
pub const XO_DCBZ_L: u16 = 1014;

// ---- XO under primary 19: branch & CR bit ops ---------------------------

pub const XO_BCLR: u16 = 16;
pub const XO_BCCTR: u16 = 528;
pub const XO_ISYNC: u16 = 150;
pub const XO_RFI: u16 = 50;
pub const XO_CRAND: u16 = 257;
pub const XO_CROR: u16 = 449;
pub const XO_CRXOR: u16 = 193;
pub const XO_CRNAND: u16 = 225;
pub const XO_CRNOR: u16 = 33;
pub const XO_CREQV: u16 = 289;
pub const XO_CRANDC: u16 = 129;
pub const XO_CRORC: u16 = 417;
pub const XO_MCRF: u16 = 0;

// ---- XO under primary 63 (double) / 59 (single): scalar float -----------

pub const XO_FADD: u8 = 21;
pub const XO_FSUB: u8 = 20;
pub const XO_FMUL: u8 = 25;
pub const XO_FDIV: u8 = 18;
pub const XO_FMADD: u8 = 29;
pub const XO_FMSUB: u8 = 28;
pub const XO_FNMSUB: u8 = 30;
pub const XO_FNMADD: u8 = 31;
pub const XO_FSEL: u8 = 23;
pub const XO_FRES: u8 = 24;
pub const XO_FRSQRTE: u8 = 26;
pub const XO_FNEG: u8 = 40;
pub const XO_FMR: u8 = 72;
pub const XO_FNABS: u8 = 136;
pub const XO_FABS: u16 = 264;
pub const XO_FCTIW: u8 = 14;
pub const XO_FCTIWZ: u8 = 15;
pub const XO_FRSP: u8 = 12;
pub const XO_FCMPU: u8 = 0;
pub const XO_FCMPO: u8 = 32;
pub const XO_MFFS: u16 = 583;
pub const XO_MTFSF: u16 = 711;

// ---- XO under primary 4: Gekko/Broadway paired-single --------------------
//
// The paired-single unit reuses the scalar FPU's extended-opcode space
// under a different primary opcode, which is why these numbers mirror the
// `XO_F*` table above exactly (`ps_add` == `fadd`'s XO, etc).

pub const XO_PS_SUM0: u8 = 10;
pub const XO_PS_SUM1: u8 = 11;
pub const XO_PS_MULS0: u8 = 12;
pub const XO_PS_MULS1: u8 = 13;
pub const XO_PS_MADDS0: u8 = 14;
pub const XO_PS_MADDS1: u8 = 15;
pub const XO_PS_DIV: u8 = 18;
pub const XO_PS_SUB: u8 = 20;
pub const XO_PS_ADD: u8 = 21;
pub const XO_PS_SEL: u8 = 23;
pub const XO_PS_RES: u8 = 24;
pub const XO_PS_MUL: u8 = 25;
pub const XO_PS_RSQRTE: u8 = 26;
pub const XO_PS_MSUB: u8 = 28;
pub const XO_PS_MADD: u8 = 29;
pub const XO_PS_NMSUB: u8 = 30;
pub const XO_PS_NMADD: u8 = 31;
pub const XO_PS_NEG: u8 = 40;
pub const XO_PS_MR: u8 = 72;
pub const XO_PS_NABS: u8 = 136;
pub const XO_PS_ABS: u16 = 264;
pub const XO_PS_CMPU0: u8 = 0;
pub const XO_PS_CMPO0: u8 = 32;
pub const XO_PS_CMPU1: u8 = 64;
pub const XO_PS_CMPO1: u8 = 96;
pub const XO_PS_MERGE00: u16 = 528;
pub const XO_PS_MERGE01: u16 = 560;
pub const XO_PS_MERGE10: u16 = 592;
pub const XO_PS_MERGE11: u16 = 624;

// ---- XO under primary 4: AltiVec subset ----------------------------------

pub const VXO_VADDFP: u16 = 10;
pub const VXO_VSUBFP: u16 = 74;
pub const VXO_VAND: u16 = 1028;
pub const VXO_VANDC: u16 = 1092;
pub const VXO_VOR: u16 = 1156;
pub const VXO_VNOR: u16 = 1284;
pub const VXO_VXOR: u16 = 1220;
pub const VXO_VREFP: u16 = 266;
pub const VPERM_OP: u8 = 43;
pub const VXO_DSS: u16 = 822;
