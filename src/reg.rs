//! Register namespaces.
//!
//! The PowerPC ISA exposes four disjoint register files. Each is a small
//! non-negative integer, but mixing them up is a common source of bugs in
//! hand-written emitters (passing a floating-point register where a general
//! register belongs silently produces a garbage encoding). Each file is
//! therefore its own newtype over `u8`, so the compiler rejects the mixup
//! that a raw integer API would allow.

use core::fmt;

macro_rules! reg_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(u8);

        impl $name {
            /// Constructs a register id, panicking if it exceeds the file's range.
            pub const fn new(id: u8) -> Self {
                assert!(id <= $max, "register id out of range for this file");
                Self(id)
            }

            /// The raw register number.
            pub const fn id(self) -> u8 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u8 {
            fn from(r: $name) -> u8 {
                r.0
            }
        }
    };
}

reg_newtype!(Gpr, 31, "A general-purpose register, `r0`..`r31`.");
reg_newtype!(Fpr, 31, "A floating-point register, `f0`..`f31`.");
reg_newtype!(Vr, 31, "An AltiVec vector register, `v0`..`v31`.");
reg_newtype!(Sr, 15, "A segment register, `sr0`..`sr15`.");

/// A condition-register field, `cr0`..`cr7`.
///
/// Distinct from [`Gpr`] even though both happen to be small integers: a
/// `cr` field picks one of the eight 4-bit fields inside the 32-bit
/// Condition Register, it is never a general-purpose register number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cr(u8);

impl Cr {
    /// Constructs a CR field id, panicking if it exceeds 7.
    pub const fn new(id: u8) -> Self {
        assert!(id <= 7, "condition register field out of range");
        Self(id)
    }

    /// The raw field number, 0..=7.
    pub const fn id(self) -> u8 {
        self.0
    }
}

impl From<Cr> for u8 {
    fn from(c: Cr) -> u8 {
        c.0
    }
}

macro_rules! gpr_const {
    ($name:ident, $id:expr) => {
        /// General-purpose register alias.
        pub const $name: Gpr = Gpr::new($id);
    };
}

gpr_const!(R0, 0);
gpr_const!(R1, 1);
gpr_const!(R2, 2);
gpr_const!(R3, 3);
gpr_const!(R4, 4);
gpr_const!(R5, 5);
gpr_const!(R6, 6);
gpr_const!(R7, 7);
gpr_const!(R8, 8);
gpr_const!(R9, 9);
gpr_const!(R10, 10);
gpr_const!(R11, 11);
gpr_const!(R12, 12);
gpr_const!(R13, 13);
gpr_const!(R14, 14);
gpr_const!(R15, 15);
gpr_const!(R16, 16);
gpr_const!(R17, 17);
gpr_const!(R18, 18);
gpr_const!(R19, 19);
gpr_const!(R20, 20);
gpr_const!(R21, 21);
gpr_const!(R22, 22);
gpr_const!(R23, 23);
gpr_const!(R24, 24);
gpr_const!(R25, 25);
gpr_const!(R26, 26);
gpr_const!(R27, 27);
gpr_const!(R28, 28);
gpr_const!(R29, 29);
gpr_const!(R30, 30);
gpr_const!(R31, 31);

/// Conventional alias: always reads as zero when used as a base register.
pub const ZERO: Gpr = R0;
/// Conventional alias: the stack pointer.
pub const SP: Gpr = R1;
/// Conventional alias: the table-of-contents pointer (SysV PPC32 ABI).
pub const TOC: Gpr = R2;

/// Conventional parameter-register aliases (`p0`..`p7` = `r3`..`r10`), per
/// the SysV PPC32 calling convention's first eight integer arguments.
pub const P0: Gpr = R3;
pub const P1: Gpr = R4;
pub const P2: Gpr = R5;
pub const P3: Gpr = R6;
pub const P4: Gpr = R7;
pub const P5: Gpr = R8;
pub const P6: Gpr = R9;
pub const P7: Gpr = R10;

macro_rules! fpr_const {
    ($name:ident, $id:expr) => {
        /// Floating-point register alias.
        pub const $name: Fpr = Fpr::new($id);
    };
}

fpr_const!(F0, 0);
fpr_const!(F1, 1);
fpr_const!(F2, 2);
fpr_const!(F3, 3);
fpr_const!(F4, 4);
fpr_const!(F5, 5);
fpr_const!(F6, 6);
fpr_const!(F7, 7);
fpr_const!(F8, 8);
fpr_const!(F9, 9);
fpr_const!(F10, 10);
fpr_const!(F11, 11);
fpr_const!(F12, 12);
fpr_const!(F13, 13);
fpr_const!(F14, 14);
fpr_const!(F15, 15);
fpr_const!(F16, 16);
fpr_const!(F17, 17);
fpr_const!(F18, 18);
fpr_const!(F19, 19);
fpr_const!(F20, 20);
fpr_const!(F21, 21);
fpr_const!(F22, 22);
fpr_const!(F23, 23);
fpr_const!(F24, 24);
fpr_const!(F25, 25);
fpr_const!(F26, 26);
fpr_const!(F27, 27);
fpr_const!(F28, 28);
fpr_const!(F29, 29);
fpr_const!(F30, 30);
fpr_const!(F31, 31);

macro_rules! vr_const {
    ($name:ident, $id:expr) => {
        /// Vector register alias.
        pub const $name: Vr = Vr::new($id);
    };
}

vr_const!(V0, 0);
vr_const!(V1, 1);
vr_const!(V2, 2);
vr_const!(V3, 3);
vr_const!(V4, 4);
vr_const!(V5, 5);
vr_const!(V6, 6);
vr_const!(V7, 7);
vr_const!(V8, 8);
vr_const!(V9, 9);
vr_const!(V10, 10);
vr_const!(V11, 11);
vr_const!(V12, 12);
vr_const!(V13, 13);
vr_const!(V14, 14);
vr_const!(V15, 15);
vr_const!(V16, 16);
vr_const!(V17, 17);
vr_const!(V18, 18);
vr_const!(V19, 19);
vr_const!(V20, 20);
vr_const!(V21, 21);
vr_const!(V22, 22);
vr_const!(V23, 23);
vr_const!(V24, 24);
vr_const!(V25, 25);
vr_const!(V26, 26);
vr_const!(V27, 27);
vr_const!(V28, 28);
vr_const!(V29, 29);
vr_const!(V30, 30);
vr_const!(V31, 31);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_ids_round_trip() {
        for id in 0..=31u8 {
            assert_eq!(Gpr::new(id).id(), id);
            assert_eq!(Fpr::new(id).id(), id);
            assert_eq!(Vr::new(id).id(), id);
        }
        for id in 0..=15u8 {
            assert_eq!(Sr::new(id).id(), id);
        }
        for id in 0..=7u8 {
            assert_eq!(Cr::new(id).id(), id);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn gpr_out_of_range_panics() {
        let _ = Gpr::new(32);
    }

    #[test]
    fn conventional_aliases() {
        assert_eq!(ZERO, R0);
        assert_eq!(SP, R1);
        assert_eq!(TOC, R2);
        assert_eq!(P0, R3);
        assert_eq!(P7, R10);
    }
}
