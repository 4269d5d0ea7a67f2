//! Condition-code testing and the two branch-displacement forms.

/// A condition tested against CR0 by a conditional branch.
///
/// The ordinal encodes both which CR0 bit is tested and whether the branch
/// fires on the bit being set or cleared: ordinals `0..=3` test bit-set
/// (`Lt`, `Gt`, `Eq`, `Os`), ordinals `4..=7` test the identical bit
/// bit-cleared (`Ge`, `Le`, `Ne`, `Oc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionCode {
    /// CR0 LT bit set (less than).
    Lt = 0,
    /// CR0 GT bit set (greater than).
    Gt = 1,
    /// CR0 EQ bit set (equal).
    Eq = 2,
    /// CR0 SO bit set (summary overflow).
    Os = 3,
    /// CR0 LT bit cleared (greater than or equal).
    Ge = 4,
    /// CR0 GT bit cleared (less than or equal).
    Le = 5,
    /// CR0 EQ bit cleared (not equal).
    Ne = 6,
    /// CR0 SO bit cleared (not overflowed).
    Oc = 7,
}

impl ConditionCode {
    /// The CR0 bit (0..=3, BI field modulo 4) this condition tests.
    pub const fn bit(self) -> u8 {
        (self as u8) & 0x3
    }

    /// `true` if the branch fires when the bit is set, `false` if cleared.
    pub const fn tests_bit_set(self) -> bool {
        (self as u8) < 4
    }
}

/// Which of the two PowerPC branch-displacement encodings an instruction
/// uses.
///
/// `Branch14` (conditional branches, `bc`) carries a signed 14-bit word
/// displacement (16-bit byte displacement, low two bits forced to zero).
/// `Branch24` (unconditional branches, `b`) carries a signed 24-bit word
/// displacement (26-bit byte displacement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BranchKind {
    /// 14-bit word / 16-bit byte signed displacement (conditional `bc`).
    Branch14,
    /// 24-bit word / 26-bit byte signed displacement (unconditional `b`).
    Branch24,
}

impl BranchKind {
    /// Inclusive legal byte-displacement range for the relative form.
    pub const fn relative_range(self) -> (i32, i32) {
        match self {
            BranchKind::Branch14 => (i16::MIN as i32, i16::MAX as i32),
            BranchKind::Branch24 => (-0x0200_0000, 0x01FF_FFFF),
        }
    }

    /// Bit mask of the displacement field within the 32-bit word.
    pub const fn field_mask(self) -> u32 {
        match self {
            BranchKind::Branch14 => 0xFFFC,
            BranchKind::Branch24 => 0x03FF_FFFC,
        }
    }
}
