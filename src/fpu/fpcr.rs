//! Floating-point control register
//!
//! Layout follows the AArch64 FPCR. Only the fields that steer
//! conversions are modelled; other bits read as zero.

use super::rounding_mode::RoundingMode;
use serde::{Serialize, Deserialize};

// FPCR bits
pub const FPCR_FZ16: u32 = 1 << 19;
pub const FPCR_RMODE_SHIFT: u32 = 22;
pub const FPCR_RMODE: u32 = 3 << FPCR_RMODE_SHIFT;
pub const FPCR_FZ: u32 = 1 << 24;
pub const FPCR_DN: u32 = 1 << 25;
pub const FPCR_AHP: u32 = 1 << 26;

/// Bits that may be set by a write
pub const FPCR_MASK: u32 = FPCR_FZ16 | FPCR_RMODE | FPCR_FZ | FPCR_DN | FPCR_AHP;

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Fpcr(u32);

impl Fpcr {
    pub fn from_bits(bits: u32) -> Self {
        Fpcr(bits & FPCR_MASK)
    }

    pub fn to_bits(&self) -> u32 {
        self.0
    }

    /// Alternative half-precision: no infinities or NaNs in f16
    pub fn ahp(&self) -> bool {
        self.0 & FPCR_AHP != 0
    }

    /// Default NaN
    pub fn dn(&self) -> bool {
        self.0 & FPCR_DN != 0
    }

    /// Flush single/double denormals to zero
    pub fn fz(&self) -> bool {
        self.0 & FPCR_FZ != 0
    }

    /// Flush half-precision denormals to zero
    pub fn fz16(&self) -> bool {
        self.0 & FPCR_FZ16 != 0
    }

    pub fn rmode(&self) -> RoundingMode {
        RoundingMode::from_rmode(self.0 >> FPCR_RMODE_SHIFT)
    }

    pub fn set_rmode(&mut self, rounding: RoundingMode) {
        let field = match rounding {
            RoundingMode::ToNearestTieEven => 0b00,
            RoundingMode::TowardsPlusInfinity => 0b01,
            RoundingMode::TowardsMinusInfinity => 0b10,
            RoundingMode::TowardsZero => 0b11,
            // No FPCR encoding; keep the current field
            RoundingMode::ToNearestTieAwayFromZero | RoundingMode::ToOdd => return,
        };
        self.0 = (self.0 & !FPCR_RMODE) | (field << FPCR_RMODE_SHIFT);
    }
}
