//! Rounding modes

use serde::{Serialize, Deserialize};

/// Rounding modes
///
/// The first four share their encoding with FPCR.RMode.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even
    ToNearestTieEven = 0b000,
    /// Round towards +∞
    TowardsPlusInfinity = 0b001,
    /// Round towards -∞
    TowardsMinusInfinity = 0b010,
    /// Round towards zero
    TowardsZero = 0b011,
    /// Round to Nearest, ties away from zero
    ToNearestTieAwayFromZero = 0b100,
    /// Von Neumann rounding (jamming the lsb); not valid for fixed-point results
    ToOdd = 0b101,
}

impl RoundingMode {
    /// Decode a mode number; 6 and 7 are unallocated
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0b000 => Some(RoundingMode::ToNearestTieEven),
            0b001 => Some(RoundingMode::TowardsPlusInfinity),
            0b010 => Some(RoundingMode::TowardsMinusInfinity),
            0b011 => Some(RoundingMode::TowardsZero),
            0b100 => Some(RoundingMode::ToNearestTieAwayFromZero),
            0b101 => Some(RoundingMode::ToOdd),
            _ => None,
        }
    }

    /// Decode the 2-bit FPCR.RMode field
    pub fn from_rmode(rmode: u32) -> Self {
        match rmode & 0b11 {
            0b00 => RoundingMode::ToNearestTieEven,
            0b01 => RoundingMode::TowardsPlusInfinity,
            0b10 => RoundingMode::TowardsMinusInfinity,
            _ => RoundingMode::TowardsZero,
        }
    }

    /// Parse the mnemonic suffixes used by FCVT* (`n`, `p`, `m`, `z`, `a`)
    /// or the long spellings `rne`, `rp`, `rm`, `rz`, `rna`, `rto`
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "n" | "rne" => Some(RoundingMode::ToNearestTieEven),
            "p" | "rp" => Some(RoundingMode::TowardsPlusInfinity),
            "m" | "rm" => Some(RoundingMode::TowardsMinusInfinity),
            "z" | "rz" => Some(RoundingMode::TowardsZero),
            "a" | "rna" => Some(RoundingMode::ToNearestTieAwayFromZero),
            "rto" => Some(RoundingMode::ToOdd),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmode_field_decoding() {
        assert_eq!(RoundingMode::from_rmode(0), RoundingMode::ToNearestTieEven);
        assert_eq!(RoundingMode::from_rmode(3), RoundingMode::TowardsZero);
        // Only two bits are looked at
        assert_eq!(RoundingMode::from_rmode(0b110), RoundingMode::TowardsMinusInfinity);
    }

    #[test]
    fn test_from_bits_rejects_unallocated() {
        assert_eq!(RoundingMode::from_bits(4), Some(RoundingMode::ToNearestTieAwayFromZero));
        assert_eq!(RoundingMode::from_bits(5), Some(RoundingMode::ToOdd));
        assert_eq!(RoundingMode::from_bits(6), None);
    }

    #[test]
    fn test_mnemonics() {
        assert_eq!(RoundingMode::from_mnemonic("RNA"), Some(RoundingMode::ToNearestTieAwayFromZero));
        assert_eq!(RoundingMode::from_mnemonic("z"), Some(RoundingMode::TowardsZero));
        assert_eq!(RoundingMode::from_mnemonic("dyn"), None);
    }
}
