//! Per-format IEEE 754 parameters
//!
//! Operands travel as raw bit patterns: `u16` is binary16, `u32` is
//! binary32 and `u64` is binary64.

pub trait FpInfo: Copy {
    const TOTAL_WIDTH: usize;
    const EXPONENT_WIDTH: usize;
    const EXPLICIT_MANTISSA_WIDTH: usize;
    const EXPONENT_BIAS: i32;
    /// Unbiased exponent of the smallest normal
    const EXPONENT_MIN: i32 = 1 - Self::EXPONENT_BIAS;

    fn to_bits64(self) -> u64;
}

/// Source format of a raw operand whose width is only known at run time
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FpFormat {
    Half,
    Single,
    Double,
}

impl FpFormat {
    pub fn from_width(width: u32) -> Option<Self> {
        match width {
            16 => Some(FpFormat::Half),
            32 => Some(FpFormat::Single),
            64 => Some(FpFormat::Double),
            _ => None,
        }
    }

    /// `h`, `s` or `d`, as in the FCVT operand suffixes
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "f16" => Some(FpFormat::Half),
            "s" | "f32" => Some(FpFormat::Single),
            "d" | "f64" => Some(FpFormat::Double),
            _ => None,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            FpFormat::Half => 16,
            FpFormat::Single => 32,
            FpFormat::Double => 64,
        }
    }
}

impl FpInfo for u16 {
    const TOTAL_WIDTH: usize = 16;
    const EXPONENT_WIDTH: usize = 5;
    const EXPLICIT_MANTISSA_WIDTH: usize = 10;
    const EXPONENT_BIAS: i32 = 15;

    #[inline(always)]
    fn to_bits64(self) -> u64 {
        self as u64
    }
}

impl FpInfo for u32 {
    const TOTAL_WIDTH: usize = 32;
    const EXPONENT_WIDTH: usize = 8;
    const EXPLICIT_MANTISSA_WIDTH: usize = 23;
    const EXPONENT_BIAS: i32 = 127;

    #[inline(always)]
    fn to_bits64(self) -> u64 {
        self as u64
    }
}

impl FpInfo for u64 {
    const TOTAL_WIDTH: usize = 64;
    const EXPONENT_WIDTH: usize = 11;
    const EXPLICIT_MANTISSA_WIDTH: usize = 52;
    const EXPONENT_BIAS: i32 = 1023;

    #[inline(always)]
    fn to_bits64(self) -> u64 {
        self
    }
}
