//! Classification of raw operands into sign, exponent and mantissa
//!
//! An unpacked value is `(-1)^sign * mantissa * 2^(exponent - 62)`, with
//! the mantissa's leading one at bit 62. The spare top bit leaves room for
//! a carry when rounding and for the sign after negation.

use super::bit_util::{bit, highest_set_bit, ones};
use super::exception::{process_exception, FpExc};
use super::fpcr::Fpcr;
use super::fpsr::Fpsr;
use super::info::FpInfo;

/// Bit position of the binary point in an unpacked mantissa
pub const NORMALIZED_POINT_POSITION: i32 = 62;

/// Exponent given to infinities: far beyond any fixed-point width
const INFINITY_EXPONENT: i32 = 1_000_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FpType {
    Nonzero,
    Zero,
    Infinity,
    QNaN,
    SNaN,
}

impl FpType {
    pub fn is_nan(&self) -> bool {
        matches!(self, FpType::QNaN | FpType::SNaN)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FpUnpacked {
    pub sign: bool,
    pub exponent: i32,
    pub mantissa: u64,
}

impl FpUnpacked {
    pub fn zero(sign: bool) -> Self {
        FpUnpacked { sign, exponent: 0, mantissa: 0 }
    }

    /// Normalize `mantissa * 2^exponent` so the leading one sits at bit 62
    pub fn normalized(sign: bool, exponent: i32, mantissa: u64) -> Self {
        assert!(mantissa != 0, "cannot normalize a zero mantissa");
        let highest_bit = highest_set_bit(mantissa);
        FpUnpacked {
            sign,
            exponent: exponent + highest_bit,
            mantissa: if highest_bit <= NORMALIZED_POINT_POSITION {
                mantissa << (NORMALIZED_POINT_POSITION - highest_bit)
            } else {
                mantissa >> (highest_bit - NORMALIZED_POINT_POSITION)
            },
        }
    }
}

/// Classify `op` for arithmetic use
///
/// Denormals are flushed to zero under FPCR.FZ (single/double, raising
/// InputDenorm) or FPCR.FZ16 (half, silently). FPCR.AHP does not apply:
/// arithmetic always reads half precision as IEEE binary16. NaNs unpack
/// with a zero mantissa.
pub fn fp_unpack<F: FpInfo>(op: F, fpcr: Fpcr, fpsr: &mut Fpsr) -> (FpType, bool, FpUnpacked) {
    let op = op.to_bits64();
    let is_half_precision = F::TOTAL_WIDTH == 16;
    let sign = bit(F::EXPONENT_WIDTH + F::EXPLICIT_MANTISSA_WIDTH, op);
    let exp_raw = (op >> F::EXPLICIT_MANTISSA_WIDTH) & ones(F::EXPONENT_WIDTH);
    let frac_raw = op & ones(F::EXPLICIT_MANTISSA_WIDTH);

    if exp_raw == 0 {
        let flush = if is_half_precision { fpcr.fz16() } else { fpcr.fz() };
        if frac_raw == 0 || flush {
            if frac_raw != 0 && !is_half_precision {
                process_exception(FpExc::InputDenorm, fpcr, fpsr);
            }
            return (FpType::Zero, sign, FpUnpacked::zero(sign));
        }

        let denormal_exponent = F::EXPONENT_MIN - F::EXPLICIT_MANTISSA_WIDTH as i32;
        return (FpType::Nonzero, sign, FpUnpacked::normalized(sign, denormal_exponent, frac_raw));
    }

    if exp_raw == ones(F::EXPONENT_WIDTH) {
        if frac_raw == 0 {
            return (FpType::Infinity, sign, FpUnpacked::normalized(sign, INFINITY_EXPONENT, 1));
        }

        let is_quiet = bit(F::EXPLICIT_MANTISSA_WIDTH - 1, frac_raw);
        let ty = if is_quiet { FpType::QNaN } else { FpType::SNaN };
        return (ty, sign, FpUnpacked::zero(sign));
    }

    let exponent = exp_raw as i32 - F::EXPONENT_BIAS;
    let implicit_leading_bit = 1u64 << F::EXPLICIT_MANTISSA_WIDTH;
    let mantissa = (frac_raw | implicit_leading_bit)
        << (NORMALIZED_POINT_POSITION as usize - F::EXPLICIT_MANTISSA_WIDTH);
    (FpType::Nonzero, sign, FpUnpacked { sign, exponent, mantissa })
}
