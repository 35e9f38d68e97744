//! Floating-point to fixed-point conversion (FCVT*, VCVT* to integer/fixed)
//!
//! The operand is handled as an exact mantissa/exponent pair: scaling by
//! the fractional bits only moves the binary point, and rounding looks at
//! the discarded bits directly.

use super::bit_util::{bit, highest_set_bit, most_significant_bit, ones};
use super::exception::{process_exception, FpExc};
use super::fpcr::Fpcr;
use super::fpsr::Fpsr;
use super::info::FpInfo;
use super::mantissa::{residual_error_on_right_shift, ResidualError};
use super::rounding_mode::RoundingMode;
use super::safe_ops::{arithmetic_shift_left, logical_shift_left, negate};
use super::unpacked::{fp_unpack, NORMALIZED_POINT_POSITION};

/// Decide whether the truncated two's-complement `int_result` moves up by one
///
/// `int_result` has already been shifted, so it holds the floor of the
/// scaled value; the top bit is its sign.
pub fn should_round_up(rounding: RoundingMode, error: ResidualError, int_result: u64) -> bool {
    match rounding {
        RoundingMode::ToNearestTieEven => {
            error > ResidualError::Half || (error == ResidualError::Half && bit(0, int_result))
        }
        RoundingMode::TowardsPlusInfinity => error != ResidualError::Zero,
        RoundingMode::TowardsMinusInfinity => false,
        RoundingMode::TowardsZero => error != ResidualError::Zero && most_significant_bit(int_result),
        RoundingMode::ToNearestTieAwayFromZero => {
            error > ResidualError::Half || (error == ResidualError::Half && !most_significant_bit(int_result))
        }
        RoundingMode::ToOdd => unreachable!("round to odd is not a valid fixed-point rounding mode"),
    }
}

/// Highest set bit of the magnitude after rounding, at the mantissa's scale
///
/// Only a positive value grows when rounded up: a negative one was floored,
/// so its round-up moves back towards zero.
fn rounded_highest_bit(mantissa: u64, exponent: i32, magnitude_carry: bool) -> i32 {
    if !magnitude_carry {
        return highest_set_bit(mantissa);
    }

    // One unit at the destination scale, expressed in mantissa bits
    let unit_position = -exponent;
    if unit_position >= 64 {
        // mantissa < 2^63 <= unit, so the unit dominates the sum
        unit_position
    } else {
        highest_set_bit(mantissa + logical_shift_left(1, unit_position))
    }
}

/// Convert `op` to a fixed-point number with `ibits` total and `fbits`
/// fractional bits
///
/// Out-of-range results saturate and raise InvalidOp; NaNs and negative
/// values for an unsigned destination give 0 and raise InvalidOp; any
/// discarded fraction raises Inexact. The result is masked to `ibits`.
///
/// # Panics
///
/// On `RoundingMode::ToOdd`, `ibits` outside 1..=64, or `fbits > ibits`.
pub fn fp_to_fixed<F: FpInfo>(
    ibits: usize,
    op: F,
    fbits: usize,
    unsigned: bool,
    fpcr: Fpcr,
    rounding: RoundingMode,
    fpsr: &mut Fpsr,
) -> u64 {
    assert!(rounding != RoundingMode::ToOdd, "round to odd is not a valid fixed-point rounding mode");
    assert!((1..=64).contains(&ibits), "fixed-point width must be 1..=64 bits, got {}", ibits);
    assert!(fbits <= ibits, "fractional bits ({}) exceed fixed-point width ({})", fbits, ibits);

    let (ty, sign, value) = fp_unpack(op, fpcr, fpsr);

    // NaNs carry on with their zero mantissa and land on the zero return
    if ty.is_nan() {
        process_exception(FpExc::InvalidOp, fpcr, fpsr);
    }

    if value.mantissa == 0 {
        return 0;
    }

    if sign && unsigned {
        process_exception(FpExc::InvalidOp, fpcr, fpsr);
        return 0;
    }

    // value *= 2^fbits, then move the binary point back to bit zero
    let exponent = value.exponent + fbits as i32 - NORMALIZED_POINT_POSITION;

    let mut int_result = if sign { negate(value.mantissa) } else { value.mantissa };
    let error = residual_error_on_right_shift(int_result, exponent.saturating_neg());
    int_result = arithmetic_shift_left(int_result, exponent);

    let round_up = should_round_up(rounding, error, int_result);
    if round_up {
        int_result = int_result.wrapping_add(1);
    }

    // Overflow when the rounded magnitude needs more than the available bits
    let highest_bit = rounded_highest_bit(value.mantissa, exponent, round_up && !sign);
    let min_exponent_for_overflow = ibits as i32 - highest_bit - if unsigned { 0 } else { 1 };
    if exponent >= min_exponent_for_overflow {
        if unsigned || !sign {
            process_exception(FpExc::InvalidOp, fpcr, fpsr);
            return ones(ibits - if unsigned { 0 } else { 1 });
        }

        // Exactly the most negative value still fits
        let min_value = negate(1u64 << (ibits - 1));
        if !(exponent == min_exponent_for_overflow && int_result == min_value) {
            process_exception(FpExc::InvalidOp, fpcr, fpsr);
            return 1u64 << (ibits - 1);
        }
    }

    if error != ResidualError::Zero {
        process_exception(FpExc::Inexact, fpcr, fpsr);
    }

    int_result & ones(ibits)
}
