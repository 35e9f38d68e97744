//! Residual error of a right shift

use super::bit_util::{most_significant_bit, ones};

/// Size of the bits discarded by a right shift, relative to half an ulp
/// of the retained value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ResidualError {
    Zero,
    LessThanHalf,
    Half,
    GreaterThanHalf,
}

/// Classify the bits lost when shifting `mantissa` right by `shift_amount`
///
/// A non-positive shift loses nothing. Beyond 64 every bit is lost and
/// only the top bit decides which side of half the residual lies on.
pub fn residual_error_on_right_shift(mantissa: u64, shift_amount: i32) -> ResidualError {
    if shift_amount <= 0 || mantissa == 0 {
        return ResidualError::Zero;
    }

    if shift_amount > 64 {
        return if most_significant_bit(mantissa) {
            ResidualError::GreaterThanHalf
        } else {
            ResidualError::LessThanHalf
        };
    }

    let half_bit_position = (shift_amount - 1) as usize;
    let half = 1u64 << half_bit_position;
    let error = mantissa & ones(shift_amount as usize);

    if error == 0 {
        ResidualError::Zero
    } else if error < half {
        ResidualError::LessThanHalf
    } else if error == half {
        ResidualError::Half
    } else {
        ResidualError::GreaterThanHalf
    }
}
