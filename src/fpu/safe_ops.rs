//! Shifts and negation with defined results for every operand
//!
//! Shift amounts are signed: a negative amount shifts the other way, and
//! amounts of 64 or more shift every bit out instead of wrapping.

/// Two's-complement negation of a 64-bit pattern
#[inline(always)]
pub fn negate(value: u64) -> u64 {
    value.wrapping_neg()
}

#[inline(always)]
pub fn logical_shift_left(value: u64, amount: i32) -> u64 {
    if amount < 0 {
        return logical_shift_right(value, amount.saturating_neg());
    }
    if amount >= 64 {
        return 0;
    }
    value << amount
}

#[inline(always)]
pub fn logical_shift_right(value: u64, amount: i32) -> u64 {
    if amount < 0 {
        return logical_shift_left(value, amount.saturating_neg());
    }
    if amount >= 64 {
        return 0;
    }
    value >> amount
}

/// Sign-filling right shift; the pattern is read as two's complement
#[inline(always)]
pub fn arithmetic_shift_right(value: u64, amount: i32) -> u64 {
    if amount < 0 {
        return arithmetic_shift_left(value, amount.saturating_neg());
    }
    if amount >= 64 {
        return if (value as i64) < 0 { u64::MAX } else { 0 };
    }
    ((value as i64) >> amount) as u64
}

/// Left shift where a negative amount means an arithmetic right shift
#[inline(always)]
pub fn arithmetic_shift_left(value: u64, amount: i32) -> u64 {
    if amount < 0 {
        return arithmetic_shift_right(value, amount.saturating_neg());
    }
    if amount >= 64 {
        return 0;
    }
    value << amount
}
