//! Bit-level helpers over 64-bit patterns

/// Mask with the low `count` bits set (`count` may be 0..=64)
#[inline(always)]
pub fn ones(count: usize) -> u64 {
    if count >= 64 {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}

/// Test bit `n` of `value`
#[inline(always)]
pub fn bit(n: usize, value: u64) -> bool {
    n < 64 && (value >> n) & 1 != 0
}

/// Top bit of the 64-bit pattern (the sign in two's complement)
#[inline(always)]
pub fn most_significant_bit(value: u64) -> bool {
    value >> 63 != 0
}

/// Index of the highest set bit, or -1 if `value` is zero
#[inline(always)]
pub fn highest_set_bit(value: u64) -> i32 {
    63 - value.leading_zeros() as i32
}
