//! Integer helpers shared by the codec and the arithmetic core.

/// `n` set bits followed by `k` zero bits.
pub const fn mask(n: u32, k: u32) -> u64 {
    if n == 0 {
        0
    } else if n >= 64 {
        u64::MAX << k
    } else {
        ((1u64 << n) - 1) << k
    }
}

/// Number of bits needed to represent `x` (0 for 0).
pub const fn bit_length(x: u64) -> u32 {
    u64::BITS - x.leading_zeros()
}

pub const fn bit_length_wide(x: u128) -> u32 {
    u128::BITS - x.leading_zeros()
}

/// Drops trailing zero bits; 0 stays 0.
pub const fn strip_trailing_zeros(x: u64) -> u64 {
    if x == 0 { 0 } else { x >> x.trailing_zeros() }
}

/// Right shift that yields 0 instead of overflowing for large amounts.
pub const fn shr_or_zero(x: u64, amount: i64) -> u64 {
    if amount <= 0 {
        x
    } else if amount >= u64::BITS as i64 {
        0
    } else {
        x >> amount
    }
}

/// Truncates a fraction to at most `width` bits (keeping the top ones) and strips
/// trailing zeros.
pub const fn shrink(fraction: u128, width: u32) -> u64 {
    let len = bit_length_wide(fraction);
    let truncated = if len > width {
        fraction >> (len - width)
    } else {
        fraction
    };
    strip_trailing_zeros(truncated as u64)
}
