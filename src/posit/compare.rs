use std::cmp::Ordering;

use super::core::Format;

// Posit codes sort like N-bit two's-complement integers, so ordering needs no
// decoding. NaR (the most negative code) sorts below every real value.
impl<const N: u32, const ES: u32> Format<N, ES> {
    /// The code sign-extended from `N` bits.
    pub fn to_ordinal(code: u32) -> i64 {
        let shift = u64::BITS - N;
        ((u64::from(code) << shift) as i64) >> shift
    }

    pub fn compare(a: u32, b: u32) -> Ordering {
        Self::to_ordinal(a).cmp(&Self::to_ordinal(b))
    }

    /// Bit equality; every value has exactly one code.
    pub fn eq(a: u32, b: u32) -> bool {
        a & Self::MASK == b & Self::MASK
    }

    pub fn lt(a: u32, b: u32) -> bool {
        Self::to_ordinal(a) < Self::to_ordinal(b)
    }

    pub fn gt(a: u32, b: u32) -> bool {
        Self::to_ordinal(a) > Self::to_ordinal(b)
    }

    pub fn le(a: u32, b: u32) -> bool {
        Self::to_ordinal(a) <= Self::to_ordinal(b)
    }

    pub fn ge(a: u32, b: u32) -> bool {
        Self::to_ordinal(a) >= Self::to_ordinal(b)
    }
}
