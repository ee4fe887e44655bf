use log::trace;

use super::bits::{bit_length, bit_length_wide, shr_or_zero, shrink, strip_trailing_zeros};
use super::core::{Format, Unum};

/// Strips both fractions and widens the shorter one so both have the same bit
/// length, which puts their hidden bits at the same position.
fn align_fractions(mut a: Unum, mut b: Unum) -> (Unum, Unum) {
    a.fraction = strip_trailing_zeros(a.fraction);
    b.fraction = strip_trailing_zeros(b.fraction);

    let len_a = bit_length(a.fraction);
    let len_b = bit_length(b.fraction);
    if len_a > len_b {
        b.fraction <<= len_a - len_b;
    } else if len_b > len_a {
        a.fraction <<= len_b - len_a;
    }
    (a, b)
}

fn signed(sign: bool, fraction: u64) -> i128 {
    if sign {
        -i128::from(fraction)
    } else {
        i128::from(fraction)
    }
}

impl<const N: u32, const ES: u32> Format<N, ES> {
    fn normalize(u: Unum) -> Unum {
        let fraction = shrink(u128::from(u.fraction), N);
        if fraction == 0 {
            return Unum::ZERO;
        }
        Unum { fraction, ..u }
    }

    /// Sum of two unums.
    ///
    /// The operand with the smaller exponent is shifted down onto the other's
    /// scale and loses whatever falls off. A result wider than `N` bits is
    /// truncated, not rounded. Zero and NaR both have an empty fraction and act
    /// as the identity, so `x + NaR` is `x` and `NaR - NaR` is zero.
    pub fn add_unum(a: Unum, b: Unum) -> Unum {
        match (a.fraction, b.fraction) {
            (0, 0) => return Unum::ZERO,
            (_, 0) => return Self::normalize(a),
            (0, _) => return Self::normalize(b),
            _ => {}
        }

        let (a, b) = align_fractions(a, b);
        let hidden = i64::from(bit_length(a.fraction));

        let exponent = a.exponent.max(b.exponent);
        let fraction_a = shr_or_zero(a.fraction, exponent - a.exponent);
        let fraction_b = shr_or_zero(b.fraction, exponent - b.exponent);

        let sum = signed(a.sign, fraction_a) + signed(b.sign, fraction_b);
        let magnitude = sum.unsigned_abs();
        if magnitude == 0 {
            return Unum::ZERO;
        }

        Unum {
            sign: sum < 0,
            // Carry out of the top bit or cancellation moves the hidden bit.
            exponent: exponent + i64::from(bit_length_wide(magnitude)) - hidden,
            fraction: shrink(magnitude, N),
        }
    }

    pub fn sub_unum(a: Unum, b: Unum) -> Unum {
        Self::add_unum(a, Unum { sign: !b.sign, ..b })
    }

    /// Product of two unums. NaR wins over zero; either one short-circuits.
    pub fn mul_unum(a: Unum, b: Unum) -> Unum {
        if a.is_nar() || b.is_nar() {
            return Unum::NAR;
        }
        if a.fraction == 0 || b.fraction == 0 {
            return Unum::ZERO;
        }

        let (a, b) = align_fractions(a, b);
        let product = u128::from(a.fraction) * u128::from(b.fraction);

        let product_len = i64::from(bit_length_wide(product));
        let len_a = i64::from(bit_length(a.fraction));
        let len_b = i64::from(bit_length(b.fraction));

        Unum {
            sign: a.sign ^ b.sign,
            exponent: a.exponent + b.exponent + (product_len - 1) - (len_a - 1) - (len_b - 1),
            fraction: shrink(product, N),
        }
    }

    /// Quotient of two unums, computed with `N` extra bits of precision.
    ///
    /// A NaR dividend or a zero (or NaR) divisor gives NaR; a zero dividend
    /// gives zero.
    pub fn div_unum(a: Unum, b: Unum) -> Unum {
        if a.is_nar() {
            return Unum::NAR;
        }
        if b.fraction == 0 {
            trace!("posit<{},{}> division by zero or NaR", N, ES);
            return Unum::NAR;
        }
        if a.fraction == 0 {
            return Unum::ZERO;
        }

        let (a, b) = align_fractions(a, b);
        let quotient = (u128::from(a.fraction) << N) / u128::from(b.fraction);

        let mut exponent = a.exponent - b.exponent;
        // Quotient below one: the hidden bit moves down a place.
        if a.fraction < b.fraction {
            exponent -= 1;
        }

        Unum {
            sign: a.sign ^ b.sign,
            exponent,
            fraction: shrink(quotient, N),
        }
    }

    pub fn add(a: u32, b: u32) -> u32 {
        Self::encode(Self::add_unum(Self::decode(a), Self::decode(b)))
    }

    pub fn sub(a: u32, b: u32) -> u32 {
        Self::encode(Self::sub_unum(Self::decode(a), Self::decode(b)))
    }

    pub fn mul(a: u32, b: u32) -> u32 {
        Self::encode(Self::mul_unum(Self::decode(a), Self::decode(b)))
    }

    pub fn div(a: u32, b: u32) -> u32 {
        Self::encode(Self::div_unum(Self::decode(a), Self::decode(b)))
    }

    /// Negation; zero and NaR map to themselves.
    pub fn neg(code: u32) -> u32 {
        let u = Self::decode(code);
        if u.fraction == 0 {
            return code & Self::MASK;
        }
        Self::encode(Unum { sign: !u.sign, ..u })
    }

    pub fn abs(code: u32) -> u32 {
        if Self::decode(code).sign {
            Self::neg(code)
        } else {
            code & Self::MASK
        }
    }

    /// `a - trunc(a / b) * b`, so the result takes the sign of `a`.
    pub fn rem(a: u32, b: u32) -> u32 {
        let dividend = Self::decode(a);
        let divisor = Self::decode(b);
        if dividend.is_nar() || divisor.fraction == 0 {
            return Self::NAR;
        }
        if dividend.is_zero() {
            return Self::ZERO;
        }

        let quotient = Self::trunc(Self::div(a, b));
        Self::sub(a, Self::mul(quotient, b))
    }
}
