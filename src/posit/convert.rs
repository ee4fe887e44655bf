use super::bits::{bit_length, mask};
use super::core::{Format, Unum};

const F32_MANTISSA_BITS: u32 = 23;
const F32_EXPONENT_BITS: u32 = 8;
const F64_MANTISSA_BITS: u32 = 52;
const F64_EXPONENT_BITS: u32 = 11;

/// Packs a nonzero unum into IEEE-754 fields. The biased exponent is wrapped
/// into its field, not range checked.
fn pack_ieee(u: Unum, mantissa_bits: u32, exponent_bits: u32) -> u64 {
    let bias = (1i64 << (exponent_bits - 1)) - 1;
    let fraction_len = u.fraction_len();

    let aligned = if fraction_len <= mantissa_bits {
        u.fraction << (mantissa_bits - fraction_len)
    } else {
        u.fraction >> (fraction_len - mantissa_bits)
    };
    let mantissa = aligned & mask(mantissa_bits, 0);
    let exponent = (u.exponent + bias) as u64 & mask(exponent_bits, 0);

    (u64::from(u.sign) << (mantissa_bits + exponent_bits)) | (exponent << mantissa_bits) | mantissa
}

impl<const N: u32, const ES: u32> Format<N, ES> {
    pub fn from_int(value: i64) -> u32 {
        let magnitude = value.unsigned_abs();
        Self::encode(Unum {
            sign: value < 0,
            exponent: i64::from(bit_length(magnitude)) - 1,
            fraction: magnitude,
        })
    }

    /// Converts an `f32`, rounding in the encoder. `±0.0` gives zero and NaN or
    /// infinities give NaR. Subnormal inputs are unpacked as if normal, which
    /// only matters for formats whose minpos is below `f32::MIN_POSITIVE`.
    pub fn from_f32(value: f32) -> u32 {
        if value == 0.0 {
            return Self::ZERO;
        }
        if !value.is_finite() {
            return Self::NAR;
        }

        let bits = value.to_bits();
        let exponent = i64::from((bits >> F32_MANTISSA_BITS) & 0xFF) - 127;
        let mantissa = u64::from(bits) & mask(F32_MANTISSA_BITS, 0) | (1 << F32_MANTISSA_BITS);

        Self::encode(Unum {
            sign: bits >> 31 == 1,
            exponent,
            fraction: mantissa >> F32_MANTISSA_BITS.saturating_sub(N),
        })
    }

    /// Integer part, truncated toward zero. Magnitudes of 2^63 and above give
    /// `±i64::MAX`; zero and NaR give 0.
    pub fn to_int(code: u32) -> i64 {
        let u = Self::decode(code);
        if u.fraction == 0 || u.exponent < 0 {
            return 0;
        }

        let magnitude = if u.exponent > 62 {
            i64::MAX
        } else {
            let fraction_len = i64::from(u.fraction_len());
            let aligned = if fraction_len > u.exponent {
                u.fraction >> (fraction_len - u.exponent)
            } else {
                u.fraction << (u.exponent - fraction_len)
            };
            aligned as i64
        };

        if u.sign { -magnitude } else { magnitude }
    }

    /// Converts to `f32`. Zero gives `0.0` and NaR gives NaN.
    ///
    /// The exponent is not range checked: formats whose values exceed the `f32`
    /// exponent range produce meaningless bit patterns. Every `P16E3` value fits.
    pub fn to_f32(code: u32) -> f32 {
        let u = Self::decode(code);
        if u.is_zero() {
            return 0.0;
        }
        if u.is_nar() {
            return f32::NAN;
        }
        f32::from_bits(pack_ieee(u, F32_MANTISSA_BITS, F32_EXPONENT_BITS) as u32)
    }

    /// Exact conversion to `f64`. Zero gives `0.0` and NaR gives NaN.
    pub fn to_f64(code: u32) -> f64 {
        let u = Self::decode(code);
        if u.is_zero() {
            return 0.0;
        }
        if u.is_nar() {
            return f64::NAN;
        }
        f64::from_bits(pack_ieee(u, F64_MANTISSA_BITS, F64_EXPONENT_BITS))
    }

    /// Rounds toward zero to an integral value.
    pub fn trunc(code: u32) -> u32 {
        let u = Self::decode(code);
        if u.fraction == 0 {
            return code & Self::MASK;
        }
        if u.exponent < 0 {
            return Self::ZERO;
        }

        let fraction_len = i64::from(u.fraction_len());
        if u.exponent >= fraction_len {
            return code & Self::MASK;
        }

        let chop = (fraction_len - u.exponent) as u32;
        Self::encode(Unum {
            fraction: (u.fraction >> chop) << chop,
            ..u
        })
    }
}
