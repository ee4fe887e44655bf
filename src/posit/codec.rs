use log::trace;

use super::bits::{bit_length, mask, strip_trailing_zeros};
use super::core::{Format, Unum};

impl<const N: u32, const ES: u32> Format<N, ES> {
    /// Splits a posit code into sign, exponent and fraction.
    ///
    /// Every code decodes to a definite [`Unum`]; the two reserved codes map to
    /// [`Unum::ZERO`] and [`Unum::NAR`].
    pub fn decode(code: u32) -> Unum {
        let () = Self::VALID;

        let mut p = u64::from(code) & mask(N, 0);
        if p == 0 {
            return Unum::ZERO;
        }
        if p == u64::from(Self::NAR) {
            return Unum::NAR;
        }

        let sign = (p >> (N - 1)) & 1 == 1;
        if sign {
            p = p.wrapping_neg() & mask(N, 0);
        }

        // The N - 1 bits below the sign, moved to the top of the word so the run
        // length can be read with a single leading_ones/leading_zeros.
        let body = p << (u64::BITS - (N - 1));
        let width = i64::from(N);

        let (regime, regime_size) = if (p >> (N - 2)) & 1 == 1 {
            let regime = i64::from(body.leading_ones()) - 1;
            (regime, width.min(regime + 2))
        } else {
            let regime = -i64::from(body.leading_zeros());
            (regime, -regime + 1)
        };

        let exponent_size = i64::from(ES).min(width - 1 - regime_size).max(0) as u32;
        let fraction_size = (width - 1 - regime_size - i64::from(exponent_size)).max(0) as u32;

        let exponent_field = ((p >> fraction_size) & mask(exponent_size, 0)) << (ES - exponent_size);
        let fraction = (p & mask(fraction_size, 0)) | (1 << fraction_size);

        Unum {
            sign,
            exponent: regime * Self::USEED_LOG2 + exponent_field as i64,
            fraction: strip_trailing_zeros(fraction),
        }
    }

    /// Packs a [`Unum`] into a posit code.
    ///
    /// Out-of-range exponents saturate: too large gives ±maxpos, too small gives
    /// minpos regardless of sign. Bits that do not fit are dropped and the result
    /// is bumped by one ulp only when the dropped part is strictly more than half
    /// an ulp, so exact ties round toward the smaller magnitude.
    pub fn encode(u: Unum) -> u32 {
        let () = Self::VALID;

        if u.fraction == 0 {
            return if u.sign { Self::NAR } else { Self::ZERO };
        }

        let width = i64::from(N);
        let regime = u.exponent >> ES;
        let exponent_field = (u.exponent & mask(ES, 0) as i64) as u64;

        if regime >= width - 2 {
            trace!(
                "posit<{},{}> encode: exponent {} saturates to maxpos",
                N,
                ES,
                u.exponent
            );
            return if u.sign {
                Self::MAXPOS.wrapping_neg() & Self::MASK
            } else {
                Self::MAXPOS
            };
        }
        if regime < -(width - 2) {
            trace!(
                "posit<{},{}> encode: exponent {} underflows to minpos",
                N,
                ES,
                u.exponent
            );
            return Self::MINPOS;
        }

        let (mut r, regime_size) = if regime >= 0 {
            let regime_size = (N - 1).min(regime as u32 + 2);
            (mask(regime_size - 1, N - regime_size), regime_size)
        } else {
            let regime_size = (-regime) as u32 + 1;
            (1u64 << (N - 1 - regime_size), regime_size)
        };

        let exponent_size = ES.min(N - 1 - regime_size);
        let fraction_size = N - 1 - regime_size - exponent_size;

        let fraction = strip_trailing_zeros(u.fraction);
        let fraction_len = bit_length(fraction) - 1;
        let fraction_bits = fraction & mask(fraction_len, 0);

        r |= (exponent_field >> (ES - exponent_size)) << fraction_size;
        r |= if fraction_len >= fraction_size {
            fraction_bits >> (fraction_len - fraction_size)
        } else {
            fraction_bits << (fraction_size - fraction_len)
        };

        // Whatever part of exponent_field:fraction_bits did not make it into r.
        let combined_len = ES + fraction_len;
        let kept_len = exponent_size + fraction_size;
        if combined_len > kept_len {
            let dropped_len = combined_len - kept_len;
            let combined = (u128::from(exponent_field) << fraction_len) | u128::from(fraction_bits);
            let dropped = combined & ((1u128 << dropped_len) - 1);
            if dropped > 1u128 << (dropped_len - 1) {
                r += 1;
            }
        }

        if u.sign {
            r = r.wrapping_neg() & mask(N, 0);
        }
        r as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posit::core::P16E3;

    fn validate_round_trip<const N: u32, const ES: u32>() {
        for code in 0..=Format::<N, ES>::MASK {
            let decoded = Format::<N, ES>::decode(code);
            let encoded = Format::<N, ES>::encode(decoded);
            if encoded != code {
                println!("posit<{},{}> code: {:#034b} ({})", N, ES, code, code);
                println!("decoded:    {:?}", decoded);
                println!("re-encoded: {:#034b} ({})", encoded, encoded);
            }
            assert_eq!(
                encoded, code,
                "round trip mismatch for posit<{},{}> code {}",
                N, ES, code
            );
        }
    }

    #[test]
    fn test_round_trip_full_domain() {
        validate_round_trip::<16, 3>();
    }

    #[test]
    fn test_round_trip_other_formats() {
        validate_round_trip::<8, 0>();
        validate_round_trip::<8, 2>();
        validate_round_trip::<12, 2>();
        validate_round_trip::<16, 1>();
        validate_round_trip::<10, 4>();
    }

    #[test]
    fn test_round_trip_sampled_32_bit() {
        for code in (0..=u32::MAX).step_by(65_521) {
            assert_eq!(Format::<32, 2>::encode(Format::<32, 2>::decode(code)), code);
        }
        for code in [0x7FFF_FFFF, 0x8000_0001, 0xFFFF_FFFF, 1, 0x4000_0000] {
            assert_eq!(Format::<32, 2>::encode(Format::<32, 2>::decode(code)), code);
        }
    }

    #[test]
    fn test_decode_special_codes() {
        assert_eq!(P16E3::decode(0), Unum::ZERO);
        assert_eq!(P16E3::decode(0x8000), Unum::NAR);
        // Only the low 16 bits matter.
        assert_eq!(P16E3::decode(0x1_0000), Unum::ZERO);
    }

    #[test]
    fn test_decode_values() {
        // 1.0
        assert_eq!(P16E3::decode(16384), Unum::new(false, 0, 1));
        // 0.25: regime -1, exponent field 6
        assert_eq!(P16E3::decode(14336), Unum::new(false, -2, 1));
        // -1.0
        assert_eq!(P16E3::decode(49152), Unum::new(true, 0, 1));
        // 15184 = 0b11101101010000
        assert_eq!(P16E3::decode(27573), Unum::new(false, 13, 949));
        // maxpos and minpos sit at the ends of the regime range.
        assert_eq!(P16E3::decode(0x7FFF), Unum::new(false, 112, 1));
        assert_eq!(P16E3::decode(0x0001), Unum::new(false, -112, 1));
        assert_eq!(P16E3::decode(0xFFFF), Unum::new(true, -112, 1));
        // 12 leading zeros leave a truncated two-bit exponent field.
        assert_eq!(P16E3::decode(0x0004), Unum::new(false, -96, 1));
    }

    #[test]
    fn test_encode_special() {
        assert_eq!(P16E3::encode(Unum::ZERO), 0);
        assert_eq!(P16E3::encode(Unum::NAR), 0x8000);
        assert_eq!(P16E3::encode(Unum::new(true, 55, 0)), 0x8000);
    }

    #[test]
    fn test_encode_saturation() {
        assert_eq!(P16E3::encode(Unum::new(false, 112, 1)), 0x7FFF);
        assert_eq!(P16E3::encode(Unum::new(false, 4000, 3)), 0x7FFF);
        assert_eq!(P16E3::encode(Unum::new(true, 4000, 3)), 0x8001);
        assert_eq!(P16E3::encode(Unum::new(false, -113, 1)), 1);
        // Underflow ignores the sign.
        assert_eq!(P16E3::encode(Unum::new(true, -113, 1)), 1);
        assert_eq!(P16E3::encode(Unum::new(true, -4000, 1)), 1);
    }

    #[test]
    fn test_encode_rounding() {
        // 1 + 2^-10 fits exactly in the ten fraction bits next to a two-bit regime.
        assert_eq!(P16E3::encode(Unum::new(false, 0, 0b100_0000_0001)), 16385);
        // Half an ulp below that is a tie and rounds down.
        assert_eq!(P16E3::encode(Unum::new(false, 0, 0b1000_0000_0001)), 16384);
        // Anything above the tie rounds up.
        assert_eq!(P16E3::encode(Unum::new(false, 0, 0b1_0000_0000_0011)), 16385);
        // The fraction is stripped before packing.
        assert_eq!(P16E3::encode(Unum::new(false, 0, 0b1_0000)), 16384);
    }

    #[test]
    fn test_encode_negative() {
        assert_eq!(P16E3::encode(Unum::new(true, 0, 1)), 49152);
        assert_eq!(P16E3::encode(Unum::new(true, -2, 1)), 51200);
        assert_eq!(P16E3::encode(Unum::new(true, 13, 949)), 37963);
    }
}
