/// A posit configuration: `N` total bits with an exponent field of at most `ES` bits.
///
/// The type carries no data; every codec, arithmetic, comparison and conversion
/// routine is an associated function, so several configurations can coexist in
/// one program without any shared state.
///
/// Codes are passed around as `u32` values whose low `N` bits hold the posit.
/// Inputs are masked to `N` bits and every returned code is already masked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Format<const N: u32, const ES: u32>;

/// 16-bit posits with a 3-bit exponent field.
pub type P16E3 = Format<16, 3>;

impl<const N: u32, const ES: u32> Format<N, ES> {
    pub const N: u32 = N;
    pub const ES: u32 = ES;

    /// Exponent step contributed by one unit of regime.
    pub const USEED_LOG2: i64 = 1 << ES;

    pub const MASK: u32 = ((1u64 << N) - 1) as u32;

    pub const ZERO: u32 = 0;
    pub const NAR: u32 = 1 << (N - 1);
    pub const ONE: u32 = 1 << (N - 2);
    pub const MAXPOS: u32 = (1 << (N - 1)) - 1;
    pub const MINPOS: u32 = 1;

    // Intermediate products and quotients need 2 * N bits.
    pub(crate) const VALID: () = assert!(
        N >= 3 && N <= 32 && ES < N,
        "posit formats need 3 <= N <= 32 and ES < N"
    );
}

/// Decomposed posit: `(-1)^sign * 1.f * 2^exponent`, where the highest set bit
/// of `fraction` is the hidden bit and trailing zero bits are stripped.
///
/// Zero is `{ sign: false, exponent: 0, fraction: 0 }` and NaR is any value with
/// `sign` set and an empty fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unum {
    pub sign: bool,
    pub exponent: i64,
    pub fraction: u64,
}

impl Unum {
    pub const ZERO: Self = Unum {
        sign: false,
        exponent: 0,
        fraction: 0,
    };
    pub const NAR: Self = Unum {
        sign: true,
        exponent: 0,
        fraction: 0,
    };

    pub fn new(sign: bool, exponent: i64, fraction: u64) -> Self {
        Unum {
            sign,
            exponent,
            fraction,
        }
    }

    pub fn is_zero(&self) -> bool {
        !self.sign && self.fraction == 0
    }

    pub fn is_nar(&self) -> bool {
        self.sign && self.fraction == 0
    }

    /// Number of fraction bits below the hidden bit.
    pub(crate) fn fraction_len(&self) -> u32 {
        super::bits::bit_length(self.fraction).saturating_sub(1)
    }
}
