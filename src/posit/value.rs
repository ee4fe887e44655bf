use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
    str::FromStr,
};

use num_traits::{Bounded, Num, NumCast, One, ToPrimitive, Zero};

use super::core::Format;

/// A single posit of the `Format<N, ES>` configuration.
///
/// Equality is bit equality (so NaR equals itself) and ordering is the code's
/// two's-complement order, which puts NaR below every real value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositValue<const N: u32, const ES: u32> {
    bits: u32,
}

pub type Posit16_3 = PositValue<16, 3>;

impl<const N: u32, const ES: u32> PositValue<N, ES> {
    pub const ZERO: Self = PositValue {
        bits: Format::<N, ES>::ZERO,
    };
    pub const ONE: Self = PositValue {
        bits: Format::<N, ES>::ONE,
    };
    pub const NAR: Self = PositValue {
        bits: Format::<N, ES>::NAR,
    };
    pub const MAX: Self = PositValue {
        bits: Format::<N, ES>::MAXPOS,
    };
    pub const MIN: Self = PositValue {
        bits: Format::<N, ES>::MAXPOS.wrapping_neg() & Format::<N, ES>::MASK,
    };
    pub const MIN_POSITIVE: Self = PositValue {
        bits: Format::<N, ES>::MINPOS,
    };

    /// Wraps a raw code; bits above `N` are dropped.
    pub fn new(bits: u32) -> Self {
        PositValue {
            bits: bits & Format::<N, ES>::MASK,
        }
    }

    pub fn to_bits(self) -> u32 {
        self.bits
    }

    pub fn from_int(value: i64) -> Self {
        Self::new(Format::<N, ES>::from_int(value))
    }

    pub fn from_f32(value: f32) -> Self {
        Self::new(Format::<N, ES>::from_f32(value))
    }

    pub fn to_int(self) -> i64 {
        Format::<N, ES>::to_int(self.bits)
    }

    /// See [`Format::to_f32`]: not range checked for wide formats.
    pub fn to_float(self) -> f32 {
        Format::<N, ES>::to_f32(self.bits)
    }

    pub fn to_f64(self) -> f64 {
        Format::<N, ES>::to_f64(self.bits)
    }

    pub fn is_nar(self) -> bool {
        self.bits == Format::<N, ES>::NAR
    }

    pub fn abs(self) -> Self {
        Self::new(Format::<N, ES>::abs(self.bits))
    }

    pub fn trunc(self) -> Self {
        Self::new(Format::<N, ES>::trunc(self.bits))
    }
}

impl<const N: u32, const ES: u32> From<i64> for PositValue<N, ES> {
    fn from(value: i64) -> Self {
        Self::from_int(value)
    }
}

impl<const N: u32, const ES: u32> From<i32> for PositValue<N, ES> {
    fn from(value: i32) -> Self {
        Self::from_int(value.into())
    }
}

impl<const N: u32, const ES: u32> From<f32> for PositValue<N, ES> {
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl<const N: u32, const ES: u32> From<PositValue<N, ES>> for f32 {
    fn from(p: PositValue<N, ES>) -> Self {
        p.to_float()
    }
}

impl<const N: u32, const ES: u32> From<PositValue<N, ES>> for f64 {
    fn from(p: PositValue<N, ES>) -> Self {
        p.to_f64()
    }
}

impl<const N: u32, const ES: u32> Add for PositValue<N, ES> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(Format::<N, ES>::add(self.bits, rhs.bits))
    }
}

impl<const N: u32, const ES: u32> Sub for PositValue<N, ES> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(Format::<N, ES>::sub(self.bits, rhs.bits))
    }
}

impl<const N: u32, const ES: u32> Mul for PositValue<N, ES> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(Format::<N, ES>::mul(self.bits, rhs.bits))
    }
}

impl<const N: u32, const ES: u32> Div for PositValue<N, ES> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Self::new(Format::<N, ES>::div(self.bits, rhs.bits))
    }
}

impl<const N: u32, const ES: u32> Rem for PositValue<N, ES> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self::Output {
        Self::new(Format::<N, ES>::rem(self.bits, rhs.bits))
    }
}

impl<const N: u32, const ES: u32> Neg for PositValue<N, ES> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(Format::<N, ES>::neg(self.bits))
    }
}

impl<const N: u32, const ES: u32> AddAssign for PositValue<N, ES> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: u32, const ES: u32> SubAssign for PositValue<N, ES> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: u32, const ES: u32> MulAssign for PositValue<N, ES> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const N: u32, const ES: u32> DivAssign for PositValue<N, ES> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const N: u32, const ES: u32> PartialOrd for PositValue<N, ES> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: u32, const ES: u32> Ord for PositValue<N, ES> {
    fn cmp(&self, other: &Self) -> Ordering {
        Format::<N, ES>::compare(self.bits, other.bits)
    }
}

impl<const N: u32, const ES: u32> fmt::Display for PositValue<N, ES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nar() {
            return write!(f, "NaR");
        }
        write!(f, "{}", PositValue::to_f64(*self))
    }
}

impl<const N: u32, const ES: u32> FromStr for PositValue<N, ES> {
    type Err = num_traits::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

impl<const N: u32, const ES: u32> Zero for PositValue<N, ES> {
    fn zero() -> Self {
        Self::ZERO
    }
    fn is_zero(&self) -> bool {
        self.bits == Format::<N, ES>::ZERO
    }
}

impl<const N: u32, const ES: u32> One for PositValue<N, ES> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const N: u32, const ES: u32> Num for PositValue<N, ES> {
    type FromStrRadixErr = num_traits::ParseFloatError;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        <f32 as Num>::from_str_radix(s, radix).map(Self::from_f32)
    }
}

impl<const N: u32, const ES: u32> Bounded for PositValue<N, ES> {
    fn min_value() -> Self {
        Self::MIN
    }
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const N: u32, const ES: u32> ToPrimitive for PositValue<N, ES> {
    fn to_i64(&self) -> Option<i64> {
        if self.is_nar() {
            return None;
        }
        Some(self.to_int())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|v| u64::try_from(v).ok())
    }

    fn to_f32(&self) -> Option<f32> {
        if self.is_nar() {
            return None;
        }
        Some(self.to_float())
    }

    fn to_f64(&self) -> Option<f64> {
        if self.is_nar() {
            return None;
        }
        Some(PositValue::to_f64(*self))
    }
}

// Integral sources take the integer path so they are rounded once, by the
// encoder, and not first to f32.
impl<const N: u32, const ES: u32> NumCast for PositValue<N, ES> {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        let value = n.to_f64()?;
        match n.to_i64() {
            Some(int) if int as f64 == value => Some(Self::from_int(int)),
            _ => Some(Self::from_f32(value as f32)),
        }
    }
}
