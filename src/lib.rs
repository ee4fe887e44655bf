//! Posit arithmetic on raw integer codes.
//!
//! [`Format`] names a posit configuration through const generics and carries
//! the codec, arithmetic, comparison and conversion routines as associated
//! functions over `u32` codes. [`PositValue`] wraps a single code and gives it
//! the usual operator and `num-traits` surface.
//!
//! ```
//! use rust_posit::{P16E3, Posit16_3};
//!
//! let three = P16E3::from_int(3);
//! let sum = P16E3::add(three, P16E3::from_int(87));
//! assert_eq!(P16E3::to_int(sum), 90);
//!
//! let p = Posit16_3::from(3) * Posit16_3::from(87);
//! assert_eq!(p.to_int(), 261);
//! ```

pub mod posit;

pub use posit::{Format, P16E3, Posit16_3, PositValue, Unum};
