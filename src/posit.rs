pub mod core;

mod arith;
mod bits;
mod codec;
mod compare;
mod convert;
mod value;

pub use self::core::{Format, P16E3, Unum};
pub use value::{Posit16_3, PositValue};
