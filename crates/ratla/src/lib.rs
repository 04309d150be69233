#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use ratla_rational as rational;

#[doc(inline)]
pub use ratla_linalg as linalg;
