//! Exact Num \
//! A unified arbitrary-precision numeric engine. This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision unsigned integers stored as
//!   decimal digit sequences; the foundation for everything else.
//! - [`Fraction`]: Immutable signed exact rationals over two [`BigInt`]
//!   magnitudes, always in lowest terms, with terminating and repeating
//!   decimal rendering.
//! - [`radix`]: Conversion of numeral strings (integer plus optional
//!   fractional part) between bases 2..=16.
//! - [`prime`]: Miller-Rabin primality testing and random prime generation
//!   with a caller-owned random source.
//!
//! ```
//! use exact_num::{prime, radix, BigInt, Fraction};
//!
//! let a = BigInt::from_digits("123456789123456789").unwrap();
//! let b = BigInt::from_digits("987654321").unwrap();
//! println!("a * b = {}", &a * &b);
//!
//! let x = Fraction::from_decimal_str("1").unwrap();
//! let y = Fraction::from_decimal_str("3").unwrap();
//! assert_eq!(x.checked_div(&y).unwrap().to_canonical_string(), "0.(3)");
//!
//! assert_eq!(radix::convert("FF", 16, 2, 100).unwrap(), "11111111");
//! assert!(prime::is_prime(&BigInt::from(97u8)));
//! ```

mod big_int;
mod error;
mod fraction;
mod num_cache;
mod num_constants;
pub mod prime;
pub mod radix;

pub use big_int::BigInt;
pub use error::NumError;
pub use fraction::Fraction;
pub use num_constants::DEFAULT_MAX_FRACTION_DIGITS;
