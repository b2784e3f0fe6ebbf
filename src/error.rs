//! # NumError
//! Every fallible engine operation reports one of these kinds to its
//! immediate caller. All conditions are recoverable: values are immutable,
//! so a failed operation simply produces no new value.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumError {
    /// A character whose value is not a digit of the declared radix.
    #[error("invalid digit '{ch}' for base {base}")]
    InvalidDigit { ch: char, base: u32 },

    /// Bad sign or decimal-point placement, or a literal with no digits.
    #[error("malformed number literal")]
    MalformedNumber,

    /// Zero divisor in integer or fraction division.
    #[error("division by zero")]
    DivisionByZero,

    /// Subtraction with minuend smaller than subtrahend.
    #[error("subtraction underflow: minuend is less than subtrahend")]
    Underflow,

    /// Radix outside the supported 2..=16 range.
    #[error("unsupported radix {0}, expected a base in 2..=16")]
    UnsupportedRadix(u32),

    /// Random prime search gave up after the full attempt budget.
    #[error("prime generation exhausted after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}
