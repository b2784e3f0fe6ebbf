//! # Radix conversion
//! Stateless conversion of numeral strings (integer part plus optional
//! fractional part) between bases 2..=16, on top of [`BigInt`] arithmetic.
//! Non-terminating fractional expansions are truncated at a caller-chosen
//! digit budget; that truncation is the documented contract, not an error.
//! # Example
//! ```
//! use exact_num::radix;
//!
//! assert_eq!(radix::convert("1010", 2, 10, 100).unwrap(), "10");
//! assert_eq!(radix::convert("FF", 16, 2, 100).unwrap(), "11111111");
//! assert_eq!(radix::convert("0.1", 2, 10, 100).unwrap(), "0.5");
//! ```

use crate::big_int::BigInt;
use crate::error::NumError;
use crate::num_constants::*;

/// Maps a numeral character to its value; case-insensitive letters `A`-`F`
/// read as 10-15. The value must be below `base`.
pub fn char_to_digit(ch: char, base: u32) -> Result<u8, NumError> {
    let val = match ch {
        '0'..='9' => ch as u8 - b'0',
        'a'..='f' => ch as u8 - b'a' + 10,
        'A'..='F' => ch as u8 - b'A' + 10,
        _ => return Err(NumError::InvalidDigit { ch, base }),
    };
    if (val as u32) < base {
        Ok(val)
    } else {
        Err(NumError::InvalidDigit { ch, base })
    }
}

/// Maps a digit value 0-15 to its numeral character, uppercase for 10-15.
pub fn digit_to_char(d: u8) -> char {
    debug_assert!((d as usize) < DIGITS.len());
    DIGITS[d as usize]
}

fn check_radix(base: u32) -> Result<(), NumError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&base) {
        Ok(())
    } else {
        Err(NumError::UnsupportedRadix(base))
    }
}

/// Checks a numeral string against `base`: every character must be a digit
/// of the base, at most one `.` is allowed, and at least one digit must be
/// present.
pub fn validate(s: &str, base: u32) -> Result<(), NumError> {
    check_radix(base)?;
    let mut dot_seen = false;
    let mut digit_seen = false;
    for ch in s.chars() {
        if ch == '.' {
            if dot_seen {
                return Err(NumError::MalformedNumber);
            }
            dot_seen = true;
            continue;
        }
        char_to_digit(ch, base)?;
        digit_seen = true;
    }
    if !digit_seen {
        return Err(NumError::MalformedNumber);
    }
    Ok(())
}

fn split_numeral(s: &str) -> (&str, &str) {
    match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (s, ""),
    }
}

/// Horner accumulation of a numeral's value as a base-10 [`BigInt`].
fn numeral_value(digits: &str, base: u32) -> Result<BigInt, NumError> {
    let mut value = BigInt::zero();
    for ch in digits.chars() {
        let d = char_to_digit(ch, base)?;
        value = value.mul_small(base as u8).add_small(d);
    }
    Ok(value)
}

/// Converts the integer part of a numeral: accumulate to a [`BigInt`], then
/// divide out `dest_base` collecting remainders least-significant first.
/// An empty digit string reads as zero.
pub fn convert_integer_part(digits: &str, src_base: u32, dest_base: u32) -> Result<String, NumError> {
    check_radix(src_base)?;
    check_radix(dest_base)?;
    let mut value = numeral_value(digits, src_base)?;
    if value.is_zero() {
        return Ok(String::from("0"));
    }
    let mut out = Vec::new();
    while !value.is_zero() {
        let (q, r) = value.div_rem_small_core(dest_base as u8);
        out.push(digit_to_char(r));
        value = q;
    }
    out.reverse();
    Ok(out.into_iter().collect())
}

/// Converts the fractional part of a numeral as the exact rational
/// `value(digits) / src_base^len`, emitting one destination digit per
/// iteration. At most `max_output_digits` digits are produced; a
/// non-terminating expansion is truncated there. Trailing zeros are
/// trimmed and an empty input yields an empty output.
pub fn convert_fractional_part(
    digits: &str,
    src_base: u32,
    dest_base: u32,
    max_output_digits: usize,
) -> Result<String, NumError> {
    check_radix(src_base)?;
    check_radix(dest_base)?;
    if digits.is_empty() {
        return Ok(String::new());
    }
    let mut numerator = numeral_value(digits, src_base)?;
    let denominator = BigInt::pow_small(src_base as u8, digits.len() as u32);
    let mut out = String::new();
    for _ in 0..max_output_digits {
        if numerator.is_zero() {
            break;
        }
        numerator = numerator.mul_small(dest_base as u8);
        let (digit, rem) = numerator.div_rem_core(&denominator);
        out.push(digit_to_char(digit.as_small()));
        numerator = rem;
    }
    while out.ends_with('0') {
        out.pop();
    }
    Ok(out)
}

/// Full numeral conversion: validates against `src_base`, splits on the
/// point, converts both parts, and joins them.
pub fn convert(
    s: &str,
    src_base: u32,
    dest_base: u32,
    max_frac_digits: usize,
) -> Result<String, NumError> {
    validate(s, src_base)?;
    check_radix(dest_base)?;
    let (int_part, frac_part) = split_numeral(s);
    let mut result = convert_integer_part(int_part, src_base, dest_base)?;
    let frac = convert_fractional_part(frac_part, src_base, dest_base, max_frac_digits)?;
    if !frac.is_empty() {
        result.push('.');
        result.push_str(&frac);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_mapping() {
        assert_eq!(char_to_digit('7', 10), Ok(7));
        assert_eq!(char_to_digit('f', 16), Ok(15));
        assert_eq!(char_to_digit('A', 16), Ok(10));
        assert_eq!(
            char_to_digit('2', 2),
            Err(NumError::InvalidDigit { ch: '2', base: 2 })
        );
        assert_eq!(
            char_to_digit('g', 16),
            Err(NumError::InvalidDigit { ch: 'g', base: 16 })
        );
        assert_eq!(digit_to_char(15), 'F');
        assert_eq!(digit_to_char(9), '9');
    }

    #[test]
    fn validation() {
        assert_eq!(validate("1010.11", 2), Ok(()));
        assert_eq!(validate("FF", 16), Ok(()));
        assert_eq!(validate("1.2.3", 10), Err(NumError::MalformedNumber));
        assert_eq!(validate(".", 10), Err(NumError::MalformedNumber));
        assert_eq!(validate("", 10), Err(NumError::MalformedNumber));
        assert_eq!(
            validate("19", 8),
            Err(NumError::InvalidDigit { ch: '9', base: 8 })
        );
        assert_eq!(validate("0", 1), Err(NumError::UnsupportedRadix(1)));
        assert_eq!(validate("0", 17), Err(NumError::UnsupportedRadix(17)));
    }

    #[test]
    fn integer_conversion() {
        assert_eq!(convert_integer_part("1010", 2, 10).unwrap(), "10");
        assert_eq!(convert_integer_part("FF", 16, 2).unwrap(), "11111111");
        assert_eq!(convert_integer_part("255", 10, 16).unwrap(), "FF");
        assert_eq!(convert_integer_part("777", 8, 10).unwrap(), "511");
        assert_eq!(convert_integer_part("0", 2, 16).unwrap(), "0");
        assert_eq!(convert_integer_part("", 10, 2).unwrap(), "0");
        assert_eq!(convert_integer_part("007", 10, 10).unwrap(), "7");
    }

    #[test]
    fn integer_round_trip_all_base_pairs() {
        for src in MIN_RADIX..=MAX_RADIX {
            for dest in MIN_RADIX..=MAX_RADIX {
                let original = convert_integer_part("123456789", 10, src).unwrap();
                let there = convert_integer_part(&original, src, dest).unwrap();
                let back = convert_integer_part(&there, dest, src).unwrap();
                assert_eq!(back, original, "bases {} -> {}", src, dest);
            }
        }
    }

    #[test]
    fn fractional_conversion() {
        assert_eq!(convert_fractional_part("1", 2, 10, 100).unwrap(), "5");
        assert_eq!(convert_fractional_part("8", 16, 10, 100).unwrap(), "5");
        assert_eq!(convert_fractional_part("5", 10, 2, 100).unwrap(), "1");
        assert_eq!(convert_fractional_part("25", 10, 2, 100).unwrap(), "01");
        assert_eq!(convert_fractional_part("", 10, 2, 100).unwrap(), "");
    }

    #[test]
    fn fractional_truncation_budget() {
        // 0.1 in base 3 is 1/3: a non-terminating decimal, cut at the budget
        let out = convert_fractional_part("1", 3, 10, 8).unwrap();
        assert_eq!(out, "33333333");
        let wide = convert_fractional_part("1", 3, 10, DEFAULT_MAX_FRACTION_DIGITS).unwrap();
        assert_eq!(wide.len(), DEFAULT_MAX_FRACTION_DIGITS);
        assert!(wide.chars().all(|c| c == '3'));
    }

    #[test]
    fn full_conversion() {
        assert_eq!(convert("1010", 2, 10, 100).unwrap(), "10");
        assert_eq!(convert("FF", 16, 2, 100).unwrap(), "11111111");
        assert_eq!(convert("ff.8", 16, 10, 100).unwrap(), "255.5");
        assert_eq!(convert(".1", 2, 10, 100).unwrap(), "0.5");
        assert_eq!(convert("10.0", 10, 10, 100).unwrap(), "10");
        assert_eq!(convert("12", 10, 10, 100).unwrap(), "12");
    }

    #[test]
    fn full_conversion_rejects_bad_input() {
        assert_eq!(convert("102", 2, 10, 100).unwrap_err(), NumError::InvalidDigit { ch: '2', base: 2 });
        assert_eq!(convert("1.1.1", 10, 2, 100).unwrap_err(), NumError::MalformedNumber);
        assert_eq!(convert("10", 10, 20, 100).unwrap_err(), NumError::UnsupportedRadix(20));
    }
}
