//! # Fraction
//! Signed exact rational numbers over two [`BigInt`] magnitudes, always kept
//! in lowest terms. The zero value is canonically `(+1, 0, 1)`.
//! # Example
//! ```
//! use exact_num::Fraction;
//!
//! let x = Fraction::from_decimal_str("-12.5").unwrap();
//! assert_eq!(x.to_fraction_string(), "-25/2");
//!
//! let third = Fraction::from_decimal_str("1").unwrap()
//!     .checked_div(&Fraction::from_decimal_str("3").unwrap())
//!     .unwrap();
//! assert_eq!(third.to_canonical_string(), "0.(3)");
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::big_int::BigInt;
use crate::error::NumError;

/// Invariants after any public operation: `gcd(num, den) = 1`, `den > 0`,
/// `signum` is `+1` or `-1` and is `+1` whenever `num` is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    signum: i8,
    num: BigInt,
    den: BigInt,
}

// 实现构造
impl Fraction {
    pub fn zero() -> Fraction {
        Fraction {
            signum: 1,
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    /// Builds a fraction from an explicit triple and reduces it immediately.
    /// Any negative `signum` reads as `-1`. Fails with
    /// [`NumError::DivisionByZero`] when `den` is zero.
    pub fn new(signum: i8, num: BigInt, den: BigInt) -> Result<Fraction, NumError> {
        if den.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        let signum = if signum < 0 { -1 } else { 1 };
        Ok(Fraction { signum, num, den }.reduce())
    }

    /// Parses a decimal literal: optional leading `-`, digits, at most one
    /// `.`. An empty integer part reads as 0 and an empty fractional part as
    /// absent. Anything else is [`NumError::MalformedNumber`].
    pub fn from_decimal_str(s: &str) -> Result<Fraction, NumError> {
        let (signum, rest) = match s.strip_prefix('-') {
            Some(rest) => (-1i8, rest),
            None => (1i8, s),
        };
        if rest.is_empty() {
            return Err(NumError::MalformedNumber);
        }
        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rest, ""),
        };
        if frac_part.contains('.') || (int_part.is_empty() && frac_part.is_empty()) {
            return Err(NumError::MalformedNumber);
        }
        let int_digits = if int_part.is_empty() { "0" } else { int_part };
        let int_val = BigInt::from_digits(int_digits).map_err(|_| NumError::MalformedNumber)?;
        // trailing zeros carry no value; trimming keeps the 10^k scale minimal
        let frac_trimmed = frac_part.trim_end_matches('0');
        let fraction = if frac_trimmed.is_empty() {
            Fraction {
                signum,
                num: int_val,
                den: BigInt::one(),
            }
        } else {
            let frac_val =
                BigInt::from_digits(frac_trimmed).map_err(|_| NumError::MalformedNumber)?;
            let scale = frac_trimmed.len();
            Fraction {
                signum,
                num: int_val.mul_pow10(scale) + frac_val,
                den: BigInt::one().mul_pow10(scale),
            }
        };
        Ok(fraction.reduce())
    }

    fn reduce(mut self) -> Fraction {
        if self.num.is_zero() {
            return Fraction::zero();
        }
        let g = BigInt::gcd(&self.num, &self.den);
        if !g.is_one() {
            self.num = self.num.div_rem_core(&g).0;
            self.den = self.den.div_rem_core(&g).0;
        }
        self
    }
}

impl FromStr for Fraction {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fraction::from_decimal_str(s)
    }
}

// 杂项辅助函数
impl Fraction {
    pub fn signum(&self) -> i8 {
        self.signum
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

// 实现取反
impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        if self.num.is_zero() {
            return self;
        }
        Fraction {
            signum: -self.signum,
            num: self.num,
            den: self.den,
        }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl Add for Fraction {
    type Output = Fraction;

    fn add(self, val: Self) -> Self::Output {
        let left = &self.num * &val.den;
        let right = &val.num * &self.den;
        let den = &self.den * &val.den;
        let (signum, num) = if self.signum == val.signum {
            (self.signum, left + right)
        } else {
            // opposite signs: the larger cross product decides the sign
            match left.cmp(&right) {
                Ordering::Equal => return Fraction::zero(),
                Ordering::Greater => (self.signum, left.sub_core(&right)),
                Ordering::Less => (val.signum, right.sub_core(&left)),
            }
        };
        Fraction { signum, num, den }.reduce()
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

// 实现减法
impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, val: Self) -> Self::Output {
        self + val.neg()
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

// 实现乘法
impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, val: Self) -> Self::Output {
        Fraction {
            signum: self.signum * val.signum,
            num: &self.num * &val.num,
            den: &self.den * &val.den,
        }
        .reduce()
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

// 实现除法
impl Fraction {
    /// Cross-multiplied division; fails with [`NumError::DivisionByZero`]
    /// when the divisor is the zero fraction.
    pub fn checked_div(&self, val: &Fraction) -> Result<Fraction, NumError> {
        if val.num.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(Fraction {
            signum: self.signum * val.signum,
            num: &self.num * &val.den,
            den: &self.den * &val.num,
        }
        .reduce())
    }
}

// 实现十进制展开
impl Fraction {
    /// True iff the decimal expansion has finitely many digits: after
    /// stripping every factor of 2 and 5 the denominator must be 1. Zero is
    /// terminating by definition.
    pub fn is_terminating(&self) -> bool {
        if self.num.is_zero() {
            return true;
        }
        let mut d = self.den.clone();
        for p in [2u8, 5] {
            loop {
                let (q, r) = d.div_rem_small_core(p);
                if r != 0 {
                    break;
                }
                d = q;
            }
        }
        d.is_one()
    }

    /// Long-division expansion shared by the decimal renderers: integer
    /// part, fractional digits, and the index where the repeating cycle
    /// starts (`None` when the expansion terminates). The first remainder
    /// reoccurrence delimits the minimal cycle, since the remainder
    /// sequence is deterministic.
    fn expand(&self) -> (BigInt, String, Option<usize>) {
        let (integer, mut rem) = self.num.div_rem_core(&self.den);
        let mut digits = String::new();
        if rem.is_zero() {
            return (integer, digits, None);
        }
        let mut seen: HashMap<BigInt, usize> = HashMap::new();
        let mut position = 0usize;
        loop {
            if let Some(&start) = seen.get(&rem) {
                return (integer, digits, Some(start));
            }
            seen.insert(rem.clone(), position);
            let (digit, next) = rem.mul_small(10).div_rem_core(&self.den);
            digits.push_str(&digit.to_digit_string());
            position += 1;
            rem = next;
            if rem.is_zero() {
                return (integer, digits, None);
            }
        }
    }

    /// Renders the finite decimal expansion. Only meaningful when
    /// [`is_terminating`](Fraction::is_terminating) holds; callers route
    /// non-terminating values to
    /// [`to_repeating_decimal_string`](Fraction::to_repeating_decimal_string).
    pub fn to_decimal_string(&self) -> String {
        debug_assert!(self.is_terminating());
        if self.num.is_zero() {
            return String::from("0");
        }
        let (integer, frac, _) = self.expand();
        let mut s = String::new();
        if self.signum < 0 {
            s.push('-');
        }
        s.push_str(&integer.to_digit_string());
        if !frac.is_empty() {
            s.push('.');
            s.push_str(&frac);
        }
        s
    }

    /// Renders the expansion with the minimal repeating block in
    /// parentheses, e.g. `1/7` gives `"0.(142857)"` and `1/6` gives
    /// `"0.1(6)"`. Terminating values render without parentheses.
    pub fn to_repeating_decimal_string(&self) -> String {
        if self.num.is_zero() {
            return String::from("0");
        }
        let (integer, frac, cycle) = self.expand();
        let mut s = String::new();
        if self.signum < 0 {
            s.push('-');
        }
        s.push_str(&integer.to_digit_string());
        match cycle {
            None => {
                if !frac.is_empty() {
                    s.push('.');
                    s.push_str(&frac);
                }
            }
            Some(start) => {
                s.push('.');
                s.push_str(&frac[..start]);
                s.push('(');
                s.push_str(&frac[start..]);
                s.push(')');
            }
        }
        s
    }

    /// Finite expansions render as plain decimals, everything else in the
    /// repeating form.
    pub fn to_canonical_string(&self) -> String {
        if self.is_terminating() {
            self.to_decimal_string()
        } else {
            self.to_repeating_decimal_string()
        }
    }

    /// `"num/den"` rendering: `-25/2`, bare `"7"` when the denominator is
    /// 1, `"0"` for zero.
    pub fn to_fraction_string(&self) -> String {
        if self.num.is_zero() {
            return String::from("0");
        }
        let mut s = String::new();
        if self.signum < 0 {
            s.push('-');
        }
        s.push_str(&self.num.to_digit_string());
        if !self.den.is_one() {
            s.push('/');
            s.push_str(&self.den.to_digit_string());
        }
        s
    }
}

// 实现打印
impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(s: &str) -> Fraction {
        Fraction::from_decimal_str(s).unwrap()
    }

    fn big(s: &str) -> BigInt {
        BigInt::from_digits(s).unwrap()
    }

    #[test]
    fn parses_and_reduces_decimal_literals() {
        let x = frac("-12.5");
        assert_eq!(x.signum(), -1);
        assert_eq!(x.numerator(), &big("25"));
        assert_eq!(x.denominator(), &big("2"));

        let y = frac("0.250");
        assert_eq!(y.numerator(), &big("1"));
        assert_eq!(y.denominator(), &big("4"));

        assert_eq!(frac(".5"), frac("0.5"));
        assert_eq!(frac("7."), frac("7"));
        assert_eq!(frac("-0.0"), Fraction::zero());
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["", "-", "1.2.3", "12x", "--4", "1-2", "."] {
            assert_eq!(
                Fraction::from_decimal_str(bad),
                Err(NumError::MalformedNumber),
                "literal {:?}",
                bad
            );
        }
    }

    #[test]
    fn new_reduces_and_canonicalizes() {
        let x = Fraction::new(-1, big("125"), big("10")).unwrap();
        assert_eq!(x, frac("-12.5"));

        let zero = Fraction::new(-1, BigInt::zero(), big("7")).unwrap();
        assert_eq!(zero.signum(), 1);
        assert_eq!(zero, Fraction::zero());

        assert_eq!(
            Fraction::new(1, big("1"), BigInt::zero()),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn addition_handles_signs() {
        assert_eq!(frac("1.5") + frac("2.5"), frac("4"));
        assert_eq!(frac("12.5") + frac("-12.5"), Fraction::zero());
        assert_eq!(frac("-1.5") + frac("0.5"), frac("-1"));
        assert_eq!(frac("0.5") + frac("-1.5"), frac("-1"));
        assert_eq!(&frac("0.1") + &frac("0.2"), frac("0.3"));
    }

    #[test]
    fn subtraction_and_negation() {
        assert_eq!(frac("1") - frac("0.75"), frac("0.25"));
        assert_eq!(frac("0.5") - frac("1.5"), frac("-1"));
        assert_eq!(-frac("2.5"), frac("-2.5"));
        assert_eq!(-Fraction::zero(), Fraction::zero());
    }

    #[test]
    fn multiplication_stays_reduced() {
        let x = frac("0.5") * frac("0.5");
        assert_eq!(x, frac("0.25"));
        assert!(BigInt::gcd(x.numerator(), x.denominator()).is_one());
        assert_eq!(frac("-0.5") * frac("-2"), frac("1"));
        assert_eq!(frac("3") * Fraction::zero(), Fraction::zero());
    }

    #[test]
    fn division_round_trips() {
        let x = frac("-12.5");
        let y = frac("0.3");
        let q = x.checked_div(&y).unwrap();
        assert_eq!(q * y, x);
        assert_eq!(
            x.checked_div(&Fraction::zero()),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn operations_leave_gcd_one() {
        let x = frac("123.456");
        let y = frac("-7.89");
        for r in [&x + &y, &x - &y, &x * &y, x.checked_div(&y).unwrap()] {
            assert!(BigInt::gcd(r.numerator(), r.denominator()).is_one());
        }
    }

    #[test]
    fn terminating_detection() {
        assert!(frac("0.125").is_terminating());
        assert!(frac("4").is_terminating());
        assert!(Fraction::zero().is_terminating());
        assert!(!Fraction::new(1, big("1"), big("3")).unwrap().is_terminating());
        assert!(!Fraction::new(1, big("1"), big("6")).unwrap().is_terminating());
    }

    #[test]
    fn decimal_rendering() {
        assert_eq!(frac("0.125").to_decimal_string(), "0.125");
        assert_eq!(frac("-12.5").to_decimal_string(), "-12.5");
        assert_eq!(frac("42").to_decimal_string(), "42");
        assert_eq!(Fraction::zero().to_decimal_string(), "0");
    }

    #[test]
    fn repeating_rendering_finds_minimal_cycle() {
        let third = Fraction::new(1, big("1"), big("3")).unwrap();
        assert_eq!(third.to_repeating_decimal_string(), "0.(3)");

        let seventh = Fraction::new(1, big("1"), big("7")).unwrap();
        assert_eq!(seventh.to_repeating_decimal_string(), "0.(142857)");

        let sixth = Fraction::new(-1, big("1"), big("6")).unwrap();
        assert_eq!(sixth.to_repeating_decimal_string(), "-0.1(6)");

        let mixed = Fraction::new(1, big("22"), big("7")).unwrap();
        assert_eq!(mixed.to_repeating_decimal_string(), "3.(142857)");
    }

    #[test]
    fn canonical_dispatch() {
        assert_eq!(frac("0.125").to_canonical_string(), "0.125");
        assert_eq!(
            Fraction::new(1, big("1"), big("3")).unwrap().to_canonical_string(),
            "0.(3)"
        );
        assert_eq!(Fraction::zero().to_canonical_string(), "0");
        assert_eq!(format!("{}", frac("-2.5")), "-2.5");
    }

    #[test]
    fn fraction_rendering() {
        assert_eq!(frac("-12.5").to_fraction_string(), "-25/2");
        assert_eq!(frac("7").to_fraction_string(), "7");
        assert_eq!(Fraction::zero().to_fraction_string(), "0");
    }
}
