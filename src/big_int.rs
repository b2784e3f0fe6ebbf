//! # BigInt
//! Immutable arbitrary-precision unsigned integers, stored as a sequence of
//! decimal digits with the most-significant digit first. Signedness is the
//! caller's concern; every operation here is over magnitudes only and every
//! arithmetic operation returns a new value.
//! # Example
//! ```
//! use exact_num::BigInt;
//!
//! let a = BigInt::from_digits("10000000000000").unwrap();
//! let b = BigInt::from_digits("900000000000").unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a * b = {}", &a * &b);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q.to_string(), "11");
//! assert_eq!(r.to_string(), "100000000000");
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::str::FromStr;

use crate::error::NumError;
use crate::num_cache::*;
use crate::num_constants::*;

macro_rules! skip_leading_zero {
    ($vec: expr) => {{
        let v: Vec<u8> = $vec.into_iter().skip_while(|d| *d == 0).collect();
        if v.is_empty() {
            vec![0]
        } else {
            v
        }
    }};
}

/// Invariant: `digits` is never empty and carries no leading zero digit,
/// except for the value zero which is exactly `[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
}

// 实现构造
impl BigInt {
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.len() == 1 || digits[0] != 0);
        debug_assert!(digits.iter().all(|d| *d < 10));
        BigInt { digits }
    }

    fn new(digits: Vec<u8>) -> Self {
        BigInt::from_raw(skip_leading_zero!(digits))
    }

    pub fn zero() -> BigInt {
        SMALL_CACHE[0].clone()
    }

    pub fn one() -> BigInt {
        SMALL_CACHE[1].clone()
    }

    /// Parses a plain digit string. Leading zeros are normalized away.
    pub fn from_digits(val: &str) -> Result<BigInt, NumError> {
        if val.is_empty() {
            return Err(NumError::MalformedNumber);
        }
        let mut digits = Vec::with_capacity(val.len());
        for ch in val.chars() {
            match ch.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => return Err(NumError::InvalidDigit { ch, base: 10 }),
            }
        }
        Ok(BigInt::new(digits))
    }

    fn value_of(val: u64) -> BigInt {
        if val <= MAX_CONSTANT as u64 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut digits = Vec::new();
        let mut v = val;
        while v > 0 {
            digits.push((v % 10) as u8);
            v /= 10;
        }
        digits.reverse();
        BigInt::from_raw(digits)
    }
}

// 实现解析
impl FromStr for BigInt {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_digits(s)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_digit_string())
    }
}

// 杂项辅助函数
impl BigInt {
    pub fn to_digit_string(&self) -> String {
        self.digits.iter().map(|d| (b'0' + d) as char).collect()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }

    pub fn is_even(&self) -> bool {
        self.digits[self.digits.len() - 1] % 2 == 0
    }

    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Reads a value known to fit in a u8 (at most two digits).
    pub(crate) fn as_small(&self) -> u8 {
        debug_assert!(self.digits.len() <= 2);
        self.digits.iter().fold(0, |acc, d| acc * 10 + d)
    }
}

// 实现大小比较
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Length first, then digit-by-digit: numeric order for normalized,
    /// non-negative magnitudes.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.digits.len() != other.digits.len() {
            return self.digits.len().cmp(&other.digits.len());
        }
        self.digits.cmp(&other.digits)
    }
}

// 实现加法
impl Add for BigInt {
    type Output = BigInt;

    fn add(self, val: Self) -> Self::Output {
        if self.is_zero() {
            return val;
        }
        if val.is_zero() {
            return self;
        }
        BigInt::from_raw(BigInt::add_mag(self.digits, val.digits))
    }
}

impl BigInt {
    fn add_mag(x: Vec<u8>, y: Vec<u8>) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u8;
        let mut li = long.len();
        let mut si = short.len();
        while li > 0 {
            li -= 1;
            let mut sum = long[li] + carry;
            if si > 0 {
                si -= 1;
                sum += short[si];
            }
            result.push(sum % 10);
            carry = sum / 10;
        }
        if carry != 0 {
            result.push(carry);
        }
        result.reverse();
        result
    }

    /// Adds a single digit value 0..=16.
    pub fn add_small(&self, d: u8) -> BigInt {
        debug_assert!(d as usize <= MAX_CONSTANT);
        if d == 0 {
            return self.clone();
        }
        let mut digits = self.digits.clone();
        let mut carry = d;
        for slot in digits.iter_mut().rev() {
            if carry == 0 {
                break;
            }
            let sum = *slot + carry;
            *slot = sum % 10;
            carry = sum / 10;
        }
        if carry != 0 {
            digits.insert(0, carry);
        }
        BigInt::from_raw(digits)
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() + rhs.clone();
    }
}

// 实现减法
impl BigInt {
    /// Magnitude subtraction; fails with [`NumError::Underflow`] when
    /// `self < val`.
    pub fn checked_sub(&self, val: &BigInt) -> Result<BigInt, NumError> {
        match self.cmp(val) {
            Ordering::Less => Err(NumError::Underflow),
            Ordering::Equal => Ok(BigInt::zero()),
            Ordering::Greater => Ok(self.sub_core(val)),
        }
    }

    /// Requires `self >= val`, which every caller establishes by comparing
    /// first.
    pub(crate) fn sub_core(&self, val: &BigInt) -> BigInt {
        debug_assert!(self >= val);
        let mut result = Vec::with_capacity(self.digits.len());
        let mut borrow = 0i8;
        let mut i = self.digits.len();
        let mut j = val.digits.len();
        while i > 0 {
            i -= 1;
            let b = if j > 0 {
                j -= 1;
                val.digits[j] as i8
            } else {
                0
            };
            let mut diff = self.digits[i] as i8 - b - borrow;
            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }
        result.reverse();
        BigInt::new(result)
    }
}

// 实现乘法
impl Mul for BigInt {
    type Output = BigInt;

    /// Schoolbook long multiplication through a digit-position accumulator
    /// with a single carry-normalization pass at the end.
    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return BigInt::zero();
        }
        BigInt::new(BigInt::mul_mag(&self.digits, &val.digits))
    }
}

impl BigInt {
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut acc = vec![0u32; x.len() + y.len()];
        for (i, &xd) in x.iter().enumerate() {
            for (j, &yd) in y.iter().enumerate() {
                acc[i + j + 1] += xd as u32 * yd as u32;
            }
        }
        let mut carry = 0u32;
        for slot in acc.iter_mut().rev() {
            let cur = *slot + carry;
            *slot = cur % 10;
            carry = cur / 10;
        }
        debug_assert_eq!(carry, 0);
        acc.into_iter().map(|d| d as u8).collect()
    }

    /// Multiplies by a single digit value 0..=16.
    pub fn mul_small(&self, d: u8) -> BigInt {
        debug_assert!(d as usize <= MAX_CONSTANT);
        if d == 0 || self.is_zero() {
            return BigInt::zero();
        }
        if d == 1 {
            return self.clone();
        }
        let mut result = Vec::with_capacity(self.digits.len() + 2);
        let mut carry = 0u16;
        for &digit in self.digits.iter().rev() {
            let prod = digit as u16 * d as u16 + carry;
            result.push((prod % 10) as u8);
            carry = prod / 10;
        }
        while carry > 0 {
            result.push((carry % 10) as u8);
            carry /= 10;
        }
        result.reverse();
        BigInt::from_raw(result)
    }

    /// Appends `exp` zero digits, i.e. multiplies by `10^exp`.
    pub fn mul_pow10(&self, exp: usize) -> BigInt {
        if self.is_zero() || exp == 0 {
            return self.clone();
        }
        let mut digits = self.digits.clone();
        digits.extend(std::iter::repeat(0).take(exp));
        BigInt::from_raw(digits)
    }

    /// `base^exp` by repeated multiplication, for bases 0..=16. Used for
    /// radix scale factors, so exponents of a few hundred must work.
    pub fn pow_small(base: u8, exp: u32) -> BigInt {
        debug_assert!(base as usize <= MAX_CONSTANT);
        let mut result = BigInt::one();
        for _ in 0..exp {
            result = result.mul_small(base);
        }
        result
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.clone() * rhs.clone();
    }
}

// 实现除法
impl BigInt {
    /// Long division returning `(quotient, remainder)`. Fails with
    /// [`NumError::DivisionByZero`] when the divisor is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), NumError> {
        if divisor.is_zero() {
            return Err(NumError::DivisionByZero);
        }
        Ok(self.div_rem_core(divisor))
    }

    /// Requires a nonzero divisor, which callers establish up front.
    pub(crate) fn div_rem_core(&self, divisor: &BigInt) -> (BigInt, BigInt) {
        debug_assert!(!divisor.is_zero());
        if self < divisor {
            return (BigInt::zero(), self.clone());
        }
        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut remainder = BigInt::zero();
        for &digit in &self.digits {
            remainder = remainder.mul_small(10).add_small(digit);
            let mut q = 0;
            if &remainder >= divisor {
                // largest trial digit with trial * divisor <= remainder
                for trial in (1..=9u8).rev() {
                    let prod = divisor.mul_small(trial);
                    if prod <= remainder {
                        q = trial;
                        remainder = remainder.sub_core(&prod);
                        break;
                    }
                }
            }
            quotient.push(q);
        }
        (BigInt::new(quotient), remainder)
    }

    /// Division by a single digit value 1..=16 in one left-to-right pass,
    /// returning `(quotient, remainder)`.
    pub fn div_rem_small(&self, d: u8) -> Result<(BigInt, u8), NumError> {
        if d == 0 {
            return Err(NumError::DivisionByZero);
        }
        Ok(self.div_rem_small_core(d))
    }

    pub(crate) fn div_rem_small_core(&self, d: u8) -> (BigInt, u8) {
        debug_assert!(d != 0 && d as usize <= MAX_CONSTANT);
        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut remainder = 0u16;
        for &digit in &self.digits {
            let cur = remainder * 10 + digit as u16;
            quotient.push((cur / d as u16) as u8);
            remainder = cur % d as u16;
        }
        (BigInt::new(quotient), remainder as u8)
    }

    pub(crate) fn half(&self) -> BigInt {
        self.div_rem_small_core(2).0
    }

    /// Remainder modulo a small machine integer, one left-to-right pass.
    pub(crate) fn mod_small_core(&self, m: u32) -> u32 {
        debug_assert!(m != 0);
        let mut rem = 0u64;
        for &digit in &self.digits {
            rem = (rem * 10 + digit as u64) % m as u64;
        }
        rem as u32
    }
}

// 实现最大公约数
impl BigInt {
    /// Iterative Euclidean algorithm; `gcd(a, 0) = a`.
    pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let (_, r) = a.div_rem_core(&b);
            a = b;
            b = r;
        }
        a
    }
}
