//! # Primality engine
//! Miller-Rabin over [`BigInt`] with the fixed witness table
//! {2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37}, plus a random prime
//! generator. The witness table is a deterministic proof of primality for
//! every n below 3317044064679887385961981 (about 3.3e24); above that bound
//! a passing number is reported as [`Verdict::ProbablePrime`] rather than
//! being silently assumed prime.
//! # Example
//! ```
//! use exact_num::{prime, BigInt};
//!
//! let n = BigInt::from_digits("1000000000000000003").unwrap();
//! assert!(prime::is_prime(&n));
//! assert_eq!(prime::test(&BigInt::from(100u8)), prime::Verdict::Composite);
//! ```

use rand::Rng;

use crate::big_int::BigInt;
use crate::error::NumError;
use crate::num_cache::DETERMINISTIC_BOUND;
use crate::num_constants::*;

/// Outcome of a primality test, with the accuracy contract in the type:
/// below the witness-table bound the answer is proven, above it the passing
/// answer is a strong probabilistic guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Composite,
    Prime,
    ProbablePrime,
}

// 模运算
/// `(a * b) mod n` without any fixed-width intermediate: schoolbook multiply
/// followed by a long-division remainder.
pub fn mod_mul(a: &BigInt, b: &BigInt, n: &BigInt) -> Result<BigInt, NumError> {
    if n.is_zero() {
        return Err(NumError::DivisionByZero);
    }
    Ok(mod_mul_core(a, b, n))
}

fn mod_mul_core(a: &BigInt, b: &BigInt, n: &BigInt) -> BigInt {
    (a * b).div_rem_core(n).1
}

/// `base^exp mod n` by binary square-and-multiply, halving the exponent
/// each round.
pub fn mod_pow(base: &BigInt, exp: &BigInt, n: &BigInt) -> Result<BigInt, NumError> {
    if n.is_zero() {
        return Err(NumError::DivisionByZero);
    }
    Ok(mod_pow_core(base, exp, n))
}

fn mod_pow_core(base: &BigInt, exp: &BigInt, n: &BigInt) -> BigInt {
    // 1 mod n, so that n = 1 collapses everything to zero
    let mut result = BigInt::one().div_rem_core(n).1;
    let mut base = base.div_rem_core(n).1;
    let mut exp = exp.clone();
    while !exp.is_zero() {
        if !exp.is_even() {
            result = mod_mul_core(&result, &base, n);
        }
        base = mod_mul_core(&base, &base, n);
        exp = exp.half();
    }
    result
}

// 素性判定
/// Fast filter against [`SMALL_PRIMES`]: `Some(true)` when n is one of the
/// filter primes itself, `Some(false)` when a filter prime divides n, and
/// `None` when the filter cannot decide. A prime above the filter list is
/// never reported composite.
pub fn trial_divide_small_primes(n: &BigInt) -> Option<bool> {
    for &p in SMALL_PRIMES.iter() {
        if n.mod_small_core(p as u32) == 0 {
            return Some(*n == BigInt::from(p));
        }
    }
    None
}

/// Full primality test: 0 and 1 are composite, then the small-prime filter,
/// then Miller-Rabin over the witness table with the deterministic-bound
/// check deciding between [`Verdict::Prime`] and [`Verdict::ProbablePrime`].
pub fn test(n: &BigInt) -> Verdict {
    if n < &BigInt::from(2u8) {
        return Verdict::Composite;
    }
    if let Some(prime) = trial_divide_small_primes(n) {
        return if prime { Verdict::Prime } else { Verdict::Composite };
    }
    if !miller_rabin(n) {
        return Verdict::Composite;
    }
    if n < &*DETERMINISTIC_BOUND {
        Verdict::Prime
    } else {
        Verdict::ProbablePrime
    }
}

/// Convenience wrapper over [`test`], treating both passing verdicts as
/// prime.
pub fn is_prime(n: &BigInt) -> bool {
    test(n) != Verdict::Composite
}

/// Requires n odd and larger than every witness-relevant small prime; the
/// trial-division filter in [`test`] establishes that.
fn miller_rabin(n: &BigInt) -> bool {
    let n_minus_one = n.sub_core(&BigInt::one());

    // n - 1 = d * 2^s
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d = d.half();
        s += 1;
    }

    'witness: for &base in WITNESS_BASES.iter() {
        let base = BigInt::from(base);
        if &base >= n {
            continue;
        }
        let mut x = mod_pow_core(&base, &d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = mod_mul_core(&x, &x, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        // no square reached n - 1: this witness proves n composite
        return false;
    }
    true
}

// 随机素数生成
/// Draws a `digit_count`-digit candidate: leading digit 1-9, uniform middle
/// digits, odd last digit.
fn random_odd_candidate<R: Rng>(rng: &mut R, digit_count: usize) -> BigInt {
    debug_assert!(digit_count >= 2);
    let mut digits = Vec::with_capacity(digit_count);
    digits.push(rng.gen_range(1..=9u8));
    for _ in 0..digit_count - 2 {
        digits.push(rng.gen_range(0..=9u8));
    }
    digits.push(2 * rng.gen_range(0..=4u8) + 1);
    BigInt::from_raw(digits)
}

/// Searches for a random prime with exactly `digit_count` digits, retrying
/// up to `max_attempts` candidates. Exhausting the budget fails with
/// [`NumError::GenerationExhausted`] so the caller can retry or widen the
/// digit count; there is no fallback value.
pub fn generate_random_prime<R: Rng>(
    rng: &mut R,
    digit_count: usize,
    max_attempts: u32,
) -> Result<BigInt, NumError> {
    if digit_count == 0 {
        return Err(NumError::MalformedNumber);
    }
    if digit_count == 1 {
        let pick = rng.gen_range(0..ONE_DIGIT_PRIMES.len());
        return Ok(BigInt::from(ONE_DIGIT_PRIMES[pick]));
    }
    for _ in 0..max_attempts {
        let candidate = random_odd_candidate(rng, digit_count);
        match trial_divide_small_primes(&candidate) {
            Some(true) => return Ok(candidate),
            Some(false) => continue,
            None => {}
        }
        if miller_rabin(&candidate) {
            return Ok(candidate);
        }
    }
    Err(NumError::GenerationExhausted {
        attempts: max_attempts,
    })
}
