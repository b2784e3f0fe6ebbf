pub const DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5',
    '6', '7', '8', '9', 'A', 'B',
    'C', 'D', 'E', 'F',
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = 16;

/// Fractional digits emitted by a radix conversion before truncating a
/// non-terminating expansion.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 100;

pub const MAX_CONSTANT: usize = 16;

/// Witness bases for Miller-Rabin. Deterministic for every n below
/// [`WITNESS_DETERMINISTIC_BOUND`].
pub const WITNESS_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Smallest composite that is a strong pseudoprime to all of
/// [`WITNESS_BASES`] (Sorenson & Webster). Below this bound the witness
/// table is a proof of primality; at or above it the test is only a
/// strong probabilistic guarantee.
pub const WITNESS_DETERMINISTIC_BOUND: &str = "3317044064679887385961981";

/// Trial-division filter applied before Miller-Rabin.
pub const SMALL_PRIMES: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// One-digit primes, sampled directly when a single-digit prime is requested.
pub const ONE_DIGIT_PRIMES: [u64; 4] = [2, 3, 5, 7];
