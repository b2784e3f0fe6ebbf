use lazy_static::*;

use crate::num_constants::*;
use crate::BigInt;

lazy_static! {
    pub static ref SMALL_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::from_raw(vec![0]),
        BigInt::from_raw(vec![1]),
        BigInt::from_raw(vec![2]),
        BigInt::from_raw(vec![3]),
        BigInt::from_raw(vec![4]),
        BigInt::from_raw(vec![5]),
        BigInt::from_raw(vec![6]),
        BigInt::from_raw(vec![7]),
        BigInt::from_raw(vec![8]),
        BigInt::from_raw(vec![9]),
        BigInt::from_raw(vec![1, 0]),
        BigInt::from_raw(vec![1, 1]),
        BigInt::from_raw(vec![1, 2]),
        BigInt::from_raw(vec![1, 3]),
        BigInt::from_raw(vec![1, 4]),
        BigInt::from_raw(vec![1, 5]),
        BigInt::from_raw(vec![1, 6]),
    ];
    pub static ref DETERMINISTIC_BOUND: BigInt = {
        match BigInt::from_digits(WITNESS_DETERMINISTIC_BOUND) {
            Ok(n) => n,
            Err(_) => unreachable!("bound constant is a valid decimal literal"),
        }
    };
}
