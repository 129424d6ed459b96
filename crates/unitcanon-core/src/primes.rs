//! Exact prime factorization of 64-bit integers
//!
//! Trial division over a 6-wheel: 2 and 3 are divided out first, then only
//! candidates of the form 6k ± 1 are tried. A candidate that divides the
//! remaining value is necessarily prime, because every smaller prime has
//! already been divided out completely.

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, Result};

/// Upper bound on the number of distinct primes dividing a `u64`.
///
/// 2·3·5·…·47 (15 primes) is below 2^64, 2·3·5·…·53 (16 primes) is not.
pub const MAX_DISTINCT_PRIME_FACTORS: usize = 15;

/// One prime raised to its multiplicity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactorExponent {
    pub factor: u64,
    pub exponent: i32,
}

/// Ascending list of prime factors of an integer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Factorization {
    factors: Vec<FactorExponent>,
}

impl Factorization {
    fn push(&mut self, factor: u64, exponent: i32) {
        self.factors.push(FactorExponent { factor, exponent });
    }

    /// Factors in ascending order
    pub fn factors(&self) -> &[FactorExponent] {
        &self.factors
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactorExponent> {
        self.factors.iter()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Multiply the factors back together, `None` on overflow
    pub fn product(&self) -> Option<u64> {
        self.factors.iter().try_fold(1u64, |acc, fe| {
            let exponent = u32::try_from(fe.exponent).ok()?;
            acc.checked_mul(fe.factor.checked_pow(exponent)?)
        })
    }
}

impl IntoIterator for Factorization {
    type Item = FactorExponent;
    type IntoIter = std::vec::IntoIter<FactorExponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Factorization {
    type Item = &'a FactorExponent;
    type IntoIter = std::slice::Iter<'a, FactorExponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}

/// Divide `factor` out of `remaining` as many times as it goes.
/// `factor` must divide `remaining`.
fn divide_out(remaining: &mut u64, factor: u64) -> i32 {
    let mut exponent = 0;
    while *remaining % factor == 0 {
        *remaining /= factor;
        exponent += 1;
    }
    exponent
}

/// Factorize `n` into ascending `(prime, exponent)` pairs.
///
/// `1` yields an empty factorization; `0` has none and is rejected.
pub fn prime_factorization(n: u64) -> Result<Factorization> {
    if n == 0 {
        return Err(AlgebraError::FactorizationDomain { value: n });
    }

    let mut result = Factorization {
        factors: Vec::with_capacity(MAX_DISTINCT_PRIME_FACTORS),
    };
    let mut remaining = n;

    for factor in [2, 3] {
        if remaining % factor == 0 {
            let exponent = divide_out(&mut remaining, factor);
            result.push(factor, exponent);
        }
    }

    // 5, 7, 11, 13, 17, 19, ... alternating +2 / +4
    let mut candidate: u64 = 5;
    let mut step: u64 = 2;
    while remaining > 1
        && candidate
            .checked_mul(candidate)
            .is_some_and(|square| square <= remaining)
    {
        if remaining % candidate == 0 {
            let exponent = divide_out(&mut remaining, candidate);
            result.push(candidate, exponent);
        }
        candidate += step;
        step ^= 6;
    }

    // Whatever is left has no divisor below its square root
    if remaining > 1 {
        result.push(remaining, 1);
    }

    Ok(result)
}
