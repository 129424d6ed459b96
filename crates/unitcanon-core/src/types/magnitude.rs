//! Exact positive scale factors
//!
//! A [`Magnitude`] is a product of prime integers and opaque irrational
//! tags raised to integer powers, e.g. `1/1000 = 2⁻³·5⁻³` or `π/180 =
//! 2⁻²·3⁻²·5⁻¹·π`. Everything here is exact; [`Magnitude::evaluate`] is
//! the only place a float is produced.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::prelude::MathematicalOps;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::canonical::CanonicalList;
use super::power::PowerTerm;
use crate::error::{AlgebraError, Result};
use crate::primes::prime_factorization;

/// Symbolic irrational constant.
///
/// The name is the identity: two tags with the same name are the same
/// factor, so names must be unique across a unit system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawIrrational")]
pub struct Irrational {
    name: Cow<'static, str>,
    value: f64,
}

#[derive(Deserialize)]
struct RawIrrational {
    name: String,
    value: f64,
}

impl TryFrom<RawIrrational> for Irrational {
    type Error = AlgebraError;

    fn try_from(raw: RawIrrational) -> Result<Self> {
        Self::new(raw.name, raw.value)
    }
}

impl Irrational {
    pub const PI: Irrational = Irrational::constant("π", std::f64::consts::PI);

    const fn constant(name: &'static str, value: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value,
        }
    }

    /// Tag a positive, finite value with a name
    pub fn new(name: impl Into<Cow<'static, str>>, value: f64) -> Result<Self> {
        let name = name.into();
        if !(value.is_finite() && value > 0.0) {
            return Err(AlgebraError::InvalidIrrational {
                name: name.into_owned(),
                value: value.to_string(),
            });
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Same name, different value: the tag is ambiguous
    pub(crate) fn conflicts_with(&self, other: &Self) -> bool {
        self.name == other.name && self.value.to_bits() != other.value.to_bits()
    }
}

impl PartialEq for Irrational {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Irrational {}

impl Hash for Irrational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Irrational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Irrational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Base of a magnitude term.
///
/// Variant order is the factor ordering: every prime sorts before every
/// irrational, primes by value, irrationals by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Prime(u64),
    Irrational(Irrational),
}

impl Factor {
    pub fn value(&self) -> f64 {
        match self {
            Factor::Prime(p) => *p as f64,
            Factor::Irrational(irrational) => irrational.value(),
        }
    }

    pub fn is_prime(&self) -> bool {
        matches!(self, Factor::Prime(_))
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Prime(p) => write!(f, "{p}"),
            Factor::Irrational(irrational) => f.write_str(irrational.name()),
        }
    }
}

/// `value^exponent` by repeated squaring
fn int_pow(value: f64, exponent: i32) -> f64 {
    let mut result = 1.0;
    let mut square = value;
    let mut n = exponent.unsigned_abs();
    while n > 0 {
        if n & 1 == 1 {
            result *= square;
        }
        square *= square;
        n >>= 1;
    }
    if exponent < 0 {
        1.0 / result
    } else {
        result
    }
}

/// Canonical positive real: ∏ factor^exponent, empty for 1
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<PowerTerm<Factor>>", into = "Vec<PowerTerm<Factor>>")]
pub struct Magnitude {
    factors: CanonicalList<Factor>,
}

/// Rebuilds through the exact constructors, so loaded composites are
/// refactored and conflicting irrational tags are rejected
impl TryFrom<Vec<PowerTerm<Factor>>> for Magnitude {
    type Error = AlgebraError;

    fn try_from(terms: Vec<PowerTerm<Factor>>) -> Result<Self> {
        terms.into_iter().try_fold(Self::one(), |acc, term| {
            let (base, exponent) = term.into_parts();
            let piece = match base {
                Factor::Prime(n) => Self::from_int(n)?,
                Factor::Irrational(irrational) => Self::from_irrational(irrational),
            };
            acc.multiply(&piece.pow(exponent)?)
        })
    }
}

impl From<Magnitude> for Vec<PowerTerm<Factor>> {
    fn from(magnitude: Magnitude) -> Self {
        magnitude.factors.into()
    }
}

impl Magnitude {
    pub fn one() -> Self {
        Self::default()
    }

    /// Magnitude of a positive integer, via its prime factorization
    pub fn from_int(n: u64) -> Result<Self> {
        if n == 0 {
            return Err(AlgebraError::NonPositiveMagnitude {
                value: n.to_string(),
            });
        }
        let terms = prime_factorization(n)?
            .into_iter()
            .map(|fe| PowerTerm::new(Factor::Prime(fe.factor), fe.exponent))
            .collect::<Result<Vec<_>>>()?;
        // ascending primes are already in factor order
        Ok(Self {
            factors: CanonicalList::from_sorted_unchecked(terms),
        })
    }

    /// `numerator / denominator`; equal ratios give equal magnitudes
    pub fn from_ratio(numerator: u64, denominator: u64) -> Result<Self> {
        if numerator == 0 || denominator == 0 {
            return Err(AlgebraError::NonPositiveMagnitude {
                value: format!("{numerator}/{denominator}"),
            });
        }
        Self::from_int(numerator)?.divide(&Self::from_int(denominator)?)
    }

    pub fn from_irrational(irrational: Irrational) -> Self {
        Self {
            factors: CanonicalList::single(PowerTerm::unit(Factor::Irrational(irrational))),
        }
    }

    /// Exact magnitude of a positive decimal (`0.001` → `2⁻³·5⁻³`)
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        if value <= Decimal::ZERO {
            return Err(AlgebraError::NonPositiveMagnitude {
                value: value.to_string(),
            });
        }
        let mantissa =
            u64::try_from(value.mantissa()).map_err(|_| AlgebraError::MagnitudeOverflow {
                magnitude: value.to_string(),
            })?;
        // scale is at most 28
        let scale = value.scale() as i32;
        Self::from_int(mantissa)?.multiply(&Self::from_int(10)?.pow(-scale)?)
    }

    pub fn factors(&self) -> &CanonicalList<Factor> {
        &self.factors
    }

    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// No irrational factor involved
    pub fn is_rational(&self) -> bool {
        self.factors.iter().all(|term| term.base().is_prime())
    }

    pub fn invert(&self) -> Self {
        Self {
            factors: self.factors.invert(),
        }
    }

    pub fn multiply(&self, other: &Self) -> Result<Self> {
        for a in self.irrationals() {
            if let Some(b) = other.irrationals().find(|b| a.conflicts_with(b)) {
                return Err(AlgebraError::IrrationalConflict {
                    name: b.name().to_string(),
                });
            }
        }
        Ok(Self {
            factors: self.factors.multiply(&other.factors)?,
        })
    }

    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.multiply(&other.invert())
    }

    pub fn pow(&self, n: i32) -> Result<Self> {
        Ok(Self {
            factors: self.factors.pow(n)?,
        })
    }

    /// Irrational tags used by this magnitude
    pub fn irrationals(&self) -> impl Iterator<Item = &Irrational> {
        self.factors.iter().filter_map(|term| match term.base() {
            Factor::Irrational(irrational) => Some(irrational),
            Factor::Prime(_) => None,
        })
    }

    /// Floating-point value of the product
    pub fn evaluate(&self) -> f64 {
        self.factors.iter().fold(1.0, |acc, term| {
            acc * int_pow(term.base().value(), term.exponent())
        })
    }

    /// `(numerator, denominator)` in lowest terms, when rational and both
    /// fit in a `u64`
    pub fn as_ratio(&self) -> Option<(u64, u64)> {
        let mut numerator: u64 = 1;
        let mut denominator: u64 = 1;
        for term in &self.factors {
            let Factor::Prime(p) = term.base() else {
                return None;
            };
            let power = p.checked_pow(term.exponent().unsigned_abs())?;
            if term.exponent() > 0 {
                numerator = numerator.checked_mul(power)?;
            } else {
                denominator = denominator.checked_mul(power)?;
            }
        }
        Some((numerator, denominator))
    }

    /// Decimal value of a rational magnitude.
    ///
    /// Exact when the denominator only has the factors 2 and 5, otherwise
    /// rounded to `Decimal` precision.
    pub fn to_decimal(&self) -> Result<Decimal> {
        let overflow = || AlgebraError::MagnitudeOverflow {
            magnitude: self.to_string(),
        };
        let mut numerator = Decimal::ONE;
        let mut denominator = Decimal::ONE;
        for term in &self.factors {
            let Factor::Prime(p) = term.base() else {
                return Err(AlgebraError::IrrationalMagnitude {
                    magnitude: self.to_string(),
                });
            };
            let power = Decimal::from(*p)
                .checked_powu(u64::from(term.exponent().unsigned_abs()))
                .ok_or_else(overflow)?;
            if term.exponent() > 0 {
                numerator = numerator.checked_mul(power).ok_or_else(overflow)?;
            } else {
                denominator = denominator.checked_mul(power).ok_or_else(overflow)?;
            }
        }
        numerator.checked_div(denominator).ok_or_else(overflow)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.factors)
    }
}
