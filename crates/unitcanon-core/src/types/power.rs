//! A base raised to a non-zero integer power
//!
//! What the base is depends on usage: a base dimension (`Length²`) or a
//! magnitude factor (`2³`).

use std::fmt;
use std::num::NonZeroI32;

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, Result};

/// `base^exponent`, with `exponent != 0` and `exponent != i32::MIN`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawPowerTerm<B>",
    bound(deserialize = "B: Deserialize<'de> + fmt::Display")
)]
pub struct PowerTerm<B> {
    base: B,
    exponent: NonZeroI32,
}

#[derive(Deserialize)]
struct RawPowerTerm<B> {
    base: B,
    exponent: i32,
}

impl<B: fmt::Display> TryFrom<RawPowerTerm<B>> for PowerTerm<B> {
    type Error = AlgebraError;

    fn try_from(raw: RawPowerTerm<B>) -> Result<Self> {
        PowerTerm::new(raw.base, raw.exponent)
    }
}

const ONE: NonZeroI32 = match NonZeroI32::new(1) {
    Some(one) => one,
    None => unreachable!(),
};

fn checked_exponent<B: fmt::Display>(base: &B, exponent: Option<i32>) -> Result<NonZeroI32> {
    match exponent {
        Some(i32::MIN) | None => Err(AlgebraError::ExponentOverflow {
            base: base.to_string(),
        }),
        Some(e) => NonZeroI32::new(e).ok_or_else(|| AlgebraError::ZeroExponent {
            base: base.to_string(),
        }),
    }
}

impl<B> PowerTerm<B> {
    /// `base^1`
    pub fn unit(base: B) -> Self {
        Self {
            base,
            exponent: ONE,
        }
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn exponent(&self) -> i32 {
        self.exponent.get()
    }

    pub fn into_parts(self) -> (B, i32) {
        (self.base, self.exponent.get())
    }

    /// Same base, opposite exponent
    pub fn negate(self) -> Self {
        Self {
            base: self.base,
            exponent: -self.exponent,
        }
    }
}

impl<B: fmt::Display> PowerTerm<B> {
    /// Build a term; a zero exponent is a contract violation and is rejected.
    pub fn new(base: B, exponent: i32) -> Result<Self> {
        let exponent = checked_exponent(&base, Some(exponent))?;
        Ok(Self { base, exponent })
    }

    /// `(base^e)^n = base^(e·n)`
    pub fn raise(self, n: NonZeroI32) -> Result<Self> {
        let exponent = checked_exponent(&self.base, self.exponent.get().checked_mul(n.get()))?;
        Ok(Self {
            base: self.base,
            exponent,
        })
    }
}

impl<B: fmt::Display + PartialEq> PowerTerm<B> {
    /// Fold two powers of the same base into one.
    ///
    /// `Ok(None)` means the exponents cancelled and the term is gone.
    pub fn combine(self, other: Self) -> Result<Option<Self>> {
        debug_assert!(self.base == other.base, "combining powers of different bases");
        match self.exponent.get().checked_add(other.exponent.get()) {
            Some(0) => Ok(None),
            sum => {
                let exponent = checked_exponent(&self.base, sum)?;
                Ok(Some(Self {
                    base: self.base,
                    exponent,
                }))
            }
        }
    }
}

/// Render an exponent as Unicode superscript digits (`-12` → `⁻¹²`)
pub(crate) fn superscript(exponent: i32) -> String {
    exponent
        .to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            _ => '⁹',
        })
        .collect()
}

impl<B: fmt::Display> fmt::Display for PowerTerm<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent.get() {
            1 => write!(f, "{}", self.base),
            e => write!(f, "{}{}", self.base, superscript(e)),
        }
    }
}
