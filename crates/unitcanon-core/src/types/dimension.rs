//! Physical dimensions as canonical products of base dimensions
//!
//! `Speed` and `Length·Time⁻¹` are the same [`Dimension`]: equality only
//! looks at the canonical term list. A declared name rides along for
//! display purposes and never takes part in the algebra.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroI32;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::canonical::CanonicalList;
use super::power::PowerTerm;
use crate::error::{AlgebraError, Result};
use crate::registry::Downcast;

/// An atomic, user-declared dimension symbol (Length, Time, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseDimension(Arc<str>);

impl BaseDimension {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical dimension, optionally carrying its declared name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dimension {
    terms: CanonicalList<BaseDimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<Arc<str>>,
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terms.hash(state);
    }
}

impl Dimension {
    /// The dimensionless dimension (empty product)
    pub fn scalar() -> Self {
        Self::default()
    }

    /// A new base dimension, named after its own symbol
    pub fn base(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        Self {
            terms: CanonicalList::single(PowerTerm::unit(BaseDimension(name.clone()))),
            name: Some(name),
        }
    }

    /// Canonicalize raw base-dimension terms into an anonymous dimension
    pub fn from_terms(terms: impl IntoIterator<Item = PowerTerm<BaseDimension>>) -> Result<Self> {
        Ok(Self::from_canonical(CanonicalList::from_terms(terms)?))
    }

    fn from_canonical(terms: CanonicalList<BaseDimension>) -> Self {
        Self { terms, name: None }
    }

    /// Combine dimensions raised to powers into one anonymous dimension.
    ///
    /// Composite inputs are expanded into their base terms first (every
    /// exponent multiplied by the paired power), then all expansions are
    /// merged. A power of 0 is rejected.
    pub fn combine<'a>(powers: impl IntoIterator<Item = (&'a Dimension, i32)>) -> Result<Self> {
        let expansions = powers
            .into_iter()
            .map(|(dimension, exponent)| dimension.expand(exponent))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_canonical(CanonicalList::from_lists(expansions)?))
    }

    fn expand(&self, exponent: i32) -> Result<Vec<PowerTerm<BaseDimension>>> {
        let n = NonZeroI32::new(exponent).ok_or_else(|| AlgebraError::ZeroExponent {
            base: self.to_string(),
        })?;
        self.terms.iter().cloned().map(|term| term.raise(n)).collect()
    }

    pub fn invert(&self) -> Self {
        Self::from_canonical(self.terms.invert())
    }

    pub fn multiply(&self, other: &Self) -> Result<Self> {
        Self::combine([(self, 1), (other, 1)])
    }

    pub fn divide(&self, other: &Self) -> Result<Self> {
        Self::combine([(self, 1), (other, -1)])
    }

    pub fn pow(&self, n: i32) -> Result<Self> {
        Ok(Self::from_canonical(self.terms.pow(n)?))
    }

    pub fn terms(&self) -> &CanonicalList<BaseDimension> {
        &self.terms
    }

    /// Declared name, if this value came out of a registry
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_scalar(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exponent of a base dimension, 0 when absent
    pub fn exponent_of(&self, base: &str) -> i32 {
        self.terms
            .exponent_of(&BaseDimension::new(base))
            .unwrap_or(0)
    }
}

impl Downcast for Dimension {
    fn declared_name(&self) -> Option<&str> {
        self.name()
    }

    fn with_name(self, name: Arc<str>) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.terms),
        }
    }
}
