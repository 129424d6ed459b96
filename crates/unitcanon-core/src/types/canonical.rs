//! Sorted, duplicate-free lists of power terms
//!
//! A [`CanonicalList`] is the shared representation behind dimensions and
//! magnitudes. The ordering of bases (`B: Ord`) is the domain comparator:
//! dimensions sort by symbol name, magnitudes put primes before irrational
//! tags. Two lists describing the same product are always structurally
//! equal, whatever order their terms were supplied in.

use std::fmt;
use std::num::NonZeroI32;

use serde::{Deserialize, Serialize};

use super::power::PowerTerm;
use crate::algebra;
use crate::error::{AlgebraError, Result};

/// Strictly increasing (by base) sequence of non-zero powers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<PowerTerm<B>>",
    into = "Vec<PowerTerm<B>>",
    bound(
        serialize = "B: Serialize + Clone",
        deserialize = "B: Deserialize<'de> + Ord + Clone + fmt::Display"
    )
)]
pub struct CanonicalList<B> {
    terms: Vec<PowerTerm<B>>,
}

impl<B> Default for CanonicalList<B> {
    fn default() -> Self {
        Self { terms: Vec::new() }
    }
}

impl<B> CanonicalList<B> {
    /// The empty product
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(term: PowerTerm<B>) -> Self {
        Self { terms: vec![term] }
    }

    pub fn terms(&self) -> &[PowerTerm<B>] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &PowerTerm<B>> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Negate every exponent. Order is unaffected.
    pub fn invert(&self) -> Self
    where
        B: Clone,
    {
        Self {
            terms: self.terms.iter().cloned().map(PowerTerm::negate).collect(),
        }
    }

    /// Wrap terms the caller guarantees are already canonical
    pub(crate) fn from_sorted_unchecked(terms: Vec<PowerTerm<B>>) -> Self {
        Self { terms }
    }
}

fn by_base<B: Ord>(a: &PowerTerm<B>, b: &PowerTerm<B>) -> std::cmp::Ordering {
    a.base().cmp(b.base())
}

impl<B: Ord + Clone + fmt::Display> CanonicalList<B> {
    /// Canonicalize an arbitrary bag of terms.
    ///
    /// Terms are sorted first, then folded one by one through
    /// [`algebra::merge_combine_filter`], so repeated bases are summed and
    /// cancelled bases disappear.
    pub fn from_terms(terms: impl IntoIterator<Item = PowerTerm<B>>) -> Result<Self> {
        let sorted = algebra::sort_by(terms.into_iter().collect(), by_base);
        sorted
            .into_iter()
            .try_fold(Self::empty(), |acc, term| acc.multiply(&Self::single(term)))
    }

    /// Canonicalize the concatenation of several term lists.
    ///
    /// Each list is canonicalized on its own, then merged into the
    /// accumulator pairwise.
    pub fn from_lists(lists: impl IntoIterator<Item = Vec<PowerTerm<B>>>) -> Result<Self> {
        lists
            .into_iter()
            .try_fold(Self::empty(), |acc, list| acc.multiply(&Self::from_terms(list)?))
    }

    /// Product of two canonical lists
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let terms = algebra::merge_combine_filter(
            self.terms.clone(),
            other.terms.clone(),
            by_base,
            PowerTerm::combine,
        )?;
        Ok(Self { terms })
    }

    /// Raise the whole product to `n`; `pow(0)` is the empty product.
    pub fn pow(&self, n: i32) -> Result<Self> {
        let Some(n) = NonZeroI32::new(n) else {
            return Ok(Self::empty());
        };
        let terms = self
            .terms
            .iter()
            .cloned()
            .map(|term| term.raise(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { terms })
    }

    /// Exponent carried by `base`, if it appears
    pub fn exponent_of(&self, base: &B) -> Option<i32> {
        self.terms
            .binary_search_by(|term| term.base().cmp(base))
            .ok()
            .map(|idx| self.terms[idx].exponent())
    }
}

impl<B: Ord + Clone + fmt::Display> TryFrom<Vec<PowerTerm<B>>> for CanonicalList<B> {
    type Error = AlgebraError;

    fn try_from(terms: Vec<PowerTerm<B>>) -> Result<Self> {
        Self::from_terms(terms)
    }
}

impl<B> From<CanonicalList<B>> for Vec<PowerTerm<B>> {
    fn from(list: CanonicalList<B>) -> Self {
        list.terms
    }
}

impl<'a, B> IntoIterator for &'a CanonicalList<B> {
    type Item = &'a PowerTerm<B>;
    type IntoIter = std::slice::Iter<'a, PowerTerm<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<B: fmt::Display> fmt::Display for CanonicalList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "1");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "·")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
