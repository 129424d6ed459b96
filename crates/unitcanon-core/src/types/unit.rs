//! Units: a dimension paired with a magnitude
//!
//! `kilometre / kilosecond` and `metre / second` are the same [`Unit`]:
//! same canonical dimension, and the magnitudes `2³·5³·2⁻³·5⁻³` cancel to 1.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::magnitude::Magnitude;
use crate::error::{AlgebraError, Result};
use crate::registry::Downcast;

/// Canonical unit, optionally carrying its declared name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    dimension: Dimension,
    magnitude: Magnitude,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<Arc<str>>,
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.magnitude == other.magnitude
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension.hash(state);
        self.magnitude.hash(state);
    }
}

impl Unit {
    /// Anonymous unit from its two halves
    pub fn new(dimension: Dimension, magnitude: Magnitude) -> Self {
        Self {
            dimension,
            magnitude,
            name: None,
        }
    }

    /// Reference unit of a dimension (magnitude 1)
    pub fn base(name: impl Into<Arc<str>>, dimension: &Dimension) -> Self {
        Self {
            dimension: dimension.clone(),
            magnitude: Magnitude::one(),
            name: Some(name.into()),
        }
    }

    /// `unit` scaled by `magnitude`, e.g. kilometre = metre × 1000
    pub fn scaled(name: impl Into<Arc<str>>, unit: &Unit, magnitude: &Magnitude) -> Result<Self> {
        Ok(Self {
            dimension: unit.dimension.clone(),
            magnitude: unit.magnitude.multiply(magnitude)?,
            name: Some(name.into()),
        })
    }

    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Product of two units.
    ///
    /// Dimensions go through the expand-and-merge combination; magnitudes
    /// are already flat factor lists and multiply directly.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let dimension = Dimension::combine([(&self.dimension, 1), (&other.dimension, 1)])?;
        let magnitude = self.magnitude.multiply(&other.magnitude)?;
        Ok(Self::new(dimension, magnitude))
    }

    pub fn invert(&self) -> Self {
        Self::new(self.dimension.invert(), self.magnitude.invert())
    }

    pub fn divide(&self, other: &Self) -> Result<Self> {
        self.multiply(&other.invert())
    }

    pub fn pow(&self, n: i32) -> Result<Self> {
        Ok(Self::new(self.dimension.pow(n)?, self.magnitude.pow(n)?))
    }

    /// Same canonical dimension, so values can be converted
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimension == other.dimension
    }

    /// Exact factor taking a value in `self` to a value in `to`
    pub fn conversion_magnitude(&self, to: &Self) -> Result<Magnitude> {
        if !self.is_compatible(to) {
            return Err(AlgebraError::DimensionMismatch {
                from: self.to_string(),
                to: to.to_string(),
            });
        }
        self.magnitude.divide(&to.magnitude)
    }

    /// Floating-point factor taking a value in `self` to a value in `to`
    pub fn conversion_factor(&self, to: &Self) -> Result<f64> {
        Ok(self.conversion_magnitude(to)?.evaluate())
    }
}

impl Downcast for Unit {
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

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, self.magnitude.is_one()) {
            (Some(name), _) => f.write_str(name),
            (None, true) => write!(f, "{}", self.dimension),
            (None, false) => write!(f, "{} × {}", self.dimension, self.magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixture {
        metre: Unit,
        kilometre: Unit,
        millimetre: Unit,
        second: Unit,
        kilosecond: Unit,
        millisecond: Unit,
    }

    fn fixture() -> Fixture {
        let length = Dimension::base("Length");
        let time = Dimension::base("Time");
        let kilo = Magnitude::from_int(1000).unwrap();
        let milli = Magnitude::from_ratio(1, 1000).unwrap();
        let metre = Unit::base("metre", &length);
        let second = Unit::base("second", &time);
        Fixture {
            kilometre: Unit::scaled("kilometre", &metre, &kilo).unwrap(),
            millimetre: Unit::scaled("millimetre", &metre, &milli).unwrap(),
            kilosecond: Unit::scaled("kilosecond", &second, &kilo).unwrap(),
            millisecond: Unit::scaled("millisecond", &second, &milli).unwrap(),
            metre,
            second,
        }
    }

    #[test]
    fn test_scaled_shares_dimension() {
        let f = fixture();
        assert!(f.kilometre.is_compatible(&f.metre));
        assert!(!f.kilometre.is_compatible(&f.second));
        assert_eq!(f.kilometre.magnitude(), &Magnitude::from_int(1000).unwrap());
    }

    #[test]
    fn test_conversion_factor() {
        let f = fixture();
        assert_eq!(f.metre.conversion_factor(&f.kilometre).unwrap(), 0.001);
        assert_eq!(f.metre.conversion_factor(&f.millimetre).unwrap(), 1000.0);
        assert_eq!(f.kilometre.conversion_factor(&f.millimetre).unwrap(), 1_000_000.0);
    }

    #[test]
    fn test_conversion_dimension_mismatch() {
        let f = fixture();
        assert!(matches!(
            f.metre.conversion_factor(&f.second),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_scaled_quotients_are_identical() {
        let f = fixture();
        let mps = f.metre.divide(&f.second).unwrap();
        assert_eq!(f.kilometre.divide(&f.kilosecond).unwrap(), mps);
        assert_eq!(f.millimetre.divide(&f.millisecond).unwrap(), mps);
        assert_eq!(
            f.kilometre.multiply(&f.millisecond).unwrap(),
            f.millimetre.multiply(&f.kilosecond).unwrap()
        );
        assert_eq!(mps.multiply(&f.second).unwrap(), f.metre);
    }

    #[test]
    fn test_pow_and_invert() {
        let f = fixture();
        let square_km = f.kilometre.pow(2).unwrap();
        assert_eq!(square_km.dimension().exponent_of("Length"), 2);
        assert_eq!(square_km.magnitude(), &Magnitude::from_int(1_000_000).unwrap());
        assert_eq!(f.kilometre.invert().invert(), f.kilometre);
    }

    #[test]
    fn test_display() {
        let f = fixture();
        assert_eq!(f.kilometre.to_string(), "kilometre");
        let kmps = f.kilometre.divide(&f.second).unwrap();
        assert_eq!(kmps.to_string(), "Length·Time⁻¹ × 2³·5³");
        assert_eq!(f.metre.divide(&f.second).unwrap().to_string(), "Length·Time⁻¹");
    }
}
