//! Unit systems: declared dimensions and units, frozen for lookups
//!
//! Declarations go through [`UnitSystemBuilder`]. Once [`UnitSystemBuilder::build`]
//! returns, the [`UnitSystem`] is read-only and every algebra operation on it
//! hands back declared names wherever the canonical form has one.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{AlgebraError, Result};
use crate::registry::NameRegistry;
use crate::types::{Dimension, Irrational, Magnitude, Unit};

/// Name of the pre-declared dimensionless dimension
pub const SCALAR_DIMENSION: &str = "Scalar";

/// Name of the pre-declared dimensionless unit
pub const SCALAR_UNIT: &str = "one";

/// Mutable declaration pass over a unit system
#[derive(Debug, Clone)]
pub struct UnitSystemBuilder {
    dimensions: NameRegistry<Dimension>,
    units: NameRegistry<Unit>,
    irrationals: HashMap<String, Irrational>,
}

impl Default for UnitSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitSystemBuilder {
    pub fn new() -> Self {
        let dimensions = NameRegistry::seeded(SCALAR_DIMENSION, Dimension::scalar());
        let scalar = dimensions.resolve(Dimension::scalar());
        let units = NameRegistry::seeded(SCALAR_UNIT, Unit::new(scalar, Magnitude::one()));
        Self {
            dimensions,
            units,
            irrationals: HashMap::new(),
        }
    }

    /// The pre-declared `Scalar` dimension
    pub fn scalar_dimension(&self) -> Dimension {
        self.dimensions.resolve(Dimension::scalar())
    }

    /// The pre-declared `one` unit
    pub fn one(&self) -> Unit {
        self.units.resolve(Unit::new(self.scalar_dimension(), Magnitude::one()))
    }

    pub fn declare_base_dimension(&mut self, name: &str) -> Result<Dimension> {
        self.dimensions.declare(name, Dimension::base(name))
    }

    /// Name the product of `powers`, e.g. `Speed = Length¹·Time⁻¹`
    pub fn declare_combined_dimension(
        &mut self,
        name: &str,
        powers: &[(&Dimension, i32)],
    ) -> Result<Dimension> {
        let combined = Dimension::combine(powers.iter().copied())?;
        self.dimensions.declare(name, combined)
    }

    /// Declare the magnitude-1 unit of `dimension`
    pub fn declare_base_unit(&mut self, name: &str, dimension: &Dimension) -> Result<Unit> {
        let dimension = self.dimensions.resolve(dimension.clone());
        self.units.declare(name, Unit::base(name, &dimension))
    }

    /// Declare `unit × magnitude` under `name`
    pub fn declare_scaled_unit(
        &mut self,
        name: &str,
        unit: &Unit,
        magnitude: Magnitude,
    ) -> Result<Unit> {
        let scaled = Unit::scaled(name, unit, &magnitude)?;
        self.declare_unit(name, scaled)
    }

    /// Give a name to any computed unit, e.g. `newton = kilogram·metre·second⁻²`
    pub fn declare_unit(&mut self, name: &str, unit: Unit) -> Result<Unit> {
        self.record_irrationals(unit.magnitude())?;
        let dimension = self.dimensions.resolve(unit.dimension().clone());
        let unit = Unit::new(dimension, unit.magnitude().clone());
        self.units.declare(name, unit)
    }

    fn record_irrationals(&mut self, magnitude: &Magnitude) -> Result<()> {
        for irrational in magnitude.irrationals() {
            match self.irrationals.get(irrational.name()) {
                Some(known) if known.conflicts_with(irrational) => {
                    return Err(AlgebraError::IrrationalConflict {
                        name: irrational.name().to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    debug!(
                        name = irrational.name(),
                        value = irrational.value(),
                        "recorded irrational"
                    );
                    self.irrationals
                        .insert(irrational.name().to_string(), irrational.clone());
                }
            }
        }
        Ok(())
    }

    /// Freeze the declarations
    pub fn build(self) -> UnitSystem {
        debug!(
            dimensions = self.dimensions.len(),
            units = self.units.len(),
            irrationals = self.irrationals.len(),
            "unit system built"
        );
        UnitSystem {
            dimensions: self.dimensions,
            units: self.units,
        }
    }
}

/// Read-only set of declared dimensions and units
#[derive(Debug, Clone)]
pub struct UnitSystem {
    dimensions: NameRegistry<Dimension>,
    units: NameRegistry<Unit>,
}

impl UnitSystem {
    pub fn builder() -> UnitSystemBuilder {
        UnitSystemBuilder::new()
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.get(name)
    }

    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Declared dimensions, in declaration order
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter()
    }

    /// Declared units, in declaration order
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    pub fn scalar_dimension(&self) -> Dimension {
        self.dimensions.resolve(Dimension::scalar())
    }

    pub fn one(&self) -> Unit {
        self.resolve_unit(Unit::new(Dimension::scalar(), Magnitude::one()))
    }

    pub fn resolve_dimension(&self, dimension: Dimension) -> Dimension {
        self.dimensions.resolve(dimension)
    }

    /// Declared unit for `unit`, or an anonymous unit whose dimension
    /// carries its declared name
    pub fn resolve_unit(&self, unit: Unit) -> Unit {
        let resolved = self.units.resolve(unit);
        if resolved.name().is_some() {
            return resolved;
        }
        let dimension = self.dimensions.resolve(resolved.dimension().clone());
        Unit::new(dimension, resolved.magnitude().clone())
    }

    pub fn combine_dimensions(&self, powers: &[(&Dimension, i32)]) -> Result<Dimension> {
        Ok(self.resolve_dimension(Dimension::combine(powers.iter().copied())?))
    }

    pub fn invert_dimension(&self, dimension: &Dimension) -> Dimension {
        self.resolve_dimension(dimension.invert())
    }

    pub fn unit_multiply(&self, left: &Unit, right: &Unit) -> Result<Unit> {
        Ok(self.resolve_unit(left.multiply(right)?))
    }

    pub fn unit_divide(&self, left: &Unit, right: &Unit) -> Result<Unit> {
        Ok(self.resolve_unit(left.divide(right)?))
    }

    pub fn unit_pow(&self, unit: &Unit, n: i32) -> Result<Unit> {
        Ok(self.resolve_unit(unit.pow(n)?))
    }

    pub fn unit_invert(&self, unit: &Unit) -> Unit {
        self.resolve_unit(unit.invert())
    }

    /// Factor taking a value in `from` to a value in `to`
    pub fn conversion_factor(&self, from: &Unit, to: &Unit) -> Result<f64> {
        from.conversion_factor(to)
    }
}
