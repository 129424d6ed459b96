//! Declarative table rows and the pass that turns them into a unit system

use std::collections::HashMap;

use unitcanon_core::{
    AlgebraError, Dimension, Irrational, Magnitude, Result, Unit, UnitSystem, UnitSystemBuilder,
};

/// Dimension metadata. Empty `components` declares a base dimension.
#[derive(Debug)]
pub struct DimensionDef {
    pub name: &'static str,
    /// Previously declared dimensions and their powers
    pub components: &'static [(&'static str, i32)],
}

/// Exact scale factor of a scaled unit
#[derive(Debug)]
pub enum Scale {
    /// `numerator / denominator`
    Ratio(u64, u64),
    Irrational(Irrational),
    RatioTimesIrrational(u64, u64, Irrational),
}

impl Scale {
    pub fn magnitude(&self) -> Result<Magnitude> {
        match self {
            Scale::Ratio(numerator, denominator) => Magnitude::from_ratio(*numerator, *denominator),
            Scale::Irrational(irrational) => Ok(Magnitude::from_irrational(irrational.clone())),
            Scale::RatioTimesIrrational(numerator, denominator, irrational) => {
                Magnitude::from_ratio(*numerator, *denominator)?
                    .multiply(&Magnitude::from_irrational(irrational.clone()))
            }
        }
    }
}

/// How a unit is obtained from earlier rows
#[derive(Debug)]
pub enum UnitDefinition {
    /// Magnitude-1 unit of a dimension
    Base(&'static str),
    /// Another unit times a scale factor
    Scaled { of: &'static str, scale: Scale },
    /// Product of earlier units raised to powers
    Product(&'static [(&'static str, i32)]),
}

/// Unit metadata - single source of truth for each unit
#[derive(Debug)]
pub struct UnitDef {
    /// Declared name (e.g., "kilometre")
    pub name: &'static str,
    /// Short display symbol, matched case-sensitively (e.g., "km", "Mm")
    pub symbol: &'static str,
    /// Other accepted spellings (lowercase)
    pub aliases: &'static [&'static str],
    pub definition: UnitDefinition,
}

/// Declare every row, in order, into a fresh system.
///
/// Rows may only refer to rows above them.
pub fn build_from(dimensions: &[DimensionDef], units: &[UnitDef]) -> Result<UnitSystem> {
    let mut builder = UnitSystemBuilder::new();

    let mut declared_dimensions: HashMap<&str, Dimension> = HashMap::new();
    for def in dimensions {
        let dimension = if def.components.is_empty() {
            builder.declare_base_dimension(def.name)?
        } else {
            let powers = def
                .components
                .iter()
                .map(|&(name, exponent)| {
                    lookup_dimension(&declared_dimensions, name).map(|d| (d, exponent))
                })
                .collect::<Result<Vec<_>>>()?;
            builder.declare_combined_dimension(def.name, &powers)?
        };
        declared_dimensions.insert(def.name, dimension);
    }

    let mut declared_units: HashMap<&str, Unit> = HashMap::new();
    for def in units {
        let unit = match &def.definition {
            UnitDefinition::Base(dimension) => {
                let dimension = lookup_dimension(&declared_dimensions, dimension)?;
                builder.declare_base_unit(def.name, dimension)?
            }
            UnitDefinition::Scaled { of, scale } => {
                let of = lookup_unit(&declared_units, of)?;
                builder.declare_scaled_unit(def.name, of, scale.magnitude()?)?
            }
            UnitDefinition::Product(factors) => {
                let mut product = builder.one();
                for &(name, exponent) in factors.iter() {
                    let factor = lookup_unit(&declared_units, name)?.pow(exponent)?;
                    product = product.multiply(&factor)?;
                }
                builder.declare_unit(def.name, product)?
            }
        };
        declared_units.insert(def.name, unit);
    }

    Ok(builder.build())
}

fn lookup_dimension<'a>(
    declared: &'a HashMap<&str, Dimension>,
    name: &str,
) -> Result<&'a Dimension> {
    declared.get(name).ok_or_else(|| AlgebraError::UnknownDimension {
        name: name.to_string(),
    })
}

fn lookup_unit<'a>(declared: &'a HashMap<&str, Unit>, name: &str) -> Result<&'a Unit> {
    declared.get(name).ok_or_else(|| AlgebraError::UnknownUnit {
        name: name.to_string(),
    })
}
