//! unitcanon-core: Canonical algebra for physical dimensions and units
//!
//! Dimensions, magnitudes and units are stored as sorted lists of
//! `(base, exponent)` terms with no zero exponents. Two expressions that
//! denote the same physical quantity therefore produce identical values,
//! so `kilometre / kilosecond` is equal to `metre / second`.
//!
//! # Example
//!
//! ```
//! use unitcanon_core::{Magnitude, UnitSystemBuilder};
//!
//! let mut builder = UnitSystemBuilder::new();
//! let length = builder.declare_base_dimension("Length").unwrap();
//! let time = builder.declare_base_dimension("Time").unwrap();
//! builder
//!     .declare_combined_dimension("Speed", &[(&length, 1), (&time, -1)])
//!     .unwrap();
//!
//! let metre = builder.declare_base_unit("metre", &length).unwrap();
//! let second = builder.declare_base_unit("second", &time).unwrap();
//! let kilo = Magnitude::from_int(1000).unwrap();
//! let kilometre = builder.declare_scaled_unit("kilometre", &metre, kilo.clone()).unwrap();
//! let kilosecond = builder.declare_scaled_unit("kilosecond", &second, kilo).unwrap();
//! let system = builder.build();
//!
//! // Same canonical unit, whatever the prefixes
//! let a = system.unit_divide(&kilometre, &kilosecond).unwrap();
//! let b = system.unit_divide(&metre, &second).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.dimension().name(), Some("Speed"));
//!
//! assert_eq!(system.conversion_factor(&metre, &kilometre).unwrap(), 0.001);
//! ```

pub mod algebra;
pub mod error;
pub mod primes;
pub mod registry;
pub mod system;
pub mod types;

pub use error::{AlgebraError, Result};
pub use primes::{prime_factorization, FactorExponent, Factorization};
pub use registry::{Downcast, NameRegistry};
pub use system::{UnitSystem, UnitSystemBuilder, SCALAR_DIMENSION, SCALAR_UNIT};
pub use types::{
    BaseDimension, CanonicalList, Dimension, Factor, Irrational, Magnitude, PowerTerm, Unit,
};

/// Magnitude of a positive integer
pub fn magnitude_from_int(n: u64) -> Result<Magnitude> {
    Magnitude::from_int(n)
}

/// Magnitude of `numerator / denominator`, reduced
pub fn magnitude_from_ratio(numerator: u64, denominator: u64) -> Result<Magnitude> {
    Magnitude::from_ratio(numerator, denominator)
}

pub fn magnitude_from_irrational(irrational: Irrational) -> Magnitude {
    Magnitude::from_irrational(irrational)
}

/// Floating-point factor taking a value in `from` to a value in `to`.
///
/// Fails with [`AlgebraError::DimensionMismatch`] when the units measure
/// different dimensions.
pub fn evaluate_conversion_factor(from: &Unit, to: &Unit) -> Result<f64> {
    from.conversion_factor(to)
}
