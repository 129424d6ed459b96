//! Canonical value types

pub mod canonical;
pub mod dimension;
pub mod magnitude;
pub mod power;
pub mod unit;

pub use canonical::CanonicalList;
pub use dimension::{BaseDimension, Dimension};
pub use magnitude::{Factor, Irrational, Magnitude};
pub use power::PowerTerm;
pub use unit::Unit;
