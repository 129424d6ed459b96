//! unitcanon-si: SI and common customary units
//!
//! The unit system is declared from the static [`DIMENSIONS`] and
//! [`UNITS`] tables the first time [`system`] is called, then shared
//! read-only for the rest of the process.
//!
//! # Example
//!
//! ```
//! use unitcanon_si::{find_unit, system};
//!
//! let km = find_unit("km").unwrap();
//! let h = find_unit("hour").unwrap();
//! let speed = system().unit_divide(km, h).unwrap();
//! assert_eq!(speed.name(), Some("kilometre_per_hour"));
//!
//! let mps = find_unit("m/s").unwrap();
//! let factor = system().conversion_factor(&speed, mps).unwrap();
//! assert!((factor - 1.0 / 3.6).abs() < 1e-12);
//! ```

pub mod defs;
pub mod tables;

use std::sync::OnceLock;

use tracing::{debug, trace};
use unitcanon_core::{Result, Unit, UnitSystem};

pub use defs::{build_from, DimensionDef, Scale, UnitDef, UnitDefinition};
pub use tables::{DIMENSIONS, UNITS};

static SYSTEM: OnceLock<UnitSystem> = OnceLock::new();

/// Declare the SI tables into a fresh system
pub fn build_system() -> Result<UnitSystem> {
    build_from(DIMENSIONS, UNITS)
}

/// Shared SI system, built on first use
pub fn system() -> &'static UnitSystem {
    SYSTEM.get_or_init(|| {
        let system = build_system().expect("SI tables must declare consistently");
        debug!(
            dimensions = system.dimensions().count(),
            units = system.units().count(),
            "SI unit system initialized"
        );
        system
    })
}

/// Table row for a name, symbol, or alias.
///
/// Symbols match exactly first (so "mm" and "Mm" stay distinct), then
/// names and aliases case-insensitively.
pub fn find_def(s: &str) -> Option<&'static UnitDef> {
    if let Some(def) = UNITS.iter().find(|d| d.symbol == s) {
        return Some(def);
    }
    let lower = s.to_lowercase();
    UNITS
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(s) || d.aliases.iter().any(|a| *a == lower))
}

/// Declared SI unit for a name, symbol, or alias
pub fn find_unit(s: &str) -> Option<&'static Unit> {
    let Some(def) = find_def(s) else {
        trace!(query = s, "no SI unit matches");
        return None;
    };
    system().unit(def.name)
}

/// Display symbol of a declared SI unit
pub fn symbol_of(unit: &Unit) -> Option<&'static str> {
    let name = unit.name()?;
    UNITS.iter().find(|d| d.name == name).map(|d| d.symbol)
}
