//! Conversions and name resolution against the shared SI system

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use unitcanon_core::{AlgebraError, Magnitude, Unit};
use unitcanon_si::{find_unit, symbol_of, system};

fn unit(s: &str) -> &'static Unit {
    find_unit(s).unwrap_or_else(|| panic!("unknown unit {s}"))
}

fn assert_factor(from: &str, to: &str, expected: f64) {
    let factor = system().conversion_factor(unit(from), unit(to)).unwrap();
    let tolerance = expected.abs() * 1e-12;
    assert!(
        (factor - expected).abs() <= tolerance,
        "{from} -> {to}: expected {expected}, got {factor}"
    );
}

#[test]
fn test_length_conversion() {
    assert_factor("km", "m", 1000.0);
    assert_factor("m", "km", 0.001);
    assert_factor("m", "mm", 1000.0);
    assert_factor("mi", "km", 1.609344);
    assert_factor("ft", "in", 12.0);
    assert_factor("in", "cm", 2.54);
}

#[test]
fn test_exact_customary_ratios() {
    let mile = unit("mile").conversion_magnitude(unit("metre")).unwrap();
    assert_eq!(mile.as_ratio(), Some((201_168, 125)));
    assert_eq!(mile.to_decimal().unwrap(), Decimal::new(1_609_344, 3));

    let pound = unit("lb").conversion_magnitude(unit("g")).unwrap();
    assert_eq!(pound.to_decimal().unwrap(), Decimal::new(45_359_237, 5));
}

#[test]
fn test_time_conversion() {
    assert_factor("h", "s", 3600.0);
    assert_factor("wk", "day", 7.0);
    assert_factor("ms", "min", 1.0 / 60_000.0);
}

#[test]
fn test_angle_conversion() {
    assert_factor("deg", "rad", std::f64::consts::PI / 180.0);
    assert_factor("turn", "degree", 360.0);
    assert_factor("degree", "arcsec", 3600.0);

    // π cancels exactly between degree and turn
    let m = unit("turn").conversion_magnitude(unit("degree")).unwrap();
    assert!(m.is_rational());
    assert_eq!(m, Magnitude::from_int(360).unwrap());
}

#[test]
fn test_data_units() {
    assert_factor("byte", "bit", 8.0);
    assert_factor("GiB", "MiB", 1024.0);
    assert_factor("GB", "MB", 1000.0);
    assert_factor("KiB", "kB", 1.024);
}

#[test]
fn test_derived_units_resolve() {
    let si = system();
    let kg_m = si.unit_multiply(unit("kg"), unit("m")).unwrap();
    let force = si.unit_divide(&kg_m, &si.unit_pow(unit("s"), 2).unwrap()).unwrap();
    assert_eq!(force.name(), Some("newton"));
    assert_eq!(force.dimension().name(), Some("Force"));

    let power = si.unit_divide(unit("J"), unit("s")).unwrap();
    assert_eq!(power.name(), Some("watt"));

    let energy = si.unit_multiply(unit("W"), unit("s")).unwrap();
    assert_eq!(energy.name(), Some("joule"));

    let frequency = si.unit_invert(unit("s"));
    assert_eq!(frequency.name(), Some("hertz"));

    let voltage_times_current = si.unit_multiply(unit("V"), unit("A")).unwrap();
    assert_eq!(voltage_times_current.name(), Some("watt"));
}

#[test]
fn test_prefixed_quotients_resolve() {
    let si = system();
    for (distance, time) in [("km", "h"), ("mi", "h"), ("m", "s")] {
        let speed = si.unit_divide(unit(distance), unit(time)).unwrap();
        assert_eq!(speed.dimension().name(), Some("Speed"), "{distance}/{time}");
        assert!(speed.name().is_some(), "{distance}/{time} should be declared");
    }
    let km_per_ms = si.unit_divide(unit("km"), unit("ms")).unwrap();
    assert_eq!(km_per_ms.name(), None);
    assert_eq!(km_per_ms.dimension().name(), Some("Speed"));
}

#[test]
fn test_energy_conversion() {
    assert_factor("kWh", "J", 3_600_000.0);
    assert_factor("kJ", "cal", 1000.0 / 4.184);
    assert_factor("bar", "Pa", 100_000.0);
}

#[test]
fn test_area_and_volume() {
    assert_factor("ha", "m²", 10_000.0);
    assert_factor("L", "mL", 1000.0);
    assert_factor("m³", "L", 1000.0);

    let si = system();
    let square_km = si.unit_pow(unit("km"), 2).unwrap();
    assert_eq!(square_km.dimension().name(), Some("Area"));
    assert_eq!(si.conversion_factor(&square_km, unit("ha")).unwrap(), 100.0);
}

#[test]
fn test_incompatible_units() {
    let err = system().conversion_factor(unit("km"), unit("kg")).unwrap_err();
    assert_eq!(
        err,
        AlgebraError::DimensionMismatch {
            from: "kilometre".to_string(),
            to: "kilogram".to_string()
        }
    );
}

#[test]
fn test_symbols() {
    assert_eq!(symbol_of(unit("kilowatt hour")), Some("kWh"));
    let anonymous = system().unit_divide(unit("km"), unit("ms")).unwrap();
    assert_eq!(symbol_of(&anonymous), None);
}
