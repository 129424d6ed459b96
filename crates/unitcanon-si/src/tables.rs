//! SI dimensions and units
//!
//! To add a unit, add an entry to the UNITS array. Entries may only refer
//! to units declared above them.

use unitcanon_core::Irrational;

use crate::defs::{DimensionDef, Scale, UnitDef, UnitDefinition};

/// Every declared dimension, base dimensions first
pub static DIMENSIONS: &[DimensionDef] = &[
    // Base
    DimensionDef {
        name: "Length",
        components: &[],
    },
    DimensionDef {
        name: "Mass",
        components: &[],
    },
    DimensionDef {
        name: "Time",
        components: &[],
    },
    DimensionDef {
        name: "ElectricCurrent",
        components: &[],
    },
    DimensionDef {
        name: "Temperature",
        components: &[],
    },
    DimensionDef {
        name: "AmountOfSubstance",
        components: &[],
    },
    DimensionDef {
        name: "LuminousIntensity",
        components: &[],
    },
    DimensionDef {
        name: "Angle",
        components: &[],
    },
    DimensionDef {
        name: "Information",
        components: &[],
    },
    // Derived
    DimensionDef {
        name: "Area",
        components: &[("Length", 2)],
    },
    DimensionDef {
        name: "Volume",
        components: &[("Length", 3)],
    },
    DimensionDef {
        name: "Speed",
        components: &[("Length", 1), ("Time", -1)],
    },
    DimensionDef {
        name: "Acceleration",
        components: &[("Speed", 1), ("Time", -1)],
    },
    DimensionDef {
        name: "Frequency",
        components: &[("Time", -1)],
    },
    DimensionDef {
        name: "Force",
        components: &[("Mass", 1), ("Acceleration", 1)],
    },
    DimensionDef {
        name: "Energy",
        components: &[("Force", 1), ("Length", 1)],
    },
    DimensionDef {
        name: "Power",
        components: &[("Energy", 1), ("Time", -1)],
    },
    DimensionDef {
        name: "Pressure",
        components: &[("Force", 1), ("Area", -1)],
    },
    DimensionDef {
        name: "ElectricCharge",
        components: &[("ElectricCurrent", 1), ("Time", 1)],
    },
    DimensionDef {
        name: "Voltage",
        components: &[("Power", 1), ("ElectricCurrent", -1)],
    },
    DimensionDef {
        name: "DataRate",
        components: &[("Information", 1), ("Time", -1)],
    },
];

/// Complete registry of all supported units.
pub static UNITS: &[UnitDef] = &[
    // Length (base: metre)
    UnitDef {
        name: "metre",
        symbol: "m",
        aliases: &["meter", "meters", "metres"],
        definition: UnitDefinition::Base("Length"),
    },
    UnitDef {
        name: "kilometre",
        symbol: "km",
        aliases: &["kilometer", "kilometers", "kilometres"],
        definition: UnitDefinition::Scaled {
            of: "metre",
            scale: Scale::Ratio(1000, 1),
        },
    },
    UnitDef {
        name: "centimetre",
        symbol: "cm",
        aliases: &["centimeter", "centimeters", "centimetres"],
        definition: UnitDefinition::Scaled {
            of: "metre",
            scale: Scale::Ratio(1, 100),
        },
    },
    UnitDef {
        name: "millimetre",
        symbol: "mm",
        aliases: &["millimeter", "millimeters", "millimetres"],
        definition: UnitDefinition::Scaled {
            of: "metre",
            scale: Scale::Ratio(1, 1000),
        },
    },
    UnitDef {
        name: "micrometre",
        symbol: "µm",
        aliases: &["um", "micrometer", "micron"],
        definition: UnitDefinition::Scaled {
            of: "metre",
            scale: Scale::Ratio(1, 1_000_000),
        },
    },
    UnitDef {
        name: "inch",
        symbol: "in",
        aliases: &["inches"],
        definition: UnitDefinition::Scaled {
            of: "metre",
            scale: Scale::Ratio(127, 5000),
        },
    },
    UnitDef {
        name: "foot",
        symbol: "ft",
        aliases: &["feet"],
        definition: UnitDefinition::Scaled {
            of: "inch",
            scale: Scale::Ratio(12, 1),
        },
    },
    UnitDef {
        name: "yard",
        symbol: "yd",
        aliases: &["yards"],
        definition: UnitDefinition::Scaled {
            of: "foot",
            scale: Scale::Ratio(3, 1),
        },
    },
    UnitDef {
        name: "mile",
        symbol: "mi",
        aliases: &["miles"],
        definition: UnitDefinition::Scaled {
            of: "yard",
            scale: Scale::Ratio(1760, 1),
        },
    },
    // Mass (base: kilogram)
    UnitDef {
        name: "kilogram",
        symbol: "kg",
        aliases: &["kilograms", "kilo"],
        definition: UnitDefinition::Base("Mass"),
    },
    UnitDef {
        name: "gram",
        symbol: "g",
        aliases: &["grams"],
        definition: UnitDefinition::Scaled {
            of: "kilogram",
            scale: Scale::Ratio(1, 1000),
        },
    },
    UnitDef {
        name: "milligram",
        symbol: "mg",
        aliases: &["milligrams"],
        definition: UnitDefinition::Scaled {
            of: "gram",
            scale: Scale::Ratio(1, 1000),
        },
    },
    UnitDef {
        name: "tonne",
        symbol: "t",
        aliases: &["tonnes", "metric ton"],
        definition: UnitDefinition::Scaled {
            of: "kilogram",
            scale: Scale::Ratio(1000, 1),
        },
    },
    UnitDef {
        name: "pound",
        symbol: "lb",
        aliases: &["lbs", "pounds"],
        definition: UnitDefinition::Scaled {
            of: "kilogram",
            scale: Scale::Ratio(45_359_237, 100_000_000),
        },
    },
    UnitDef {
        name: "ounce",
        symbol: "oz",
        aliases: &["ounces"],
        definition: UnitDefinition::Scaled {
            of: "pound",
            scale: Scale::Ratio(1, 16),
        },
    },
    // Time (base: second)
    UnitDef {
        name: "second",
        symbol: "s",
        aliases: &["sec", "seconds"],
        definition: UnitDefinition::Base("Time"),
    },
    UnitDef {
        name: "millisecond",
        symbol: "ms",
        aliases: &["milliseconds"],
        definition: UnitDefinition::Scaled {
            of: "second",
            scale: Scale::Ratio(1, 1000),
        },
    },
    UnitDef {
        name: "minute",
        symbol: "min",
        aliases: &["minutes"],
        definition: UnitDefinition::Scaled {
            of: "second",
            scale: Scale::Ratio(60, 1),
        },
    },
    UnitDef {
        name: "hour",
        symbol: "h",
        aliases: &["hr", "hours"],
        definition: UnitDefinition::Scaled {
            of: "minute",
            scale: Scale::Ratio(60, 1),
        },
    },
    UnitDef {
        name: "day",
        symbol: "d",
        aliases: &["days"],
        definition: UnitDefinition::Scaled {
            of: "hour",
            scale: Scale::Ratio(24, 1),
        },
    },
    UnitDef {
        name: "week",
        symbol: "wk",
        aliases: &["weeks"],
        definition: UnitDefinition::Scaled {
            of: "day",
            scale: Scale::Ratio(7, 1),
        },
    },
    // Other SI base units
    UnitDef {
        name: "ampere",
        symbol: "A",
        aliases: &["amp", "amps", "amperes"],
        definition: UnitDefinition::Base("ElectricCurrent"),
    },
    UnitDef {
        name: "kelvin",
        symbol: "K",
        aliases: &[],
        definition: UnitDefinition::Base("Temperature"),
    },
    UnitDef {
        name: "mole",
        symbol: "mol",
        aliases: &["moles"],
        definition: UnitDefinition::Base("AmountOfSubstance"),
    },
    UnitDef {
        name: "candela",
        symbol: "cd",
        aliases: &[],
        definition: UnitDefinition::Base("LuminousIntensity"),
    },
    // Angle (base: radian)
    UnitDef {
        name: "radian",
        symbol: "rad",
        aliases: &["radians"],
        definition: UnitDefinition::Base("Angle"),
    },
    UnitDef {
        name: "degree",
        symbol: "°",
        aliases: &["deg", "degrees"],
        definition: UnitDefinition::Scaled {
            of: "radian",
            scale: Scale::RatioTimesIrrational(1, 180, Irrational::PI),
        },
    },
    UnitDef {
        name: "arcminute",
        symbol: "′",
        aliases: &["arcmin", "arcminutes"],
        definition: UnitDefinition::Scaled {
            of: "degree",
            scale: Scale::Ratio(1, 60),
        },
    },
    UnitDef {
        name: "arcsecond",
        symbol: "″",
        aliases: &["arcsec", "arcseconds"],
        definition: UnitDefinition::Scaled {
            of: "arcminute",
            scale: Scale::Ratio(1, 60),
        },
    },
    UnitDef {
        name: "turn",
        symbol: "tr",
        aliases: &["turns", "revolution"],
        definition: UnitDefinition::Scaled {
            of: "radian",
            scale: Scale::RatioTimesIrrational(2, 1, Irrational::PI),
        },
    },
    // Information (base: bit)
    UnitDef {
        name: "bit",
        symbol: "bit",
        aliases: &["bits"],
        definition: UnitDefinition::Base("Information"),
    },
    UnitDef {
        name: "byte",
        symbol: "B",
        aliases: &["bytes"],
        definition: UnitDefinition::Scaled {
            of: "bit",
            scale: Scale::Ratio(8, 1),
        },
    },
    UnitDef {
        name: "kilobyte",
        symbol: "kB",
        aliases: &["kilobytes"],
        definition: UnitDefinition::Scaled {
            of: "byte",
            scale: Scale::Ratio(1000, 1),
        },
    },
    UnitDef {
        name: "megabyte",
        symbol: "MB",
        aliases: &["megabytes"],
        definition: UnitDefinition::Scaled {
            of: "kilobyte",
            scale: Scale::Ratio(1000, 1),
        },
    },
    UnitDef {
        name: "gigabyte",
        symbol: "GB",
        aliases: &["gigabytes"],
        definition: UnitDefinition::Scaled {
            of: "megabyte",
            scale: Scale::Ratio(1000, 1),
        },
    },
    UnitDef {
        name: "kibibyte",
        symbol: "KiB",
        aliases: &["kibibytes"],
        definition: UnitDefinition::Scaled {
            of: "byte",
            scale: Scale::Ratio(1024, 1),
        },
    },
    UnitDef {
        name: "mebibyte",
        symbol: "MiB",
        aliases: &["mebibytes"],
        definition: UnitDefinition::Scaled {
            of: "kibibyte",
            scale: Scale::Ratio(1024, 1),
        },
    },
    UnitDef {
        name: "gibibyte",
        symbol: "GiB",
        aliases: &["gibibytes"],
        definition: UnitDefinition::Scaled {
            of: "mebibyte",
            scale: Scale::Ratio(1024, 1),
        },
    },
    // Area and volume
    UnitDef {
        name: "square_metre",
        symbol: "m²",
        aliases: &["m2", "square meter", "square metre"],
        definition: UnitDefinition::Product(&[("metre", 2)]),
    },
    UnitDef {
        name: "hectare",
        symbol: "ha",
        aliases: &["hectares"],
        definition: UnitDefinition::Scaled {
            of: "square_metre",
            scale: Scale::Ratio(10_000, 1),
        },
    },
    UnitDef {
        name: "cubic_metre",
        symbol: "m³",
        aliases: &["m3", "cubic meter", "cubic metre"],
        definition: UnitDefinition::Product(&[("metre", 3)]),
    },
    UnitDef {
        name: "litre",
        symbol: "L",
        aliases: &["liter", "liters", "litres"],
        definition: UnitDefinition::Scaled {
            of: "cubic_metre",
            scale: Scale::Ratio(1, 1000),
        },
    },
    UnitDef {
        name: "millilitre",
        symbol: "mL",
        aliases: &["ml", "milliliter", "millilitres"],
        definition: UnitDefinition::Scaled {
            of: "litre",
            scale: Scale::Ratio(1, 1000),
        },
    },
    // Kinematics
    UnitDef {
        name: "metre_per_second",
        symbol: "m/s",
        aliases: &["mps"],
        definition: UnitDefinition::Product(&[("metre", 1), ("second", -1)]),
    },
    UnitDef {
        name: "kilometre_per_hour",
        symbol: "km/h",
        aliases: &["kph", "kmh"],
        definition: UnitDefinition::Product(&[("kilometre", 1), ("hour", -1)]),
    },
    UnitDef {
        name: "mile_per_hour",
        symbol: "mph",
        aliases: &["mi/h"],
        definition: UnitDefinition::Product(&[("mile", 1), ("hour", -1)]),
    },
    UnitDef {
        name: "metre_per_second_squared",
        symbol: "m/s²",
        aliases: &["m/s2"],
        definition: UnitDefinition::Product(&[("metre", 1), ("second", -2)]),
    },
    UnitDef {
        name: "hertz",
        symbol: "Hz",
        aliases: &[],
        definition: UnitDefinition::Product(&[("second", -1)]),
    },
    // Mechanics
    UnitDef {
        name: "newton",
        symbol: "N",
        aliases: &["newtons"],
        definition: UnitDefinition::Product(&[("kilogram", 1), ("metre", 1), ("second", -2)]),
    },
    UnitDef {
        name: "joule",
        symbol: "J",
        aliases: &["joules"],
        definition: UnitDefinition::Product(&[("newton", 1), ("metre", 1)]),
    },
    UnitDef {
        name: "kilojoule",
        symbol: "kJ",
        aliases: &["kilojoules"],
        definition: UnitDefinition::Scaled {
            of: "joule",
            scale: Scale::Ratio(1000, 1),
        },
    },
    UnitDef {
        name: "calorie",
        symbol: "cal",
        aliases: &["calories"],
        definition: UnitDefinition::Scaled {
            of: "joule",
            scale: Scale::Ratio(4184, 1000),
        },
    },
    UnitDef {
        name: "watt",
        symbol: "W",
        aliases: &["watts"],
        definition: UnitDefinition::Product(&[("joule", 1), ("second", -1)]),
    },
    UnitDef {
        name: "kilowatt",
        symbol: "kW",
        aliases: &["kilowatts"],
        definition: UnitDefinition::Scaled {
            of: "watt",
            scale: Scale::Ratio(1000, 1),
        },
    },
    UnitDef {
        name: "kilowatt_hour",
        symbol: "kWh",
        aliases: &["kilowatt hour"],
        definition: UnitDefinition::Product(&[("kilowatt", 1), ("hour", 1)]),
    },
    UnitDef {
        name: "pascal",
        symbol: "Pa",
        aliases: &["pascals"],
        definition: UnitDefinition::Product(&[("newton", 1), ("metre", -2)]),
    },
    UnitDef {
        name: "bar",
        symbol: "bar",
        aliases: &["bars"],
        definition: UnitDefinition::Scaled {
            of: "pascal",
            scale: Scale::Ratio(100_000, 1),
        },
    },
    // Electromagnetism
    UnitDef {
        name: "coulomb",
        symbol: "C",
        aliases: &["coulombs"],
        definition: UnitDefinition::Product(&[("ampere", 1), ("second", 1)]),
    },
    UnitDef {
        name: "volt",
        symbol: "V",
        aliases: &["volts"],
        definition: UnitDefinition::Product(&[("watt", 1), ("ampere", -1)]),
    },
    // Data rate
    UnitDef {
        name: "bit_per_second",
        symbol: "bit/s",
        aliases: &["bps"],
        definition: UnitDefinition::Product(&[("bit", 1), ("second", -1)]),
    },
    UnitDef {
        name: "megabit_per_second",
        symbol: "Mbit/s",
        aliases: &["mbps"],
        definition: UnitDefinition::Scaled {
            of: "bit_per_second",
            scale: Scale::Ratio(1_000_000, 1),
        },
    },
];
