//! Unit-tagged physical quantities and the rectangle-area function.
//!
//! This module provides [`Quantity`], a numeric magnitude paired with a
//! physical [`Unit`]. Units carry their [`Dimension`] (length, area, time,
//! mass) and an SI scale factor, so quantities of equal dimension convert
//! freely and dimension mismatches are caught before any arithmetic runs.
//!
//! # Design Rationale
//!
//! **Why a unit tag instead of SI-only floats?** A bare `f64` cannot tell
//! 5 kilometers from 5 seconds. Carrying the unit alongside the value lets
//! [`area_of_rectangle`] reject a time-dimensioned width with a
//! [`UnitMismatch`](crate::Error::UnitMismatch) error instead of silently
//! producing a meaningless number.
//!
//! **Why SI normalization on multiply?** Multiplying two length quantities
//! must yield an area regardless of the input units. Normalizing both sides
//! to meters first makes the combined dimension (length × length = area) and
//! the output unit (square meters) unambiguous.
//!
//! # Quick Start
//!
//! ```
//! use hermes_instrument::quantity::{area_of_rectangle, kilometers, Unit};
//!
//! let area = area_of_rectangle(kilometers(5.0), kilometers(10.0)).unwrap();
//! assert_eq!(area.unit(), Unit::SquareMeter);
//! assert!((area.value() - 50_000_000.0).abs() < 1e-6);
//! ```

use std::fmt;

use crate::errors::{Error, Result};

/// Meters per astronomical unit (IAU 2012 Resolution B2).
const ASTRONOMICAL_UNIT_M: f64 = 1.495_978_707e11;

/// The physical category of a unit.
///
/// Two quantities convert into each other only when their units share a
/// dimension; multiplying two `Length` quantities produces an `Area` one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// One-dimensional extent (meters and friends).
    Length,
    /// Two-dimensional extent (square meters and friends).
    Area,
    /// Duration (seconds).
    Time,
    /// Mass (kilograms).
    Mass,
}

/// A concrete physical unit: a dimension plus a fixed scale to SI base units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    /// Mean Earth–Sun distance, the workhorse length unit of solar-system work.
    AstronomicalUnit,
    SquareMeter,
    SquareKilometer,
    Second,
    Kilogram,
}

impl Unit {
    /// The physical dimension this unit measures.
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Millimeter
            | Unit::Centimeter
            | Unit::Meter
            | Unit::Kilometer
            | Unit::AstronomicalUnit => Dimension::Length,
            Unit::SquareMeter | Unit::SquareKilometer => Dimension::Area,
            Unit::Second => Dimension::Time,
            Unit::Kilogram => Dimension::Mass,
        }
    }

    /// Scale factor from this unit to its SI base unit
    /// (meters, square meters, seconds, kilograms).
    pub fn si_factor(self) -> f64 {
        match self {
            Unit::Millimeter => 1e-3,
            Unit::Centimeter => 1e-2,
            Unit::Meter => 1.0,
            Unit::Kilometer => 1e3,
            Unit::AstronomicalUnit => ASTRONOMICAL_UNIT_M,
            Unit::SquareMeter => 1.0,
            Unit::SquareKilometer => 1e6,
            Unit::Second => 1.0,
            Unit::Kilogram => 1.0,
        }
    }

    /// Display symbol for this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Kilometer => "km",
            Unit::AstronomicalUnit => "au",
            Unit::SquareMeter => "m2",
            Unit::SquareKilometer => "km2",
            Unit::Second => "s",
            Unit::Kilogram => "kg",
        }
    }
}

/// A numeric magnitude tagged with a physical unit.
///
/// # Derives
///
/// - `Copy`, `Clone`: 16 bytes, cheap to copy.
/// - `PartialEq`: compares value and unit tag as stored, without conversion;
///   use [`Quantity::to_si`] to compare across units of equal dimension.
///
/// Note: `Eq` is not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Construct a quantity from a magnitude and a unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// The magnitude in the quantity's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit tag.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The magnitude rescaled to the unit's SI base
    /// (meters, square meters, seconds, kilograms).
    pub fn to_si(&self) -> f64 {
        self.value * self.unit.si_factor()
    }

    /// Convert to another unit of the same dimension.
    ///
    /// # Errors
    ///
    /// [`Error::UnitMismatch`] when `target` measures a different dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use hermes_instrument::quantity::{kilometers, Unit};
    ///
    /// let cm = kilometers(1.0).to(Unit::Centimeter).unwrap();
    /// assert_eq!(cm.value(), 100_000.0);
    /// ```
    pub fn to(&self, target: Unit) -> Result<Quantity> {
        if target.dimension() != self.unit.dimension() {
            return Err(Error::unit_mismatch(
                "conversion target",
                self.unit.dimension(),
                target,
            ));
        }
        Ok(Quantity {
            value: self.to_si() / target.si_factor(),
            unit: target,
        })
    }

    /// Checks that this quantity measures `expected`, returning its SI
    /// magnitude on success.
    fn require_dimension(&self, context: &'static str, expected: Dimension) -> Result<f64> {
        if self.unit.dimension() != expected {
            return Err(Error::unit_mismatch(context, expected, self.unit));
        }
        Ok(self.to_si())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

/// A length in millimeters.
pub fn millimeters(value: f64) -> Quantity {
    Quantity::new(value, Unit::Millimeter)
}

/// A length in centimeters.
pub fn centimeters(value: f64) -> Quantity {
    Quantity::new(value, Unit::Centimeter)
}

/// A length in meters.
pub fn meters(value: f64) -> Quantity {
    Quantity::new(value, Unit::Meter)
}

/// A length in kilometers.
pub fn kilometers(value: f64) -> Quantity {
    Quantity::new(value, Unit::Kilometer)
}

/// A duration in seconds.
pub fn seconds(value: f64) -> Quantity {
    Quantity::new(value, Unit::Second)
}

/// Compute the area of a rectangle from two length quantities.
///
/// Both inputs may carry any length unit; they are normalized to meters
/// before multiplying, and the result is tagged [`Unit::SquareMeter`].
///
/// # Errors
///
/// [`Error::UnitMismatch`] when either argument carries a non-length unit.
/// The check runs before any multiplication.
///
/// # Examples
///
/// ```
/// use hermes_instrument::quantity::{area_of_rectangle, kilometers};
///
/// let area = area_of_rectangle(kilometers(5.0), kilometers(10.0)).unwrap();
/// assert_eq!(area.value(), 50_000_000.0);
/// ```
pub fn area_of_rectangle(width: Quantity, height: Quantity) -> Result<Quantity> {
    let w = width.require_dimension("width", Dimension::Length)?;
    let h = height.require_dimension("height", Dimension::Length)?;
    Ok(Quantity::new(w * h, Unit::SquareMeter))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The documented reference case: 5 km × 10 km = 5.0e7 m².
    #[test]
    fn area_five_by_ten_kilometers() {
        let area = area_of_rectangle(kilometers(5.0), kilometers(10.0)).unwrap();
        assert_eq!(area.unit(), Unit::SquareMeter);
        assert!((area.value() - 50_000_000.0).abs() < 1e-6);
    }

    /// Mixed length units normalize before multiplying:
    /// 200 cm × 3 m = 6 m².
    #[test]
    fn area_mixed_units() {
        let area = area_of_rectangle(centimeters(200.0), meters(3.0)).unwrap();
        assert!((area.value() - 6.0).abs() < 1e-12);
    }

    /// A time-dimensioned width is rejected before multiplication, and the
    /// error names the offending argument.
    #[test]
    fn area_rejects_time_width() {
        let err = area_of_rectangle(seconds(5.0), meters(10.0)).unwrap_err();
        match err {
            Error::UnitMismatch {
                context,
                expected,
                found,
                unit,
            } => {
                assert_eq!(context, "width");
                assert_eq!(expected, Dimension::Length);
                assert_eq!(found, Dimension::Time);
                assert_eq!(unit, Unit::Second);
            }
            other => panic!("expected UnitMismatch, got {:?}", other),
        }
    }

    /// Same rejection for a bad height, even when the width is fine.
    #[test]
    fn area_rejects_mass_height() {
        let err =
            area_of_rectangle(meters(2.0), Quantity::new(3.0, Unit::Kilogram)).unwrap_err();
        assert!(matches!(err, Error::UnitMismatch { context: "height", .. }));
    }

    /// An area unit is not a length unit: a pre-squared input is rejected
    /// rather than silently producing a volume-like value.
    #[test]
    fn area_rejects_area_input() {
        let err =
            area_of_rectangle(Quantity::new(4.0, Unit::SquareMeter), meters(2.0)).unwrap_err();
        assert!(matches!(err, Error::UnitMismatch { context: "width", .. }));
    }

    /// Conversions between length units rescale exactly:
    /// 1 km = 1000 m = 100000 cm = 1e6 mm.
    #[test]
    fn length_conversions() {
        let km = kilometers(1.0);
        assert_eq!(km.to(Unit::Meter).unwrap().value(), 1e3);
        assert_eq!(km.to(Unit::Centimeter).unwrap().value(), 1e5);
        assert_eq!(km.to(Unit::Millimeter).unwrap().value(), 1e6);
    }

    /// One astronomical unit in kilometers, within float tolerance of the
    /// IAU value 149 597 870.7 km.
    #[test]
    fn astronomical_unit_conversion() {
        let au = Quantity::new(1.0, Unit::AstronomicalUnit);
        let km = au.to(Unit::Kilometer).unwrap();
        assert!((km.value() - 149_597_870.7).abs() < 1e-3);
    }

    /// Converting across dimensions fails.
    #[test]
    fn conversion_rejects_dimension_change() {
        let err = meters(1.0).to(Unit::Second).unwrap_err();
        assert!(matches!(err, Error::UnitMismatch { .. }));
        let err = meters(1.0).to(Unit::SquareMeter).unwrap_err();
        assert!(matches!(err, Error::UnitMismatch { .. }));
    }

    /// Area units convert among themselves: 3 km² = 3e6 m².
    #[test]
    fn area_unit_conversion() {
        let a = Quantity::new(3.0, Unit::SquareKilometer);
        assert_eq!(a.to(Unit::SquareMeter).unwrap().value(), 3e6);
    }

    /// Display pairs the magnitude with the unit symbol.
    #[test]
    fn display_format() {
        assert_eq!(kilometers(5.0).to_string(), "5 km");
        assert_eq!(
            Quantity::new(50_000_000.0, Unit::SquareMeter).to_string(),
            "50000000 m2"
        );
    }
}
