use std::{cmp, fmt::Display};

use serde::{Deserialize, Serialize};

/// Mean earth radius used by the haversine formula.
pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);

#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Kilometers with two decimals, the way the distance is shown to users.
impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.2}", self.as_kilometers()))
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Rounds to two decimal places of a kilometer (10 m).
    pub fn rounded(&self) -> Self {
        Self::from_kilometers(self.rounded_kilometers())
    }

    pub fn rounded_kilometers(&self) -> f64 {
        (self.as_kilometers() * 100.0).round() / 100.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance using the haversine formula.
    pub fn distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_meters(EARTH_RADIUS.as_meters() * c)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Moves the coordinate north by `degrees` of latitude.
    pub fn offset_north(&self, degrees: f64) -> Self {
        Self::new(self.latitude + degrees, self.longitude)
    }
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn distance_rounding_test() {
    let dist = Distance::from_meters(119_604.4);
    assert_eq!(dist.rounded_kilometers(), 119.6);
    assert_eq!(dist.to_string(), "119.60");
}

#[test]
fn coordinate_range_test() {
    assert!(Coordinate::new(90.0, -180.0).is_valid());
    assert!(!Coordinate::new(90.5, 0.0).is_valid());
    assert!(!Coordinate::new(0.0, 181.0).is_valid());
}
