use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Mean radius of the Earth, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

const FEET_PER_MILE: f64 = 5280.0;

/// A pair of geographic coordinates, in degrees.
///
/// Values are not validated: coordinates come straight from location records
/// or from the user's device.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point, in miles.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance_miles(*self, *other)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Great-circle distance between two points in miles, computed with the
/// haversine formula.
///
/// ```
/// use reuse_hours::localization::{distance_miles, GeoPoint};
///
/// let free_geek = GeoPoint::new(45.5091, -122.6548);
/// let goodwill = GeoPoint::new(45.5114, -122.6595);
///
/// assert_eq!(distance_miles(free_geek, free_geek), 0.0);
/// assert!((distance_miles(free_geek, goodwill) - 0.28).abs() < 0.01);
/// ```
pub fn distance_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Display a distance in miles the way it is written on badges: feet below
/// a tenth of a mile, miles with one decimal otherwise.
///
/// ```
/// use reuse_hours::localization::DistanceText;
///
/// assert_eq!(DistanceText(0.05).to_string(), "264 ft");
/// assert_eq!(DistanceText(2.04).to_string(), "2.0 mi");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DistanceText(pub f64);

impl Display for DistanceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let miles = self.0;

        if miles < 0.1 {
            write!(f, "{} ft", (miles * FEET_PER_MILE).round())
        } else {
            write!(f, "{miles:.1} mi")
        }
    }
}
