use geo_types::Point;
use std::f64::consts::PI;

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f64);

impl Degrees {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts as `degrees * pi / 180`.
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * PI / 180.0)
    }
}

impl Radians {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// A latitude/longitude pair in degrees.
///
/// Input to [`approximate_distance_km`](crate::approximate_distance_km).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DegreePoint {
    pub lat: Degrees,
    pub lon: Degrees,
}

/// A latitude/longitude pair in radians.
///
/// Input to [`exact_distance_km`](crate::exact_distance_km).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RadianPoint {
    pub lat: Radians,
    pub lon: Radians,
}

impl DegreePoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Degrees(lat),
            lon: Degrees(lon),
        }
    }

    pub fn to_radians(self) -> RadianPoint {
        RadianPoint {
            lat: self.lat.to_radians(),
            lon: self.lon.to_radians(),
        }
    }
}

impl From<DegreePoint> for Point<f64> {
    fn from(p: DegreePoint) -> Self {
        Point::new(p.lon.value(), p.lat.value())
    }
}

impl From<Point<f64>> for DegreePoint {
    fn from(p: Point<f64>) -> Self {
        DegreePoint::new(p.y(), p.x())
    }
}
