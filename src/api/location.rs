use crate::core::units::{DegreePoint, Degrees, RadianPoint, Radians};
use crate::util::postcode::PostalCode;
use geo_types::Point;

/// One geocoded postal code.
///
/// The radian form is computed once at construction so the exact distance
/// phase never has to convert. Degree and radian fields are private and only
/// ever set together.
///
/// # Example
///
/// ```
/// use plzfinder_rs::LocationRecord;
///
/// let rec = LocationRecord::new("10115", 52.5323, 13.3846);
/// assert_eq!(rec.code().as_str(), "10115");
/// assert!(rec.distance_km().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    code: PostalCode,
    degrees: DegreePoint,
    radians: RadianPoint,
    distance_km: Option<f64>,
}

impl LocationRecord {
    pub fn new(code: impl Into<PostalCode>, latitude: f64, longitude: f64) -> Self {
        let degrees = DegreePoint::new(latitude, longitude);
        Self {
            code: code.into(),
            degrees,
            radians: degrees.to_radians(),
            distance_km: None,
        }
    }

    pub fn code(&self) -> &PostalCode {
        &self.code
    }

    pub fn latitude(&self) -> Degrees {
        self.degrees.lat
    }

    pub fn longitude(&self) -> Degrees {
        self.degrees.lon
    }

    pub fn latitude_rad(&self) -> Radians {
        self.radians.lat
    }

    pub fn longitude_rad(&self) -> Radians {
        self.radians.lon
    }

    pub fn degrees(&self) -> DegreePoint {
        self.degrees
    }

    pub fn radians(&self) -> RadianPoint {
        self.radians
    }

    /// Distance to the search anchor. `None` for records at rest in a table.
    pub fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Position as a `geo_types::Point` (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        self.degrees.into()
    }

    /// Copy of this record tagged with a search distance.
    pub(crate) fn with_distance(&self, distance_km: f64) -> Self {
        Self {
            distance_km: Some(distance_km),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_radians() {
        let rec = LocationRecord::new("01067", 51.0504, 13.7373);

        assert_eq!(rec.code(), &PostalCode::new("01067"));
        assert_eq!(rec.latitude(), Degrees(51.0504));
        assert!((rec.latitude_rad().value() - 51.0504_f64.to_radians()).abs() < 1e-12);
        assert!((rec.longitude_rad().value() - 13.7373_f64.to_radians()).abs() < 1e-12);
        assert_eq!(rec.distance_km(), None);
    }

    #[test]
    fn test_with_distance_is_a_copy() {
        let rec = LocationRecord::new("10115", 52.53, 13.38);
        let tagged = rec.with_distance(4.2);

        assert_eq!(tagged.distance_km(), Some(4.2));
        assert_eq!(rec.distance_km(), None);
        assert_eq!(tagged.degrees(), rec.degrees());
        assert_eq!(tagged.radians(), rec.radians());
    }

    #[test]
    fn test_point() {
        let rec = LocationRecord::new("80331", 48.1374, 11.5755);
        let pt = rec.point();
        assert_eq!(pt.x(), 11.5755);
        assert_eq!(pt.y(), 48.1374);
    }
}
