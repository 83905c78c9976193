use crate::core::constants::{EARTH_RADIUS_KM, KM_PER_DEGREE_LAT, KM_PER_DEGREE_LON};
use crate::core::units::{DegreePoint, RadianPoint};
use crate::util::error::PlzError;

/// Degree-to-kilometre factors for the quick planar approximation.
///
/// The defaults are average values for Germany's latitude band. Datasets from
/// other regions need their own factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    km_per_degree_lat: f64,
    km_per_degree_lon: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self::germany()
    }
}

impl Calibration {
    /// Create a calibration from custom factors.
    ///
    /// # Example
    /// ```
    /// use plzfinder_rs::Calibration;
    ///
    /// // Roughly Denmark (~56°N)
    /// let dk = Calibration::new(111.32, 62.2).unwrap();
    /// assert!(dk.km_per_degree_lon() < Calibration::germany().km_per_degree_lon());
    /// assert!(Calibration::new(111.32, -1.0).is_err());
    /// ```
    pub fn new(km_per_degree_lat: f64, km_per_degree_lon: f64) -> Result<Self, PlzError> {
        for (name, value) in [
            ("km_per_degree_lat", km_per_degree_lat),
            ("km_per_degree_lon", km_per_degree_lon),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlzError::InvalidCalibration(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(Self {
            km_per_degree_lat,
            km_per_degree_lon,
        })
    }

    pub const fn germany() -> Self {
        Self {
            km_per_degree_lat: KM_PER_DEGREE_LAT,
            km_per_degree_lon: KM_PER_DEGREE_LON,
        }
    }

    pub fn km_per_degree_lat(&self) -> f64 {
        self.km_per_degree_lat
    }

    pub fn km_per_degree_lon(&self) -> f64 {
        self.km_per_degree_lon
    }

    /// `|Δlat| * km_per_degree_lat + |Δlon| * km_per_degree_lon`
    pub fn approximate_distance_km(&self, a: DegreePoint, b: DegreePoint) -> f64 {
        let lat_diff = (a.lat.value() - b.lat.value()).abs() * self.km_per_degree_lat;
        let lon_diff = (a.lon.value() - b.lon.value()).abs() * self.km_per_degree_lon;
        lat_diff + lon_diff
    }
}

/// Cheap anisotropic distance estimate in kilometres, using the Germany
/// calibration.
///
/// Not a true distance: it overestimates diagonal separations and is only
/// meant as a quick pre-filter.
pub fn approximate_distance_km(a: DegreePoint, b: DegreePoint) -> f64 {
    Calibration::germany().approximate_distance_km(a, b)
}

/// Great-circle distance in kilometres (haversine, spherical Earth).
pub fn exact_distance_km(a: RadianPoint, b: RadianPoint) -> f64 {
    let lat1 = a.lat.value();
    let lat2 = b.lat.value();
    let delta_lat = lat2 - lat1;
    let delta_lon = b.lon.value() - a.lon.value();

    // Clamped: rounding can push near-antipodal values just past 1.
    let h = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
