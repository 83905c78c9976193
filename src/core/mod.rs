pub mod constants;
pub mod distance;
pub mod units;

pub use constants::{
    EARTH_RADIUS_KM, FALLBACK_SENTINEL, KM_PER_DEGREE_LAT, KM_PER_DEGREE_LON,
    MAX_FALLBACK_STEPS, QUICK_REJECT_MARGIN_KM,
};
pub use distance::{Calibration, approximate_distance_km, exact_distance_km};
pub use units::{DegreePoint, Degrees, RadianPoint, Radians};
