/// Mean Earth radius used by the haversine formula, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometres per degree of latitude (average value for Germany)
pub const KM_PER_DEGREE_LAT: f64 = 111.32;

/// Kilometres per degree of longitude (average value for Germany)
pub const KM_PER_DEGREE_LON: f64 = 70.07;

/// Safety margin added to the radius before the quick-reject comparison.
///
/// The approximation is only a heuristic; without this margin the exact phase
/// never sees some of the true matches.
pub const QUICK_REJECT_MARGIN_KM: f64 = 10.0;

/// Postal code that terminates the fallback search.
pub const FALLBACK_SENTINEL: &str = "99999";

/// Numeric value of [`FALLBACK_SENTINEL`].
pub(crate) const FALLBACK_SENTINEL_VALUE: u64 = 99_999;

/// Upper bound on fallback probes. No code below the sentinel can need more.
pub const MAX_FALLBACK_STEPS: usize = FALLBACK_SENTINEL_VALUE as usize;
