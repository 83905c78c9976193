use crate::api::location::LocationRecord;
use crate::api::table::LocationTable;
use crate::core::constants::{
    FALLBACK_SENTINEL, FALLBACK_SENTINEL_VALUE, MAX_FALLBACK_STEPS, QUICK_REJECT_MARGIN_KM,
};
use crate::core::distance::{Calibration, exact_distance_km};
use crate::util::error::PlzError;
use crate::util::postcode::PostalCode;
use geo::BoundingRect;
use geo_types::{MultiPoint, Rect};
use rayon::prelude::*;
use tracing::{debug, debug_span};

/// Radius search over a borrowed [`LocationTable`].
///
/// # Example
///
/// ```
/// use plzfinder_rs::{LocationTable, ProximitySearch};
///
/// # fn main() -> Result<(), plzfinder_rs::PlzError> {
/// let table = LocationTable::load(vec![
///     ("10115", 52.5323, 13.3846),
///     ("10117", 52.5170, 13.3872),
///     ("80331", 48.1374, 11.5755),
/// ])
/// .into_table();
///
/// let hits = ProximitySearch::new(&table).search("10115", 5.0)?;
/// assert_eq!(hits.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProximitySearch<'a> {
    table: &'a LocationTable,
    calibration: Calibration,
}

impl<'a> ProximitySearch<'a> {
    pub fn new(table: &'a LocationTable) -> Self {
        Self {
            table,
            calibration: Calibration::default(),
        }
    }

    pub fn builder() -> ProximitySearchBuilder<'a> {
        ProximitySearchBuilder::new()
    }

    pub fn table(&self) -> &'a LocationTable {
        self.table
    }

    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Find the anchor record for `code`.
    ///
    /// A code missing from the table falls forward to the next numeric code
    /// that exists (`"10001"` → `"10002"` → ...), until the sentinel `"99999"`
    /// is reached. The sentinel itself always fails, even if it is in the table.
    /// Codes above the sentinel give up after [`MAX_FALLBACK_STEPS`] probes.
    pub fn resolve(&self, code: &str) -> Result<&'a LocationRecord, PlzError> {
        let requested = code;
        let mut current = PostalCode::new(code);
        let mut steps = 0usize;

        loop {
            if current == FALLBACK_SENTINEL {
                return Err(PlzError::NoFallbackFound(requested.to_string()));
            }
            if let Some(record) = self.table.find_by_code(current.as_str()) {
                if steps > 0 {
                    debug!(requested, resolved = %current, steps, "resolved via fallback");
                }
                return Ok(record);
            }

            let next = current.successor()?;
            if next.numeric_value()? == FALLBACK_SENTINEL_VALUE || steps >= MAX_FALLBACK_STEPS {
                return Err(PlzError::NoFallbackFound(requested.to_string()));
            }
            current = next;
            steps += 1;
        }
    }

    /// All records within `radius_km` of the resolved anchor, in table order,
    /// each tagged with its great-circle distance.
    ///
    /// Candidates are first screened with the planar approximation against
    /// `radius_km + 10`; only survivors get the haversine check.
    pub fn search(&self, code: &str, radius_km: f64) -> Result<Vec<LocationRecord>, PlzError> {
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(PlzError::InvalidRadius(radius_km));
        }

        let span = debug_span!("search", code, radius_km);
        let _enter = span.enter();

        let anchor = self.resolve(code)?;
        let anchor_deg = anchor.degrees();
        let anchor_rad = anchor.radians();
        let quick_limit = radius_km + QUICK_REJECT_MARGIN_KM;

        let mut quick_passed = 0usize;
        let mut matches = Vec::new();

        for candidate in self.table.iter() {
            let approx = self
                .calibration
                .approximate_distance_km(anchor_deg, candidate.degrees());
            if approx >= quick_limit {
                continue;
            }
            quick_passed += 1;

            let exact = exact_distance_km(anchor_rad, candidate.radians());
            if exact <= radius_km {
                matches.push(candidate.with_distance(exact));
            }
        }

        debug!(
            anchor = %anchor.code(),
            scanned = self.table.len(),
            quick_passed,
            matched = matches.len(),
            "search finished"
        );

        Ok(matches)
    }

    /// Run independent searches in parallel over the shared table.
    ///
    /// Results come back in the order of `queries`.
    pub fn search_many<S>(&self, queries: &[(S, f64)]) -> Vec<Result<Vec<LocationRecord>, PlzError>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|(code, radius_km)| self.search(code.as_ref(), *radius_km))
            .collect()
    }
}

/// Builder for [`ProximitySearch`].
#[derive(Debug, Default)]
pub struct ProximitySearchBuilder<'a> {
    table: Option<&'a LocationTable>,
    calibration: Option<Calibration>,
}

impl<'a> ProximitySearchBuilder<'a> {
    pub fn new() -> Self {
        Self {
            table: None,
            calibration: None,
        }
    }

    pub fn table(mut self, table: &'a LocationTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn calibration(mut self, calibration: Calibration) -> Self {
        self.calibration = Some(calibration);
        self
    }

    /// Returns `None` if no table was set.
    pub fn build(self) -> Option<ProximitySearch<'a>> {
        Some(ProximitySearch {
            table: self.table?,
            calibration: self.calibration.unwrap_or_default(),
        })
    }
}

/// Bounding box of a result set (x = longitude, y = latitude).
pub fn result_extent(matches: &[LocationRecord]) -> Option<Rect<f64>> {
    let points: MultiPoint<f64> = matches.iter().map(|rec| rec.point()).collect();
    points.bounding_rect()
}
