use crate::api::location::LocationRecord;
use crate::util::coord::RawCoordinate;
use crate::util::error::PlzError;
use tracing::{info, warn};

/// The in-memory postal-code dataset.
///
/// Records keep their input order. Duplicate codes are allowed: every copy
/// takes part in scans, lookups return the first. There is no mutation API, so
/// a loaded table can be shared across threads freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationTable {
    records: Vec<LocationRecord>,
}

/// Outcome of [`LocationTable::load`]: the table plus one
/// [`PlzError::RecordParse`] per dropped row.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub table: LocationTable,
    pub rejected: Vec<PlzError>,
}

impl LoadReport {
    pub fn into_table(self) -> LocationTable {
        self.table
    }
}

impl LocationTable {
    /// Build a table from raw `(code, latitude, longitude)` rows.
    ///
    /// Rows whose latitude or longitude is not a finite number are skipped and
    /// reported in [`LoadReport::rejected`]; loading itself never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use plzfinder_rs::LocationTable;
    ///
    /// let report = LocationTable::load(vec![
    ///     ("10115", "52.5323", "13.3846"),
    ///     ("10117", "n/a", "13.3872"),
    /// ]);
    /// assert_eq!(report.table.len(), 1);
    /// assert_eq!(report.rejected.len(), 1);
    /// ```
    pub fn load<I, C, A, B>(rows: I) -> LoadReport
    where
        I: IntoIterator<Item = (C, A, B)>,
        C: AsRef<str>,
        A: RawCoordinate,
        B: RawCoordinate,
    {
        let mut records = Vec::new();
        let mut rejected = Vec::new();

        for (index, (code, lat, lon)) in rows.into_iter().enumerate() {
            let code = code.as_ref().trim();
            match (lat.parse_degrees(), lon.parse_degrees()) {
                (Some(lat), Some(lon)) => records.push(LocationRecord::new(code, lat, lon)),
                (parsed_lat, _) => {
                    let reason = if parsed_lat.is_none() {
                        format!("latitude '{}' is not a finite number", lat.describe())
                    } else {
                        format!("longitude '{}' is not a finite number", lon.describe())
                    };
                    warn!(index, code, %reason, "skipping record");
                    rejected.push(PlzError::RecordParse {
                        index,
                        code: code.to_string(),
                        reason,
                    });
                }
            }
        }

        info!(
            loaded = records.len(),
            rejected = rejected.len(),
            "location table loaded"
        );

        LoadReport {
            table: Self { records },
            rejected,
        }
    }

    /// First record whose code equals `code` exactly.
    pub fn find_by_code(&self, code: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|rec| rec.code() == code)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<LocationRecord> for LocationTable {
    fn from_iter<T: IntoIterator<Item = LocationRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LocationTable {
    type Item = &'a LocationRecord;
    type IntoIter = std::slice::Iter<'a, LocationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
