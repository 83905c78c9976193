//! # plzfinder-rs
//!
//! Which postal codes lie within `R` km of postal code `P`?
//!
//! ### 1. `LocationTable` - The Dataset
//!
//! ```
//! use plzfinder_rs::LocationTable;
//!
//! let report = LocationTable::load(vec![
//!     ("10115", "52.5323", "13.3846"),
//!     ("10117", "52.5170", "13.3872"),
//!     ("10119", "not-a-number", "13.4050"),
//! ]);
//! assert_eq!(report.table.len(), 2);
//! assert_eq!(report.rejected.len(), 1);
//! ```
//!
//! ### 2. `ProximitySearch` - Radius Queries
//!
//! A cheap planar estimate rejects far-away candidates first; survivors are
//! checked with the haversine formula.
//!
//! ```
//! use plzfinder_rs::{LocationTable, ProximitySearch};
//!
//! # fn main() -> Result<(), plzfinder_rs::PlzError> {
//! let table = LocationTable::load(vec![
//!     ("10115", 52.5323, 13.3846),
//!     ("10117", 52.5170, 13.3872),
//!     ("80331", 48.1374, 11.5755),
//! ])
//! .into_table();
//!
//! // "10116" is not in the table, so the search anchors on "10117"
//! for hit in ProximitySearch::new(&table).search("10116", 10.0)? {
//!     println!("{} {:.2} km", hit.code(), hit.distance_km().unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. CSV In, Many Formats Out
//!
//! ```no_run
//! use plzfinder_rs::{CsvLoadConfig, LocationsToParquet, ProximitySearch, load_csv};
//!
//! let report = load_csv("zipcodes.de.csv", &CsvLoadConfig::default()).unwrap();
//! let hits = ProximitySearch::new(&report.table).search("01067", 25.0).unwrap();
//! hits.to_parquet("dresden.parquet").unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod io;
pub mod util;

pub use crate::api::{
    LoadReport, LocationRecord, LocationTable, ProximitySearch, ProximitySearchBuilder,
    result_extent,
};
pub use crate::core::{
    Calibration, DegreePoint, Degrees, EARTH_RADIUS_KM, FALLBACK_SENTINEL, KM_PER_DEGREE_LAT,
    KM_PER_DEGREE_LON, MAX_FALLBACK_STEPS, QUICK_REJECT_MARGIN_KM, RadianPoint, Radians,
    approximate_distance_km, exact_distance_km,
};
pub use crate::io::{
    ColumnRef, CsvLoadConfig, GeometryFormat, LocationsToArrow, LocationsToParquet, MatchRow,
    load_csv, load_csv_from_reader, locations_schema, matches_to_feature_collection,
    matches_to_json, write_matches_csv, write_parquet,
};
pub use crate::util::{PlzError, PostalCode, RawCoordinate, init_logging};

pub use geo_types;
