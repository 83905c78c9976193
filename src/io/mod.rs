pub mod arrow;
pub mod csv;
pub mod json;
pub mod parquet;

pub use self::arrow::{LocationsToArrow, locations_schema};
pub use self::csv::{
    ColumnRef, CsvLoadConfig, GeometryFormat, load_csv, load_csv_from_reader, write_matches_csv,
};
pub use self::json::{MatchRow, matches_to_feature_collection, matches_to_json};
pub use self::parquet::{LocationsToParquet, write_parquet};
