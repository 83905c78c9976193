pub mod location;
pub mod search;
pub mod table;

pub use location::LocationRecord;
pub use search::{ProximitySearch, ProximitySearchBuilder, result_extent};
pub use table::{LoadReport, LocationTable};
