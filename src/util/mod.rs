pub mod coord;
pub mod error;
pub mod logging;
pub mod postcode;

pub use coord::RawCoordinate;
pub use error::PlzError;
pub use logging::init_logging;
pub use postcode::PostalCode;
