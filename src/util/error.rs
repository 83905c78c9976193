/// Error type for plzfinder-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PlzError {
    /// A dataset row could not be turned into a location (row is skipped).
    RecordParse {
        /// Zero-based position of the row in the loader input.
        index: usize,
        /// Postal code of the offending row, as read.
        code: String,
        reason: String,
    },
    /// Fallback resolution reached the sentinel code without a match.
    NoFallbackFound(String),
    /// The query postal code is not an integer string.
    InvalidCode(String),
    /// The search radius is negative or not finite.
    InvalidRadius(f64),
    /// A distance calibration factor is not a positive finite number.
    InvalidCalibration(String),
    /// A configured CSV column does not exist in the header.
    ColumnNotFound(String),
    /// CSV parsing or writing error.
    CsvError(String),
    /// File I/O error.
    IoError(String),
    /// Result export (JSON, GeoJSON, Arrow, Parquet) failed.
    ExportError(String),
}

impl std::fmt::Display for PlzError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlzError::RecordParse {
                index,
                code,
                reason,
            } => write!(f, "Invalid record {} ('{}'): {}", index, code, reason),
            PlzError::NoFallbackFound(code) => {
                write!(f, "No fallback postal code found for '{}'", code)
            }
            PlzError::InvalidCode(code) => write!(f, "Invalid postal code: '{}'", code),
            PlzError::InvalidRadius(r) => write!(f, "Invalid radius: {}", r),
            PlzError::InvalidCalibration(msg) => write!(f, "Invalid calibration: {}", msg),
            PlzError::ColumnNotFound(col) => write!(f, "Column '{}' not found", col),
            PlzError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            PlzError::IoError(msg) => write!(f, "IO error: {}", msg),
            PlzError::ExportError(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for PlzError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PlzError::InvalidCode("abc".into()).to_string(),
            "Invalid postal code: 'abc'"
        );
        assert_eq!(
            PlzError::NoFallbackFound("99999".into()).to_string(),
            "No fallback postal code found for '99999'"
        );
        let err = PlzError::RecordParse {
            index: 3,
            code: "10115".into(),
            reason: "latitude 'x' is not a finite number".into(),
        };
        assert!(err.to_string().contains("10115"));
    }
}
