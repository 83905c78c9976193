/// Trait for raw coordinate values handed to the table loader.
///
/// Implemented for `f64`, `&str` and `String`, so rows can come straight from
/// a CSV reader or from already-typed sources.
pub trait RawCoordinate {
    /// Returns the value in degrees, or `None` if it is not a finite number.
    fn parse_degrees(&self) -> Option<f64>;

    /// The value as it appeared in the input, for diagnostics.
    fn describe(&self) -> String;
}

impl RawCoordinate for f64 {
    fn parse_degrees(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl RawCoordinate for &str {
    fn parse_degrees(&self) -> Option<f64> {
        self.trim()
            .parse::<f64>()
            .ok()
            .filter(|v: &f64| v.is_finite())
    }

    fn describe(&self) -> String {
        (*self).to_string()
    }
}

impl RawCoordinate for String {
    fn parse_degrees(&self) -> Option<f64> {
        self.as_str().parse_degrees()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_coordinate_str() {
        assert_eq!("52.5".parse_degrees(), Some(52.5));
        assert_eq!(" -13.25 ".parse_degrees(), Some(-13.25));
        assert_eq!("abc".parse_degrees(), None);
        assert_eq!("".parse_degrees(), None);
        assert_eq!("NaN".parse_degrees(), None);
        assert_eq!("inf".parse_degrees(), None);
    }

    #[test]
    fn test_raw_coordinate_f64() {
        assert_eq!(12.0_f64.parse_degrees(), Some(12.0));
        assert_eq!(f64::NAN.parse_degrees(), None);
        assert_eq!(f64::NEG_INFINITY.parse_degrees(), None);
    }

    #[test]
    fn test_raw_coordinate_string() {
        let s = String::from("8.6821");
        assert_eq!(s.parse_degrees(), Some(8.6821));
        assert_eq!(s.describe(), "8.6821");
    }
}
