use crate::util::error::PlzError;
use serde::Serialize;
use std::fmt;

/// An opaque postal-code token.
///
/// Stored as text so leading zeros survive (`"01067"` is Dresden, not `1067`).
/// Only [`PostalCode::successor`] ever looks at the numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the code, if it is a plain digit string.
    pub fn numeric_value(&self) -> Result<u64, PlzError> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlzError::InvalidCode(self.0.clone()));
        }
        self.0
            .parse::<u64>()
            .map_err(|_| PlzError::InvalidCode(self.0.clone()))
    }

    /// The next code: numeric value plus one, zero-padded to this code's width.
    ///
    /// Unlike plain re-stringification of the number, `"01067"` steps to
    /// `"01068"` rather than `"1068"`, so fallbacks stay inside the 0xxxx range.
    ///
    /// ```
    /// use plzfinder_rs::PostalCode;
    ///
    /// assert_eq!(PostalCode::new("10001").successor().unwrap().as_str(), "10002");
    /// assert_eq!(PostalCode::new("01099").successor().unwrap().as_str(), "01100");
    /// assert!(PostalCode::new("D-10115").successor().is_err());
    /// ```
    pub fn successor(&self) -> Result<PostalCode, PlzError> {
        let next = self
            .numeric_value()?
            .checked_add(1)
            .ok_or_else(|| PlzError::InvalidCode(self.0.clone()))?;
        Ok(PostalCode(format!("{:0width$}", next, width = self.0.len())))
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PostalCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PostalCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for PostalCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for PostalCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_keeps_width() -> Result<(), PlzError> {
        assert_eq!(PostalCode::new("01067").successor()?, "01068");
        assert_eq!(PostalCode::new("09999").successor()?, "10000");
        assert_eq!(PostalCode::new("99998").successor()?, "99999");
        assert_eq!(PostalCode::new("7").successor()?, "8");
        assert_eq!(PostalCode::new("9").successor()?, "10");
        Ok(())
    }

    #[test]
    fn test_successor_rejects_non_numeric() {
        for bad in ["", "abc", "12a45", "-5", "+5", " 10115"] {
            assert_eq!(
                PostalCode::new(bad).successor(),
                Err(PlzError::InvalidCode(bad.to_string())),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_equality_is_textual() {
        assert_ne!(PostalCode::new("01067"), PostalCode::new("1067"));
        assert_eq!(PostalCode::new("01067"), "01067");
    }
}
