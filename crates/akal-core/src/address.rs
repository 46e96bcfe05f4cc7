//! Validation of the `street` / `nr` query pair.

use crate::error::{AkalError, Result};

/// A validated street address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub house_nr: u32,
}

impl Address {
    /// Create an address from already typed values.
    ///
    /// # Errors
    /// Returns `AkalError::InvalidInput` if `street` is empty or whitespace-only.
    pub fn new(street: &str, house_nr: u32) -> Result<Self> {
        let street = street.trim();
        if street.is_empty() {
            return Err(AkalError::InvalidInput("street cannot be empty".to_string()));
        }
        Ok(Self {
            street: street.to_string(),
            house_nr,
        })
    }

    /// Validate raw query parameters.
    ///
    /// `nr` must consist of ASCII digits only: no sign, no whitespace,
    /// no trailing letters such as `"12a"`.
    ///
    /// # Errors
    /// Returns `AkalError::InvalidInput` if a parameter is missing, empty,
    /// or `nr` is not a base-10 integer that fits into `u32`.
    ///
    /// # Examples
    /// ```
    /// use akal_core::Address;
    ///
    /// let address = Address::from_query(Some("Kaiserstraße"), Some("12")).unwrap();
    /// assert_eq!(address.house_nr, 12);
    /// assert!(Address::from_query(Some("Kaiserstraße"), Some("12a")).is_err());
    /// assert!(Address::from_query(None, Some("12")).is_err());
    /// ```
    pub fn from_query(street: Option<&str>, nr: Option<&str>) -> Result<Self> {
        let street = street.unwrap_or_default();
        let nr = nr.unwrap_or_default();

        if nr.is_empty() {
            return Err(AkalError::InvalidInput("nr cannot be empty".to_string()));
        }
        if !nr.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AkalError::InvalidInput(format!(
                "nr must be a non-negative integer, got {nr:?}"
            )));
        }
        let house_nr = nr
            .parse::<u32>()
            .map_err(|_| AkalError::InvalidInput(format!("nr out of range: {nr}")))?;

        Self::new(street, house_nr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(result: Result<Address>) -> String {
        match result {
            Err(AkalError::InvalidInput(msg)) => msg,
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_query_valid() {
        let address = Address::from_query(Some("Kaiserstraße"), Some("12")).unwrap();
        assert_eq!(address.street, "Kaiserstraße");
        assert_eq!(address.house_nr, 12);
    }

    #[test]
    fn test_from_query_trims_street() {
        let address = Address::from_query(Some("  Hauptstraße "), Some("7")).unwrap();
        assert_eq!(address.street, "Hauptstraße");
    }

    #[test]
    fn test_from_query_leading_zeros() {
        let address = Address::from_query(Some("Hauptstraße"), Some("007")).unwrap();
        assert_eq!(address.house_nr, 7);
    }

    #[test]
    fn test_from_query_missing_street() {
        let msg = invalid(Address::from_query(None, Some("12")));
        assert!(msg.contains("street"));
    }

    #[test]
    fn test_from_query_empty_street() {
        let msg = invalid(Address::from_query(Some("   "), Some("12")));
        assert!(msg.contains("street"));
    }

    #[test]
    fn test_from_query_missing_nr() {
        let msg = invalid(Address::from_query(Some("Hauptstraße"), None));
        assert!(msg.contains("nr"));
    }

    #[test]
    fn test_from_query_rejects_trailing_letters() {
        invalid(Address::from_query(Some("Hauptstraße"), Some("12a")));
    }

    #[test]
    fn test_from_query_rejects_sign_and_whitespace() {
        invalid(Address::from_query(Some("Hauptstraße"), Some("+12")));
        invalid(Address::from_query(Some("Hauptstraße"), Some("-12")));
        invalid(Address::from_query(Some("Hauptstraße"), Some(" 12")));
    }

    #[test]
    fn test_from_query_rejects_overflow() {
        let msg = invalid(Address::from_query(Some("Hauptstraße"), Some("99999999999")));
        assert!(msg.contains("out of range"));
    }
}
