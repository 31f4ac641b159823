//! Passenger records held by seat slots.
//!
//! A passenger name is bounded text: construction validates its length and
//! rejects oversized input instead of truncating it.

use serde::Serialize;

use crate::error::{Error, Result};

/// Maximum length of a passenger name, in characters.
pub const MAX_NAME_LEN: usize = 49;

/// A validated passenger name of at most [`MAX_NAME_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PassengerName(String);

impl PassengerName {
    /// Create a name from user input.
    ///
    /// Surrounding whitespace is trimmed before the length check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] if nothing is left after trimming, or
    /// [`Error::NameTooLong`] if the name exceeds [`MAX_NAME_LEN`] characters.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(Error::NameTooLong {
                len,
                max: MAX_NAME_LEN,
            });
        }

        Ok(Self(name.to_string()))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PassengerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PassengerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A passenger occupying one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passenger {
    /// Passenger name.
    pub name: PassengerName,
    /// Passenger age in years.
    pub age: u32,
}

impl Passenger {
    /// Create a passenger, validating the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or too long.
    pub fn new(name: impl AsRef<str>, age: u32) -> Result<Self> {
        Ok(Self {
            name: PassengerName::new(name)?,
            age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_new() {
        let passenger = Passenger::new("Alice", 30).unwrap();
        assert_eq!(passenger.name.as_str(), "Alice");
        assert_eq!(passenger.age, 30);
    }

    #[test]
    fn test_name_is_trimmed() {
        let name = PassengerName::new("  Bob \n").unwrap();
        assert_eq!(name.as_str(), "Bob");
    }

    #[test]
    fn test_name_at_limit() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(PassengerName::new(&name).is_ok());
    }

    #[test]
    fn test_name_too_long() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        let err = PassengerName::new(&name).unwrap_err();
        assert!(matches!(
            err,
            Error::NameTooLong { len: 50, max: MAX_NAME_LEN }
        ));
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 49 two-byte characters are within the limit.
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(PassengerName::new(&name).is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert!(matches!(PassengerName::new(""), Err(Error::EmptyName)));
        assert!(matches!(PassengerName::new("   "), Err(Error::EmptyName)));
    }

    #[test]
    fn test_passenger_serialization() {
        let passenger = Passenger::new("Alice", 30).unwrap();
        let json = serde_json::to_string(&passenger).unwrap();
        assert_eq!(json, r#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn test_name_display() {
        let name = PassengerName::new("Carol").unwrap();
        assert_eq!(name.to_string(), "Carol");
    }
}
