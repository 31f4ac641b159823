//! Error types for flightdesk.
//!
//! This module defines all error types used throughout the flightdesk crate.
//! Reservation errors are recoverable outcomes that the caller turns into
//! user-facing text; none of them is fatal to the process.

use thiserror::Error;

use crate::flight::FlightNumber;

/// The main error type for flightdesk operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Reservation Errors ===
    /// No flight with the given number is registered.
    #[error("flight {flight} not found")]
    FlightNotFound {
        /// The flight number that was looked up.
        flight: FlightNumber,
    },

    /// The flight has no free seat left.
    #[error("no seats available on flight {flight}")]
    NoSeatsAvailable {
        /// The flight that is fully booked.
        flight: FlightNumber,
    },

    /// A seat index outside `1..=total`.
    #[error("invalid seat index {seat} (valid range is 1-{total})")]
    InvalidSeatIndex {
        /// The seat index that was requested.
        seat: usize,
        /// Number of seats on the flight.
        total: usize,
    },

    /// The seat exists but nobody is booked on it.
    #[error("seat {seat} is not booked")]
    SeatNotBooked {
        /// The seat index that was requested.
        seat: usize,
    },

    /// Every slot of a seat inventory is occupied.
    #[error("seat inventory is full")]
    SeatFull,

    /// A passenger name exceeds the allowed length.
    #[error("passenger name is {len} characters long (maximum is {max})")]
    NameTooLong {
        /// Length of the rejected name, in characters.
        len: usize,
        /// Maximum allowed length, in characters.
        max: usize,
    },

    /// A passenger name is empty or only whitespace.
    #[error("passenger name must not be empty")]
    EmptyName,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightdesk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the flight does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FlightNotFound { .. })
    }

    /// Check if this error is about a seat rather than the flight or input.
    #[must_use]
    pub fn is_seat_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSeatIndex { .. } | Self::SeatNotBooked { .. } | Self::SeatFull
        )
    }
}
