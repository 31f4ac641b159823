//! Flight records.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::passenger::Passenger;
use crate::seats::SeatInventory;

/// Flight numbers are plain integers and act as the index key.
pub type FlightNumber = u32;

/// A flight and the seats it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    number: FlightNumber,
    seats: SeatInventory,
}

/// A point-in-time view of a flight's seat counts, used for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlightSummary {
    /// The flight number.
    pub number: FlightNumber,
    /// Seats on the flight.
    pub total_seats: usize,
    /// Seats not yet booked.
    pub available_seats: usize,
}

impl Flight {
    /// Create a flight with `total_seats` empty seats.
    #[must_use]
    pub fn new(number: FlightNumber, total_seats: usize) -> Self {
        Self {
            number,
            seats: SeatInventory::new(total_seats),
        }
    }

    /// The flight number.
    #[must_use]
    pub fn number(&self) -> FlightNumber {
        self.number
    }

    /// Seats on the flight. Fixed at creation.
    #[must_use]
    pub fn total_seats(&self) -> usize {
        self.seats.total()
    }

    /// Seats not yet booked.
    #[must_use]
    pub fn available_seats(&self) -> usize {
        self.seats.available()
    }

    /// Seats currently booked.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.seats.occupied_count()
    }

    /// Read-only access to the seat inventory.
    #[must_use]
    pub fn seats(&self) -> &SeatInventory {
        &self.seats
    }

    /// Book the lowest free seat for `passenger`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSeatsAvailable`] if the flight is full.
    pub fn book(&mut self, passenger: Passenger) -> Result<usize> {
        if self.seats.is_full() {
            return Err(Error::NoSeatsAvailable {
                flight: self.number,
            });
        }

        let seat = self.seats.assign(passenger).map_err(|err| match err {
            Error::SeatFull => Error::NoSeatsAvailable {
                flight: self.number,
            },
            other => other,
        })?;

        debug!(flight = self.number, seat, "Seat booked");
        Ok(seat)
    }

    /// Cancel the booking on `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeatIndex`] or [`Error::SeatNotBooked`].
    pub fn cancel(&mut self, seat: usize) -> Result<Passenger> {
        let passenger = self.seats.release(seat)?;
        debug!(flight = self.number, seat, "Booking cancelled");
        Ok(passenger)
    }

    /// The passenger booked on `seat`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeatIndex`] or [`Error::SeatNotBooked`].
    pub fn passenger(&self, seat: usize) -> Result<&Passenger> {
        self.seats.occupant_at(seat)
    }

    /// Booked seats in ascending order.
    pub fn booked(&self) -> impl Iterator<Item = (usize, &Passenger)> + '_ {
        self.seats.occupied()
    }

    /// Snapshot of the seat counts.
    #[must_use]
    pub fn summary(&self) -> FlightSummary {
        FlightSummary {
            number: self.number,
            total_seats: self.total_seats(),
            available_seats: self.available_seats(),
        }
    }
}

impl std::fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Flight Number: {}, Total Seats: {}, Available Seats: {}",
            self.number, self.total_seats, self.available_seats
        )
    }
}
