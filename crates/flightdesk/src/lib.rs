//! `flightdesk` - An in-memory flight reservation registry
//!
//! This library keeps an ordered index of flights, each owning a fixed row of
//! seats, and provides booking, cancellation and lookup of passengers. It
//! performs no I/O of its own; the `fdesk` binary drives it from a menu.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod index;
pub mod logging;
pub mod passenger;
pub mod reservations;
pub mod seats;

pub use config::{Config, FlightSeed};
pub use error::{Error, Result};
pub use flight::{Flight, FlightNumber, FlightSummary};
pub use index::FlightIndex;
pub use logging::init_logging;
pub use passenger::{Passenger, PassengerName, MAX_NAME_LEN};
pub use reservations::ReservationSystem;
pub use seats::{SeatInventory, MAX_SEATS};
