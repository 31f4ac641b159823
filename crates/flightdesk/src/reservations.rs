//! Reservation operations over the flight index.
//!
//! [`ReservationSystem`] owns the one [`FlightIndex`] of a process and
//! exposes the operations the CLI calls. Every operation either applies its
//! whole effect or returns an error without changing any state.
//!
//! The type is not synchronized. Sharing it between threads requires a
//! single lock around the whole system, because an index mutation and the
//! matching seat-count update must happen together.

use tracing::{debug, info};

use crate::config::{Config, FlightSeed};
use crate::error::{Error, Result};
use crate::flight::{Flight, FlightNumber, FlightSummary};
use crate::index::FlightIndex;
use crate::passenger::Passenger;

/// The reservation registry.
#[derive(Debug, Clone, Default)]
pub struct ReservationSystem {
    index: FlightIndex,
}

impl ReservationSystem {
    /// Create a registry with no flights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the given flights, in order.
    #[must_use]
    pub fn with_fleet<'a>(seeds: impl IntoIterator<Item = &'a FlightSeed>) -> Self {
        let mut system = Self::new();
        for seed in seeds {
            system.insert_flight(seed.number, seed.seats);
        }
        info!(
            flights = system.index.len(),
            depth = system.index.depth(),
            "Flight index seeded"
        );
        system
    }

    /// Create a registry seeded from the configured fleet.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_fleet(&config.fleet.flights)
    }

    /// Register a flight. Does nothing if the number is already taken.
    ///
    /// Returns `true` if the flight was added.
    pub fn insert_flight(&mut self, number: FlightNumber, total_seats: usize) -> bool {
        self.index.insert(number, total_seats)
    }

    /// Look up a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no such flight exists.
    pub fn flight(&self, number: FlightNumber) -> Result<&Flight> {
        self.index
            .find(number)
            .ok_or(Error::FlightNotFound { flight: number })
    }

    fn flight_mut(&mut self, number: FlightNumber) -> Result<&mut Flight> {
        self.index
            .find_mut(number)
            .ok_or(Error::FlightNotFound { flight: number })
    }

    /// Number of free seats on a flight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no such flight exists.
    pub fn check_availability(&self, number: FlightNumber) -> Result<usize> {
        self.flight(number).map(Flight::available_seats)
    }

    /// Book the lowest free seat on a flight.
    ///
    /// Returns the booked seat number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] or [`Error::NoSeatsAvailable`].
    pub fn book_ticket(&mut self, number: FlightNumber, passenger: Passenger) -> Result<usize> {
        let flight = self.flight_mut(number)?;
        flight.book(passenger)
    }

    /// Cancel the booking on a seat, returning the passenger who held it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`], [`Error::InvalidSeatIndex`] or
    /// [`Error::SeatNotBooked`].
    pub fn cancel_booking(&mut self, number: FlightNumber, seat: usize) -> Result<Passenger> {
        let flight = self.flight_mut(number)?;
        flight.cancel(seat)
    }

    /// The passenger booked on a seat.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`], [`Error::InvalidSeatIndex`] or
    /// [`Error::SeatNotBooked`].
    pub fn passenger_details(&self, number: FlightNumber, seat: usize) -> Result<&Passenger> {
        self.flight(number)?.passenger(seat)
    }

    /// Booked seats of a flight in ascending seat order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlightNotFound`] if no such flight exists.
    pub fn booked_tickets(
        &self,
        number: FlightNumber,
    ) -> Result<impl Iterator<Item = (usize, &Passenger)> + '_> {
        let flight = self.flight(number)?;
        debug!(flight = number, booked = flight.occupied_count(), "Listing bookings");
        Ok(flight.booked())
    }

    /// All flights in ascending flight-number order.
    pub fn flights(&self) -> impl Iterator<Item = &Flight> + '_ {
        self.index.in_order()
    }

    /// Seat-count summaries for every flight, in ascending order.
    #[must_use]
    pub fn summaries(&self) -> Vec<FlightSummary> {
        self.flights().map(Flight::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ReservationSystem {
        ReservationSystem::from_config(&Config::default())
    }

    fn passenger(name: &str, age: u32) -> Passenger {
        Passenger::new(name, age).unwrap()
    }

    fn assert_seat_invariant(system: &ReservationSystem) {
        for flight in system.flights() {
            assert_eq!(
                flight.available_seats() + flight.booked().count(),
                flight.total_seats(),
                "seat counts out of sync on flight {}",
                flight.number()
            );
        }
    }

    #[test]
    fn test_seeded_scenario() {
        let mut system = seeded();

        assert_eq!(system.check_availability(103).unwrap(), 40);
        assert_eq!(system.book_ticket(103, passenger("Bob", 22)).unwrap(), 1);
        assert_eq!(system.check_availability(103).unwrap(), 39);

        let err = system.book_ticket(999, passenger("X", 1)).unwrap_err();
        assert!(matches!(err, Error::FlightNotFound { flight: 999 }));
        assert_seat_invariant(&system);
    }

    #[test]
    fn test_check_availability_unknown_flight() {
        let system = seeded();
        assert!(system.check_availability(42).unwrap_err().is_not_found());
    }

    #[test]
    fn test_fill_flight_then_overbook() {
        let mut system = seeded();
        for seat in 1..=40 {
            assert_eq!(system.book_ticket(103, passenger("P", 20)).unwrap(), seat);
        }

        let err = system.book_ticket(103, passenger("Late", 50)).unwrap_err();
        assert!(matches!(err, Error::NoSeatsAvailable { flight: 103 }));
        assert_eq!(system.check_availability(103).unwrap(), 0);
        assert_seat_invariant(&system);
    }

    #[test]
    fn test_book_details_cancel_round_trip() {
        let mut system = seeded();
        let seat = system.book_ticket(101, passenger("Alice", 30)).unwrap();

        let details = system.passenger_details(101, seat).unwrap();
        assert_eq!(details.name.as_str(), "Alice");
        assert_eq!(details.age, 30);

        let cancelled = system.cancel_booking(101, seat).unwrap();
        assert_eq!(cancelled.name.as_str(), "Alice");

        let err = system.passenger_details(101, seat).unwrap_err();
        assert!(matches!(err, Error::SeatNotBooked { .. }));
        assert_eq!(system.check_availability(101).unwrap(), 50);
    }

    #[test]
    fn test_cancel_failures_leave_counts_unchanged() {
        let mut system = seeded();
        system.book_ticket(102, passenger("Ann", 40)).unwrap();

        assert!(matches!(
            system.cancel_booking(102, 2),
            Err(Error::SeatNotBooked { seat: 2 })
        ));
        assert!(matches!(
            system.cancel_booking(102, 0),
            Err(Error::InvalidSeatIndex { seat: 0, total: 60 })
        ));
        assert!(matches!(
            system.cancel_booking(102, 61),
            Err(Error::InvalidSeatIndex { seat: 61, total: 60 })
        ));
        assert!(system.cancel_booking(999, 1).unwrap_err().is_not_found());

        assert_eq!(system.check_availability(102).unwrap(), 59);
        assert_seat_invariant(&system);
    }

    #[test]
    fn test_reinsert_keeps_bookings() {
        let mut system = seeded();
        let seat = system.book_ticket(104, passenger("Dee", 33)).unwrap();

        assert!(!system.insert_flight(104, 5));

        let flight = system.flight(104).unwrap();
        assert_eq!(flight.total_seats(), 70);
        assert_eq!(flight.available_seats(), 69);
        assert_eq!(system.passenger_details(104, seat).unwrap().name.as_str(), "Dee");
    }

    #[test]
    fn test_insert_new_flight() {
        let mut system = seeded();
        assert!(system.insert_flight(100, 2));
        assert_eq!(system.check_availability(100).unwrap(), 2);
        assert_eq!(system.flights().next().unwrap().number(), 100);
    }

    #[test]
    fn test_flights_listed_in_order() {
        let system = ReservationSystem::with_fleet(&[
            FlightSeed { number: 104, seats: 1 },
            FlightSeed { number: 101, seats: 1 },
            FlightSeed { number: 105, seats: 1 },
            FlightSeed { number: 103, seats: 1 },
            FlightSeed { number: 102, seats: 1 },
        ]);

        let numbers: Vec<FlightNumber> = system.flights().map(Flight::number).collect();
        assert_eq!(numbers, vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn test_booked_tickets() {
        let mut system = seeded();
        for name in ["A", "B", "C"] {
            system.book_ticket(105, passenger(name, 10)).unwrap();
        }
        system.cancel_booking(105, 2).unwrap();

        let booked: Vec<(usize, String)> = system
            .booked_tickets(105)
            .unwrap()
            .map(|(seat, p)| (seat, p.name.to_string()))
            .collect();
        assert_eq!(booked, vec![(1, "A".to_string()), (3, "C".to_string())]);

        assert!(system.booked_tickets(1).is_err());
    }

    #[test]
    fn test_summaries() {
        let mut system = seeded();
        system.book_ticket(101, passenger("A", 1)).unwrap();

        let summaries = system.summaries();
        assert_eq!(summaries.len(), 5);
        assert_eq!(
            summaries[0],
            FlightSummary {
                number: 101,
                total_seats: 50,
                available_seats: 49
            }
        );
    }

    #[test]
    fn test_mixed_operations_keep_invariant() {
        let mut system = seeded();
        for round in 0..300_u32 {
            let number = 101 + round % 5;
            match round % 4 {
                0 | 1 => {
                    let _ = system.book_ticket(number, passenger("P", round));
                }
                2 => {
                    let seat = (round as usize * 7) % 80;
                    let _ = system.cancel_booking(number, seat);
                }
                _ => {
                    system.insert_flight(number, 1);
                }
            }
            assert_seat_invariant(&system);
        }
    }
}
