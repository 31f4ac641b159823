//! Per-flight seat inventory.
//!
//! A fixed-size row of slots, each either empty or holding one
//! [`Passenger`]. Seat numbers are 1-based at this module's boundary and
//! 0-based inside it.

use crate::error::{Error, Result};
use crate::passenger::Passenger;

/// Largest seat count a single flight may have.
pub const MAX_SEATS: usize = 65_535;

/// Fixed-size seat slots for a single flight.
///
/// Invariant: `available == slots.len() - occupied slots`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatInventory {
    slots: Vec<Option<Passenger>>,
    available: usize,
}

impl SeatInventory {
    /// Create an inventory of `total` empty seats.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            slots: vec![None; total],
            available: total,
        }
    }

    /// Total number of seats.
    #[must_use]
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// Number of empty seats.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    /// Number of occupied seats.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.total() - self.available
    }

    /// Check whether every seat is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available == 0
    }

    /// Place a passenger in the lowest-numbered empty seat.
    ///
    /// Returns the 1-based seat number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeatFull`] if no seat is empty. The inventory is left
    /// unchanged in that case.
    pub fn assign(&mut self, passenger: Passenger) -> Result<usize> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(Error::SeatFull)?;

        self.slots[index] = Some(passenger);
        self.available -= 1;
        Ok(index + 1)
    }

    /// Empty a seat, handing back the passenger who held it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeatIndex`] if `seat` is outside `1..=total`,
    /// otherwise [`Error::SeatNotBooked`] if the seat is already empty.
    pub fn release(&mut self, seat: usize) -> Result<Passenger> {
        let index = self.slot_index(seat)?;
        let passenger = self.slots[index]
            .take()
            .ok_or(Error::SeatNotBooked { seat })?;

        self.available += 1;
        Ok(passenger)
    }

    /// Look up the passenger in a seat.
    ///
    /// # Errors
    ///
    /// Same checks, in the same order, as [`SeatInventory::release`].
    pub fn occupant_at(&self, seat: usize) -> Result<&Passenger> {
        let index = self.slot_index(seat)?;
        self.slots[index]
            .as_ref()
            .ok_or(Error::SeatNotBooked { seat })
    }

    /// Iterate over occupied seats in ascending seat order.
    ///
    /// Each call starts a fresh iteration.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Passenger)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|p| (index + 1, p)))
    }

    /// Bounds check shared by every seat-addressed operation.
    fn slot_index(&self, seat: usize) -> Result<usize> {
        if seat == 0 || seat > self.total() {
            return Err(Error::InvalidSeatIndex {
                seat,
                total: self.total(),
            });
        }
        Ok(seat - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(name: &str) -> Passenger {
        Passenger::new(name, 30).unwrap()
    }

    #[test]
    fn test_new_inventory_is_empty() {
        let seats = SeatInventory::new(3);
        assert_eq!(seats.total(), 3);
        assert_eq!(seats.available(), 3);
        assert_eq!(seats.occupied_count(), 0);
        assert!(!seats.is_full());
        assert_eq!(seats.occupied().count(), 0);
    }

    #[test]
    fn test_assign_fills_lowest_free_slot() {
        let mut seats = SeatInventory::new(3);
        assert_eq!(seats.assign(passenger("A")).unwrap(), 1);
        assert_eq!(seats.assign(passenger("B")).unwrap(), 2);

        seats.release(1).unwrap();
        assert_eq!(seats.assign(passenger("C")).unwrap(), 1);
        assert_eq!(seats.assign(passenger("D")).unwrap(), 3);
        assert!(seats.is_full());
    }

    #[test]
    fn test_assign_when_full() {
        let mut seats = SeatInventory::new(1);
        seats.assign(passenger("A")).unwrap();

        let err = seats.assign(passenger("B")).unwrap_err();
        assert!(matches!(err, Error::SeatFull));
        assert_eq!(seats.available(), 0);
        assert_eq!(seats.occupant_at(1).unwrap().name.as_str(), "A");
    }

    #[test]
    fn test_zero_seat_inventory() {
        let mut seats = SeatInventory::new(0);
        assert!(seats.is_full());
        assert!(matches!(seats.assign(passenger("A")), Err(Error::SeatFull)));
        assert!(matches!(
            seats.occupant_at(1),
            Err(Error::InvalidSeatIndex { seat: 1, total: 0 })
        ));
    }

    #[test]
    fn test_release_returns_passenger() {
        let mut seats = SeatInventory::new(2);
        seats.assign(passenger("A")).unwrap();

        let released = seats.release(1).unwrap();
        assert_eq!(released.name.as_str(), "A");
        assert_eq!(seats.available(), 2);
    }

    #[test]
    fn test_release_out_of_range() {
        let mut seats = SeatInventory::new(2);
        assert!(matches!(
            seats.release(0),
            Err(Error::InvalidSeatIndex { seat: 0, total: 2 })
        ));
        assert!(matches!(
            seats.release(3),
            Err(Error::InvalidSeatIndex { seat: 3, total: 2 })
        ));
        assert_eq!(seats.available(), 2);
    }

    #[test]
    fn test_release_empty_seat() {
        let mut seats = SeatInventory::new(2);
        assert!(matches!(
            seats.release(2),
            Err(Error::SeatNotBooked { seat: 2 })
        ));
        assert_eq!(seats.available(), 2);
    }

    #[test]
    fn test_bounds_checked_before_occupancy() {
        // An out-of-range seat is never reported as "not booked".
        let seats = SeatInventory::new(2);
        assert!(matches!(
            seats.occupant_at(5),
            Err(Error::InvalidSeatIndex { .. })
        ));
    }

    #[test]
    fn test_occupied_is_ascending_and_restartable() {
        let mut seats = SeatInventory::new(4);
        for name in ["A", "B", "C", "D"] {
            seats.assign(passenger(name)).unwrap();
        }
        seats.release(2).unwrap();

        let first: Vec<usize> = seats.occupied().map(|(seat, _)| seat).collect();
        let second: Vec<usize> = seats.occupied().map(|(seat, _)| seat).collect();
        assert_eq!(first, vec![1, 3, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_available_plus_occupied_is_total() {
        let mut seats = SeatInventory::new(5);
        for round in 0..20 {
            if round % 3 == 0 {
                let _ = seats.release(round % 5 + 1);
            } else {
                let _ = seats.assign(passenger("P"));
            }
            assert_eq!(seats.available() + seats.occupied().count(), seats.total());
        }
    }
}
