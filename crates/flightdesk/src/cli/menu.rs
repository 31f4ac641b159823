//! Interactive reservation menu.
//!
//! Reads a numbered choice and its arguments line by line, runs exactly one
//! reservation operation per choice and prints the outcome. Input and output
//! are generic so sessions can be scripted.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::error::Result;
use crate::flight::FlightNumber;
use crate::passenger::Passenger;
use crate::reservations::ReservationSystem;

/// One entry of the reservation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show free seats on a flight.
    CheckAvailability,
    /// Book the next free seat.
    BookTicket,
    /// List every flight.
    ListFlights,
    /// List the booked seats of a flight.
    BookedTickets,
    /// Show who sits in a seat.
    PassengerDetails,
    /// Cancel a seat booking.
    CancelBooking,
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Every choice, in menu order.
    pub const ALL: [Self; 7] = [
        Self::CheckAvailability,
        Self::BookTicket,
        Self::ListFlights,
        Self::BookedTickets,
        Self::PassengerDetails,
        Self::CancelBooking,
        Self::Exit,
    ];

    /// Map a menu number (1-7) to its choice.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The number shown next to this choice.
    #[must_use]
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index + 1)
    }

    /// The menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckAvailability => "Check Seat Availability",
            Self::BookTicket => "Book Ticket",
            Self::ListFlights => "Display Available Flights",
            Self::BookedTickets => "Display Booked Tickets for a Flight",
            Self::PassengerDetails => "Display Passenger Details for a Seat",
            Self::CancelBooking => "Cancel Booking",
            Self::Exit => "Exit",
        }
    }
}

/// A menu session over an input and an output stream.
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    output: W,
    line: String,
    closed: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
            closed: false,
        }
    }

    /// Run the menu until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Reservation failures are printed and the loop continues.
    pub fn run(&mut self, system: &mut ReservationSystem) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt_line("Enter your choice: ")? else {
                writeln!(self.output)?;
                writeln!(self.output, "Exiting...")?;
                break;
            };

            let Some(choice) = line.parse::<i64>().ok().and_then(MenuChoice::from_number) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            debug!(?choice, "Menu selection");
            match choice {
                MenuChoice::CheckAvailability => self.check_availability(system)?,
                MenuChoice::BookTicket => self.book_ticket(system)?,
                MenuChoice::ListFlights => self.list_flights(system)?,
                MenuChoice::BookedTickets => self.booked_tickets(system)?,
                MenuChoice::PassengerDetails => self.passenger_details(system)?,
                MenuChoice::CancelBooking => self.cancel_booking(system)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
            }

            if self.closed {
                writeln!(self.output)?;
                writeln!(self.output, "Exiting...")?;
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Flight Reservation System")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn check_availability(&mut self, system: &ReservationSystem) -> Result<()> {
        let Some(number) = self.prompt_flight_number()? else {
            return Ok(());
        };

        match system.check_availability(number) {
            Ok(available) => writeln!(self.output, "Available Seats: {available}")?,
            Err(_) => writeln!(self.output, "Flight not found!")?,
        }
        Ok(())
    }

    fn book_ticket(&mut self, system: &mut ReservationSystem) -> Result<()> {
        let Some(number) = self.prompt_flight_number()? else {
            return Ok(());
        };
        let Some(name) = self.prompt_line("Enter Passenger Name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt_value::<u32>("Enter Passenger Age: ")? else {
            return Ok(());
        };

        let passenger = match Passenger::new(&name, age) {
            Ok(passenger) => passenger,
            Err(err) => {
                writeln!(self.output, "Booking failed: {err}.")?;
                return Ok(());
            }
        };

        match system.book_ticket(number, passenger) {
            Ok(seat) => writeln!(
                self.output,
                "Ticket booked successfully! Seat number: {seat}"
            )?,
            Err(err) => {
                debug!(%err, "Booking rejected");
                writeln!(
                    self.output,
                    "Booking failed. Either the flight is not found or no available seats."
                )?;
            }
        }
        Ok(())
    }

    fn list_flights(&mut self, system: &ReservationSystem) -> Result<()> {
        writeln!(self.output, "Available Flights:")?;
        for flight in system.flights() {
            writeln!(self.output, "{}", flight.summary())?;
        }
        Ok(())
    }

    fn booked_tickets(&mut self, system: &ReservationSystem) -> Result<()> {
        let Some(number) = self.prompt_flight_number()? else {
            return Ok(());
        };

        match system.booked_tickets(number) {
            Ok(booked) => {
                writeln!(self.output, "Booked Tickets for Flight Number {number}:")?;
                for (seat, passenger) in booked {
                    writeln!(
                        self.output,
                        "Seat {seat}: Passenger Name: {}, Age: {}",
                        passenger.name, passenger.age
                    )?;
                }
            }
            Err(_) => writeln!(self.output, "Flight not found!")?,
        }
        Ok(())
    }

    fn passenger_details(&mut self, system: &ReservationSystem) -> Result<()> {
        let Some((number, seat)) = self.prompt_flight_and_seat(system)? else {
            return Ok(());
        };

        match system.passenger_details(number, seat) {
            Ok(passenger) => {
                writeln!(
                    self.output,
                    "Passenger Details for Seat {seat} on Flight Number {number}:"
                )?;
                writeln!(self.output, "Passenger Name: {}", passenger.name)?;
                writeln!(self.output, "Passenger Age: {}", passenger.age)?;
            }
            Err(err) if err.is_seat_error() => {
                writeln!(self.output, "Invalid seat or seat not booked!")?;
            }
            Err(_) => writeln!(self.output, "Flight not found!")?,
        }
        Ok(())
    }

    fn cancel_booking(&mut self, system: &mut ReservationSystem) -> Result<()> {
        let Some((number, seat)) = self.prompt_flight_and_seat(system)? else {
            return Ok(());
        };

        match system.cancel_booking(number, seat) {
            Ok(_) => writeln!(self.output, "Booking canceled successfully!")?,
            Err(err) => {
                debug!(%err, "Cancellation rejected");
                writeln!(
                    self.output,
                    "Cancellation failed. Either the flight is not found, invalid seat, or seat not booked."
                )?;
            }
        }
        Ok(())
    }

    fn prompt_flight_number(&mut self) -> Result<Option<FlightNumber>> {
        self.prompt_value("Enter Flight Number: ")
    }

    /// Ask for a flight and a seat. The seat prompt shows the flight's real
    /// seat range when the flight exists.
    fn prompt_flight_and_seat(
        &mut self,
        system: &ReservationSystem,
    ) -> Result<Option<(FlightNumber, usize)>> {
        let Some(number) = self.prompt_flight_number()? else {
            return Ok(None);
        };

        let prompt = match system.flight(number) {
            Ok(flight) => format!("Enter Seat Index (1-{}): ", flight.total_seats()),
            Err(_) => "Enter Seat Index: ".to_string(),
        };
        let Some(seat) = self.prompt_value::<i64>(&prompt)? else {
            return Ok(None);
        };

        // Negative input can never name a seat; 0 fails the same bounds check.
        let seat = usize::try_from(seat).unwrap_or(0);
        Ok(Some((number, seat)))
    }

    /// Prompt for a value, printing a notice when it does not parse.
    fn prompt_value<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        let Some(line) = self.prompt_line(prompt)? else {
            return Ok(None);
        };

        if let Ok(value) = line.parse() {
            Ok(Some(value))
        } else {
            writeln!(self.output, "Invalid input. Please enter a number.")?;
            Ok(None)
        }
    }

    /// Prompt and read one trimmed line. `None` once the input is exhausted.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(self.line.trim().to_string()))
    }
}
