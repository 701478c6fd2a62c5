//! Move representation.
//!
//! A move is a closed tagged variant:
//! - `Pass`: a stuck detective gives up its turn. No ticket consumed.
//! - `Ticket`: one edge travelled with one ticket.
//! - `Double`: Mr. X only; two ticket moves taken in one turn, costing a
//!   `Double` ticket on top of the tickets for both legs.
//!
//! Moves are plain values (`Copy`, `Hash`, `Ord`) so legal move sets can be
//! sorted, de-duplicated, and compared against a submitted move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::colour::Colour;
use super::graph::Location;
use super::ticket::Ticket;

/// A single leg: one ticket spent to reach one destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketMove {
    pub colour: Colour,
    pub ticket: Ticket,
    pub destination: Location,
}

impl TicketMove {
    #[must_use]
    pub const fn new(colour: Colour, ticket: Ticket, destination: Location) -> Self {
        Self {
            colour,
            ticket,
            destination,
        }
    }

    /// The same leg with its destination replaced, as shown to observers
    /// on a hidden round.
    #[must_use]
    pub const fn with_destination(self, destination: Location) -> Self {
        Self {
            destination,
            ..self
        }
    }
}

/// Two legs taken in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub colour: Colour,
    pub first: TicketMove,
    pub second: TicketMove,
}

impl DoubleMove {
    #[must_use]
    pub const fn new(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Self {
            colour,
            first,
            second,
        }
    }

    /// Build from raw leg data.
    #[must_use]
    pub const fn from_legs(
        colour: Colour,
        first_ticket: Ticket,
        first_destination: Location,
        second_ticket: Ticket,
        second_destination: Location,
    ) -> Self {
        Self::new(
            colour,
            TicketMove::new(colour, first_ticket, first_destination),
            TicketMove::new(colour, second_ticket, second_destination),
        )
    }

    #[must_use]
    pub const fn final_destination(&self) -> Location {
        self.second.destination
    }
}

/// A complete move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Pass(Colour),
    Ticket(TicketMove),
    Double(DoubleMove),
}

impl Move {
    /// Convenience constructor for a single ticket move.
    #[must_use]
    pub const fn ticket(colour: Colour, ticket: Ticket, destination: Location) -> Self {
        Move::Ticket(TicketMove::new(colour, ticket, destination))
    }

    /// Convenience constructor for a double move.
    #[must_use]
    pub const fn double(colour: Colour, first: TicketMove, second: TicketMove) -> Self {
        Move::Double(DoubleMove::new(colour, first, second))
    }

    /// The player making this move.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        match self {
            Move::Pass(colour) => *colour,
            Move::Ticket(m) => m.colour,
            Move::Double(m) => m.colour,
        }
    }

    /// Where the mover ends up, if the move goes anywhere.
    #[must_use]
    pub const fn destination(&self) -> Option<Location> {
        match self {
            Move::Pass(_) => None,
            Move::Ticket(m) => Some(m.destination),
            Move::Double(m) => Some(m.final_destination()),
        }
    }

    /// Every ticket this move consumes, `Double` first.
    pub fn tickets(&self) -> SmallVec<[Ticket; 3]> {
        match self {
            Move::Pass(_) => SmallVec::new(),
            Move::Ticket(m) => smallvec::smallvec![m.ticket],
            Move::Double(m) => smallvec::smallvec![Ticket::Double, m.first.ticket, m.second.ticket],
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass(_))
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }

    /// Check if any leg of this move uses a secret ticket.
    #[must_use]
    pub fn uses_secret(&self) -> bool {
        self.tickets().contains(&Ticket::Secret)
    }
}

impl From<TicketMove> for Move {
    fn from(m: TicketMove) -> Self {
        Move::Ticket(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass(colour) => write!(f, "{colour} passes"),
            Move::Ticket(m) => write!(f, "{} {} -> {}", m.colour, m.ticket, m.destination.0),
            Move::Double(m) => write!(
                f,
                "{} double {} -> {}, {} -> {}",
                m.colour, m.first.ticket, m.first.destination.0, m.second.ticket, m.second.destination.0
            ),
        }
    }
}
