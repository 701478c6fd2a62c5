//! Legal move generation.
//!
//! For every edge leaving a location:
//! - a normal-ticket move is legal if the mover can afford the edge's ticket
//!   and no other detective stands on the destination (Mr. X never blocks);
//! - a secret-ticket move to the same destination is legal if the mover can
//!   afford a secret ticket.
//!
//! A detective with nothing else to do must `Pass`. Mr. X additionally gets
//! every affordable two-leg combination (normal/secret for each leg) when he
//! holds a double ticket and at least two rounds remain.
//!
//! Affordability is tracked with a `TicketReservation`: tickets a candidate
//! move has already committed are reserved, so a later leg only sees the
//! surplus. Occupancy always uses true locations.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{Colour, DoubleMove, GameState, Location, Move, Ticket, TicketLedger, TicketMove};

/// Tickets committed by a candidate move that is still being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketReservation<'a> {
    ledger: &'a TicketLedger,
    reserved: [u32; 5],
}

impl<'a> TicketReservation<'a> {
    #[must_use]
    pub fn new(ledger: &'a TicketLedger) -> Self {
        Self {
            ledger,
            reserved: [0; 5],
        }
    }

    /// Check if one more ticket of a kind is available beyond those reserved.
    #[must_use]
    pub fn can_afford(&self, ticket: Ticket) -> bool {
        self.ledger.count(ticket) > self.reserved[ticket as usize]
    }

    /// Reserve a ticket if available. Returns the extended reservation.
    #[must_use]
    pub fn reserve(mut self, ticket: Ticket) -> Option<Self> {
        if !self.can_afford(ticket) {
            return None;
        }
        self.reserved[ticket as usize] += 1;
        Some(self)
    }

    #[must_use]
    pub fn reserved(&self, ticket: Ticket) -> u32 {
        self.reserved[ticket as usize]
    }
}

/// Check if `colour` may end a leg on `destination`: no detective other
/// than the mover is there.
#[must_use]
pub fn location_free(state: &GameState, colour: Colour, destination: Location) -> bool {
    state
        .detectives()
        .all(|d| d.colour() == colour || d.location() != destination)
}

/// Ticket moves available from `location` under a reservation, paired with
/// the reservation that remains after taking them.
fn single_moves<'a>(
    state: &GameState,
    colour: Colour,
    location: Location,
    reservation: TicketReservation<'a>,
) -> Vec<(TicketMove, TicketReservation<'a>)> {
    let mut out = Vec::new();
    for edge in state.graph().edges_from(location) {
        if !location_free(state, colour, edge.destination) {
            continue;
        }
        let normal = Ticket::from_transport(edge.transport);
        for ticket in [normal, Ticket::Secret] {
            if let Some(remaining) = reservation.reserve(ticket) {
                out.push((TicketMove::new(colour, ticket, edge.destination), remaining));
            }
            if normal == Ticket::Secret {
                // Ferry edges only take secret tickets; don't emit twice.
                break;
            }
        }
    }
    out
}

/// Every legal move for `colour` standing at `location`, sorted and free
/// of duplicates.
#[must_use]
pub fn legal_moves(state: &GameState, colour: Colour, location: Location) -> Vec<Move> {
    let Some(player) = state.player(colour) else {
        return Vec::new();
    };
    let reservation = TicketReservation::new(player.tickets());

    let mut moves: FxHashSet<Move> = single_moves(state, colour, location, reservation)
        .into_iter()
        .map(|(leg, _)| Move::Ticket(leg))
        .collect();

    if colour.is_detective() {
        if moves.is_empty() {
            moves.insert(Move::Pass(colour));
        }
    } else if state.rounds().remaining(state.current_round()) >= 2 {
        if let Some(after_double) = reservation.reserve(Ticket::Double) {
            for (first, after_first) in single_moves(state, colour, location, after_double) {
                for (second, _) in single_moves(state, colour, first.destination, after_first) {
                    moves.insert(Move::Double(DoubleMove::new(colour, first, second)));
                }
            }
        }
    }

    let mut moves: Vec<Move> = moves.into_iter().collect();
    moves.sort_unstable();
    trace!(colour = %colour, location = location.0, moves = moves.len(), "generated legal moves");
    moves
}
