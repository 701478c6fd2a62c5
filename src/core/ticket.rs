//! Tickets and the per-player ticket ledger.
//!
//! ## Ticket kinds
//!
//! Each edge of the transport graph is typed by a `Transport`. Travelling an
//! edge costs one ticket of the matching kind (`Ticket::from_transport`), or a
//! `Secret` ticket which substitutes for any transport. `Double` tickets let
//! Mr. X take two moves in one turn.
//!
//! ## Ledger
//!
//! `TicketLedger` is a fixed-size multiset indexed by `Ticket`. Counts never
//! go negative: `remove` refuses to take a ticket the holder does not have.

use serde::{Deserialize, Serialize};

/// Mode of transport labelling a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

/// Move credit kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Secret,
    Double,
}

impl Ticket {
    /// Every ticket kind, in ledger order.
    pub const ALL: [Ticket; 5] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// The ticket required to travel an edge of the given transport.
    ///
    /// Ferries carry no ticket of their own; only a secret ticket can pay
    /// for them.
    #[must_use]
    pub const fn from_transport(transport: Transport) -> Ticket {
        match transport {
            Transport::Taxi => Ticket::Taxi,
            Transport::Bus => Ticket::Bus,
            Transport::Underground => Ticket::Underground,
            Transport::Ferry => Ticket::Secret,
        }
    }

    /// Tickets detectives may never hold.
    #[must_use]
    pub const fn is_mr_x_only(self) -> bool {
        matches!(self, Ticket::Secret | Ticket::Double)
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "Taxi",
            Ticket::Bus => "Bus",
            Ticket::Underground => "Underground",
            Ticket::Secret => "Secret",
            Ticket::Double => "Double",
        };
        f.write_str(name)
    }
}

/// Per-player ticket counts.
///
/// ```
/// use scotland_yard::core::{Ticket, TicketLedger};
///
/// let mut ledger = TicketLedger::from_counts([(Ticket::Taxi, 2), (Ticket::Bus, 1)]);
/// assert!(ledger.remove(Ticket::Taxi));
/// assert_eq!(ledger.count(Ticket::Taxi), 1);
/// assert!(!ledger.remove(Ticket::Secret));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketLedger {
    counts: [u32; 5],
}

impl TicketLedger {
    /// An empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 5] }
    }

    /// Build a ledger from `(ticket, count)` pairs. Later pairs overwrite
    /// earlier ones for the same ticket.
    pub fn from_counts(counts: impl IntoIterator<Item = (Ticket, u32)>) -> Self {
        let mut ledger = Self::new();
        for (ticket, count) in counts {
            ledger.counts[ticket.slot()] = count;
        }
        ledger
    }

    /// Number of tickets of a kind.
    #[must_use]
    pub const fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.slot()]
    }

    /// Check if at least one ticket of a kind is held.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Add one ticket.
    pub fn add(&mut self, ticket: Ticket) {
        self.counts[ticket.slot()] += 1;
    }

    /// Remove one ticket. Returns `false` (and leaves the ledger untouched)
    /// if none was held.
    pub fn remove(&mut self, ticket: Ticket) -> bool {
        let slot = &mut self.counts[ticket.slot()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Total tickets across all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over `(ticket, count)` pairs in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.into_iter().map(|t| (t, self.count(t)))
    }
}
