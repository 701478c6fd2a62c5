//! Round schedule and concealment of Mr. X.
//!
//! ## RoundSchedule
//!
//! A fixed sequence of flags, one per round: `true` means Mr. X's location is
//! revealed on that round. Round `r` (0-based) is consumed by the `r`-th leg
//! Mr. X plays; a double move consumes two.
//!
//! ## Concealment
//!
//! Tracks the location observers last saw Mr. X at. It only changes on a
//! reveal-round leg, so across hidden rounds it lags the true location.

use serde::{Deserialize, Serialize};

use super::graph::Location;
use super::moves::TicketMove;

/// Per-round visibility flags. Read-only after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundSchedule {
    rounds: Vec<bool>,
}

impl RoundSchedule {
    /// Reveal rounds of the board game, 1-based.
    pub const STANDARD_REVEALS: [usize; 5] = [3, 8, 13, 18, 24];

    /// Length of the board game.
    pub const STANDARD_LENGTH: usize = 24;

    #[must_use]
    pub fn new(rounds: Vec<bool>) -> Self {
        Self { rounds }
    }

    /// The 24-round schedule of the board game.
    #[must_use]
    pub fn standard() -> Self {
        let rounds = (1..=Self::STANDARD_LENGTH)
            .map(|round| Self::STANDARD_REVEALS.contains(&round))
            .collect();
        Self { rounds }
    }

    /// Check if a round reveals Mr. X. Rounds past the end are hidden.
    #[must_use]
    pub fn is_reveal(&self, round: usize) -> bool {
        self.rounds.get(round).copied().unwrap_or(false)
    }

    /// Rounds left to play from `current_round` on.
    #[must_use]
    pub fn remaining(&self, current_round: usize) -> usize {
        self.rounds.len().saturating_sub(current_round)
    }

    /// Indices of reveal rounds, ascending.
    pub fn reveal_rounds(&self) -> impl Iterator<Item = usize> + '_ {
        self.rounds
            .iter()
            .enumerate()
            .filter_map(|(i, &reveal)| reveal.then_some(i))
    }

    /// First reveal round at or after `round`.
    #[must_use]
    pub fn next_reveal(&self, round: usize) -> Option<usize> {
        self.reveal_rounds().find(|&r| r >= round)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.rounds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

impl From<Vec<bool>> for RoundSchedule {
    fn from(rounds: Vec<bool>) -> Self {
        Self::new(rounds)
    }
}

/// Mr. X's location as last revealed to observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Concealment {
    revealed: Option<Location>,
}

impl Concealment {
    #[must_use]
    pub const fn new() -> Self {
        Self { revealed: None }
    }

    /// Last revealed location, or `Location::HIDDEN` before the first reveal.
    #[must_use]
    pub fn revealed(&self) -> Location {
        self.revealed.unwrap_or(Location::HIDDEN)
    }

    /// Check if Mr. X has been revealed at least once.
    #[must_use]
    pub const fn has_revealed(&self) -> bool {
        self.revealed.is_some()
    }

    /// The leg as observers see it, given the round it is played in. Does not
    /// update the revealed location.
    #[must_use]
    pub fn mask(&self, leg: TicketMove, reveal: bool) -> TicketMove {
        if reveal {
            leg
        } else {
            leg.with_destination(self.revealed())
        }
    }

    /// Record a leg played on a round. Returns the leg as observers see it.
    pub fn observe(&mut self, leg: TicketMove, reveal: bool) -> TicketMove {
        let visible = self.mask(leg, reveal);
        if reveal {
            self.revealed = Some(leg.destination);
        }
        visible
    }
}
