//! Notifications produced by the state machine.
//!
//! `GameState::apply` emits these in order as it mutates state. The driver
//! forwards each one to registered spectators. Moves carried here are the
//! observer-visible versions: Mr. X's hidden-round destinations are masked.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::moves::Move;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move (or a leg of a double move) was played.
    MoveMade(Move),

    /// Mr. X played a leg and the round counter advanced to this value.
    RoundStarted(usize),

    /// The last detective moved and play returns to Mr. X.
    RotationComplete,

    /// The game finished with these winners.
    GameOver(BTreeSet<Colour>),
}

impl GameEvent {
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, GameEvent::MoveMade(_))
    }

    #[must_use]
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            GameEvent::MoveMade(m) => Some(m),
            _ => None,
        }
    }
}
