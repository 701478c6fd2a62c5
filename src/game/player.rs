//! Move selection boundary.
//!
//! When a player is to move, the game calls `Player::make_move` with a view,
//! the player's true location, the legal move set, and a one-shot
//! `MoveReply`. The player answers by calling `MoveReply::send` exactly
//! once. Because `send` consumes the reply, a second answer cannot be
//! expressed.
//!
//! A player that returns without sending leaves the request outstanding.
//! The embedding application then supplies the move later through
//! `ScotlandYardGame::accept` (UI, network, or deadline-enforcing layers
//! work this way).

use std::cell::Cell;
use std::rc::Rc;

use crate::core::{GameView, Location, Move};

// =============================================================================
// Reply channel
// =============================================================================

/// Single-shot answer to a move request.
#[derive(Debug)]
pub struct MoveReply {
    slot: Rc<Cell<Option<Move>>>,
}

impl MoveReply {
    /// Create a reply and the receiving end the game keeps.
    pub(crate) fn channel() -> (Self, ReplyReceiver) {
        let slot = Rc::new(Cell::new(None));
        (
            Self {
                slot: Rc::clone(&slot),
            },
            ReplyReceiver { slot },
        )
    }

    /// Answer the request.
    pub fn send(self, mv: Move) {
        self.slot.set(Some(mv));
    }
}

/// Game-side end of a `MoveReply`.
#[derive(Debug)]
pub(crate) struct ReplyReceiver {
    slot: Rc<Cell<Option<Move>>>,
}

impl ReplyReceiver {
    pub(crate) fn take(&self) -> Option<Move> {
        self.slot.take()
    }
}

// =============================================================================
// Player contract
// =============================================================================

/// A move-selecting agent for one colour.
pub trait Player {
    /// Choose one of `moves` and pass it to `reply`.
    ///
    /// `location` is the player's true location, which for Mr. X may differ
    /// from what `view` reports.
    fn make_move(&mut self, view: &GameView<'_>, location: Location, moves: &[Move], reply: MoveReply);
}

/// Closures that pick a move synchronously are players.
impl<F> Player for F
where
    F: FnMut(&GameView<'_>, Location, &[Move]) -> Move,
{
    fn make_move(&mut self, view: &GameView<'_>, location: Location, moves: &[Move], reply: MoveReply) {
        reply.send(self(view, location, moves));
    }
}

/// Never answers. Every request stays outstanding until the embedding
/// application calls `ScotlandYardGame::accept`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeferredPlayer;

impl Player for DeferredPlayer {
    fn make_move(&mut self, _view: &GameView<'_>, _location: Location, _moves: &[Move], _reply: MoveReply) {}
}
