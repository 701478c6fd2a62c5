//! Observers of a running game.
//!
//! Spectators are shared handles (`Rc<RefCell<dyn Spectator>>`) so the
//! application can keep its own reference while the game notifies it.
//! Registration is a set keyed by handle identity, not by value.
//!
//! Notifications run synchronously, in registration order. The registry is
//! borrowed for the whole pass, so it cannot change mid-notification.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::{Colour, GameError, GameEvent, GameView, Move, Result};

/// Receives game notifications. All methods default to no-ops.
///
/// Delivery is synchronous, but only to spectators that can be borrowed
/// mutably at that moment. If the application holds a borrow of a
/// spectator's `RefCell` while the game is notifying, that spectator misses
/// the event: it is skipped with a `warn!` and never redelivered. Release
/// borrows before calling into the game.
pub trait Spectator {
    fn on_move_made(&mut self, _view: &GameView<'_>, _mv: &Move) {}

    fn on_round_started(&mut self, _view: &GameView<'_>, _round: usize) {}

    /// Every detective has moved and play returns to Mr. X.
    fn on_rotation_complete(&mut self, _view: &GameView<'_>) {}

    fn on_game_over(&mut self, _view: &GameView<'_>, _winners: &BTreeSet<Colour>) {}
}

/// Shared spectator handle.
pub type SpectatorHandle = Rc<RefCell<dyn Spectator>>;

fn same_spectator(a: &SpectatorHandle, b: &SpectatorHandle) -> bool {
    // Compare data pointers only; vtable pointers may differ per codegen unit.
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// Registered spectators in registration order.
#[derive(Clone, Default)]
pub struct SpectatorRegistry {
    spectators: Vec<SpectatorHandle>,
}

impl SpectatorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spectator: SpectatorHandle) -> Result<()> {
        if self.contains(&spectator) {
            return Err(GameError::DuplicateSpectator);
        }
        self.spectators.push(spectator);
        debug!(count = self.spectators.len(), "spectator registered");
        Ok(())
    }

    pub fn unregister(&mut self, spectator: &SpectatorHandle) -> Result<()> {
        let index = self
            .spectators
            .iter()
            .position(|s| same_spectator(s, spectator))
            .ok_or(GameError::UnknownSpectator)?;
        self.spectators.remove(index);
        debug!(count = self.spectators.len(), "spectator unregistered");
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, spectator: &SpectatorHandle) -> bool {
        self.spectators.iter().any(|s| same_spectator(s, spectator))
    }

    #[must_use]
    pub fn handles(&self) -> &[SpectatorHandle] {
        &self.spectators
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spectators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spectators.is_empty()
    }

    /// Deliver one event to every spectator.
    ///
    /// A spectator already borrowed elsewhere (for instance one that is
    /// inspecting itself while the game runs) is skipped.
    pub fn notify(&self, view: &GameView<'_>, event: &GameEvent) {
        for handle in &self.spectators {
            let Ok(mut spectator) = handle.try_borrow_mut() else {
                warn!(event = ?event, "spectator busy, notification skipped");
                continue;
            };
            match event {
                GameEvent::MoveMade(mv) => spectator.on_move_made(view, mv),
                GameEvent::RoundStarted(round) => spectator.on_round_started(view, *round),
                GameEvent::RotationComplete => spectator.on_rotation_complete(view),
                GameEvent::GameOver(winners) => spectator.on_game_over(view, winners),
            }
        }
    }
}

impl std::fmt::Debug for SpectatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpectatorRegistry")
            .field("len", &self.spectators.len())
            .finish()
    }
}
