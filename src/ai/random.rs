//! Uniform random agent.

use crate::core::{GameRng, GameView, Location, Move};
use crate::game::{MoveReply, Player};

/// Picks uniformly among the legal moves. Seeded, so games replay exactly.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn make_move(&mut self, _view: &GameView<'_>, _location: Location, moves: &[Move], reply: MoveReply) {
        if let Some(&mv) = self.rng.choose(moves) {
            reply.send(mv);
        }
    }
}
