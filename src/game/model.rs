//! The game driver.
//!
//! `ScotlandYardGame` owns the authoritative `GameState`, one `Player` per
//! colour, and the spectator registry. It asks the active player for a move,
//! applies the answer, forwards every resulting event to spectators, and
//! repeats until the game ends or a player leaves its request outstanding.
//!
//! ## Flow
//!
//! ```text
//! start_rotate ──► request ──► Player::make_move ──► reply? ──► apply ──► request ...
//!                                                      │
//!                                                      └─ none: wait for accept(mv)
//! ```
//!
//! The loop is iterative, so long games driven by synchronous players do
//! not grow the stack.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::core::{
    Colour, ConfigError, GameConfig, GameError, GameEvent, GameState, GameView, Move, Result,
};

use super::player::{MoveReply, Player};
use super::spectator::{SpectatorHandle, SpectatorRegistry};

/// A game of Scotland Yard with its players and spectators.
pub struct ScotlandYardGame {
    state: GameState,

    /// One player per colour, in turn order.
    players: Vec<Box<dyn Player>>,

    spectators: SpectatorRegistry,

    /// Legal moves of the request awaiting an answer.
    pending: Option<Vec<Move>>,
}

impl ScotlandYardGame {
    /// Build a game. `players` are given in turn order: Mr. X first, then
    /// detectives in configuration order.
    pub fn new(
        config: GameConfig,
        players: Vec<Box<dyn Player>>,
    ) -> std::result::Result<Self, ConfigError> {
        if players.len() != config.player_count() {
            return Err(ConfigError::PlayerCountMismatch {
                expected: config.player_count(),
                found: players.len(),
            });
        }
        let state = GameState::new(config)?;
        info!(
            players = state.player_count(),
            rounds = state.rounds().len(),
            nodes = state.graph().node_count(),
            "game created"
        );
        Ok(Self {
            state,
            players,
            spectators: SpectatorRegistry::new(),
            pending: None,
        })
    }

    // === Spectators ===

    pub fn register_spectator(&mut self, spectator: SpectatorHandle) -> Result<()> {
        self.spectators.register(spectator)
    }

    pub fn unregister_spectator(&mut self, spectator: &SpectatorHandle) -> Result<()> {
        self.spectators.unregister(spectator)
    }

    /// Registered spectators in registration order.
    #[must_use]
    pub fn spectators(&self) -> &[SpectatorHandle] {
        self.spectators.handles()
    }

    // === Accessors ===

    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        self.state.view()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winning_players(&self) -> BTreeSet<Colour> {
        self.state.winning_players()
    }

    /// Legal moves of the outstanding request, if a player has not answered.
    #[must_use]
    pub fn pending_moves(&self) -> Option<&[Move]> {
        self.pending.as_deref()
    }

    // === Play ===

    /// Start play by requesting the active player's move.
    ///
    /// On a game that is already over, spectators are told so and
    /// `GameError::GameOver` is returned.
    pub fn start_rotate(&mut self) -> Result<()> {
        let winners = self.state.winning_players();
        if !winners.is_empty() {
            let view = self.state.view();
            self.spectators.notify(&view, &GameEvent::GameOver(winners));
            return Err(GameError::GameOver);
        }
        info!(player = %self.state.current_player(), round = self.state.current_round(), "rotation started");
        self.drive()
    }

    /// Supply the active player's move from outside, answering an
    /// outstanding request. Play then continues as if the player had replied.
    ///
    /// An illegal move is rejected without changing the state and the
    /// request stays outstanding. Without an outstanding request, before
    /// `start_rotate` or after a player has already answered, the move is
    /// rejected with `GameError::NoPendingRequest`.
    pub fn accept(&mut self, mv: Move) -> Result<()> {
        if self.state.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.pending.is_none() {
            return Err(GameError::NoPendingRequest);
        }
        self.apply(mv)?;
        self.pending = None;
        self.drive()
    }

    fn apply(&mut self, mv: Move) -> Result<()> {
        let spectators = &self.spectators;
        self.state
            .apply(mv, &mut |view, event| spectators.notify(view, event))
    }

    /// Request and apply moves until the game ends or a request goes
    /// unanswered.
    fn drive(&mut self) -> Result<()> {
        while !self.state.is_game_over() {
            let index = self.state.current_player_index();
            let colour = self.state.current_player();
            let location = self
                .state
                .player(colour)
                .map(|p| p.location())
                .ok_or(GameError::Invariant("active colour has no player state"))?;
            let moves = self.state.current_legal_moves();
            let player = self
                .players
                .get_mut(index)
                .ok_or(GameError::Invariant("active player index out of range"))?;

            debug!(colour = %colour, round = self.state.current_round(), moves = moves.len(), "requesting move");
            let (reply, receiver) = MoveReply::channel();
            player.make_move(&self.state.view(), location, &moves, reply);

            let Some(mv) = receiver.take() else {
                debug!(colour = %colour, "move request outstanding");
                self.pending = Some(moves);
                return Ok(());
            };
            if let Err(err) = self.apply(mv) {
                self.pending = Some(moves);
                return Err(err);
            }
        }
        self.pending = None;
        Ok(())
    }
}

impl std::fmt::Debug for ScotlandYardGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScotlandYardGame")
            .field("state", &self.state)
            .field("players", &self.players.len())
            .field("spectators", &self.spectators)
            .field("pending", &self.pending)
            .finish()
    }
}
