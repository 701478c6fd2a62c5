//! # scotland-yard
//!
//! A hidden-movement pursuit game engine: one evader (Mr. X) moves across a
//! transport graph while detectives try to corner him. Mr. X's location is
//! only revealed on scheduled rounds.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: `GameState` owns every location, ticket
//!    ledger, and the turn/round pointers. Players and spectators only ever
//!    see a read-only `GameView`.
//!
//! 2. **Closed Move Set**: `Move` is a tagged variant (`Pass`, `Ticket`,
//!    `Double`) handled by exhaustive matches.
//!
//! 3. **Validate Up Front**: `GameConfig::validate` rejects bad setups before
//!    a game exists. At runtime the only input errors are illegal moves and
//!    spectator misuse.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state snapshots via `im-rs`, for
//!   lookahead and tests.
//!
//! - **Deferred Replies**: a `Player` answers through a one-shot `MoveReply`.
//!   If it does not answer immediately the game waits for
//!   `ScotlandYardGame::accept`.
//!
//! ## Modules
//!
//! - `core`: colours, tickets, graph, moves, schedule, configuration, state
//! - `rules`: legal move generation and win evaluation
//! - `game`: players, spectators, and the turn loop
//! - `ai`: random and heuristic agents
//!
//! ## Example
//!
//! ```
//! use scotland_yard::{
//!     Colour, GameConfigBuilder, Location, PlayerConfiguration, RandomPlayer,
//!     ScotlandYardGame, Transport, TransportGraph,
//! };
//!
//! let graph = TransportGraph::from_links([
//!     (1, 2, Transport::Taxi),
//!     (2, 3, Transport::Bus),
//!     (3, 1, Transport::Taxi),
//! ]);
//! let config = GameConfigBuilder::new(vec![false, true, false], graph)
//!     .mr_x(PlayerConfiguration::mr_x(Location(1)))
//!     .detective(PlayerConfiguration::detective(Colour::Red, Location(3)))
//!     .build()
//!     .unwrap();
//!
//! let mut game = ScotlandYardGame::new(
//!     config,
//!     vec![Box::new(RandomPlayer::new(1)), Box::new(RandomPlayer::new(2))],
//! )
//! .unwrap();
//!
//! game.start_rotate().unwrap();
//! assert!(game.is_game_over());
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Colour,
    Ticket, TicketLedger, Transport,
    Edge, Location, TransportGraph,
    DoubleMove, Move, TicketMove,
    Concealment, RoundSchedule,
    GameConfig, GameConfigBuilder, PlayerConfiguration,
    ConfigError, GameError, Result,
    GameEvent, GameState, GameView, MoveRecord, PlayerState,
    GameRng, GameRngState,
};

pub use crate::rules::{legal_moves, winning_players};

pub use crate::game::{
    DeferredPlayer, MoveReply, Player, ScotlandYardGame, Spectator, SpectatorHandle,
};

pub use crate::ai::{EvasionAi, EvasionWeights, RandomPlayer};
