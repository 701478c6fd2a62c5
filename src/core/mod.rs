//! Core engine types: colours, tickets, board, moves, schedule, state.
//!
//! Everything here is independent of how moves are chosen. The state machine
//! in `state` is driven by `game::ScotlandYardGame`, but can also be stepped
//! directly for tests and lookahead.

pub mod colour;
pub mod ticket;
pub mod graph;
pub mod moves;
pub mod schedule;
pub mod config;
pub mod error;
pub mod event;
pub mod state;
pub mod view;
pub mod rng;

pub use colour::Colour;
pub use ticket::{Ticket, TicketLedger, Transport};
pub use graph::{Edge, Location, TransportGraph};
pub use moves::{DoubleMove, Move, TicketMove};
pub use schedule::{Concealment, RoundSchedule};
pub use config::{GameConfig, GameConfigBuilder, PlayerConfiguration};
pub use error::{ConfigError, GameError, Result};
pub use event::GameEvent;
pub use state::{GameState, MoveRecord, PlayerState};
pub use view::GameView;
pub use rng::{GameRng, GameRngState};
