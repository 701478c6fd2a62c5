//! Game driver: players, spectators, and the turn loop.

pub mod player;
pub mod spectator;
pub mod model;

pub use player::{DeferredPlayer, MoveReply, Player};
pub use spectator::{Spectator, SpectatorHandle, SpectatorRegistry};
pub use model::ScotlandYardGame;
