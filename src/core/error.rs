use thiserror::Error;

use super::colour::Colour;
use super::graph::Location;
use super::moves::Move;
use super::ticket::Ticket;

/// Reasons a game configuration is rejected. No game is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Empty rounds")]
    EmptyRounds,

    #[error("Empty graph")]
    EmptyGraph,

    #[error("Mr. X should be Black, found {0}")]
    MrXNotBlack(Colour),

    #[error("At least one detective is required")]
    NoDetectives,

    #[error("Duplicate location: {0}")]
    DuplicateLocation(Location),

    #[error("Duplicate colour: {0}")]
    DuplicateColour(Colour),

    #[error("{colour} is missing {ticket} tickets")]
    MissingTickets { colour: Colour, ticket: Ticket },

    #[error("Detective {0} has Secret tickets")]
    DetectiveHasSecretTickets(Colour),

    #[error("Detective {0} has Double tickets")]
    DetectiveHasDoubleTickets(Colour),

    #[error("{colour} starts at {location}, which is not on the graph")]
    UnknownLocation { colour: Colour, location: Location },

    #[error("Expected {expected} players, found {found}")]
    PlayerCountMismatch { expected: usize, found: usize },
}

/// Errors raised while a game is being played.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is not in the current legal set. State is unchanged.
    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    #[error("Game is over")]
    GameOver,

    /// `accept` was called with no move request outstanding.
    #[error("No move request is outstanding")]
    NoPendingRequest,

    #[error("Spectator is already registered")]
    DuplicateSpectator,

    #[error("Spectator is not registered")]
    UnknownSpectator,

    /// Engine bug, not bad input.
    #[error("Invariant violated: {0}")]
    Invariant(&'static str),
}

/// Convenience Result type for engine operations
pub type Result<T, E = GameError> = std::result::Result<T, E>;
