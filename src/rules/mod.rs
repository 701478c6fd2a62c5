//! Game rules: legal move generation and win evaluation.
//!
//! Both are pure functions of a `GameState`. The state machine calls into
//! them to validate submitted moves and to decide when the game ends.

pub mod movegen;
pub mod outcome;

pub use movegen::{legal_moves, location_free, TicketReservation};
pub use outcome::winning_players;
