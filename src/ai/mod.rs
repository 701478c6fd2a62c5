//! Move-selection agents.
//!
//! - `RandomPlayer`: seeded uniform choice, for any colour
//! - `EvasionAi`: heuristic scoring for Mr. X
//! - `distance`: BFS helpers shared by heuristics

pub mod distance;
pub mod evasion;
pub mod random;

pub use distance::{distances_from, summarize, DistanceSummary};
pub use evasion::{EvasionAi, EvasionWeights};
pub use random::RandomPlayer;
