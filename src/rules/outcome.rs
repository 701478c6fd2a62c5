//! Win evaluation.
//!
//! Mr. X wins when every detective is stuck (its only legal move is `Pass`),
//! or when the schedule is exhausted and play has come back round to him.
//!
//! The detectives win when one of them stands on Mr. X's true location, or
//! when Mr. X is to move and has no legal move.
//!
//! Both sides are evaluated on every call, so a capture that also leaves
//! every detective stuck reports both sides. An empty set means the game
//! continues.

use std::collections::BTreeSet;

use crate::core::{Colour, GameState, Move};

/// Colours of the winning side, or empty if nobody has won yet.
#[must_use]
pub fn winning_players(state: &GameState) -> BTreeSet<Colour> {
    let mut winners = BTreeSet::new();
    if detectives_win(state) {
        winners.extend(state.detectives().map(|d| d.colour()));
    }
    if mr_x_wins(state) {
        winners.insert(Colour::MR_X);
    }
    winners
}

fn detectives_win(state: &GameState) -> bool {
    let mr_x = state.mr_x().location();
    if state.detectives().any(|d| d.location() == mr_x) {
        return true;
    }
    state.is_mr_x_turn() && state.legal_moves_for(Colour::MR_X).is_empty()
}

fn mr_x_wins(state: &GameState) -> bool {
    let survived = state.is_mr_x_turn() && state.current_round() >= state.rounds().len();
    survived || state.detectives().all(|d| is_stuck(state, d.colour()))
}

fn is_stuck(state: &GameState, colour: Colour) -> bool {
    matches!(state.legal_moves_for(colour).as_slice(), [Move::Pass(_)])
}
