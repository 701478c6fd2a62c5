//! Read-only projection of a game for players and spectators.
//!
//! A `GameView` borrows the state and exposes only what observers may know:
//! detectives' true locations, but Mr. X's last revealed location. It has no
//! mutation operations.

use std::collections::BTreeSet;

use super::colour::Colour;
use super::graph::{Location, TransportGraph};
use super::schedule::RoundSchedule;
use super::state::GameState;
use super::ticket::Ticket;

#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    state: &'a GameState,
}

impl<'a> GameView<'a> {
    #[must_use]
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Colours in turn order, Mr. X first.
    #[must_use]
    pub fn players(&self) -> Vec<Colour> {
        self.state.colours().collect()
    }

    /// Detective colours in turn order.
    #[must_use]
    pub fn detectives(&self) -> Vec<Colour> {
        self.state.detectives().map(|p| p.colour()).collect()
    }

    /// Location as observers know it. For Mr. X this is the last revealed
    /// location (`Location::HIDDEN` before the first reveal).
    #[must_use]
    pub fn player_location(&self, colour: Colour) -> Option<Location> {
        if colour.is_mr_x() {
            return Some(self.state.revealed_location());
        }
        self.state.player(colour).map(|p| p.location())
    }

    #[must_use]
    pub fn player_tickets(&self, colour: Colour, ticket: Ticket) -> Option<u32> {
        self.state.player(colour).map(|p| p.tickets().count(ticket))
    }

    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.state.current_player()
    }

    #[must_use]
    pub fn current_round(&self) -> usize {
        self.state.current_round()
    }

    #[must_use]
    pub fn rounds(&self) -> &'a RoundSchedule {
        self.state.rounds()
    }

    #[must_use]
    pub fn graph(&self) -> &'a TransportGraph {
        self.state.graph()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winning_players(&self) -> BTreeSet<Colour> {
        self.state.winning_players()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{
        Colour, GameConfigBuilder, GameState, Location, Move, PlayerConfiguration, Ticket, Transport,
        TransportGraph,
    };

    fn state() -> GameState {
        let graph = TransportGraph::from_links([
            (1, 2, Transport::Taxi),
            (2, 3, Transport::Taxi),
            (3, 4, Transport::Taxi),
        ]);
        let config = GameConfigBuilder::new(vec![false, true, false], graph)
            .mr_x(PlayerConfiguration::mr_x(Location(1)))
            .detective(PlayerConfiguration::detective(Colour::Blue, Location(4)))
            .build()
            .unwrap();
        GameState::new(config).unwrap()
    }

    #[test]
    fn test_view_hides_mr_x() {
        let mut state = state();
        assert_eq!(state.view().player_location(Colour::Black), Some(Location::HIDDEN));
        assert_eq!(state.view().player_location(Colour::Blue), Some(Location(4)));

        state
            .apply_quiet(Move::ticket(Colour::Black, Ticket::Taxi, Location(2)))
            .unwrap();
        assert_eq!(state.view().player_location(Colour::Black), Some(Location::HIDDEN));
        assert_eq!(state.mr_x().location(), Location(2));
    }

    #[test]
    fn test_unknown_colour() {
        let state = state();
        let view = state.view();
        assert_eq!(view.player_location(Colour::Yellow), None);
        assert_eq!(view.player_tickets(Colour::Yellow, Ticket::Taxi), None);
        assert_eq!(view.player_tickets(Colour::Blue, Ticket::Bus), Some(8));
    }

    #[test]
    fn test_view_is_idempotent() {
        let state = state();
        let view = state.view();
        assert_eq!(view.players(), view.players());
        assert_eq!(view.winning_players(), view.winning_players());
        assert_eq!(view.players(), vec![Colour::Black, Colour::Blue]);
        assert_eq!(view.detectives(), vec![Colour::Blue]);
        assert_eq!(view.rounds().len(), 3);
        assert!(!view.is_game_over());
    }
}
