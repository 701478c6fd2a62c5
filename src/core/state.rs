//! Game state: the authoritative turn/round state machine.
//!
//! ## PlayerState
//!
//! Per-player colour, true location, and ticket ledger. Only mutated through
//! `GameState::apply`.
//!
//! ## GameState
//!
//! The aggregate root:
//! - Player states in turn order (Mr. X first)
//! - Active player pointer and round counter
//! - Mr. X's last revealed location
//! - Shared, read-only board and round schedule
//! - History of applied (true) moves
//!
//! Uses `im` persistent vectors so snapshots clone in O(1).
//!
//! ## Turn flow
//!
//! `apply` validates a move against the current legal set, mutates the
//! ledger and locations, advances the active pointer, and reports each
//! observer-visible step to a sink as a `GameEvent`. A rejected move leaves
//! the state untouched.

use std::collections::BTreeSet;
use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::colour::Colour;
use super::config::{GameConfig, PlayerConfiguration};
use super::error::{ConfigError, GameError, Result};
use super::event::GameEvent;
use super::graph::{Location, TransportGraph};
use super::moves::{DoubleMove, Move, TicketMove};
use super::schedule::{Concealment, RoundSchedule};
use super::ticket::{Ticket, TicketLedger};
use super::view::GameView;
use crate::rules;

/// One player's mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    colour: Colour,
    location: Location,
    tickets: TicketLedger,
}

impl PlayerState {
    #[must_use]
    pub fn new(colour: Colour, location: Location, tickets: TicketLedger) -> Self {
        Self {
            colour,
            location,
            tickets,
        }
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// True location. Never shown to observers for Mr. X.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub fn tickets(&self) -> &TicketLedger {
        &self.tickets
    }

    fn spend(&mut self, ticket: Ticket) -> Result<()> {
        if self.tickets.remove(ticket) {
            Ok(())
        } else {
            Err(GameError::Invariant("legal move spent a ticket the player does not hold"))
        }
    }
}

impl From<&PlayerConfiguration> for PlayerState {
    fn from(config: &PlayerConfiguration) -> Self {
        Self::new(config.colour, config.location, config.ledger())
    }
}

/// An applied move and the round counter when it was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub round: usize,
    pub mv: Move,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    rounds: Arc<RoundSchedule>,
    graph: Arc<TransportGraph>,

    /// Turn order: Mr. X, then detectives in configuration order.
    players: Vector<PlayerState>,

    /// Index into `players` of whoever moves next.
    current_player: usize,

    /// Rounds consumed so far. One per Mr. X leg.
    current_round: usize,

    concealment: Concealment,

    history: Vector<MoveRecord>,
}

impl GameState {
    /// Build the initial state from a configuration, validating it first.
    pub fn new(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let players = config.players().map(PlayerState::from).collect();

        Ok(Self {
            rounds: Arc::new(config.rounds),
            graph: Arc::new(config.graph),
            players,
            current_player: 0,
            current_round: 0,
            concealment: Concealment::new(),
            history: Vector::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn rounds(&self) -> &RoundSchedule {
        &self.rounds
    }

    #[must_use]
    pub fn graph(&self) -> &TransportGraph {
        &self.graph
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player states in turn order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter()
    }

    /// Detective states in turn order.
    pub fn detectives(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().skip(1)
    }

    /// Colours in turn order.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.players.iter().map(PlayerState::colour)
    }

    #[must_use]
    pub fn player(&self, colour: Colour) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.colour == colour)
    }

    #[must_use]
    pub fn mr_x(&self) -> &PlayerState {
        // Validation guarantees Mr. X occupies slot 0.
        &self.players[0]
    }

    #[must_use]
    pub fn current_player(&self) -> Colour {
        self.players[self.current_player].colour
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    #[must_use]
    pub fn is_mr_x_turn(&self) -> bool {
        self.current_player == 0
    }

    #[must_use]
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// Mr. X's location as observers know it.
    #[must_use]
    pub fn revealed_location(&self) -> Location {
        self.concealment.revealed()
    }

    /// Every applied move, true destinations included.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Read-only projection for players and spectators.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(self)
    }

    // === Rules ===

    /// Legal moves for a player from its current location.
    #[must_use]
    pub fn legal_moves_for(&self, colour: Colour) -> Vec<Move> {
        match self.player(colour) {
            Some(player) => rules::legal_moves(self, colour, player.location),
            None => Vec::new(),
        }
    }

    /// Legal moves for whoever is to move.
    #[must_use]
    pub fn current_legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.current_player())
    }

    #[must_use]
    pub fn winning_players(&self) -> BTreeSet<Colour> {
        rules::winning_players(self)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.winning_players().is_empty()
    }

    // === Transitions ===

    /// Apply a move, discarding notifications.
    pub fn apply_quiet(&mut self, mv: Move) -> Result<()> {
        self.apply(mv, &mut |_, _| {})
    }

    /// Apply a move and collect its notifications.
    pub fn apply_collect(&mut self, mv: Move) -> Result<Vec<GameEvent>> {
        let mut events = Vec::new();
        self.apply(mv, &mut |_, event| events.push(event.clone()))?;
        Ok(events)
    }

    /// Apply the active player's move.
    ///
    /// Each notification is passed to `sink` together with a view of the
    /// state at that point, so a round-started event sees the advanced round
    /// counter. The active pointer has already moved on when the sink runs.
    pub fn apply(
        &mut self,
        mv: Move,
        sink: &mut dyn FnMut(&GameView<'_>, &GameEvent),
    ) -> Result<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let mover = self.current_player;
        let colour = self.current_player();
        if !self.current_legal_moves().contains(&mv) {
            warn!(colour = %colour, mv = %mv, "rejected illegal move");
            return Err(GameError::IllegalMove(mv));
        }

        let round = self.current_round;
        self.transact(|state| {
            state.current_player = (mover + 1) % state.players.len();
            match mv {
                Move::Pass(_) => {
                    state.emit(sink, GameEvent::MoveMade(mv));
                    Ok(())
                }
                Move::Ticket(leg) if colour.is_mr_x() => state.play_mr_x_leg(leg, sink),
                Move::Ticket(leg) => {
                    state.play_detective(mover, leg)?;
                    state.emit(sink, GameEvent::MoveMade(mv));
                    Ok(())
                }
                Move::Double(double) => state.play_double(double, sink),
            }
        })?;

        self.history.push_back(MoveRecord { round, mv });
        debug!(colour = %colour, mv = %mv, round = self.current_round, "move applied");

        let winners = self.winning_players();
        if !winners.is_empty() {
            info!(winners = ?winners, round = self.current_round, "game over");
            self.emit(sink, GameEvent::GameOver(winners));
        } else if self.current_player == 0 && colour.is_detective() {
            self.emit(sink, GameEvent::RotationComplete);
        }

        Ok(())
    }

    /// Run `f`, restoring the state as it was if it fails.
    fn transact(&mut self, f: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        let snapshot = self.clone();
        let result = f(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn emit(&self, sink: &mut dyn FnMut(&GameView<'_>, &GameEvent), event: GameEvent) {
        sink(&GameView::new(self), &event);
    }

    /// Detective tickets are handed to Mr. X.
    fn play_detective(&mut self, index: usize, leg: TicketMove) -> Result<()> {
        let detective = self
            .players
            .get_mut(index)
            .ok_or(GameError::Invariant("active player index out of range"))?;
        detective.spend(leg.ticket)?;
        detective.location = leg.destination;

        let mr_x = self
            .players
            .get_mut(0)
            .ok_or(GameError::Invariant("game has no Mr. X"))?;
        mr_x.tickets.add(leg.ticket);
        Ok(())
    }

    /// Spend one leg's ticket, consume a round, and report it.
    fn play_mr_x_leg(
        &mut self,
        leg: TicketMove,
        sink: &mut dyn FnMut(&GameView<'_>, &GameEvent),
    ) -> Result<()> {
        let reveal = self.rounds.is_reveal(self.current_round);
        let visible = self.concealment.observe(leg, reveal);

        let mr_x = self
            .players
            .get_mut(0)
            .ok_or(GameError::Invariant("game has no Mr. X"))?;
        mr_x.spend(leg.ticket)?;
        mr_x.location = leg.destination;

        self.current_round += 1;
        self.emit(sink, GameEvent::RoundStarted(self.current_round));
        self.emit(sink, GameEvent::MoveMade(Move::Ticket(visible)));
        Ok(())
    }

    /// Both legs are masked up front so the combined notification matches
    /// what the individual legs will show.
    fn play_double(
        &mut self,
        double: DoubleMove,
        sink: &mut dyn FnMut(&GameView<'_>, &GameEvent),
    ) -> Result<()> {
        let mut preview = self.concealment;
        let first = preview.observe(double.first, self.rounds.is_reveal(self.current_round));
        let second = preview.observe(double.second, self.rounds.is_reveal(self.current_round + 1));

        self.players
            .get_mut(0)
            .ok_or(GameError::Invariant("game has no Mr. X"))?
            .spend(Ticket::Double)?;
        self.emit(sink, GameEvent::MoveMade(Move::double(double.colour, first, second)));

        self.play_mr_x_leg(double.first, sink)?;
        self.play_mr_x_leg(double.second, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfigBuilder, Transport};

    /// Square 1-2-3-4-1 of taxi links plus a 1-3 bus.
    fn square_state(rounds: Vec<bool>) -> GameState {
        let graph = TransportGraph::from_links([
            (1, 2, Transport::Taxi),
            (2, 3, Transport::Taxi),
            (3, 4, Transport::Taxi),
            (4, 1, Transport::Taxi),
            (1, 3, Transport::Bus),
        ]);
        let config = GameConfigBuilder::new(rounds, graph)
            .mr_x(PlayerConfiguration::mr_x(Location(1)))
            .detective(PlayerConfiguration::detective(Colour::Red, Location(3)))
            .build()
            .unwrap();
        GameState::new(config).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = square_state(vec![false, true, false, false]);
        assert_eq!(state.current_player(), Colour::Black);
        assert_eq!(state.current_round(), 0);
        assert_eq!(state.revealed_location(), Location::HIDDEN);
        assert_eq!(state.player_count(), 2);
        assert!(state.history().is_empty());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_mr_x_single_move_hidden() {
        let mut state = square_state(vec![false, true, false, false]);
        let mv = Move::ticket(Colour::Black, Ticket::Taxi, Location(2));

        let events = state.apply_collect(mv).unwrap();

        assert_eq!(
            events,
            vec![
                GameEvent::RoundStarted(1),
                GameEvent::MoveMade(Move::ticket(Colour::Black, Ticket::Taxi, Location::HIDDEN)),
            ]
        );
        assert_eq!(state.mr_x().location(), Location(2));
        assert_eq!(state.mr_x().tickets().count(Ticket::Taxi), 3);
        assert_eq!(state.revealed_location(), Location::HIDDEN);
        assert_eq!(state.current_player(), Colour::Red);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_detective_ticket_goes_to_mr_x() {
        let mut state = square_state(vec![false, true, false, false]);
        state
            .apply_quiet(Move::ticket(Colour::Black, Ticket::Taxi, Location(2)))
            .unwrap();

        let mv = Move::ticket(Colour::Red, Ticket::Taxi, Location(4));
        let events = state.apply_collect(mv).unwrap();

        assert_eq!(events, vec![GameEvent::MoveMade(mv), GameEvent::RotationComplete]);
        let red = state.player(Colour::Red).unwrap();
        assert_eq!(red.location(), Location(4));
        assert_eq!(red.tickets().count(Ticket::Taxi), 10);
        assert_eq!(state.mr_x().tickets().count(Ticket::Taxi), 4);
        assert_eq!(state.current_player(), Colour::Black);
        assert_eq!(state.current_round(), 1);
    }

    #[test]
    fn test_illegal_move_leaves_state_unchanged() {
        let mut state = square_state(vec![false, true]);
        let before = state.clone();

        // Wrong player.
        let result = state.apply_quiet(Move::ticket(Colour::Red, Ticket::Taxi, Location(2)));
        assert!(matches!(result, Err(GameError::IllegalMove(_))));

        // Occupied by a detective.
        let result = state.apply_quiet(Move::ticket(Colour::Black, Ticket::Bus, Location(3)));
        assert!(matches!(result, Err(GameError::IllegalMove(_))));

        assert_eq!(state, before);
    }

    #[test]
    fn test_double_move_events() {
        let mut state = square_state(vec![true, false, false, false]);
        let first = TicketMove::new(Colour::Black, Ticket::Taxi, Location(2));
        let second = TicketMove::new(Colour::Black, Ticket::Taxi, Location(1));
        let mv = Move::double(Colour::Black, first, second);

        let events = state.apply_collect(mv).unwrap();

        let hidden_second = second.with_destination(Location(2));
        assert_eq!(
            events,
            vec![
                GameEvent::MoveMade(Move::double(Colour::Black, first, hidden_second)),
                GameEvent::RoundStarted(1),
                GameEvent::MoveMade(Move::Ticket(first)),
                GameEvent::RoundStarted(2),
                GameEvent::MoveMade(Move::Ticket(hidden_second)),
            ]
        );
        assert_eq!(state.current_round(), 2);
        assert_eq!(state.revealed_location(), Location(2));
        assert_eq!(state.mr_x().location(), Location(1));
        let tickets = state.mr_x().tickets();
        assert_eq!(tickets.count(Ticket::Double), 1);
        assert_eq!(tickets.count(Ticket::Taxi), 2);
    }

    #[test]
    fn test_sink_sees_intermediate_rounds() {
        let mut state = square_state(vec![false, false, false]);
        let mv = Move::double(
            Colour::Black,
            TicketMove::new(Colour::Black, Ticket::Taxi, Location(2)),
            TicketMove::new(Colour::Black, Ticket::Taxi, Location(1)),
        );

        let mut seen = Vec::new();
        state
            .apply(mv, &mut |view, event| {
                if let GameEvent::RoundStarted(round) = event {
                    seen.push((*round, view.current_round()));
                }
            })
            .unwrap();

        assert_eq!(seen, vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_failed_transition_rolls_back() {
        let mut state = square_state(vec![false, true]);
        let before = state.clone();

        let result = state.transact(|state| {
            state.current_player = 1;
            state.current_round += 1;
            state.play_detective(1, TicketMove::new(Colour::Red, Ticket::Double, Location(4)))
        });

        assert!(matches!(result, Err(GameError::Invariant(_))));
        assert_eq!(state, before);
        assert!(state.is_mr_x_turn());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = square_state(vec![false, true]);
        let snapshot = state.clone();
        state
            .apply_quiet(Move::ticket(Colour::Black, Ticket::Taxi, Location(4)))
            .unwrap();

        assert_eq!(snapshot.mr_x().location(), Location(1));
        assert_eq!(state.mr_x().location(), Location(4));
        assert_ne!(snapshot, state);
    }
}
