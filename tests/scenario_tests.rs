//! End-to-end scenarios on small boards.

use std::collections::BTreeSet;

use scotland_yard::core::{
    Colour, GameConfigBuilder, GameState, Location, Move, PlayerConfiguration, Ticket,
    TicketMove, Transport, TransportGraph,
};
use scotland_yard::{DeferredPlayer, Player, RandomPlayer, ScotlandYardGame};

// =============================================================================
// Triangle
// =============================================================================

/// Triangle 1-2 taxi, 2-3 underground, 3-1 bus. Both sides hold one ticket
/// of each transport they might need; the detective has no underground.
fn triangle() -> ScotlandYardGame {
    let graph = TransportGraph::from_links([
        (1, 2, Transport::Taxi),
        (2, 3, Transport::Underground),
        (3, 1, Transport::Bus),
    ]);
    let tickets = |taxi: u32, bus: u32, underground: u32| {
        [
            (Ticket::Taxi, taxi),
            (Ticket::Bus, bus),
            (Ticket::Underground, underground),
            (Ticket::Secret, 0),
            (Ticket::Double, 0),
        ]
    };
    let config = GameConfigBuilder::new(vec![true, false, true], graph)
        .mr_x(PlayerConfiguration::new(Colour::Black, Location(1), tickets(1, 1, 1)))
        .detective(PlayerConfiguration::new(Colour::Red, Location(3), tickets(1, 1, 0)))
        .build()
        .unwrap();
    let players: Vec<Box<dyn Player>> = vec![Box::new(DeferredPlayer), Box::new(DeferredPlayer)];
    ScotlandYardGame::new(config, players).unwrap()
}

#[test]
fn test_triangle_scenario() {
    let mut game = triangle();
    game.start_rotate().unwrap();
    assert_eq!(game.view().player_location(Colour::Black), Some(Location::HIDDEN));

    // Revealed round: observers learn node 2.
    game.accept(Move::ticket(Colour::Black, Ticket::Taxi, Location(2)))
        .unwrap();
    assert_eq!(game.view().player_location(Colour::Black), Some(Location(2)));

    // The detective cannot reach 2; 3 -> 1 by bus is its only move.
    let to_two = Move::ticket(Colour::Red, Ticket::Underground, Location(2));
    let to_one = Move::ticket(Colour::Red, Ticket::Bus, Location(1));
    assert_eq!(game.pending_moves(), Some(&[to_one][..]));
    assert!(game.accept(to_two).is_err());
    game.accept(to_one).unwrap();
    assert!(!game.is_game_over());

    // Hidden round: observers still see 2.
    game.accept(Move::ticket(Colour::Black, Ticket::Underground, Location(3)))
        .unwrap();
    assert_eq!(game.view().player_location(Colour::Black), Some(Location(2)));
    assert_eq!(game.state().mr_x().location(), Location(3));
    assert!(!game.is_game_over());

    // Detective ticket transfers land with Mr. X.
    assert_eq!(game.view().player_tickets(Colour::Black, Ticket::Bus), Some(2));
    assert_eq!(game.view().player_tickets(Colour::Red, Ticket::Bus), Some(0));
}

#[test]
fn test_triangle_history() {
    let mut game = triangle();
    game.start_rotate().unwrap();
    game.accept(Move::ticket(Colour::Black, Ticket::Taxi, Location(2)))
        .unwrap();
    game.accept(Move::ticket(Colour::Red, Ticket::Bus, Location(1)))
        .unwrap();

    let history = game.state().history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].round, 0);
    assert_eq!(history[1].round, 1);
    assert_eq!(history[1].mv, Move::ticket(Colour::Red, Ticket::Bus, Location(1)));
}

// =============================================================================
// Hidden movement on a larger board
// =============================================================================

/// A 3x3 grid of taxi links with an underground diagonal and a ferry.
fn grid_graph() -> TransportGraph {
    let mut links = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            let node = row * 3 + col + 1;
            if col < 2 {
                links.push((node, node + 1, Transport::Taxi));
            }
            if row < 2 {
                links.push((node, node + 3, Transport::Taxi));
            }
        }
    }
    links.push((1, 9, Transport::Underground));
    links.push((3, 7, Transport::Ferry));
    TransportGraph::from_links(links)
}

#[test]
fn test_secret_ferry_crossing_stays_hidden() {
    let config = GameConfigBuilder::new(vec![false, false, true, false], grid_graph())
        .mr_x(PlayerConfiguration::mr_x(Location(3)))
        .detective(PlayerConfiguration::detective(Colour::Green, Location(5)))
        .build()
        .unwrap();
    let mut state = GameState::new(config).unwrap();

    let ferry = Move::ticket(Colour::Black, Ticket::Secret, Location(7));
    assert!(state.current_legal_moves().contains(&ferry));
    let events = state.apply_collect(ferry).unwrap();

    let visible: Vec<_> = events.iter().filter_map(|e| e.as_move()).collect();
    assert_eq!(
        visible,
        vec![&Move::ticket(Colour::Black, Ticket::Secret, Location::HIDDEN)]
    );
    assert_eq!(state.mr_x().location(), Location(7));
}

#[test]
fn test_double_move_into_reveal() {
    let config = GameConfigBuilder::new(vec![false, true, false], grid_graph())
        .mr_x(PlayerConfiguration::mr_x(Location(1)))
        .detective(PlayerConfiguration::detective(Colour::Green, Location(5)))
        .build()
        .unwrap();
    let mut state = GameState::new(config).unwrap();

    let mv = Move::double(
        Colour::Black,
        TicketMove::new(Colour::Black, Ticket::Underground, Location(9)),
        TicketMove::new(Colour::Black, Ticket::Taxi, Location(8)),
    );
    state.apply_quiet(mv).unwrap();

    assert_eq!(state.current_round(), 2);
    assert_eq!(state.revealed_location(), Location(8));
    assert_eq!(state.view().player_location(Colour::Black), Some(Location(8)));
}

#[test]
fn test_double_rejected_with_one_round_left() {
    let config = GameConfigBuilder::new(vec![false, false], grid_graph())
        .mr_x(PlayerConfiguration::mr_x(Location(1)))
        .detective(PlayerConfiguration::detective(Colour::Green, Location(5)))
        .build()
        .unwrap();
    let mut state = GameState::new(config).unwrap();
    state
        .apply_quiet(Move::ticket(Colour::Black, Ticket::Taxi, Location(2)))
        .unwrap();
    state
        .apply_quiet(Move::ticket(Colour::Green, Ticket::Taxi, Location(4)))
        .unwrap();

    let before = state.clone();
    let mv = Move::double(
        Colour::Black,
        TicketMove::new(Colour::Black, Ticket::Taxi, Location(3)),
        TicketMove::new(Colour::Black, Ticket::Taxi, Location(6)),
    );
    assert!(state.apply_quiet(mv).is_err());
    assert_eq!(state, before);
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_random_games_terminate() {
    for seed in 0..20 {
        let config = GameConfigBuilder::new(vec![false, false, true, false, false, true, false, false], grid_graph())
            .mr_x(PlayerConfiguration::mr_x(Location(1)))
            .detective(PlayerConfiguration::detective(Colour::Blue, Location(5)))
            .detective(PlayerConfiguration::detective(Colour::Red, Location(9)))
            .build()
            .unwrap();
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(RandomPlayer::new(seed)),
            Box::new(RandomPlayer::new(seed + 100)),
            Box::new(RandomPlayer::new(seed + 200)),
        ];
        let mut game = ScotlandYardGame::new(config, players).unwrap();
        game.start_rotate().unwrap();

        let winners = game.winning_players();
        assert!(game.is_game_over(), "seed {seed} did not finish");
        let detective_side = BTreeSet::from([Colour::Blue, Colour::Red]);
        let detectives_won = winners.is_superset(&detective_side);
        assert!(detectives_won || winners.contains(&Colour::Black));
        assert!(winners.iter().all(|c| *c == Colour::Black || detective_side.contains(c)));
    }
}

#[test]
fn test_random_games_replay() {
    let play = |seed: u64| {
        let config = GameConfigBuilder::new(vec![false; 6], grid_graph())
            .mr_x(PlayerConfiguration::mr_x(Location(1)))
            .detective(PlayerConfiguration::detective(Colour::Blue, Location(5)))
            .build()
            .unwrap();
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(RandomPlayer::new(seed)),
            Box::new(RandomPlayer::new(seed + 1)),
        ];
        let mut game = ScotlandYardGame::new(config, players).unwrap();
        game.start_rotate().unwrap();
        game.state().history().clone()
    };

    assert_eq!(play(7), play(7));
}
