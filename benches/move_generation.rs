//! Criterion benchmarks for legal move generation and state application.
//!
//! Uses a 10x10 grid board with bus and underground overlays, which gives
//! Mr. X a few hundred double moves from an open position.
//!
//! Run with: cargo bench --bench move_generation

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scotland_yard::core::{
    Colour, GameConfigBuilder, GameState, Location, PlayerConfiguration, RoundSchedule,
    Transport, TransportGraph,
};
use scotland_yard::EvasionAi;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

const SIDE: u32 = 10;

fn board() -> TransportGraph {
    let node = |row: u32, col: u32| row * SIDE + col + 1;
    let mut links = Vec::new();
    for row in 0..SIDE {
        for col in 0..SIDE {
            if col + 1 < SIDE {
                links.push((node(row, col), node(row, col + 1), Transport::Taxi));
            }
            if row + 1 < SIDE {
                links.push((node(row, col), node(row + 1, col), Transport::Taxi));
            }
            if row % 3 == 0 && col + 3 < SIDE {
                links.push((node(row, col), node(row, col + 3), Transport::Bus));
            }
            if row % 5 == 0 && col % 5 == 0 && row + 5 < SIDE {
                links.push((node(row, col), node(row + 5, col), Transport::Underground));
            }
        }
    }
    TransportGraph::from_links(links)
}

fn state() -> GameState {
    let config = GameConfigBuilder::new(RoundSchedule::standard(), board())
        .mr_x(PlayerConfiguration::mr_x(Location(45)))
        .detectives([
            PlayerConfiguration::detective(Colour::Blue, Location(1)),
            PlayerConfiguration::detective(Colour::Green, Location(10)),
            PlayerConfiguration::detective(Colour::Red, Location(91)),
            PlayerConfiguration::detective(Colour::White, Location(100)),
            PlayerConfiguration::detective(Colour::Yellow, Location(55)),
        ])
        .build()
        .expect("benchmark configuration is valid");
    GameState::new(config).expect("benchmark configuration is valid")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_legal_moves(c: &mut Criterion) {
    let state = state();
    let mut group = c.benchmark_group("legal_moves");

    group.bench_function("mr_x_with_doubles", |b| {
        b.iter(|| black_box(state.legal_moves_for(black_box(Colour::Black))))
    });
    group.bench_function("detective", |b| {
        b.iter(|| black_box(state.legal_moves_for(black_box(Colour::Yellow))))
    });
    group.bench_function("winning_players", |b| {
        b.iter(|| black_box(state.winning_players()))
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let state = state();
    let moves = state.current_legal_moves();

    c.bench_function("apply_first_move", |b| {
        b.iter(|| {
            let mut next = state.clone();
            next.apply_quiet(black_box(moves[0])).expect("move is legal");
            black_box(next)
        })
    });
}

fn bench_evasion(c: &mut Criterion) {
    let state = state();
    let moves = state.current_legal_moves();
    let mut ai = EvasionAi::new(42);

    c.bench_function("evasion_choose", |b| {
        b.iter(|| black_box(ai.choose(&state.view(), Location(45), &moves)))
    });
}

criterion_group!(benches, bench_legal_moves, bench_apply, bench_evasion);
criterion_main!(benches);
