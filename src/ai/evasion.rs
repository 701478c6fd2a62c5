//! Heuristic agent for Mr. X.
//!
//! Every legal move is scored by where it leaves Mr. X:
//!
//! - **Distance**: BFS distance to the nearest detective and the average
//!   over all detectives. Ending next to a detective carries a large penalty.
//! - **Mobility**: free neighbours at the destination.
//! - **Connectivity**: distinct transports leaving the destination, which
//!   widen the detectives' uncertainty on hidden rounds.
//! - **Ticket economy**: secret tickets are discouraged on reveal rounds and
//!   the round just before one; double tickets are discouraged when no
//!   detective is adjacent.
//!
//! The highest score wins. A small seeded noise term breaks ties.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{GameRng, GameView, Location, Move, RoundSchedule, Ticket};
use crate::game::{MoveReply, Player};

use super::distance::{summarize, DistanceSummary};

/// Scoring weights for `EvasionAi`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvasionWeights {
    /// Reward per hop to the nearest detective.
    pub shortest_distance: f64,

    /// Reward per hop of average detective distance.
    pub average_distance: f64,

    /// Penalty for ending a move adjacent to a detective.
    pub danger: f64,

    /// Reward per free neighbour at the destination.
    pub mobility: f64,

    /// Reward per distinct transport at the destination.
    pub connectivity: f64,

    /// Penalty per secret ticket spent on or just before a reveal round.
    pub wasted_secret: f64,

    /// Penalty for a double move when no detective is adjacent.
    pub unforced_double: f64,

    /// Scale of the random tie-breaking term (0 = fully deterministic).
    pub noise: f64,
}

impl Default for EvasionWeights {
    fn default() -> Self {
        Self {
            shortest_distance: 4.0,
            average_distance: 1.0,
            danger: 25.0,
            mobility: 0.5,
            connectivity: 0.75,
            wasted_secret: 3.0,
            unforced_double: 6.0,
            noise: 0.01,
        }
    }
}

impl EvasionWeights {
    pub fn with_shortest_distance(mut self, weight: f64) -> Self {
        self.shortest_distance = weight;
        self
    }

    pub fn with_average_distance(mut self, weight: f64) -> Self {
        self.average_distance = weight;
        self
    }

    pub fn with_danger(mut self, weight: f64) -> Self {
        self.danger = weight;
        self
    }

    pub fn with_mobility(mut self, weight: f64) -> Self {
        self.mobility = weight;
        self
    }

    pub fn with_connectivity(mut self, weight: f64) -> Self {
        self.connectivity = weight;
        self
    }

    pub fn with_wasted_secret(mut self, weight: f64) -> Self {
        self.wasted_secret = weight;
        self
    }

    pub fn with_unforced_double(mut self, weight: f64) -> Self {
        self.unforced_double = weight;
        self
    }

    pub fn with_noise(mut self, weight: f64) -> Self {
        self.noise = weight;
        self
    }
}

/// Distance-keeping agent for Mr. X.
#[derive(Clone, Debug)]
pub struct EvasionAi {
    weights: EvasionWeights,
    rng: GameRng,
}

impl EvasionAi {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_weights(EvasionWeights::default(), seed)
    }

    #[must_use]
    pub fn with_weights(weights: EvasionWeights, seed: u64) -> Self {
        Self {
            weights,
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn weights(&self) -> &EvasionWeights {
        &self.weights
    }

    /// Best move by score, or `None` if `moves` is empty.
    pub fn choose(&mut self, view: &GameView<'_>, location: Location, moves: &[Move]) -> Option<Move> {
        let mover = view.current_player();
        let detectives: Vec<Location> = view
            .detectives()
            .into_iter()
            .filter(|&c| c != mover)
            .filter_map(|c| view.player_location(c))
            .collect();
        let threatened = summarize(view.graph(), location, &detectives).shortest == Some(1);

        let mut summaries: FxHashMap<Location, DistanceSummary> = FxHashMap::default();
        let mut best: Option<(Move, f64)> = None;

        for &mv in moves {
            let Some(destination) = mv.destination() else {
                if best.is_none() {
                    best = Some((mv, f64::NEG_INFINITY));
                }
                continue;
            };
            let summary = *summaries
                .entry(destination)
                .or_insert_with(|| summarize(view.graph(), destination, &detectives));

            let score = self.position_score(view, destination, &summary, &detectives)
                - self.ticket_cost(view.rounds(), view.current_round(), &mv, threatened)
                + self.weights.noise * self.rng.gen_unit();

            trace!(mv = %mv, score, "scored move");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        best.map(|(mv, _)| mv)
    }

    fn position_score(
        &self,
        view: &GameView<'_>,
        destination: Location,
        summary: &DistanceSummary,
        detectives: &[Location],
    ) -> f64 {
        let graph = view.graph();
        let w = &self.weights;
        // Unreachable detectives count as being across the whole board.
        let far = graph.node_count() as f64;

        let shortest = summary.shortest.map_or(far, f64::from);
        let average = summary.average().unwrap_or(far);
        let danger = if summary.shortest == Some(1) { w.danger } else { 0.0 };

        let free = graph
            .neighbours(destination)
            .iter()
            .filter(|n| !detectives.contains(n))
            .count() as f64;
        let transports = graph
            .edges_from(destination)
            .iter()
            .map(|e| e.transport)
            .collect::<FxHashSet<_>>()
            .len() as f64;

        w.shortest_distance * shortest + w.average_distance * average - danger
            + w.mobility * free
            + w.connectivity * transports
    }

    fn ticket_cost(&self, rounds: &RoundSchedule, round: usize, mv: &Move, threatened: bool) -> f64 {
        let w = &self.weights;
        let legs = match mv {
            Move::Pass(_) => return 0.0,
            Move::Ticket(leg) => vec![*leg],
            Move::Double(double) => vec![double.first, double.second],
        };

        let wasted_secrets = legs
            .iter()
            .enumerate()
            .filter(|(i, leg)| {
                let played_in = round + i;
                leg.ticket == Ticket::Secret
                    && rounds
                        .next_reveal(played_in)
                        .is_some_and(|reveal| reveal <= played_in + 1)
            })
            .count() as f64;

        let double = if mv.is_double() && !threatened {
            w.unforced_double
        } else {
            0.0
        };

        w.wasted_secret * wasted_secrets + double
    }
}

impl Player for EvasionAi {
    fn make_move(&mut self, view: &GameView<'_>, location: Location, moves: &[Move], reply: MoveReply) {
        if let Some(mv) = self.choose(view, location, moves) {
            reply.send(mv);
        }
    }
}
