//! Game configuration and validation.
//!
//! A game is configured with:
//! - a `RoundSchedule` (which rounds reveal Mr. X)
//! - a `TransportGraph` (the board)
//! - one `PlayerConfiguration` for Mr. X and one or more for detectives
//!
//! `GameConfig::validate` enforces every construction rule up front; the
//! engine never re-checks them. Configurations are plain serde data so they
//! can be loaded from any format the embedding application prefers.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::error::ConfigError;
use super::graph::{Location, TransportGraph};
use super::schedule::RoundSchedule;
use super::ticket::{Ticket, TicketLedger};

/// Starting setup for one player.
///
/// `tickets` must name all five ticket kinds, even those held zero times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfiguration {
    pub colour: Colour,
    pub location: Location,
    pub tickets: BTreeMap<Ticket, u32>,
}

impl PlayerConfiguration {
    /// Create a configuration from `(ticket, count)` pairs.
    pub fn new(
        colour: Colour,
        location: Location,
        tickets: impl IntoIterator<Item = (Ticket, u32)>,
    ) -> Self {
        Self {
            colour,
            location,
            tickets: tickets.into_iter().collect(),
        }
    }

    /// Mr. X with the board game's starting tickets.
    #[must_use]
    pub fn mr_x(location: Location) -> Self {
        Self::new(
            Colour::MR_X,
            location,
            [
                (Ticket::Taxi, 4),
                (Ticket::Bus, 3),
                (Ticket::Underground, 3),
                (Ticket::Secret, 5),
                (Ticket::Double, 2),
            ],
        )
    }

    /// A detective with the board game's starting tickets.
    #[must_use]
    pub fn detective(colour: Colour, location: Location) -> Self {
        Self::new(
            colour,
            location,
            [
                (Ticket::Taxi, 11),
                (Ticket::Bus, 8),
                (Ticket::Underground, 4),
                (Ticket::Secret, 0),
                (Ticket::Double, 0),
            ],
        )
    }

    /// Override one ticket count (builder pattern).
    #[must_use]
    pub fn with_tickets(mut self, ticket: Ticket, count: u32) -> Self {
        self.tickets.insert(ticket, count);
        self
    }

    /// Count of a ticket kind, 0 if absent.
    #[must_use]
    pub fn count(&self, ticket: Ticket) -> u32 {
        self.tickets.get(&ticket).copied().unwrap_or(0)
    }

    /// The ledger this configuration starts with.
    #[must_use]
    pub fn ledger(&self) -> TicketLedger {
        TicketLedger::from_counts(self.tickets.iter().map(|(&t, &n)| (t, n)))
    }
}

/// Full game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rounds: RoundSchedule,
    pub graph: TransportGraph,
    pub mr_x: PlayerConfiguration,
    pub detectives: Vec<PlayerConfiguration>,
}

impl GameConfig {
    /// Check every construction rule. The first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }
        if self.graph.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }
        if !self.mr_x.colour.is_mr_x() {
            return Err(ConfigError::MrXNotBlack(self.mr_x.colour));
        }
        if self.detectives.is_empty() {
            return Err(ConfigError::NoDetectives);
        }

        let mut locations = FxHashSet::default();
        let mut colours = FxHashSet::default();

        for config in self.players() {
            if !locations.insert(config.location) {
                return Err(ConfigError::DuplicateLocation(config.location));
            }
            if !colours.insert(config.colour) {
                return Err(ConfigError::DuplicateColour(config.colour));
            }
            if let Some(&ticket) = Ticket::ALL.iter().find(|t| !config.tickets.contains_key(t)) {
                return Err(ConfigError::MissingTickets {
                    colour: config.colour,
                    ticket,
                });
            }
            if config.colour.is_detective() {
                let held = Ticket::ALL
                    .into_iter()
                    .find(|&t| t.is_mr_x_only() && config.count(t) > 0);
                match held {
                    Some(Ticket::Double) => {
                        return Err(ConfigError::DetectiveHasDoubleTickets(config.colour))
                    }
                    Some(_) => return Err(ConfigError::DetectiveHasSecretTickets(config.colour)),
                    None => {}
                }
            }
            if !self.graph.contains(config.location) {
                return Err(ConfigError::UnknownLocation {
                    colour: config.colour,
                    location: config.location,
                });
            }
        }

        Ok(())
    }

    /// All player configurations in turn order: Mr. X, then detectives.
    pub fn players(&self) -> impl Iterator<Item = &PlayerConfiguration> {
        std::iter::once(&self.mr_x).chain(self.detectives.iter())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        1 + self.detectives.len()
    }
}

/// Builder for a validated `GameConfig`.
///
/// ```
/// use scotland_yard::core::{
///     Colour, GameConfigBuilder, Location, PlayerConfiguration, RoundSchedule, Transport,
///     TransportGraph,
/// };
///
/// let graph = TransportGraph::from_links([(1, 2, Transport::Taxi), (2, 3, Transport::Taxi)]);
/// let config = GameConfigBuilder::new(RoundSchedule::new(vec![true, false]), graph)
///     .mr_x(PlayerConfiguration::mr_x(Location(1)))
///     .detective(PlayerConfiguration::detective(Colour::Red, Location(3)))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.player_count(), 2);
/// ```
pub struct GameConfigBuilder {
    rounds: RoundSchedule,
    graph: TransportGraph,
    mr_x: Option<PlayerConfiguration>,
    detectives: Vec<PlayerConfiguration>,
}

impl GameConfigBuilder {
    pub fn new(rounds: impl Into<RoundSchedule>, graph: TransportGraph) -> Self {
        Self {
            rounds: rounds.into(),
            graph,
            mr_x: None,
            detectives: Vec::new(),
        }
    }

    pub fn mr_x(mut self, config: PlayerConfiguration) -> Self {
        self.mr_x = Some(config);
        self
    }

    pub fn detective(mut self, config: PlayerConfiguration) -> Self {
        self.detectives.push(config);
        self
    }

    pub fn detectives(mut self, configs: impl IntoIterator<Item = PlayerConfiguration>) -> Self {
        self.detectives.extend(configs);
        self
    }

    /// Validate and build. A missing Mr. X is reported as a player count
    /// mismatch.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        let mr_x = self.mr_x.ok_or(ConfigError::PlayerCountMismatch {
            expected: self.detectives.len() + 1,
            found: self.detectives.len(),
        })?;
        let config = GameConfig {
            rounds: self.rounds,
            graph: self.graph,
            mr_x,
            detectives: self.detectives,
        };
        config.validate()?;
        Ok(config)
    }
}
