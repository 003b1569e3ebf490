use std::collections::BTreeMap;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::GameBoard;
use crate::player::Player;
use crate::r#move::Move;

/// Anything that can pick a move for one player given a board snapshot.
pub trait Agent {
    fn name(&self) -> &str;

    fn player(&self) -> Player;

    /// Returns `None` only when the board has no open column.
    fn select_move(&mut self, board: &GameBoard) -> Option<Move>;
}

/// Picks uniformly among the open columns.
pub struct RandomAgent {
    player: Player,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(player: Player, seed: u64) -> Self {
        RandomAgent {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, board: &GameBoard) -> Option<Move> {
        board
            .available_moves_for(self.player)
            .choose(&mut self.rng)
            .copied()
    }
}

pub type AgentFactory = fn(Player, u64) -> Box<dyn Agent>;

/// Agents available by name. Entries are registered in code; nothing is
/// discovered at runtime.
#[derive(Clone, Default)]
pub struct AgentRegistry {
    factories: BTreeMap<String, AgentFactory>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register("random", |player, seed| {
            Box::new(RandomAgent::new(player, seed))
        });
        registry
    }

    /// Adds or replaces the factory for `name`.
    pub fn register(&mut self, name: &str, factory: AgentFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn create(&self, name: &str, player: Player, seed: u64) -> Option<Box<dyn Agent>> {
        self.factories.get(name).map(|factory| factory(player, seed))
    }

    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}
