use crate::evolution::mutation::OperatorWeights;
use crate::neural::encoding::OutcomeSlots;
use serde::{Deserialize, Serialize};

/// One entry of the opponent pool used during self-play training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum OpponentSpec {
    Random,
    Bandit {
        time_budget_ms: u64,
        exploration_constant: f64,
    },
}

/// Full configuration of a topology search run. Passed explicitly; the core
/// never reads the environment or files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub generations: usize,
    pub population_size: usize,
    pub survivor_count: usize,
    /// Upper bound on hidden-layer count of any topology.
    pub max_layers: usize,
    /// Upper bound on any hidden-layer width.
    pub max_width: usize,
    /// Self-play games per population member per generation.
    pub training_games: usize,
    /// Training epochs over each finished game's examples.
    pub epochs: usize,
    pub board_width: usize,
    pub board_height: usize,
    pub opponents: Vec<OpponentSpec>,
    pub operator_weights: OperatorWeights,
    pub slots: OutcomeSlots,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            generations: 20,
            population_size: 25,
            survivor_count: 5,
            max_layers: 6,
            max_width: 42,
            training_games: 25,
            epochs: 100,
            board_width: 7,
            board_height: 6,
            opponents: vec![
                OpponentSpec::Random,
                OpponentSpec::Random,
                OpponentSpec::Bandit { time_budget_ms: 500, exploration_constant: 50.0 },
                OpponentSpec::Bandit { time_budget_ms: 500, exploration_constant: 5.0 },
                OpponentSpec::Bandit { time_budget_ms: 500, exploration_constant: 500.0 },
            ],
            operator_weights: OperatorWeights::default(),
            slots: OutcomeSlots::default(),
        }
    }
}

impl SearchConfig {
    /// Network input size: one entry per board cell.
    pub fn input_size(&self) -> usize {
        self.board_width * self.board_height
    }
}
