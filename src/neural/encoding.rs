use crate::game::board::Board;
use crate::game::player::{Player, Winner};
use serde::{Deserialize, Serialize};

/// Flattened column-major board encoding used as network input: player A
/// cells map to 1.0, player B cells to -1.0, empty cells to 0.0. Length is
/// always `width * height`.
pub fn encode_board(board: &Board) -> Vec<f64> {
    board
        .cells
        .iter()
        .flat_map(|column| {
            column.iter().map(|cell| match cell {
                Some(Player::A) => 1.0,
                Some(Player::B) => -1.0,
                None => 0.0,
            })
        })
        .collect()
}

/// Maps game outcomes to output-layer slots. The mapping is explicit
/// configuration rather than a hard-coded convention because callers disagree
/// on which slot represents which side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSlots {
    pub win_a: usize,
    pub win_b: usize,
    pub draw: usize,
}

impl Default for OutcomeSlots {
    fn default() -> Self {
        OutcomeSlots { win_a: 0, win_b: 1, draw: 2 }
    }
}

impl OutcomeSlots {
    /// The output slot predicting a win for `side`.
    pub fn win_slot(&self, side: Player) -> usize {
        match side {
            Player::A => self.win_a,
            Player::B => self.win_b,
        }
    }

    /// The same mapping with the two win slots swapped.
    pub fn inverted(&self) -> OutcomeSlots {
        OutcomeSlots { win_a: self.win_b, win_b: self.win_a, draw: self.draw }
    }

    /// Target distribution for a finished game.
    pub fn target_for(&self, winner: Winner) -> [f64; 3] {
        let mut target = [0.0; 3];
        let slot = match winner {
            Winner::PlayerA => self.win_a,
            Winner::PlayerB => self.win_b,
            Winner::Draw => self.draw,
        };
        target[slot] = 1.0;
        target
    }
}
