pub mod bandit;
pub mod network_policy;
pub mod random;

use crate::game::board::Board;
use crate::Result;

/// A move-selection policy. `get_move` is read-only on its input board;
/// implementations explore hypothetical continuations on clones and never
/// disturb the live game.
pub trait Strategy {
    fn get_move(&mut self, board: &Board) -> Result<usize>;
}
