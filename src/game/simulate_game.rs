use crate::game::apply_move::apply_move;
use crate::game::board::Board;
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::player::Winner;
use crate::Result;
use rand::{Rng, RngExt};

/// Plays uniformly random legal moves on `board` until the position is
/// terminal and returns the outcome. Used as the rollout evaluator of the
/// bandit strategy; callers pass a clone of the live board.
pub fn simulate_game<R: Rng>(board: &mut Board, rng: &mut R) -> Result<Winner> {
    while !board.is_terminal {
        let legal_moves = get_legal_moves(board);
        let column = legal_moves[rng.random_range(0..legal_moves.len())];
        apply_move(board, column)?;
    }
    // A terminal board always carries a winner; a full board without a line
    // was marked a draw by apply_move.
    Ok(board.winner.unwrap_or(Winner::Draw))
}
