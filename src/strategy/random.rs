use crate::game::board::Board;
use crate::game::get_legal_moves::get_legal_moves;
use crate::strategy::Strategy;
use crate::{DropFourError, Result};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Uniform choice over the legal moves. Baseline opponent for self-play
/// training.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        RandomStrategy { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Strategy for RandomStrategy {
    fn get_move(&mut self, board: &Board) -> Result<usize> {
        if board.is_terminal {
            return Err(DropFourError::NoMovesAvailable);
        }
        let legal_moves = get_legal_moves(board);
        if legal_moves.is_empty() {
            return Err(DropFourError::NoMovesAvailable);
        }
        Ok(legal_moves[self.rng.random_range(0..legal_moves.len())])
    }
}
