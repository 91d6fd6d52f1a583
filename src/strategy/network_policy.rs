use crate::game::apply_move::apply_move;
use crate::game::board::Board;
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::player::Player;
use crate::neural::encoding::{encode_board, OutcomeSlots};
use crate::neural::network::Network;
use crate::neural::predict::predict;
use crate::strategy::Strategy;
use crate::{DropFourError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a network strategy ranks the predicted outcome of each legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkPolicy {
    /// Maximize the predicted probability that this strategy's side wins.
    MaximizeWin,
    /// Minimize the predicted probability that the opponent wins.
    MinimizeLoss,
    /// Minimize the opponent's predicted win probability under the mirrored
    /// slot convention, for callers that read the output slots the other way
    /// around.
    MinimizeLossInverted,
}

/// Evaluates every legal move's resulting position through the network and
/// picks the move whose prediction is best by the configured policy. The
/// network is shared read-only; trained networks are immutable values.
pub struct NetworkStrategy {
    network: Arc<Network>,
    side: Player,
    policy: NetworkPolicy,
    slots: OutcomeSlots,
}

impl NetworkStrategy {
    pub fn new(network: Arc<Network>, side: Player, policy: NetworkPolicy, slots: OutcomeSlots) -> Self {
        NetworkStrategy { network, side, policy, slots }
    }

    /// Higher is better for every policy; minimizing policies negate.
    fn score(&self, prediction: &[f64]) -> f64 {
        match self.policy {
            NetworkPolicy::MaximizeWin => prediction[self.slots.win_slot(self.side)],
            NetworkPolicy::MinimizeLoss => {
                -prediction[self.slots.win_slot(self.side.opponent())]
            }
            NetworkPolicy::MinimizeLossInverted => {
                -prediction[self.slots.inverted().win_slot(self.side.opponent())]
            }
        }
    }
}

impl Strategy for NetworkStrategy {
    fn get_move(&mut self, board: &Board) -> Result<usize> {
        if board.is_terminal {
            return Err(DropFourError::NoMovesAvailable);
        }
        let legal_moves = get_legal_moves(board);
        if legal_moves.is_empty() {
            return Err(DropFourError::NoMovesAvailable);
        }

        let mut best_move = legal_moves[0];
        let mut best_score = f64::NEG_INFINITY;
        for &column in &legal_moves {
            let mut scratch = board.clone();
            apply_move(&mut scratch, column)?;
            let prediction = predict(&self.network, &encode_board(&scratch));
            let score = self.score(&prediction);
            if score > best_score {
                best_move = column;
                best_score = score;
            }
        }
        Ok(best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::apply_move::apply_move;
    use crate::game::board::create_board_empty;
    use crate::neural::network::{instantiate, Layer, Node};
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Output layer whose first slot fires on the most recently filled cell
    /// of column 0, making move preferences predictable.
    fn column_zero_sensitive_network(input_size: usize) -> Network {
        let mut win_a_weights = vec![0.0; input_size];
        win_a_weights[0] = 4.0;
        Network {
            input_size,
            layers: vec![Layer {
                nodes: vec![
                    Node { weights: win_a_weights, bias: -2.0 },
                    Node { weights: vec![0.0; input_size], bias: 0.0 },
                    Node { weights: vec![0.0; input_size], bias: 0.0 },
                ],
            }],
        }
    }

    #[test]
    fn maximize_win_prefers_the_highest_predicted_win() {
        let board = create_board_empty(3, 2);
        let network = column_zero_sensitive_network(6);
        let mut strategy = NetworkStrategy::new(
            Arc::new(network),
            Player::A,
            NetworkPolicy::MaximizeWin,
            OutcomeSlots::default(),
        );

        // Only a move in column 0 lights up the win-A slot.
        assert_eq!(strategy.get_move(&board).unwrap(), 0);
    }

    #[test]
    fn minimize_loss_avoids_the_highest_predicted_opponent_win() {
        let mut board = create_board_empty(3, 2);
        apply_move(&mut board, 2).unwrap(); // A opens; B to move
        // Slot 0 (A's win slot, the opponent from B's perspective) fires when
        // a B piece lands on the bottom cell of column 0.
        let mut win_a_weights = vec![0.0; 6];
        win_a_weights[0] = -4.0;
        let network = Network {
            input_size: 6,
            layers: vec![Layer {
                nodes: vec![
                    Node { weights: win_a_weights, bias: -2.0 },
                    Node { weights: vec![0.0; 6], bias: 0.0 },
                    Node { weights: vec![0.0; 6], bias: 0.0 },
                ],
            }],
        };
        let mut strategy = NetworkStrategy::new(
            Arc::new(network),
            Player::B,
            NetworkPolicy::MinimizeLoss,
            OutcomeSlots::default(),
        );

        assert_ne!(strategy.get_move(&board).unwrap(), 0);
    }

    #[test]
    fn inverted_policy_reads_the_mirrored_slot() {
        let board = create_board_empty(3, 2);
        let network = column_zero_sensitive_network(6);
        // Under the mirrored convention slot 0 is B's win slot, so from A's
        // perspective the opponent (B) wins there; avoid column 0.
        let mut strategy = NetworkStrategy::new(
            Arc::new(network),
            Player::A,
            NetworkPolicy::MinimizeLossInverted,
            OutcomeSlots::default(),
        );

        assert_ne!(strategy.get_move(&board).unwrap(), 0);
    }

    #[test]
    fn terminal_board_is_rejected() {
        let mut board = create_board_empty(2, 2);
        for column in [0, 0, 1, 1] {
            apply_move(&mut board, column).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(9);
        let network = instantiate(4, &[], &mut rng);
        let mut strategy = NetworkStrategy::new(
            Arc::new(network),
            Player::A,
            NetworkPolicy::MaximizeWin,
            OutcomeSlots::default(),
        );

        assert_matches!(strategy.get_move(&board), Err(DropFourError::NoMovesAvailable));
    }
}
