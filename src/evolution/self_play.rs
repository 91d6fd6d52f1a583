use crate::game::apply_move::apply_move;
use crate::game::board::Board;
use crate::game::player::{Player, Winner};
use crate::neural::encoding::{encode_board, OutcomeSlots};
use crate::neural::train::TrainingExample;
use crate::strategy::Strategy;
use crate::Result;

/// Plays one full game between two strategies on a reused board and returns
/// the outcome. The board is reset before play; any strategy error aborts the
/// game and propagates.
pub fn play_game(
    board: &mut Board,
    player_a: &mut dyn Strategy,
    player_b: &mut dyn Strategy,
) -> Result<Winner> {
    board.reset();
    while !board.is_terminal {
        let column = match board.current_player() {
            Player::A => player_a.get_move(board)?,
            Player::B => player_b.get_move(board)?,
        };
        apply_move(board, column)?;
    }
    Ok(board.winner.unwrap_or(Winner::Draw))
}

/// Plays one full game, recording the flattened board encoding after every
/// accepted move. All recorded states are labelled with the terminal outcome,
/// yielding the supervised batch for one game of self-play training.
pub fn play_training_game(
    board: &mut Board,
    player_a: &mut dyn Strategy,
    player_b: &mut dyn Strategy,
    slots: &OutcomeSlots,
) -> Result<Vec<TrainingExample>> {
    board.reset();
    let mut states: Vec<Vec<f64>> = Vec::new();
    while !board.is_terminal {
        let column = match board.current_player() {
            Player::A => player_a.get_move(board)?,
            Player::B => player_b.get_move(board)?,
        };
        apply_move(board, column)?;
        states.push(encode_board(board));
    }

    let target = slots.target_for(board.winner.unwrap_or(Winner::Draw));
    Ok(states
        .into_iter()
        .map(|input| TrainingExample { input, target })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::create_board_empty;
    use crate::strategy::random::RandomStrategy;

    #[test]
    fn game_runs_to_a_terminal_outcome_on_a_reused_board() {
        let mut board = create_board_empty(7, 6);
        let mut player_a = RandomStrategy::new(1);
        let mut player_b = RandomStrategy::new(2);

        for _ in 0..5 {
            let winner = play_game(&mut board, &mut player_a, &mut player_b).unwrap();
            assert!(board.is_terminal);
            assert_eq!(board.winner, Some(winner));
        }
    }

    #[test]
    fn training_game_records_one_state_per_accepted_move() {
        let mut board = create_board_empty(7, 6);
        let mut player_a = RandomStrategy::new(3);
        let mut player_b = RandomStrategy::new(4);
        let slots = OutcomeSlots::default();

        let examples = play_training_game(&mut board, &mut player_a, &mut player_b, &slots).unwrap();

        assert_eq!(examples.len(), board.turn_count);
        let expected_target = slots.target_for(board.winner.unwrap());
        assert!(examples.iter().all(|example| example.target == expected_target));
        assert!(examples.iter().all(|example| example.input.len() == 42));
        // The last recorded state is the terminal position itself.
        assert_eq!(examples.last().unwrap().input, encode_board(&board));
    }
}
