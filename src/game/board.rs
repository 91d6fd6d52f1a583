use crate::game::player::{Player, Winner};
use serde::{Deserialize, Serialize};

pub const STANDARD_WIDTH: usize = 7;
pub const STANDARD_HEIGHT: usize = 6;

/// Gravity-fill game board. `cells[column][row]` with row 0 at the bottom of
/// the column; the board is mutated only through
/// [`apply_move`](crate::game::apply_move::apply_move) and deep-cloned
/// whenever a strategy explores a hypothetical continuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<Option<Player>>>,
    pub turn_count: usize,
    pub is_terminal: bool,
    pub winner: Option<Winner>,
}

pub fn create_board_empty(width: usize, height: usize) -> Board {
    Board {
        width,
        height,
        cells: vec![vec![None; height]; width],
        turn_count: 0,
        is_terminal: false,
        winner: None,
    }
}

impl Board {
    /// Side to move. Player A moves on even turn counts.
    pub fn current_player(&self) -> Player {
        if self.turn_count % 2 == 0 {
            Player::A
        } else {
            Player::B
        }
    }

    /// Clears the grid and all game progress so the allocation can be reused
    /// across self-play games.
    pub fn reset(&mut self) {
        for column in &mut self.cells {
            column.fill(None);
        }
        self.turn_count = 0;
        self.is_terminal = false;
        self.winner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_pieces_and_player_a_to_move() {
        let board = create_board_empty(STANDARD_WIDTH, STANDARD_HEIGHT);
        assert_eq!(board.cells.len(), 7);
        assert!(board.cells.iter().all(|column| column.iter().all(|cell| cell.is_none())));
        assert_eq!(board.current_player(), Player::A);
        assert!(!board.is_terminal);
        assert_eq!(board.winner, None);
    }

    #[test]
    fn reset_clears_progress() {
        let mut board = create_board_empty(2, 2);
        board.cells[0][0] = Some(Player::A);
        board.turn_count = 3;
        board.is_terminal = true;
        board.winner = Some(Winner::Draw);

        board.reset();

        assert_eq!(board, create_board_empty(2, 2));
    }
}
