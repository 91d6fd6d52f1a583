use crate::game::board::Board;

/// Returns all columns that still have at least one empty cell, in ascending
/// column order.
pub fn get_legal_moves(board: &Board) -> Vec<usize> {
    (0..board.width)
        .filter(|&column| board.cells[column].iter().any(|cell| cell.is_none()))
        .collect()
}
