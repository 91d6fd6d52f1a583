use crate::game::board::Board;
use crate::game::player::{Player, Winner};
use crate::{DropFourError, Result};

/// The four line directions a completed row of four can run through.
const LINE_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Drops the current player's piece into `column`, placing it in the lowest
/// empty cell, then evaluates termination. Fails with
/// [`DropFourError::InvalidMove`] when the column is full or the game is
/// already over. Callers that need to keep the original position clone the
/// board first.
pub fn apply_move(board: &mut Board, column: usize) -> Result<()> {
    if board.is_terminal || column >= board.width {
        return Err(DropFourError::InvalidMove(column));
    }
    let row = board.cells[column]
        .iter()
        .position(|cell| cell.is_none())
        .ok_or(DropFourError::InvalidMove(column))?;

    let mover = board.current_player();
    board.cells[column][row] = Some(mover);
    board.turn_count += 1;

    if has_line_through(board, column, row, mover) {
        board.is_terminal = true;
        board.winner = Some(Winner::from_player(mover));
    } else if board_is_full(board) {
        board.is_terminal = true;
        board.winner = Some(Winner::Draw);
    }
    Ok(())
}

fn board_is_full(board: &Board) -> bool {
    board
        .cells
        .iter()
        .all(|column| column.iter().all(|cell| cell.is_some()))
}

/// Scans both ways along each line direction from the just-placed cell.
fn has_line_through(board: &Board, column: usize, row: usize, mover: Player) -> bool {
    LINE_DIRECTIONS.iter().any(|&(dc, dr)| {
        let run = 1
            + count_towards(board, column, row, dc, dr, mover)
            + count_towards(board, column, row, -dc, -dr, mover);
        run >= 4
    })
}

fn count_towards(
    board: &Board,
    column: usize,
    row: usize,
    dc: isize,
    dr: isize,
    mover: Player,
) -> usize {
    let mut count = 0;
    let mut c = column as isize + dc;
    let mut r = row as isize + dr;
    while c >= 0
        && r >= 0
        && (c as usize) < board.width
        && (r as usize) < board.height
        && board.cells[c as usize][r as usize] == Some(mover)
    {
        count += 1;
        c += dc;
        r += dr;
    }
    count
}
