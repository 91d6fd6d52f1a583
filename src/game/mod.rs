pub mod apply_move;
pub mod board;
pub mod get_legal_moves;
pub mod player;
pub mod simulate_game;
