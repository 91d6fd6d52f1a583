use crate::evolution::config::SearchConfig;
use crate::evolution::self_play::play_game;
use crate::game::board::create_board_empty;
use crate::game::player::{Player, Winner};
use crate::neural::network::Network;
use crate::strategy::network_policy::{NetworkPolicy, NetworkStrategy};
use crate::Result;
use rayon::prelude::*;
use std::sync::Arc;

/// Round-robin tournament: every member of population A plays every member of
/// population B exactly once, both sides using MaximizeWin strategies over
/// their trained networks. A win scores 1, a draw half a win to both sides.
///
/// Pairings run on the rayon pool; each game owns its board and produces its
/// own outcome, and tallies are accumulated only after all games finish, so
/// the result is identical to a sequential run.
pub fn run_tournament(
    population_a: &[Arc<Network>],
    population_b: &[Arc<Network>],
    config: &SearchConfig,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let pairings: Vec<(usize, usize)> = (0..population_a.len())
        .flat_map(|a| (0..population_b.len()).map(move |b| (a, b)))
        .collect();

    let outcomes: Vec<Result<(usize, usize, Winner)>> = pairings
        .par_iter()
        .map(|&(a, b)| {
            let mut board = create_board_empty(config.board_width, config.board_height);
            let mut player_a = NetworkStrategy::new(
                Arc::clone(&population_a[a]),
                Player::A,
                NetworkPolicy::MaximizeWin,
                config.slots,
            );
            let mut player_b = NetworkStrategy::new(
                Arc::clone(&population_b[b]),
                Player::B,
                NetworkPolicy::MaximizeWin,
                config.slots,
            );
            let winner = play_game(&mut board, &mut player_a, &mut player_b)?;
            Ok((a, b, winner))
        })
        .collect();

    let mut wins_a = vec![0.0; population_a.len()];
    let mut wins_b = vec![0.0; population_b.len()];
    for outcome in outcomes {
        let (a, b, winner) = outcome?;
        match winner {
            Winner::PlayerA => wins_a[a] += 1.0,
            Winner::PlayerB => wins_b[b] += 1.0,
            Winner::Draw => {
                wins_a[a] += 0.5;
                wins_b[b] += 0.5;
            }
        }
    }
    Ok((wins_a, wins_b))
}
