use crate::game::apply_move::apply_move;
use crate::game::board::Board;
use crate::game::get_legal_moves::get_legal_moves;
use crate::game::player::{Player, Winner};
use crate::game::simulate_game::simulate_game;
use crate::strategy::Strategy;
use crate::{DropFourError, Result};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::time::{Duration, Instant};

/// Clock abstraction so the search budget can be tested without wall-clock
/// flakiness.
pub trait Clock {
    fn now(&mut self) -> Instant;
}

/// Wall clock used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&mut self) -> Instant {
        Instant::now()
    }
}

/// Per-arm accumulator of the one-ply bandit search.
struct Arm {
    reward_sum: f64,
    visits: u32,
}

/// Time-budgeted UCB1 search over the legal moves of the current position.
/// Each arm is evaluated by a uniformly random rollout to a terminal state.
/// The budget is advisory: it is re-checked only between rollouts, so a
/// rollout in progress always runs to completion, and a zero budget still
/// performs exactly one evaluation pass.
pub struct BanditStrategy<C: Clock = MonotonicClock> {
    side: Player,
    time_budget: Duration,
    exploration_constant: f64,
    rng: StdRng,
    clock: C,
}

impl BanditStrategy<MonotonicClock> {
    pub fn new(side: Player, time_budget: Duration, exploration_constant: f64, seed: u64) -> Self {
        Self::with_clock(side, time_budget, exploration_constant, seed, MonotonicClock)
    }
}

impl<C: Clock> BanditStrategy<C> {
    pub fn with_clock(
        side: Player,
        time_budget: Duration,
        exploration_constant: f64,
        seed: u64,
        clock: C,
    ) -> Self {
        BanditStrategy {
            side,
            time_budget,
            exploration_constant,
            rng: StdRng::seed_from_u64(seed),
            clock,
        }
    }
}

impl<C: Clock> Strategy for BanditStrategy<C> {
    fn get_move(&mut self, board: &Board) -> Result<usize> {
        if board.is_terminal {
            return Err(DropFourError::NoMovesAvailable);
        }
        let legal_moves = get_legal_moves(board);
        if legal_moves.is_empty() {
            return Err(DropFourError::NoMovesAvailable);
        }

        let mut arms: Vec<Arm> = legal_moves
            .iter()
            .map(|_| Arm { reward_sum: 0.0, visits: 0 })
            .collect();
        let start = self.clock.now();

        loop {
            let arm_index = select_arm(&arms, self.exploration_constant);
            let mut scratch = board.clone();
            apply_move(&mut scratch, legal_moves[arm_index])?;

            // A proven immediate win needs no further exploration.
            if scratch.is_terminal && scratch.winner == Some(Winner::from_player(self.side)) {
                return Ok(legal_moves[arm_index]);
            }

            let winner = if scratch.is_terminal {
                scratch.winner.unwrap_or(Winner::Draw)
            } else {
                simulate_game(&mut scratch, &mut self.rng)?
            };
            arms[arm_index].reward_sum += reward_for(winner, self.side);
            arms[arm_index].visits += 1;

            if self.clock.now().duration_since(start) >= self.time_budget {
                break;
            }
        }

        match best_mean_arm(&arms) {
            Ok(arm_index) => Ok(legal_moves[arm_index]),
            Err(err) => {
                // Only reachable when no arm was ever visited.
                log::warn!("bandit search returned no evaluations ({err}), picking a random legal move");
                Ok(legal_moves[self.rng.random_range(0..legal_moves.len())])
            }
        }
    }
}

fn reward_for(winner: Winner, side: Player) -> f64 {
    if winner == Winner::Draw {
        0.0
    } else if winner.is_win_for(side) {
        1.0
    } else {
        -1.0
    }
}

/// UCB1 priority scan. Unvisited arms take absolute priority; visited arms
/// score `mean reward + exploration_constant / visits` (the exploration term
/// runs over the raw visit count). Ties go to the lowest move index.
fn select_arm(arms: &[Arm], exploration_constant: f64) -> usize {
    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (index, arm) in arms.iter().enumerate() {
        let score = if arm.visits == 0 {
            f64::INFINITY
        } else {
            arm.reward_sum / arm.visits as f64 + exploration_constant / arm.visits as f64
        };
        if score > best_score {
            best_index = index;
            best_score = score;
        }
    }
    best_index
}

/// Final ranking by mean reward over visited arms only; the ratio is
/// ill-defined for unvisited arms.
fn best_mean_arm(arms: &[Arm]) -> Result<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, arm) in arms.iter().enumerate() {
        if arm.visits == 0 {
            continue;
        }
        let mean = arm.reward_sum / arm.visits as f64;
        if best.map_or(true, |(_, best_mean)| mean > best_mean) {
            best = Some((index, mean));
        }
    }
    best.map(|(index, _)| index)
        .ok_or(DropFourError::SearchExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::create_board_empty;
    use assert_matches::assert_matches;

    /// Deterministic clock stepping a fixed amount per observation.
    struct SteppingClock {
        now: Instant,
        step: Duration,
    }

    impl SteppingClock {
        fn new(step: Duration) -> Self {
            SteppingClock { now: Instant::now(), step }
        }
    }

    impl Clock for SteppingClock {
        fn now(&mut self) -> Instant {
            let observed = self.now;
            self.now += self.step;
            observed
        }
    }

    #[test]
    fn unvisited_arms_have_absolute_priority_with_lowest_index_first() {
        let arms = vec![
            Arm { reward_sum: 5.0, visits: 1 },
            Arm { reward_sum: 0.0, visits: 0 },
            Arm { reward_sum: 0.0, visits: 0 },
        ];
        assert_eq!(select_arm(&arms, 50.0), 1);
    }

    #[test]
    fn visited_arms_score_mean_plus_exploration_over_visits() {
        let arms = vec![
            Arm { reward_sum: 1.0, visits: 4 }, // 0.25 + 2/4 = 0.75
            Arm { reward_sum: 0.5, visits: 1 }, // 0.5 + 2/1 = 2.5
        ];
        assert_eq!(select_arm(&arms, 2.0), 1);
    }

    #[test]
    fn final_ranking_excludes_unvisited_arms() {
        let arms = vec![
            Arm { reward_sum: 0.0, visits: 0 },
            Arm { reward_sum: -1.0, visits: 2 },
            Arm { reward_sum: 1.0, visits: 2 },
        ];
        assert_eq!(best_mean_arm(&arms).unwrap(), 2);
    }

    #[test]
    fn final_ranking_with_no_visits_is_search_exhausted() {
        let arms = vec![Arm { reward_sum: 0.0, visits: 0 }];
        assert_matches!(best_mean_arm(&arms), Err(DropFourError::SearchExhausted));
    }

    #[test]
    fn zero_budget_still_evaluates_once() {
        let board = create_board_empty(7, 6);
        let clock = SteppingClock::new(Duration::from_millis(1));
        let mut strategy =
            BanditStrategy::with_clock(Player::A, Duration::ZERO, 50.0, 4, clock);

        let column = strategy.get_move(&board).unwrap();
        assert!(column < 7);
    }

    #[test]
    fn terminal_board_is_rejected() {
        let mut board = create_board_empty(7, 6);
        for column in [0, 1, 0, 1, 0, 1, 0] {
            crate::game::apply_move::apply_move(&mut board, column).unwrap();
        }
        let mut strategy = BanditStrategy::new(Player::B, Duration::from_millis(5), 50.0, 4);

        assert_matches!(strategy.get_move(&board), Err(DropFourError::NoMovesAvailable));
    }
}
