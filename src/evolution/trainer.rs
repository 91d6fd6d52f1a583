use crate::evolution::config::{OpponentSpec, SearchConfig};
use crate::evolution::self_play::play_training_game;
use crate::game::board::create_board_empty;
use crate::game::player::Player;
use crate::neural::network::{instantiate, Network};
use crate::neural::train::train;
use crate::strategy::bandit::BanditStrategy;
use crate::strategy::network_policy::{NetworkPolicy, NetworkStrategy};
use crate::strategy::random::RandomStrategy;
use crate::strategy::Strategy;
use crate::Result;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::sync::Arc;
use std::time::Duration;

/// Builds an opponent from its pool entry, playing `side`.
pub fn build_opponent(spec: &OpponentSpec, side: Player, seed: u64) -> Box<dyn Strategy> {
    match spec {
        OpponentSpec::Random => Box::new(RandomStrategy::new(seed)),
        OpponentSpec::Bandit { time_budget_ms, exploration_constant } => Box::new(
            BanditStrategy::new(
                side,
                Duration::from_millis(*time_budget_ms),
                *exploration_constant,
                seed,
            ),
        ),
    }
}

/// Instantiates a network for `topology` and lightly trains it: a fixed
/// number of self-play games, each against an opponent drawn uniformly from
/// the configured pool, training on each finished game's labelled states.
/// All randomness flows from `seed`, so results are independent of how
/// members are scheduled across workers.
pub fn train_member(
    topology: &[usize],
    side: Player,
    config: &SearchConfig,
    seed: u64,
) -> Result<Network> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = instantiate(config.input_size(), topology, &mut rng);
    let mut board = create_board_empty(config.board_width, config.board_height);

    for _ in 0..config.training_games {
        let mut opponent: Box<dyn Strategy> = if config.opponents.is_empty() {
            Box::new(RandomStrategy::new(rng.random()))
        } else {
            let spec = &config.opponents[rng.random_range(0..config.opponents.len())];
            build_opponent(spec, side.opponent(), rng.random())
        };
        let mut own = NetworkStrategy::new(
            Arc::new(network.clone()),
            side,
            NetworkPolicy::MaximizeWin,
            config.slots,
        );

        let examples = match side {
            Player::A => {
                play_training_game(&mut board, &mut own, opponent.as_mut(), &config.slots)?
            }
            Player::B => {
                play_training_game(&mut board, opponent.as_mut(), &mut own, &config.slots)?
            }
        };
        network = train(network, &examples, config.epochs);
    }
    Ok(network)
}
