//! End-to-end test of the evolutionary topology search on a small board with
//! a cheap opponent pool.

use drop_four::evolution::config::{OpponentSpec, SearchConfig};
use drop_four::evolution::search::run_topology_search;
use drop_four::evolution::tournament::run_tournament;
use drop_four::evolution::trainer::train_member;
use drop_four::game::player::Player;
use std::sync::Arc;

fn quick_config() -> SearchConfig {
    SearchConfig {
        generations: 2,
        population_size: 4,
        survivor_count: 2,
        max_layers: 3,
        max_width: 6,
        training_games: 2,
        epochs: 2,
        board_width: 4,
        board_height: 3,
        opponents: vec![OpponentSpec::Random],
        ..SearchConfig::default()
    }
}

#[test]
fn search_returns_one_topology_per_side_within_bounds() {
    let config = quick_config();
    let (best_a, best_b) = run_topology_search(&config, 9).unwrap();

    for topology in [&best_a, &best_b] {
        assert!(topology.len() <= config.max_layers);
        assert!(topology.iter().all(|&width| (1..=config.max_width).contains(&width)));
    }
}

#[test]
fn tournament_tallies_match_across_repeated_runs() {
    let config = quick_config();
    let population_a: Vec<_> = (0..3)
        .map(|i| Arc::new(train_member(&[4], Player::A, &config, 1000 + i).unwrap()))
        .collect();
    let population_b: Vec<_> = (0..3)
        .map(|i| Arc::new(train_member(&[3], Player::B, &config, 2000 + i).unwrap()))
        .collect();

    let first = run_tournament(&population_a, &population_b, &config).unwrap();
    let second = run_tournament(&population_a, &population_b, &config).unwrap();
    assert_eq!(first, second);
}
