use crate::evolution::config::SearchConfig;
use crate::evolution::mutation::{mutate_population, random_topology, Topology};
use crate::evolution::tournament::run_tournament;
use crate::evolution::trainer::train_member;
use crate::game::player::Player;
use crate::neural::network::Network;
use crate::{DropFourError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Derives the training seed of one population member. Seeds depend only on
/// (base seed, generation, side, index), never on scheduling, so per-member
/// results are reproducible regardless of worker interleaving.
fn member_seed(base: u64, generation: usize, side: Player, index: usize) -> u64 {
    let side_tag: u64 = match side {
        Player::A => 1,
        Player::B => 2,
    };
    base ^ (generation as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ side_tag.wrapping_mul(0xD1B5_4A32_D192_ED03)
        ^ (index as u64).wrapping_mul(0x94D0_49BB_1331_11EB)
}

/// Trains one network per topology on the rayon pool. A member whose training
/// fails is logged and dropped from this generation; the run continues with
/// the rest.
fn train_population(
    topologies: &[Topology],
    side: Player,
    config: &SearchConfig,
    base_seed: u64,
    generation: usize,
) -> (Vec<Topology>, Vec<Arc<Network>>) {
    let trained: Vec<(usize, Result<Network>)> = topologies
        .par_iter()
        .enumerate()
        .map(|(index, topology)| {
            let seed = member_seed(base_seed, generation, side, index);
            (index, train_member(topology, side, config, seed))
        })
        .collect();

    let mut kept_topologies = Vec::with_capacity(topologies.len());
    let mut kept_networks = Vec::with_capacity(topologies.len());
    for (index, outcome) in trained {
        match outcome {
            Ok(network) => {
                kept_topologies.push(topologies[index].clone());
                kept_networks.push(Arc::new(network));
            }
            Err(err) => {
                log::error!(
                    "dropping {side:?} member {index} ({:?}) for this generation: {err}",
                    topologies[index]
                );
            }
        }
    }
    (kept_topologies, kept_networks)
}

/// Stable descending sort by win tally; members with equal tallies keep their
/// original order.
fn select_survivors(topologies: &[Topology], wins: &[f64], survivor_count: usize) -> Vec<Topology> {
    let mut order: Vec<usize> = (0..topologies.len()).collect();
    order.sort_by(|&a, &b| wins[b].partial_cmp(&wins[a]).unwrap_or(Ordering::Equal));
    order
        .into_iter()
        .take(survivor_count)
        .map(|index| topologies[index].clone())
        .collect()
}

/// Runs the full generational search and returns the best topology of each
/// population after the final tournament.
pub fn run_topology_search(config: &SearchConfig, seed: u64) -> Result<(Topology, Topology)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut topologies_a: Vec<Topology> = (0..config.population_size)
        .map(|_| random_topology(&mut rng, config.max_layers, config.max_width))
        .collect();
    let mut topologies_b: Vec<Topology> = (0..config.population_size)
        .map(|_| random_topology(&mut rng, config.max_layers, config.max_width))
        .collect();

    for generation in 0..config.generations {
        log::info!(
            "generation {generation}: leading A {:?}, leading B {:?}",
            topologies_a.first(),
            topologies_b.first()
        );

        let (kept_a, networks_a) =
            train_population(&topologies_a, Player::A, config, seed, generation);
        let (kept_b, networks_b) =
            train_population(&topologies_b, Player::B, config, seed, generation);

        let (wins_a, wins_b) = run_tournament(&networks_a, &networks_b, config)?;

        let survivors_a = select_survivors(&kept_a, &wins_a, config.survivor_count);
        let survivors_b = select_survivors(&kept_b, &wins_b, config.survivor_count);

        topologies_a = mutate_population(&survivors_a, config, &mut rng);
        topologies_b = mutate_population(&survivors_b, config, &mut rng);
    }

    // Final ranking pass over the last populations.
    let (kept_a, networks_a) =
        train_population(&topologies_a, Player::A, config, seed, config.generations);
    let (kept_b, networks_b) =
        train_population(&topologies_b, Player::B, config, seed, config.generations);
    let (wins_a, wins_b) = run_tournament(&networks_a, &networks_b, config)?;

    let best_a = select_survivors(&kept_a, &wins_a, 1)
        .into_iter()
        .next()
        .ok_or(DropFourError::SearchExhausted)?;
    let best_b = select_survivors(&kept_b, &wins_b, 1)
        .into_iter()
        .next()
        .ok_or(DropFourError::SearchExhausted)?;
    Ok((best_a, best_b))
}
