use crate::evolution::config::SearchConfig;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

/// Hidden-layer width sequence defining a network shape, independent of its
/// trained weights.
pub type Topology = Vec<usize>;

/// Draw weights of the five repopulation operators. Expected to sum to 1.0;
/// any remaining mass falls through to crossover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatorWeights {
    pub spawn: f64,
    pub insert: f64,
    pub delete: f64,
    pub replace: f64,
    pub crossover: f64,
}

impl Default for OperatorWeights {
    fn default() -> Self {
        OperatorWeights {
            spawn: 0.10,
            insert: 0.15,
            delete: 0.15,
            replace: 0.25,
            crossover: 0.35,
        }
    }
}

/// A random hidden-layer width in `[1, max_width]`.
pub fn random_width<R: Rng>(rng: &mut R, max_width: usize) -> usize {
    rng.random_range(1..=max_width.max(1))
}

/// A fresh random topology of fewer than `max_layers` hidden layers (possibly
/// none at all).
pub fn random_topology<R: Rng>(rng: &mut R, max_layers: usize, max_width: usize) -> Topology {
    if max_layers == 0 {
        return Topology::new();
    }
    let layer_count = rng.random_range(0..max_layers);
    (0..layer_count).map(|_| random_width(rng, max_width)).collect()
}

/// Refills a population from its survivors: the survivors carry over verbatim
/// and offspring are generated by weighted random draw over the five
/// operators until `population_size` is reached.
pub fn mutate_population<R: Rng>(
    survivors: &[Topology],
    config: &SearchConfig,
    rng: &mut R,
) -> Vec<Topology> {
    let mut population: Vec<Topology> = survivors.to_vec();
    while population.len() < config.population_size {
        population.push(spawn_offspring(survivors, config, rng));
    }
    population
}

fn spawn_offspring<R: Rng>(survivors: &[Topology], config: &SearchConfig, rng: &mut R) -> Topology {
    if survivors.is_empty() {
        return random_topology(rng, config.max_layers, config.max_width);
    }

    let weights = &config.operator_weights;
    let draw: f64 = rng.random();
    if draw < weights.spawn {
        random_topology(rng, config.max_layers, config.max_width)
    } else if draw < weights.spawn + weights.insert {
        insert_layer(pick(survivors, rng), config, rng)
    } else if draw < weights.spawn + weights.insert + weights.delete {
        delete_layer(pick(survivors, rng), rng)
    } else if draw < weights.spawn + weights.insert + weights.delete + weights.replace {
        replace_layer(pick(survivors, rng), config, rng)
    } else {
        crossover(pick(survivors, rng), pick(survivors, rng), config, rng)
    }
}

fn pick<'a, R: Rng>(survivors: &'a [Topology], rng: &mut R) -> &'a Topology {
    &survivors[rng.random_range(0..survivors.len())]
}

fn insert_layer<R: Rng>(parent: &Topology, config: &SearchConfig, rng: &mut R) -> Topology {
    let mut child = parent.clone();
    let index = rng.random_range(0..=child.len());
    child.insert(index, random_width(rng, config.max_width));
    child.truncate(config.max_layers);
    child
}

fn delete_layer<R: Rng>(parent: &Topology, rng: &mut R) -> Topology {
    let mut child = parent.clone();
    if !child.is_empty() {
        let index = rng.random_range(0..child.len());
        child.remove(index);
    }
    child
}

fn replace_layer<R: Rng>(parent: &Topology, config: &SearchConfig, rng: &mut R) -> Topology {
    if parent.is_empty() {
        return vec![random_width(rng, config.max_width)];
    }
    let mut child = parent.clone();
    let index = rng.random_range(0..child.len());
    child[index] = random_width(rng, config.max_width);
    child
}

/// Splices a prefix of one survivor onto a suffix of another, then trims back
/// to the layer bound by removing random layers.
fn crossover<R: Rng>(
    first: &Topology,
    second: &Topology,
    config: &SearchConfig,
    rng: &mut R,
) -> Topology {
    let prefix_end = rng.random_range(0..=first.len());
    let suffix_start = rng.random_range(0..=second.len());

    let mut child: Topology = first[..prefix_end]
        .iter()
        .chain(second[suffix_start..].iter())
        .copied()
        .collect();
    while child.len() > config.max_layers {
        let index = rng.random_range(0..child.len());
        child.remove(index);
    }
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> SearchConfig {
        SearchConfig {
            population_size: 12,
            max_layers: 4,
            max_width: 8,
            ..SearchConfig::default()
        }
    }

    fn assert_within_bounds(topology: &Topology, config: &SearchConfig) {
        assert!(topology.len() <= config.max_layers);
        assert!(topology.iter().all(|&width| (1..=config.max_width).contains(&width)));
    }

    #[test]
    fn random_topologies_respect_the_bounds() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..200 {
            let topology = random_topology(&mut rng, config.max_layers, config.max_width);
            assert_within_bounds(&topology, &config);
        }
    }

    #[test]
    fn every_offspring_respects_the_bounds() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(32);
        let survivors: Vec<Topology> = (0..5)
            .map(|_| random_topology(&mut rng, config.max_layers, config.max_width))
            .collect();

        for _ in 0..50 {
            let population = mutate_population(&survivors, &config, &mut rng);
            assert_eq!(population.len(), config.population_size);
            for topology in &population {
                assert_within_bounds(topology, &config);
            }
        }
    }

    #[test]
    fn survivors_carry_over_verbatim() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(33);
        let survivors = vec![vec![3, 5], vec![2], vec![]];

        let population = mutate_population(&survivors, &config, &mut rng);
        assert_eq!(&population[..survivors.len()], &survivors[..]);
    }

    #[test]
    fn crossover_trims_back_to_the_layer_bound() {
        let config = SearchConfig { max_layers: 3, max_width: 8, ..SearchConfig::default() };
        let mut rng = StdRng::seed_from_u64(34);
        let first = vec![1, 2, 3];
        let second = vec![4, 5, 6];

        for _ in 0..100 {
            let child = crossover(&first, &second, &config, &mut rng);
            assert!(child.len() <= config.max_layers);
        }
    }

    #[test]
    fn degenerate_parents_are_handled() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(35);
        let empty: Topology = Vec::new();

        assert!(delete_layer(&empty, &mut rng).is_empty());
        assert_eq!(replace_layer(&empty, &config, &mut rng).len(), 1);
        let inserted = insert_layer(&empty, &config, &mut rng);
        assert_eq!(inserted.len(), 1);
        assert_within_bounds(&inserted, &config);
    }
}
