//! Evolves network topologies through self-play and saves the final trained
//! networks in their portable JSON form.

use clap::Parser;
use drop_four::evolution::config::SearchConfig;
use drop_four::evolution::search::run_topology_search;
use drop_four::evolution::trainer::train_member;
use drop_four::game::player::Player;
use drop_four::logging::setup_logging;
use drop_four::neural::portable::to_portable;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "topology_search", about = "Evolve feed-forward network topologies through self-play tournaments")]
struct Args {
    #[arg(long, default_value_t = 20)]
    generations: usize,

    #[arg(long, default_value_t = 25)]
    population_size: usize,

    #[arg(long, default_value_t = 5)]
    survivors: usize,

    /// Training epochs over each finished game's examples
    #[arg(long, default_value_t = 100)]
    epochs: usize,

    /// Self-play games per population member per generation
    #[arg(long, default_value_t = 25)]
    training_games: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Directory where the final trained networks are written as JSON
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> drop_four::Result<()> {
    setup_logging();
    let args = Args::parse();

    let config = SearchConfig {
        generations: args.generations,
        population_size: args.population_size,
        survivor_count: args.survivors,
        epochs: args.epochs,
        training_games: args.training_games,
        ..SearchConfig::default()
    };

    let (best_a, best_b) = run_topology_search(&config, args.seed)?;
    log::info!("best topology for side A: {best_a:?}");
    log::info!("best topology for side B: {best_b:?}");

    for (side, topology, file_name) in [
        (Player::A, &best_a, "network_a.json"),
        (Player::B, &best_b, "network_b.json"),
    ] {
        let network = train_member(topology, side, &config, args.seed)?;
        let payload = serde_json::to_string(&to_portable(&network))?;
        let path = args.output_dir.join(file_name);
        std::fs::write(&path, payload)?;
        log::info!("saved trained {side:?} network to {}", path.display());
    }
    Ok(())
}
