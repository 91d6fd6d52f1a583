pub mod config;
pub mod mutation;
pub mod search;
pub mod self_play;
pub mod tournament;
pub mod trainer;
