//! # Drop Four Game Library
//!
//! A library for a gravity-drop, connect-four-style board game with
//! self-trained AI players and evolutionary network topology search.
//!
//! ## Features
//!
//! - **Game Engine**: Board state machine, move legality and win detection
//! - **Bandit Strategy**: Time-budgeted UCB1 search over legal moves with
//!   randomized rollouts
//! - **Network Engine**: Minimal fully-connected sigmoid network with
//!   inference and delta-rule training
//! - **Network Strategies**: Move selection driven by network predictions
//! - **Topology Search**: Generational evolution of network shapes ranked by
//!   round-robin self-play tournaments

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Move-selection strategies (random, bandit, network-based)
pub mod strategy;

/// Feed-forward network engine
pub mod neural;

/// Evolutionary topology search
pub mod evolution;

/// Logging setup for binaries
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Drop Four library
#[derive(Debug, thiserror::Error)]
pub enum DropFourError {
    #[error("invalid move: column {0} is full or the game is already over")]
    InvalidMove(usize),

    #[error("no moves available: the board is terminal")]
    NoMovesAvailable,

    #[error("search budget elapsed with zero evaluated moves")]
    SearchExhausted,

    #[error("malformed network: {0}")]
    MalformedNetwork(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DropFourError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
