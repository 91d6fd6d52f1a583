use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

/// Fixed learning rate of the delta rule.
pub const LEARNING_RATE: f64 = 0.5;

/// Bias every node starts with.
pub const INITIAL_BIAS: f64 = 0.5;

/// The output layer always has one node per outcome: win A, win B, draw.
pub const OUTPUT_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub weights: Vec<f64>,
    pub bias: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub nodes: Vec<Node>,
}

/// An ordered stack of fully-connected sigmoid layers. Invariant: the weight
/// vector of every node in layer `i` has one entry per node of layer `i-1`
/// (layer 0 has one entry per input). Networks are value-like: training
/// consumes a network and returns the updated one, so holders of the old
/// value never observe a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub input_size: usize,
    pub layers: Vec<Layer>,
}

/// Builds a network of the given hidden-layer widths plus the fixed 3-node
/// output layer, with weights drawn uniformly from `[0, 1)` and a constant
/// initial bias.
pub fn instantiate<R: Rng>(input_size: usize, hidden_layers: &[usize], rng: &mut R) -> Network {
    let mut layers = Vec::with_capacity(hidden_layers.len() + 1);
    let mut previous = input_size;
    for &width in hidden_layers.iter().chain(std::iter::once(&OUTPUT_SIZE)) {
        let nodes = (0..width)
            .map(|_| Node {
                weights: (0..previous).map(|_| rng.random::<f64>()).collect(),
                bias: INITIAL_BIAS,
            })
            .collect();
        layers.push(Layer { nodes });
        previous = width;
    }
    Network { input_size, layers }
}

/// Numerically stable logistic function; saturates to 0 and 1 on the tails
/// instead of overflowing.
pub fn sigmoid(value: f64) -> f64 {
    if value >= 0.0 {
        1.0 / (1.0 + (-value).exp())
    } else {
        let e = value.exp();
        e / (1.0 + e)
    }
}
