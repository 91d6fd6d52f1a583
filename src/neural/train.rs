use crate::neural::network::{Layer, Network, Node, LEARNING_RATE};
use crate::neural::predict::predict;
use serde::{Deserialize, Serialize};

/// Hard cap on training cycles performed in one call.
pub const MAX_EPOCHS: usize = 1000;

/// One supervised example: a flattened board encoding paired with the target
/// outcome distribution over {win A, win B, draw}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: [f64; 3],
}

/// Applies [`train_one_example`] across all examples in presentation order,
/// `epochs` times (capped at [`MAX_EPOCHS`]). Zero epochs returns the network
/// unchanged.
pub fn train(mut network: Network, examples: &[TrainingExample], epochs: usize) -> Network {
    for _ in 0..epochs.min(MAX_EPOCHS) {
        for example in examples {
            network = train_one_example(network, &example.input, &example.target);
        }
    }
    network
}

/// One delta-rule update. The output-layer delta of node `j` is
/// `r_j * (1 - r_j) * (t_j - r_j)`; a hidden node's delta is the sum of the
/// weighted deltas of every node that consumes its activation. Every weight
/// of a node moves by the same scalar `LEARNING_RATE * (1 + LEARNING_RATE) *
/// delta` and its bias by `LEARNING_RATE * delta`. This is deliberately not
/// full chain-rule backpropagation: the update ignores the per-connection
/// input term.
pub fn train_one_example(network: Network, input: &[f64], target: &[f64; 3]) -> Network {
    let layer_count = network.layers.len();
    if layer_count == 0 {
        return network;
    }

    let result = predict(&network, input);

    let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); layer_count];
    deltas[layer_count - 1] = result
        .iter()
        .zip(target.iter())
        .map(|(&r, &t)| r * (1.0 - r) * (t - r))
        .collect();

    for layer_index in (0..layer_count - 1).rev() {
        let propagated: Vec<f64> = {
            let consumer = &network.layers[layer_index + 1];
            let consumer_deltas = &deltas[layer_index + 1];
            (0..network.layers[layer_index].nodes.len())
                .map(|node_index| {
                    consumer
                        .nodes
                        .iter()
                        .zip(consumer_deltas.iter())
                        .map(|(consumer_node, &delta)| consumer_node.weights[node_index] * delta)
                        .sum()
                })
                .collect()
        };
        deltas[layer_index] = propagated;
    }

    let input_size = network.input_size;
    let layers = network
        .layers
        .into_iter()
        .zip(deltas)
        .map(|(layer, layer_deltas)| Layer {
            nodes: layer
                .nodes
                .into_iter()
                .zip(layer_deltas)
                .map(|(node, delta)| Node {
                    weights: node
                        .weights
                        .into_iter()
                        .map(|weight| weight + LEARNING_RATE * (1.0 + LEARNING_RATE) * delta)
                        .collect(),
                    bias: node.bias + LEARNING_RATE * delta,
                })
                .collect(),
        })
        .collect();

    Network { input_size, layers }
}
