use crate::neural::network::{sigmoid, Layer, Network};

/// Feeds `input` through every layer in order and returns the final layer's
/// activations. Pure function: the network is never mutated and repeated
/// calls return identical output.
pub fn predict(network: &Network, input: &[f64]) -> Vec<f64> {
    let mut activation = input.to_vec();
    for layer in &network.layers {
        activation = activate_layer(layer, &activation);
    }
    activation
}

fn activate_layer(layer: &Layer, input: &[f64]) -> Vec<f64> {
    layer
        .nodes
        .iter()
        .map(|node| {
            let dot: f64 = node.weights.iter().zip(input).map(|(w, x)| w * x).sum();
            sigmoid(dot + node.bias)
        })
        .collect()
}
