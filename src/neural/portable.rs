use crate::neural::network::{Layer, Network, Node};
use crate::{DropFourError, Result};

/// Portable network form for external persistence: an outer sequence of
/// layers, each an ordered sequence of `(weights, bias)` node pairs. No other
/// format guarantee is made.
pub type PortableNetwork = Vec<Vec<(Vec<f64>, f64)>>;

pub fn to_portable(network: &Network) -> PortableNetwork {
    network
        .layers
        .iter()
        .map(|layer| {
            layer
                .nodes
                .iter()
                .map(|node| (node.weights.clone(), node.bias))
                .collect()
        })
        .collect()
}

/// Rebuilds a network from its portable form, enforcing the layer-width
/// invariant: every node of layer `i` must carry one weight per node of layer
/// `i-1`.
pub fn from_portable(data: &PortableNetwork) -> Result<Network> {
    let first_layer = data
        .first()
        .filter(|layer| !layer.is_empty())
        .ok_or_else(|| DropFourError::MalformedNetwork("empty layer stack".to_string()))?;
    let input_size = first_layer[0].0.len();

    let mut layers = Vec::with_capacity(data.len());
    let mut previous = input_size;
    for (layer_index, portable_layer) in data.iter().enumerate() {
        if portable_layer.is_empty() {
            return Err(DropFourError::MalformedNetwork(format!(
                "layer {layer_index} has no nodes"
            )));
        }
        let mut nodes = Vec::with_capacity(portable_layer.len());
        for (weights, bias) in portable_layer {
            if weights.len() != previous {
                return Err(DropFourError::MalformedNetwork(format!(
                    "layer {layer_index} expects weight vectors of length {previous}, found {}",
                    weights.len()
                )));
            }
            nodes.push(Node { weights: weights.clone(), bias: *bias });
        }
        previous = portable_layer.len();
        layers.push(Layer { nodes });
    }

    Ok(Network { input_size, layers })
}
