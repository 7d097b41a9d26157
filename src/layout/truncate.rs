//! Truncation planner — decides which layers and neurons are drawn and
//! which collapse into a single placeholder slot.
//!
//! Both axes follow the same scheme: when the item count exceeds the
//! configured limit, keep a leading and a trailing run of `edge` originals
//! and put exactly one marker between them. Kept neurons carry their
//! original indices, so a truncated layer's trailing labels still read
//! `size-edge+1 ..= size`.

use log::debug;

use super::types::{LayerSlot, NeuronSlot};
use crate::config::DiagramConfig;

/// Clamp a keep count so the marker replaces at least one hidden item.
///
/// Only meaningful once `len` exceeds the axis limit; a derived edge is
/// already below `len / 2`, the clamp guards oversized `Fixed` values.
fn clamp_edge(edge: usize, len: usize) -> usize {
    edge.min((len - 1) / 2).max(1)
}

/// Reduce a layer-size sequence to its visible layer slots.
///
/// Sequences within `max_layers` pass through unchanged; longer ones keep
/// the first and last `edge` layers around one `Collapsed` marker.
pub fn plan_layers(layer_sizes: &[usize], config: &DiagramConfig) -> Vec<LayerSlot> {
    let n = layer_sizes.len();
    if n <= config.max_layers {
        return layer_sizes
            .iter()
            .map(|&size| LayerSlot::Real { size })
            .collect();
    }

    let edge = clamp_edge(config.edge_for(config.max_layers), n);
    debug!("collapsing {} middle layers (keep {edge} per side)", n - 2 * edge);

    let mut slots = Vec::with_capacity(2 * edge + 1);
    slots.extend(
        layer_sizes[..edge]
            .iter()
            .map(|&size| LayerSlot::Real { size }),
    );
    slots.push(LayerSlot::Collapsed);
    slots.extend(
        layer_sizes[n - edge..]
            .iter()
            .map(|&size| LayerSlot::Real { size }),
    );
    slots
}

/// Reduce one layer to its visible neuron slots.
///
/// Layers within `max_neurons` keep every index in natural order; larger
/// ones keep the first and last `edge` indices around one `Ellipsis`.
pub fn plan_neurons(layer_size: usize, config: &DiagramConfig) -> Vec<NeuronSlot> {
    if layer_size <= config.max_neurons {
        return (0..layer_size)
            .map(|index| NeuronSlot::Neuron { index })
            .collect();
    }

    let edge = clamp_edge(config.edge_for(config.max_neurons), layer_size);
    let mut slots = Vec::with_capacity(2 * edge + 1);
    slots.extend((0..edge).map(|index| NeuronSlot::Neuron { index }));
    slots.push(NeuronSlot::Ellipsis);
    slots.extend((layer_size - edge..layer_size).map(|index| NeuronSlot::Neuron { index }));
    slots
}

// ─── Tests ───────────────────────────────────────────────────────────────────
