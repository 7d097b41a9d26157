//! Layout engine — the full pipeline from layer sizes to drawable geometry.
//!
//! Phases:
//!   1. Validate config, bounds, and layer sizes
//!   2. Plan visible layers (collapse the middle past `max_layers`)
//!   3. Plan visible neurons per real layer (ellipsis past `max_neurons`)
//!   4. Derive spacing from the visible counts
//!   5. Place neurons and gap glyphs, column by column
//!   6. Connect adjacent real layers and read off the segments

use log::debug;

use super::graph::TopologyGraph;
use super::spacing::compute_spacing;
use super::truncate::{plan_layers, plan_neurons};
use super::types::{
    Bounds, DiagramLayout, GapGlyph, GapKind, LayerSlot, NeuronPoint, NeuronSlot, Position,
};
use crate::config::DiagramConfig;
use crate::error::{DiagramError, Result};

/// Circle radius as a fraction of the vertical spacing.
const RADIUS_FACTOR: f64 = 0.25;

/// Compute the diagram geometry for a feed-forward network.
///
/// Pure: no shared state is read or written, so repeated and concurrent
/// calls are safe. All preconditions are checked up front; an `Err` means
/// nothing should be drawn.
pub fn layout(
    layer_sizes: &[usize],
    bounds: Bounds,
    config: &DiagramConfig,
) -> Result<DiagramLayout> {
    config.validate()?;
    bounds.validate()?;
    if layer_sizes.len() < 2 {
        return Err(DiagramError::DegenerateNetwork {
            layers: layer_sizes.len(),
        });
    }
    if let Some(index) = layer_sizes.iter().position(|&s| s == 0) {
        return Err(DiagramError::EmptyLayer { index });
    }

    let layer_slots = plan_layers(layer_sizes, config);
    let neuron_plans: Vec<Option<Vec<NeuronSlot>>> = layer_slots
        .iter()
        .map(|slot| match slot {
            LayerSlot::Real { size } => Some(plan_neurons(*size, config)),
            LayerSlot::Collapsed => None,
        })
        .collect();

    let (v_spacing, h_spacing) = compute_spacing(&neuron_plans, &bounds);
    debug!(
        "layout: {} slots, v_spacing {v_spacing:.4}, h_spacing {h_spacing:.4}",
        layer_slots.len()
    );

    let center_y = bounds.center_y();
    let mut graph = TopologyGraph::new();
    let mut gaps: Vec<GapGlyph> = Vec::new();

    for (n, plan) in neuron_plans.iter().enumerate() {
        let x = bounds.left + n as f64 * h_spacing;
        let Some(plan) = plan else {
            gaps.push(GapGlyph {
                kind: GapKind::HiddenLayers,
                pos: Position::new(x, center_y),
            });
            continue;
        };

        let layer_top = v_spacing * (plan.len() - 1) as f64 / 2.0 + center_y;
        let mut points = Vec::with_capacity(plan.len());
        for (i, slot) in plan.iter().enumerate() {
            match slot {
                NeuronSlot::Neuron { index } => points.push(NeuronPoint {
                    layer: n,
                    index: *index,
                    pos: Position::new(x, layer_top - i as f64 * v_spacing),
                }),
                NeuronSlot::Ellipsis => gaps.push(GapGlyph {
                    kind: GapKind::HiddenNeurons,
                    pos: Position::new(x, center_y),
                }),
            }
        }
        graph.push_column(n, points);
    }

    graph.connect_adjacent();
    debug!(
        "layout: {} neurons, {} synapses, {} gaps",
        graph.neuron_count(),
        graph.synapse_count(),
        gaps.len()
    );

    Ok(DiagramLayout {
        neurons: graph.neurons(),
        segments: graph.segments(),
        gaps,
        v_spacing,
        h_spacing,
        radius: v_spacing * RADIUS_FACTOR,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
