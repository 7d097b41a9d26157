//! Spacing calculator — turns visible slot counts and bounds into the
//! vertical and horizontal spacing constants.

use super::types::{Bounds, NeuronSlot};

/// Compute `(v_spacing, h_spacing)` for the planned diagram.
///
/// `neuron_plans` holds one entry per layer slot, `None` for a collapsed
/// slot. Vertical spacing divides the height by the largest *visible*
/// sequence length — never a raw layer size, which would cram truncated
/// layers and make their neighbours overlap.
///
/// The caller guarantees at least two slots (horizontal spacing is
/// undefined for a single layer) and at least one non-empty plan.
pub fn compute_spacing(neuron_plans: &[Option<Vec<NeuronSlot>>], bounds: &Bounds) -> (f64, f64) {
    let max_visible = neuron_plans
        .iter()
        .flatten()
        .map(|plan| plan.len())
        .max()
        .unwrap_or(1)
        .max(1);

    let v_spacing = bounds.height() / max_visible as f64;
    let h_spacing = bounds.width() / (neuron_plans.len() - 1) as f64;
    (v_spacing, h_spacing)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
