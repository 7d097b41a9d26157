//! Configuration for the layout pipeline.
//!
//! One explicit object passed into `layout()` — there is no process-wide
//! mutable state, so two diagrams with different limits can be laid out
//! back to back (or concurrently) without interfering.

use crate::error::{DiagramError, Result};

/// How many leading/trailing items survive a truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeCount {
    /// Half the axis limit, guarded to at least 1.
    #[default]
    Derived,
    /// A fixed keep count on both ends.
    Fixed(usize),
}

/// Which number the first neuron of a layer displays as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingBase {
    #[default]
    OneBased,
    ZeroBased,
}

/// Diagram limits and display options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramConfig {
    /// Maximum layer slots before the middle collapses into "⁞".
    pub max_layers: usize,
    /// Maximum neuron slots per layer before the middle collapses into "…".
    pub max_neurons: usize,
    /// Keep count at each end of a truncated axis.
    pub edge_count: EdgeCount,
    /// Display numbering convention for neuron labels.
    pub numbering: NumberingBase,
    /// Draw the display number next to each neuron.
    pub show_labels: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            max_layers: 12,
            max_neurons: 6,
            edge_count: EdgeCount::Derived,
            numbering: NumberingBase::OneBased,
            show_labels: true,
        }
    }
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the limits. `Fixed(0)` would keep nothing on either end of a
    /// truncated axis, so it is rejected along with zero limits.
    pub fn validate(&self) -> Result<()> {
        if self.max_layers < 1 {
            return Err(DiagramError::InvalidConfig {
                param: "max_layers",
                value: self.max_layers,
            });
        }
        if self.max_neurons < 1 {
            return Err(DiagramError::InvalidConfig {
                param: "max_neurons",
                value: self.max_neurons,
            });
        }
        if let EdgeCount::Fixed(0) = self.edge_count {
            return Err(DiagramError::InvalidConfig {
                param: "edge_count",
                value: 0,
            });
        }
        Ok(())
    }

    /// Resolve the keep count for an axis limit (`max_layers` or
    /// `max_neurons`). `Derived` halves the limit; the guard keeps the
    /// result positive for limits below 2.
    pub fn edge_for(&self, limit: usize) -> usize {
        match self.edge_count {
            EdgeCount::Derived => (limit / 2).max(1),
            EdgeCount::Fixed(k) => k,
        }
    }

    /// Display number for an original 0-based neuron index.
    pub fn display_index(&self, index: usize) -> usize {
        match self.numbering {
            NumberingBase::OneBased => index + 1,
            NumberingBase::ZeroBased => index,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
