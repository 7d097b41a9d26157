//! Layout types: Bounds, Position, layer/neuron slots, and the computed
//! DiagramLayout handed to render adapters.
//!
//! Slots are tagged variants rather than sentinel values, so a collapsed
//! placeholder can never be confused with a real (but empty) layer.

use crate::error::{DiagramError, Result};

// ─── Bounds ──────────────────────────────────────────────────────────────────

/// Target rectangle in normalized plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left: 0.1,
            right: 0.9,
            bottom: 0.1,
            top: 0.9,
        }
    }
}

impl Bounds {
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Require an ordered rectangle inside the unit square. NaN fails the
    /// comparisons and is rejected with everything else.
    pub fn validate(&self) -> Result<()> {
        let ordered = self.left < self.right && self.bottom < self.top;
        let in_unit =
            self.left >= 0.0 && self.right <= 1.0 && self.bottom >= 0.0 && self.top <= 1.0;
        if ordered && in_unit {
            Ok(())
        } else {
            Err(DiagramError::InvalidBounds {
                left: self.left,
                right: self.right,
                bottom: self.bottom,
                top: self.top,
            })
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Vertical midline, where gap glyphs sit.
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

// ─── Position ────────────────────────────────────────────────────────────────

/// A point in normalized plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Slots ───────────────────────────────────────────────────────────────────

/// One slot in the visible layer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSlot {
    /// A layer drawn with its original size.
    Real { size: usize },
    /// One or more hidden middle layers.
    Collapsed,
}

impl LayerSlot {
    pub fn is_real(&self) -> bool {
        matches!(self, LayerSlot::Real { .. })
    }
}

/// One slot in a layer's visible neuron sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuronSlot {
    /// A drawn neuron carrying its original 0-based index, so display
    /// labels keep the untruncated numbering.
    Neuron { index: usize },
    /// Hidden neurons between the leading and trailing runs.
    Ellipsis,
}

impl NeuronSlot {
    pub fn is_neuron(&self) -> bool {
        matches!(self, NeuronSlot::Neuron { .. })
    }
}

// ─── Computed layout ─────────────────────────────────────────────────────────

/// A drawn neuron: which layer slot it sits in, its original index, and
/// its absolute position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuronPoint {
    pub layer: usize,
    pub index: usize,
    pub pos: Position,
}

/// A synapse line between two visible neurons of adjacent layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
}

impl Segment {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// What a gap glyph stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKind {
    /// Collapsed middle layers, drawn as "⁞".
    HiddenLayers,
    /// Collapsed middle neurons of one layer, drawn as "…".
    HiddenNeurons,
}

/// A placeholder glyph position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapGlyph {
    pub kind: GapKind,
    pub pos: Position,
}

/// The full output of the layout pipeline, in reading order: neurons per
/// layer left to right and top to bottom, then gaps, then segments.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    pub neurons: Vec<NeuronPoint>,
    pub segments: Vec<Segment>,
    pub gaps: Vec<GapGlyph>,
    pub v_spacing: f64,
    pub h_spacing: f64,
    /// Neuron circle radius, derived from the vertical spacing.
    pub radius: f64,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
