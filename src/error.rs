//! Diagram precondition errors.
//!
//! All variants are detected before the first draw call, so a failed
//! `layout()` never leaves a partially painted surface.

use std::error::Error;
use std::fmt;

/// The crate's result type.
pub type Result<T> = std::result::Result<T, DiagramError>;

/// Precondition violations reported by the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramError {
    /// Bounds are not an ordered rectangle inside the unit square.
    InvalidBounds {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },
    /// A configuration limit is below its minimum of 1.
    InvalidConfig {
        param: &'static str,
        value: usize,
    },
    /// Fewer than two layers; horizontal spacing is undefined.
    DegenerateNetwork {
        layers: usize,
    },
    /// A declared layer size of 0.
    EmptyLayer {
        index: usize,
    },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::InvalidBounds {
                left,
                right,
                bottom,
                top,
            } => write!(
                f,
                "invalid bounds: ({left}, {right}, {bottom}, {top}) is not an ordered rectangle within [0, 1]"
            ),
            DiagramError::InvalidConfig { param, value } => {
                write!(f, "invalid config: {param} must be at least 1, got {value}")
            }
            DiagramError::DegenerateNetwork { layers } => {
                write!(f, "degenerate network: need at least 2 layers, got {layers}")
            }
            DiagramError::EmptyLayer { index } => {
                write!(f, "empty layer: layer {index} has size 0")
            }
        }
    }
}

impl Error for DiagramError {}

// ─── Tests ───────────────────────────────────────────────────────────────────
