//! Layout pipeline: truncation planning, spacing, the visible-topology
//! graph, and the engine composing them.

pub mod engine;
pub mod graph;
pub mod spacing;
pub mod truncate;
pub mod types;

pub use engine::layout;
pub use types::{Bounds, DiagramLayout, GapGlyph, GapKind, NeuronPoint, Position, Segment};
