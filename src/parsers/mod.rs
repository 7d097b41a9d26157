//! Input-string parsers for the CLI and WASM surfaces.
//!
//! Parser errors are plain strings aimed at the invoking user; the layout
//! core's structured `DiagramError` starts where these end.

pub mod bounds;
pub mod layer_list;

pub use bounds::parse_bounds;
pub use layer_list::parse_layer_list;
