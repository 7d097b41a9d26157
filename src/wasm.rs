//! WASM bindings for nn-diagram.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen;
//! both take the layer list as a string and return an SVG document.

use wasm_bindgen::prelude::*;

use crate::parsers::parse_layer_list;
use crate::{Bounds, DiagramConfig, render_to_svg};

const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;

/// Render a layer list (e.g. `"784,256,10"`) to SVG with default settings.
#[wasm_bindgen]
pub fn render(layers: &str) -> Result<String, JsError> {
    let sizes = parse_layer_list(layers).map_err(|e| JsError::new(&e))?;
    render_to_svg(
        &sizes,
        Bounds::default(),
        &DiagramConfig::default(),
        DEFAULT_WIDTH,
        DEFAULT_HEIGHT,
    )
    .map_err(|e| JsError::new(&e.to_string()))
}

/// Render a layer list with full control over the diagram limits.
///
/// - `max_layers`: layer slots before the middle collapses into "⁞"
/// - `max_neurons`: neuron slots per layer before an "…" ellipsis
/// - `show_labels`: draw the numeric label next to each neuron
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    layers: &str,
    max_layers: usize,
    max_neurons: usize,
    show_labels: bool,
    width: u32,
    height: u32,
) -> Result<String, JsError> {
    let sizes = parse_layer_list(layers).map_err(|e| JsError::new(&e))?;
    let config = DiagramConfig {
        max_layers,
        max_neurons,
        show_labels,
        ..DiagramConfig::default()
    };
    render_to_svg(&sizes, Bounds::default(), &config, width, height)
        .map_err(|e| JsError::new(&e.to_string()))
}
