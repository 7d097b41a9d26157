//! nn-diagram — feed-forward neural-network topology diagrams.
//!
//! Computes a deterministic 2D layout (neuron circles, synapse lines, and
//! "…"/"⁞" placeholders for truncated layers) and paints it through a
//! pluggable [`Surface`]. An SVG reference adapter ships in the box.
//!
//! ```
//! use nn_diagram::{render_to_svg, Bounds, DiagramConfig};
//!
//! let svg = render_to_svg(&[7, 5, 4, 3, 4, 2, 1], Bounds::default(),
//!     &DiagramConfig::default(), 640, 480).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{DiagramConfig, EdgeCount, NumberingBase};
pub use error::{DiagramError, Result};
pub use layout::engine::layout;
pub use layout::types::{Bounds, DiagramLayout};
pub use renderers::{RecordingSurface, Surface, SvgSurface, render};

/// Lay out a network and serialize it as an SVG document in one call.
pub fn render_to_svg(
    layer_sizes: &[usize],
    bounds: Bounds,
    config: &DiagramConfig,
    width: u32,
    height: u32,
) -> Result<String> {
    let computed = layout(layer_sizes, bounds, config)?;
    let mut surface = SvgSurface::new(width, height);
    render(&computed, config, &mut surface);
    Ok(surface.finish())
}
