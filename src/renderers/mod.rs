//! Render adapters — the drawing capability the layout engine hands its
//! geometry to, plus the walk that maps a computed layout onto it.
//!
//! Adapters carry no business logic: a circle per neuron, a line per
//! synapse, a text glyph per gap or label, nothing else.

pub mod recording;
pub mod svg;

pub use recording::{DrawCall, RecordingSurface};
pub use svg::SvgSurface;

use crate::config::DiagramConfig;
use crate::layout::types::{DiagramLayout, GapKind};

// ─── Glyphs ──────────────────────────────────────────────────────────────────

/// Stands in for collapsed middle layers.
pub const HIDDEN_LAYERS_GLYPH: &str = "⁞";
/// Stands in for a layer's hidden middle neurons.
pub const HIDDEN_NEURONS_GLYPH: &str = "…";

pub const HIDDEN_LAYERS_FONT: f64 = 30.0;
pub const HIDDEN_NEURONS_FONT: f64 = 25.0;
pub const LABEL_FONT: f64 = 8.0;

// ─── Surface ─────────────────────────────────────────────────────────────────

/// A drawing surface in normalized plot coordinates (y grows upward).
///
/// Text is centered on `(x, y)`; the adapter owns its font metrics, so
/// label placement stays correct whatever the surface renders with. `size`
/// is a point-size hint the adapter is free to reinterpret.
pub trait Surface {
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn draw_text(&mut self, x: f64, y: f64, text: &str, size: f64);
}

// ─── Walk ────────────────────────────────────────────────────────────────────

/// Hand a computed layout to a surface, in reading order: neurons per
/// layer left to right and top to bottom (with their labels), then gap
/// glyphs, then connection segments.
///
/// The call order is the determinism contract, not a stacking order —
/// adapters with painter's semantics restack as needed (the SVG adapter
/// puts lines underneath circles).
pub fn render<S: Surface>(layout: &DiagramLayout, config: &DiagramConfig, surface: &mut S) {
    for p in &layout.neurons {
        surface.draw_circle(p.pos.x, p.pos.y, layout.radius);
        if config.show_labels {
            let label = config.display_index(p.index).to_string();
            surface.draw_text(p.pos.x, p.pos.y, &label, LABEL_FONT);
        }
    }
    for g in &layout.gaps {
        match g.kind {
            GapKind::HiddenLayers => {
                surface.draw_text(g.pos.x, g.pos.y, HIDDEN_LAYERS_GLYPH, HIDDEN_LAYERS_FONT)
            }
            GapKind::HiddenNeurons => {
                surface.draw_text(g.pos.x, g.pos.y, HIDDEN_NEURONS_GLYPH, HIDDEN_NEURONS_FONT)
            }
        }
    }
    for s in &layout.segments {
        surface.draw_line(s.from.x, s.from.y, s.to.x, s.to.y);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::engine::layout;
    use crate::layout::types::Bounds;

    #[test]
    fn test_render_call_counts() {
        let config = DiagramConfig::default();
        let l = layout(&[3, 5, 2], Bounds::default(), &config).unwrap();
        let mut rec = RecordingSurface::new();
        render(&l, &config, &mut rec);
        assert_eq!(rec.circles().len(), 10);
        assert_eq!(rec.lines().len(), 25);
        // one label per neuron, no gap glyphs
        assert_eq!(rec.texts().len(), 10);
    }

    #[test]
    fn test_render_without_labels() {
        let config = DiagramConfig {
            show_labels: false,
            ..DiagramConfig::default()
        };
        let l = layout(&[3, 5, 2], Bounds::default(), &config).unwrap();
        let mut rec = RecordingSurface::new();
        render(&l, &config, &mut rec);
        assert!(rec.texts().is_empty());
    }

    #[test]
    fn test_render_gap_glyphs() {
        let config = DiagramConfig {
            show_labels: false,
            ..DiagramConfig::default()
        };
        let sizes = vec![10; 14];
        let l = layout(&sizes, Bounds::default(), &config).unwrap();
        let mut rec = RecordingSurface::new();
        render(&l, &config, &mut rec);
        let texts = rec.texts();
        let layer_gaps = texts
            .iter()
            .filter(|t| t.as_str() == HIDDEN_LAYERS_GLYPH)
            .count();
        let neuron_gaps = texts
            .iter()
            .filter(|t| t.as_str() == HIDDEN_NEURONS_GLYPH)
            .count();
        assert_eq!(layer_gaps, 1);
        assert_eq!(neuron_gaps, 12);
    }

    #[test]
    fn test_render_order_circles_before_lines() {
        let config = DiagramConfig::default();
        let l = layout(&[2, 2], Bounds::default(), &config).unwrap();
        let mut rec = RecordingSurface::new();
        render(&l, &config, &mut rec);
        let first_line = rec
            .calls
            .iter()
            .position(|c| matches!(c, DrawCall::Line { .. }))
            .unwrap();
        let last_circle = rec
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Circle { .. }))
            .unwrap();
        assert!(last_circle < first_line);
    }

    #[test]
    fn test_render_labels_one_based() {
        let config = DiagramConfig::default();
        let l = layout(&[2, 2], Bounds::default(), &config).unwrap();
        let mut rec = RecordingSurface::new();
        render(&l, &config, &mut rec);
        assert_eq!(rec.texts(), vec!["1", "2", "1", "2"]);
    }

    #[test]
    fn test_render_truncated_labels_keep_original_numbers() {
        let config = DiagramConfig::default();
        let l = layout(&[10, 2], Bounds::default(), &config).unwrap();
        let mut rec = RecordingSurface::new();
        render(&l, &config, &mut rec);
        let texts = rec.texts();
        // first column: 1, 2, 3 then 8, 9, 10 (ellipsis is drawn later)
        assert_eq!(&texts[..6], &["1", "2", "3", "8", "9", "10"]);
    }
}
