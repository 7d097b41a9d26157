//! End-to-end tests: layer sizes through layout and rendering.

use nn_diagram::renderers::{HIDDEN_LAYERS_GLYPH, HIDDEN_NEURONS_GLYPH};
use nn_diagram::{
    Bounds, DiagramConfig, DiagramError, EdgeCount, NumberingBase, RecordingSurface, layout,
    render, render_to_svg,
};

#[test]
fn small_network_draws_every_neuron_and_synapse() {
    let config = DiagramConfig::default();
    let computed = layout(&[3, 5, 2], Bounds::default(), &config).unwrap();
    let mut rec = RecordingSurface::new();
    render(&computed, &config, &mut rec);

    assert_eq!(rec.circles().len(), 10);
    assert_eq!(rec.lines().len(), 25);
    // every line endpoint coincides with some circle center
    let centers: Vec<(f64, f64)> = rec.circles().iter().map(|&(x, y, _)| (x, y)).collect();
    for (x1, y1, x2, y2) in rec.lines() {
        assert!(centers.iter().any(|&(x, y)| x == x1 && y == y1));
        assert!(centers.iter().any(|&(x, y)| x == x2 && y == y2));
    }
}

#[test]
fn deep_network_collapses_middle_layers() {
    let config = DiagramConfig {
        show_labels: false,
        ..DiagramConfig::default()
    };
    let sizes = vec![8; 20];
    let computed = layout(&sizes, Bounds::default(), &config).unwrap();
    let mut rec = RecordingSurface::new();
    render(&computed, &config, &mut rec);

    // 12 visible layers of 8 → 6 visible neurons each
    assert_eq!(rec.circles().len(), 12 * 6);
    let glyphs = rec.texts();
    assert_eq!(
        glyphs
            .iter()
            .filter(|t| t.as_str() == HIDDEN_LAYERS_GLYPH)
            .count(),
        1
    );
    assert_eq!(
        glyphs
            .iter()
            .filter(|t| t.as_str() == HIDDEN_NEURONS_GLYPH)
            .count(),
        12
    );
    // the two layers flanking the gap exchange no synapses
    assert_eq!(rec.lines().len(), 10 * 6 * 6);
}

#[test]
fn svg_output_is_well_formed() {
    let svg = render_to_svg(
        &[7, 5, 4, 3, 4, 2, 1],
        Bounds::default(),
        &DiagramConfig::default(),
        640,
        480,
    )
    .unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    // the 7-neuron layer shows 6 neurons around one "…"
    assert_eq!(svg.matches("<circle").count(), 6 + 5 + 4 + 3 + 4 + 2 + 1);
    assert_eq!(
        svg.matches("<line").count(),
        6 * 5 + 5 * 4 + 4 * 3 + 3 * 4 + 4 * 2 + 2 * 1
    );
    assert!(svg.contains("…"));
}

#[test]
fn zero_based_fixed_edge_reproduces_the_other_calling_convention() {
    let config = DiagramConfig {
        max_layers: 6,
        max_neurons: 6,
        edge_count: EdgeCount::Fixed(3),
        numbering: NumberingBase::ZeroBased,
        show_labels: true,
    };
    let computed = layout(&[10, 2], Bounds::default(), &config).unwrap();
    let mut rec = RecordingSurface::new();
    render(&computed, &config, &mut rec);
    let labels = rec.texts();
    // zero-based truncated column: 0,1,2 … 7,8,9
    assert_eq!(&labels[..6], &["0", "1", "2", "7", "8", "9"]);
}

#[test]
fn errors_surface_before_any_drawing() {
    let config = DiagramConfig::default();
    for (sizes, expected) in [
        (vec![5], DiagramError::DegenerateNetwork { layers: 1 }),
        (vec![5, 0, 3], DiagramError::EmptyLayer { index: 1 }),
    ] {
        assert_eq!(
            layout(&sizes, Bounds::default(), &config).unwrap_err(),
            expected
        );
    }
    assert!(matches!(
        layout(&[5, 3], Bounds::new(0.9, 0.1, 0.1, 0.9), &config).unwrap_err(),
        DiagramError::InvalidBounds { .. }
    ));
}

#[test]
fn custom_bounds_keep_everything_inside() {
    let bounds = Bounds::new(0.25, 0.75, 0.4, 0.6);
    let config = DiagramConfig::default();
    let computed = layout(&[4, 9, 4], bounds, &config).unwrap();
    for p in &computed.neurons {
        assert!(p.pos.x >= bounds.left - 1e-12 && p.pos.x <= bounds.right + 1e-12);
        assert!(p.pos.y >= bounds.bottom - 1e-12 && p.pos.y <= bounds.top + 1e-12);
    }
}
