//! SVG surface — reference render adapter producing an SVG string.
//!
//! Normalized plot coordinates map onto a pixel viewport with the y axis
//! flipped (plot coordinates grow upward, SVG grows downward). Lines and
//! circles are buffered in separate groups so synapses always paint
//! underneath neurons, whatever order the draw calls arrive in.

use super::Surface;

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "monospace";
const FILL_STROKE: &str = r#"fill="white" stroke="black" stroke-width="1.5""#;
const LINE_STROKE: &str = r#"stroke="black" stroke-width="1""#;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ── SvgSurface ───────────────────────────────────────────────────────────────

/// Collects draw calls and serializes them with `finish()`.
pub struct SvgSurface {
    width: f64,
    height: f64,
    /// Synapse lines, painted first.
    lines: Vec<String>,
    /// Circles and text, painted on top.
    nodes: Vec<String>,
}

impl SvgSurface {
    /// A surface targeting a `width` × `height` pixel viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            lines: Vec::new(),
            nodes: Vec::new(),
        }
    }

    fn px(&self, x: f64) -> f64 {
        x * self.width
    }

    /// Flip: normalized y grows upward, SVG y grows downward.
    fn py(&self, y: f64) -> f64 {
        (1.0 - y) * self.height
    }

    /// Serialize the buffered document.
    pub fn finish(self) -> String {
        let w = self.width;
        let h = self.height;
        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            format!(r#"<rect width="{w}" height="{h}" fill="white"/>"#),
        ];
        parts.extend(self.lines);
        parts.extend(self.nodes);
        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

impl Surface for SvgSurface {
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        let cx = self.px(x);
        let cy = self.py(y);
        // radius is in vertical plot units
        let r = radius * self.height;
        self.nodes.push(format!(
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" {FILL_STROKE}/>"#
        ));
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (ax, ay) = (self.px(x1), self.py(y1));
        let (bx, by) = (self.px(x2), self.py(y2));
        self.lines.push(format!(
            r#"<line x1="{ax:.2}" y1="{ay:.2}" x2="{bx:.2}" y2="{by:.2}" {LINE_STROKE}/>"#
        ));
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, size: f64) {
        let tx = self.px(x);
        let ty = self.py(y);
        let f = format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#);
        self.nodes.push(format!(
            r#"<text x="{tx:.2}" y="{ty:.2}" text-anchor="middle" dominant-baseline="central" {f}>{}</text>"#,
            escape(text)
        ));
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
