//! Recording surface — captures draw calls for assertions or forwarding.

use super::Surface;

/// One captured draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
    },
}

/// Surface that records every call in order instead of painting.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> Vec<(f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle { x, y, radius } => Some((*x, *y, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(f64, f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { x1, y1, x2, y2 } => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .collect()
    }

    /// Text payloads in call order.
    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(DrawCall::Circle { x, y, radius });
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, size: f64) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            size,
        });
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
