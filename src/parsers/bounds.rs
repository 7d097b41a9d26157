//! Bounds parser: `"left,right,bottom,top"` into a `Bounds` rectangle.
//!
//! Only the shape of the string is checked here; whether the rectangle is
//! ordered and inside the unit square is the layout engine's call.

use crate::layout::types::Bounds;

/// Parse a comma-separated bounds quadruple, e.g. `"0.1,0.9,0.1,0.9"`.
pub fn parse_bounds(src: &str) -> Result<Bounds, String> {
    let fields: Vec<&str> = src.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(format!(
            "cannot parse bounds '{src}': expected 'left,right,bottom,top'"
        ));
    }
    let mut values = [0.0f64; 4];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse::<f64>()
            .map_err(|_| format!("cannot parse bounds coordinate '{field}'"))?;
    }
    Ok(Bounds::new(values[0], values[1], values[2], values[3]))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
