//! Layer-list parser: `"784,256,10"`, `"784x256x10"`, or whitespace
//! separated, into a size sequence.

use std::sync::OnceLock;

use regex::Regex;

fn shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+(?:(?:\s*[,x]\s*|\s+)\d+)*\s*$").unwrap())
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// Parse a layer-size list. Separators may be `,`, `x`, or whitespace.
pub fn parse_layer_list(src: &str) -> Result<Vec<usize>, String> {
    if !shape_re().is_match(src) {
        return Err(format!(
            "cannot parse layer list '{src}': expected sizes like '784,256,10'"
        ));
    }
    digits_re()
        .find_iter(src)
        .map(|m| {
            m.as_str()
                .parse::<usize>()
                .map_err(|_| format!("layer size '{}' is out of range", m.as_str()))
        })
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
