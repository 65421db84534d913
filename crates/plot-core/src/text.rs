// File: crates/plot-core/src/text.rs
// Summary: Approximate text metrics, tick label formatting, and legend wrapping.

/// Average glyph advance as a fraction of the font size. The scene is
/// backend-agnostic, so axis bounding boxes are estimated from this metric
/// instead of a shaping pass.
const EM_FRACTION: f64 = 0.6;

/// Estimated pixel width of `text` at `font_size`.
pub fn approx_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * EM_FRACTION
}

/// Format an axis tick value with minimal decimals.
/// Integral values print bare; sub-unit values (densities) keep up to four.
pub fn fmt_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    let s = if a >= 1.0 {
        if (v - v.round()).abs() < 1e-9 {
            format!("{}", v.round() as i64)
        } else {
            format!("{:.1}", v)
        }
    } else {
        format!("{:.4}", v)
    };
    trim_zeros(s)
}

fn trim_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    let t = s.trim_end_matches('0').trim_end_matches('.');
    t.to_string()
}

/// Split a label onto two lines at the midpoint word when it exceeds
/// four words; shorter labels stay on one line.
pub fn wrap_midpoint(label: &str) -> Vec<String> {
    let words: Vec<&str> = label.split_whitespace().collect();
    if words.len() <= 4 {
        let joined = words.join(" ");
        if joined.is_empty() {
            return vec![String::new()];
        }
        return vec![joined];
    }
    let mid = words.len() / 2;
    vec![words[..mid].join(" "), words[mid..].join(" ")]
}

/// Fraction of the inner width a title may occupy: ten estimated pixels per
/// character, capped at 0.9 so the title never touches the plot edges.
pub fn title_length_fraction(title: &str, inner_w: f64) -> f64 {
    if inner_w <= 0.0 {
        return 0.0;
    }
    let fraction = title.chars().count() as f64 * 10.0 / inner_w;
    if fraction < 0.9 {
        fraction
    } else {
        0.9
    }
}
