// File: crates/plot-render-svg/src/lib.rs
// Summary: SVG backend: renders a retained scene to a deterministic SVG document.

use std::fmt::Write as _;

use plot_core::{Anchor, Color, Interpolation, Node, PathNode, Point, RectNode, Scene, Size, TextNode};

/// SVG path-data builder with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { commands: String::with_capacity(256) }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn cubic_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        let _ = write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            x1, y1, x2, y2, x, y
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Polyline path data.
pub fn line_path(points: &[Point]) -> String {
    let mut iter = points.iter();
    let Some(first) = iter.next() else { return String::new() };
    let mut b = PathBuilder::new().move_to(first.x, first.y);
    for p in iter {
        b = b.line_to(p.x, p.y);
    }
    b.build()
}

/// Cubic B-spline basis path data: the `curveBasis` expansion. The curve
/// starts and ends on the first/last control points, with each interior
/// segment a Bézier whose control points are thirds of consecutive pairs.
pub fn basis_path(points: &[Point]) -> String {
    match points.len() {
        0 => return String::new(),
        1 => return PathBuilder::new().move_to(points[0].x, points[0].y).build(),
        2 => return line_path(points),
        _ => {}
    }

    let (mut x0, mut y0) = (points[0].x, points[0].y);
    let (mut x1, mut y1) = (points[1].x, points[1].y);

    let mut b = PathBuilder::new()
        .move_to(x0, y0)
        .line_to((5.0 * x0 + x1) / 6.0, (5.0 * y0 + y1) / 6.0);

    for p in &points[2..] {
        b = b.cubic_to(
            (2.0 * x0 + x1) / 3.0,
            (2.0 * y0 + y1) / 3.0,
            (x0 + 2.0 * x1) / 3.0,
            (y0 + 2.0 * y1) / 3.0,
            (x0 + 4.0 * x1 + p.x) / 6.0,
            (y0 + 4.0 * y1 + p.y) / 6.0,
        );
        x0 = x1;
        y0 = y1;
        x1 = p.x;
        y1 = p.y;
    }

    // Tail mirrors the lead-in: one more segment toward the last point.
    b = b
        .cubic_to(
            (2.0 * x0 + x1) / 3.0,
            (2.0 * y0 + y1) / 3.0,
            (x0 + 2.0 * x1) / 3.0,
            (y0 + 2.0 * y1) / 3.0,
            (x0 + 5.0 * x1) / 6.0,
            (y0 + 5.0 * y1) / 6.0,
        )
        .line_to(x1, y1);
    b.build()
}

fn css(color: Color) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn emit_rect(out: &mut String, r: &RectNode) {
    let _ = write!(
        out,
        r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
        r.x, r.y, r.w, r.h,
        css(r.fill),
    );
    if let Some(s) = &r.stroke {
        let _ = write!(out, r#" stroke="{}" stroke-width="{}""#, css(s.color), s.width);
    }
    let _ = writeln!(out, r#" opacity="{}"/>"#, r.opacity);
}

fn emit_path(out: &mut String, p: &PathNode) {
    let mut d = match p.interpolation {
        Interpolation::Linear => line_path(&p.points),
        Interpolation::Basis => basis_path(&p.points),
    };
    if p.closed && !d.is_empty() {
        d.push('Z');
    }
    let fill = match p.fill {
        Some(c) => css(c),
        None => "none".to_string(),
    };
    let _ = write!(out, r#"  <path d="{}" fill="{}""#, d, fill);
    if let Some(s) = &p.stroke {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}" stroke-linejoin="round""#,
            css(s.color),
            s.width
        );
    }
    let _ = writeln!(out, r#" opacity="{}"/>"#, p.opacity);
}

fn emit_text(out: &mut String, t: &TextNode) {
    let anchor = match t.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let _ = write!(
        out,
        r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" font-size="{}" fill="{}""#,
        t.x, t.y, anchor,
        t.font_size,
        css(t.fill),
    );
    if let Some(len) = t.length_constraint {
        let _ = write!(out, r#" textLength="{:.2}" lengthAdjust="spacingAndGlyphs""#, len);
    }
    let _ = write!(out, ">");
    if t.lines.len() == 1 {
        let _ = write!(out, "{}", escape(&t.lines[0]));
    } else {
        for (i, line) in t.lines.iter().enumerate() {
            let dy = if i == 0 { "0".to_string() } else { "1.2em".to_string() };
            let _ = write!(out, r#"<tspan x="{:.2}" dy="{}">{}</tspan>"#, t.x, dy, escape(line));
        }
    }
    let _ = writeln!(out, "</text>");
}

/// Render the scene, in paint order, into an SVG document of `size`.
pub fn render_to_string(scene: &Scene, size: Size) -> String {
    let mut out = String::with_capacity(scene.len() * 128 + 128);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.0} {:.0}" width="{:.0}" height="{:.0}">"#,
        size.w, size.h, size.w, size.h
    );
    for (_, node) in scene.iter() {
        match node {
            Node::Rect(r) => emit_rect(&mut out, r),
            Node::Path(p) => emit_path(&mut out, p),
            Node::Text(t) => emit_text(&mut out, t),
        }
    }
    out.push_str("</svg>\n");
    out
}

/// Render and write the document to `path`.
pub fn render_to_file(scene: &Scene, size: Size, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_to_string(scene, size))
}
