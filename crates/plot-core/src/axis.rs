// File: crates/plot-core/src/axis.rs
// Summary: Axis tick generation and rendering with a measured bounding box.

use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Interpolation, NodeId, PathNode, Scene, Stroke, TextNode};
use crate::text;
use crate::theme::Theme;

pub const TICK_LENGTH: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;
pub const LABEL_FONT_SIZE: f64 = 10.0;

/// Pixels of axis length per tick. Horizontal axes give labels more room.
const PX_PER_TICK_H: f64 = 30.0;
const PX_PER_TICK_V: f64 = 25.0;

/// One tick: a position along the axis (pixels into the inner rect) and its
/// rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Rendered bounding box reported back to the layout. Axes have no a-priori
/// size; a vertical axis contributes width, a horizontal one height.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisBBox {
    pub width: f64,
    pub height: f64,
}

/// Scene nodes an axis produced, plus its measured box. The node list lets a
/// relayout remove the provisional pass wholesale.
pub struct RenderedAxis {
    pub nodes: Vec<NodeId>,
    pub bbox: AxisBBox,
}

fn tick_count(px_len: f64, px_per_tick: f64) -> usize {
    ((px_len / px_per_tick) as usize).max(2)
}

/// Ticks for a horizontal linear axis of `width` pixels.
pub fn ticks_bottom(scale: &LinearScale, width: f64) -> Vec<Tick> {
    scale
        .nice_ticks(tick_count(width, PX_PER_TICK_H))
        .into_iter()
        .map(|v| Tick { position: scale.scale(v), label: text::fmt_tick(v) })
        .collect()
}

/// Ticks for a vertical linear axis of `height` pixels.
pub fn ticks_left(scale: &LinearScale, height: f64) -> Vec<Tick> {
    scale
        .nice_ticks(tick_count(height, PX_PER_TICK_V))
        .into_iter()
        .map(|v| Tick { position: scale.scale(v), label: text::fmt_tick(v) })
        .collect()
}

/// One centered tick per band. `display` substitutes the rendered text
/// (anonymized label mode); it must match the band count when present.
pub fn ticks_band(scale: &BandScale, display: Option<&[String]>) -> Vec<Tick> {
    scale
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| Tick {
            position: scale.center(i),
            label: match display {
                Some(d) if i < d.len() => d[i].clone(),
                _ => label.clone(),
            },
        })
        .collect()
}

fn line(scene: &mut Scene, from: Point, to: Point, theme: &Theme) -> NodeId {
    scene.insert_path(PathNode {
        points: vec![from, to],
        interpolation: Interpolation::Linear,
        closed: false,
        fill: None,
        stroke: Some(Stroke { color: theme.axis_line, width: 1.0 }),
        opacity: 1.0,
    })
}

/// Draw a horizontal axis whose line sits at `origin` and runs `width` px to
/// the right; ticks and labels hang below. Returns the nodes and the measured
/// height (tick + padding + label text).
pub fn render_bottom(scene: &mut Scene, ticks: &[Tick], origin: Point, width: f64, theme: &Theme) -> RenderedAxis {
    let mut nodes = Vec::new();
    nodes.push(line(scene, origin, Point::new(origin.x + width, origin.y), theme));

    let mut max_label_w: f64 = 0.0;
    for tick in ticks {
        let x = origin.x + tick.position;
        nodes.push(line(scene, Point::new(x, origin.y), Point::new(x, origin.y + TICK_LENGTH), theme));
        nodes.push(scene.insert_text(TextNode {
            x,
            y: origin.y + TICK_LENGTH + TICK_PADDING + LABEL_FONT_SIZE,
            anchor: Anchor::Middle,
            lines: vec![tick.label.clone()],
            font_size: LABEL_FONT_SIZE,
            fill: theme.axis_label,
            length_constraint: None,
        }));
        max_label_w = max_label_w.max(text::approx_width(&tick.label, LABEL_FONT_SIZE));
    }

    RenderedAxis {
        nodes,
        bbox: AxisBBox {
            width: width.max(max_label_w),
            height: TICK_LENGTH + TICK_PADDING + LABEL_FONT_SIZE,
        },
    }
}

/// Draw a vertical axis whose line starts at `origin` and runs `height` px
/// down; ticks and labels extend to the left. The measured width is tick +
/// padding + widest label, which is what the layout feeds back.
pub fn render_left(scene: &mut Scene, ticks: &[Tick], origin: Point, height: f64, theme: &Theme) -> RenderedAxis {
    let mut nodes = Vec::new();
    nodes.push(line(scene, origin, Point::new(origin.x, origin.y + height), theme));

    let mut max_label_w: f64 = 0.0;
    for tick in ticks {
        let y = origin.y + tick.position;
        nodes.push(line(scene, Point::new(origin.x, y), Point::new(origin.x - TICK_LENGTH, y), theme));
        nodes.push(scene.insert_text(TextNode {
            x: origin.x - TICK_LENGTH - TICK_PADDING,
            y: y + LABEL_FONT_SIZE * 0.35, // visually center on the tick
            anchor: Anchor::End,
            lines: vec![tick.label.clone()],
            font_size: LABEL_FONT_SIZE,
            fill: theme.axis_label,
            length_constraint: None,
        }));
        max_label_w = max_label_w.max(text::approx_width(&tick.label, LABEL_FONT_SIZE));
    }

    RenderedAxis {
        nodes,
        bbox: AxisBBox {
            width: TICK_LENGTH + TICK_PADDING + max_label_w,
            height,
        },
    }
}
