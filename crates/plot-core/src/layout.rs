// File: crates/plot-core/src/layout.rs
// Summary: Two-pass layout: margins, provisional axes, bbox feedback, corrected inner rect.

use crate::axis::{self, AxisBBox, Tick};
use crate::geometry::{Point, RectF, Size};
use crate::margin::{MarginConfig, PixelMargins};
use crate::scene::{NodeId, Scene};
use crate::theme::Theme;

/// Axis arrangement of a chart variant. One driver consumes all three; there
/// is no per-variant subclassing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisMode {
    NoAxis,
    /// Horizontal axis only (comparison bars).
    SingleAxis,
    /// Bottom + left axes (bar and density charts).
    TwoAxis,
}

/// Tick sets a chart produces for a candidate inner rectangle. Positions are
/// relative to the rect's origin.
#[derive(Clone, Debug, Default)]
pub struct AxisSet {
    pub bottom: Option<Vec<Tick>>,
    pub left: Option<Vec<Tick>>,
}

/// Immutable outcome of one layout pass, consumed by the renderer. Holding a
/// completed result (rather than fields assigned in sequence) means a chart
/// is never observed half-laid-out.
#[derive(Debug)]
pub struct LayoutResult {
    pub mode: AxisMode,
    pub size: Size,
    pub margins: PixelMargins,
    /// Chart-body rectangle after margins and axis correction.
    pub inner: RectF,
    pub axis_x: AxisBBox,
    pub axis_y: AxisBBox,
    /// Scene nodes of the final axis render, removed wholesale on relayout.
    pub axis_nodes: Vec<NodeId>,
}

/// Resolve the layout with exactly one axis-measurement correction pass.
///
/// Axes are rendered against the margin-derived provisional rectangle, their
/// bounding boxes measured, the provisional render discarded, and the axes
/// re-rendered once against the corrected rectangle. The corrected pass
/// reuses the same tick-building rule, and label text here does not depend
/// on the inner width, so the box is stable after one correction. A backend
/// that wraps tick text would break that assumption; this module does not
/// iterate to convergence.
pub fn resolve<F>(
    scene: &mut Scene,
    theme: &Theme,
    size: Size,
    margins: &MarginConfig,
    mode: AxisMode,
    build_axes: F,
) -> LayoutResult
where
    F: Fn(RectF) -> AxisSet,
{
    let px = margins.resolve(size);
    let provisional = px.inner_rect(size);

    if mode == AxisMode::NoAxis {
        return LayoutResult {
            mode,
            size,
            margins: px,
            inner: provisional,
            axis_x: AxisBBox::default(),
            axis_y: AxisBBox::default(),
            axis_nodes: Vec::new(),
        };
    }

    // Pass 1: provisional render, only to learn the boxes.
    let first = render_axes(scene, theme, provisional, &build_axes(provisional));
    for &id in &first.nodes {
        scene.remove(id);
    }

    let inner = provisional.shrunk(first.left_width(), 0.0, 0.0, first.bottom_height());

    // Pass 2: final render against the corrected rectangle.
    let second = render_axes(scene, theme, inner, &build_axes(inner));

    LayoutResult {
        mode,
        size,
        margins: px,
        inner,
        axis_x: second.bottom,
        axis_y: second.left,
        axis_nodes: second.nodes,
    }
}

struct RenderedAxes {
    nodes: Vec<NodeId>,
    bottom: AxisBBox,
    left: AxisBBox,
}

impl RenderedAxes {
    fn bottom_height(&self) -> f64 {
        self.bottom.height
    }

    fn left_width(&self) -> f64 {
        self.left.width
    }
}

fn render_axes(scene: &mut Scene, theme: &Theme, rect: RectF, axes: &AxisSet) -> RenderedAxes {
    let mut nodes = Vec::new();
    let mut bottom = AxisBBox::default();
    let mut left = AxisBBox::default();

    if let Some(ticks) = &axes.bottom {
        let rendered = axis::render_bottom(scene, ticks, Point::new(rect.x, rect.bottom()), rect.w, theme);
        bottom = rendered.bbox;
        nodes.extend(rendered.nodes);
    }
    if let Some(ticks) = &axes.left {
        let rendered = axis::render_left(scene, ticks, Point::new(rect.x, rect.y), rect.h, theme);
        left = rendered.bbox;
        nodes.extend(rendered.nodes);
    }

    RenderedAxes { nodes, bottom, left }
}
