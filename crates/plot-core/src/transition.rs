// File: crates/plot-core/src/transition.rs
// Summary: Explicit-clock transition timeline with stagger and cancel-and-retarget.

use crate::geometry::Point;
use crate::scene::{Node, NodeId, Scene};

/// Duration of a standard data transition.
pub const ANIMATION_DURATION_MS: f64 = 700.0;
/// Per-element delay so bars animate in visible sequence.
pub const STAGGER_MS: f64 = 100.0;

/// Cubic in-out easing (the default easing of the observed transitions).
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Animatable attributes of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectAttrs {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectAttrs {
    fn lerp(&self, other: &RectAttrs, t: f64) -> RectAttrs {
        let l = |a: f64, b: f64| a + (b - a) * t;
        RectAttrs { x: l(self.x, other.x), y: l(self.y, other.y), w: l(self.w, other.w), h: l(self.h, other.h) }
    }
}

#[derive(Clone, Debug)]
enum Target {
    Rect { from: RectAttrs, to: RectAttrs },
    Points { from: Vec<Point>, to: Vec<Point> },
}

#[derive(Clone, Debug)]
struct Anim {
    node: NodeId,
    start_ms: f64,
    duration_ms: f64,
    target: Target,
}

impl Anim {
    /// Progress in [0, 1]; still zero while the stagger delay runs.
    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    fn current_rect(&self, now_ms: f64) -> Option<RectAttrs> {
        match &self.target {
            Target::Rect { from, to } => Some(from.lerp(to, ease_cubic_in_out(self.progress(now_ms)))),
            Target::Points { .. } => None,
        }
    }

    fn current_points(&self, now_ms: f64) -> Option<Vec<Point>> {
        match &self.target {
            Target::Rect { .. } => None,
            Target::Points { from, to } => Some(lerp_points(from, to, ease_cubic_in_out(self.progress(now_ms)))),
        }
    }
}

fn lerp_points(from: &[Point], to: &[Point], t: f64) -> Vec<Point> {
    if from.len() != to.len() {
        // Geometry replaced wholesale with a different resolution: snap.
        return to.to_vec();
    }
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t))
        .collect()
}

/// Single-threaded animation scheduler. The host drives it by calling
/// `advance(now_ms)`; there are no timers or threads behind it.
///
/// Scheduling a transition on a node that is already animating cancels the
/// running animation and starts from its *current interpolated* value, never
/// from the original baseline.
#[derive(Default)]
pub struct Timeline {
    anims: Vec<Anim>,
    now_ms: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.now_ms
    }

    pub fn is_idle(&self) -> bool {
        self.anims.is_empty()
    }

    /// Transition a rect node's attributes to `to` over `duration_ms`,
    /// starting after `delay_ms`.
    pub fn animate_rect(&mut self, scene: &Scene, node: NodeId, to: RectAttrs, duration_ms: f64, delay_ms: f64) {
        let from = match self.take_anim(node) {
            Some(prev) => prev.current_rect(self.now_ms).unwrap_or(to),
            None => match scene.rect(node) {
                Some(r) => RectAttrs { x: r.x, y: r.y, w: r.w, h: r.h },
                None => return, // unknown node: nothing to animate
            },
        };
        self.anims.push(Anim {
            node,
            start_ms: self.now_ms + delay_ms,
            duration_ms,
            target: Target::Rect { from, to },
        });
    }

    /// Transition a path node's geometry to `to` (pointwise, same length).
    pub fn animate_path(&mut self, scene: &Scene, node: NodeId, to: Vec<Point>, duration_ms: f64, delay_ms: f64) {
        let from = match self.take_anim(node) {
            Some(prev) => prev.current_points(self.now_ms).unwrap_or_else(|| to.clone()),
            None => match scene.path(node) {
                Some(p) => p.points.clone(),
                None => return,
            },
        };
        self.anims.push(Anim {
            node,
            start_ms: self.now_ms + delay_ms,
            duration_ms,
            target: Target::Points { from, to },
        });
    }

    /// Drop any animation scheduled for a removed node.
    pub fn drop_node(&mut self, node: NodeId) {
        self.anims.retain(|a| a.node != node);
    }

    /// Cancel everything without touching the clock (full relayout path).
    pub fn cancel_all(&mut self) {
        self.anims.clear();
    }

    fn take_anim(&mut self, node: NodeId) -> Option<Anim> {
        let idx = self.anims.iter().position(|a| a.node == node)?;
        Some(self.anims.remove(idx))
    }

    /// Advance the clock and write interpolated attributes into the scene.
    /// Completed animations apply their final value and are dropped.
    pub fn advance(&mut self, now_ms: f64, scene: &mut Scene) {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;
        for anim in &self.anims {
            match scene.node_mut(anim.node) {
                Some(Node::Rect(r)) => {
                    if let Some(attrs) = anim.current_rect(now) {
                        r.x = attrs.x;
                        r.y = attrs.y;
                        r.w = attrs.w;
                        r.h = attrs.h;
                    }
                }
                Some(Node::Path(p)) => {
                    if let Some(points) = anim.current_points(now) {
                        p.points = points;
                    }
                }
                _ => {}
            }
        }
        self.anims.retain(|a| a.progress(now) < 1.0);
    }

    /// Jump every pending animation to its final state.
    pub fn finish(&mut self, scene: &mut Scene) {
        let end = self
            .anims
            .iter()
            .map(|a| a.start_ms + a.duration_ms)
            .fold(self.now_ms, f64::max);
        self.advance(end, scene);
    }
}
