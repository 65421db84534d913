// File: crates/plot-core/src/hover.rs
// Summary: Hover/legend interaction state machine (dim siblings, contextual legend text).

use crate::scene::{NodeId, Scene};
use crate::text::wrap_midpoint;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    Hovering(usize),
}

/// Event-driven coordinator over a set of sibling shapes. No timers: the
/// host forwards pointer enter/leave events and the coordinator rewrites
/// opacities and the legend text in place.
pub struct HoverCoordinator {
    targets: Vec<(NodeId, String)>,
    legend: Option<NodeId>,
    prompt: String,
    state: HoverState,
}

impl HoverCoordinator {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { targets: Vec::new(), legend: None, prompt: prompt.into(), state: HoverState::Idle }
    }

    /// Register the tracked shapes (in index order, with their display
    /// labels) and the legend text node. Resets to Idle.
    pub fn set_targets(&mut self, targets: Vec<(NodeId, String)>, legend: Option<NodeId>) {
        self.targets = targets;
        self.legend = legend;
        self.state = HoverState::Idle;
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.targets.iter().position(|(n, _)| *n == id)
    }

    fn set_legend(&self, scene: &mut Scene, lines: Vec<String>) {
        if let Some(legend) = self.legend {
            if let Some(text) = scene.text_mut(legend) {
                text.lines = lines;
            }
        }
    }

    fn apply_idle(&self, scene: &mut Scene, theme: &Theme) {
        for (id, _) in &self.targets {
            if let Some(rect) = scene.rect_mut(*id) {
                rect.opacity = theme.shape_opacity;
            }
        }
        self.set_legend(scene, vec![self.prompt.clone()]);
    }

    /// Pointer entered shape `id`. Unknown ids are no-ops.
    pub fn pointer_enter(&mut self, scene: &mut Scene, theme: &Theme, id: NodeId) {
        let Some(index) = self.index_of(id) else { return };
        self.state = HoverState::Hovering(index);
        for (i, (node, _)) in self.targets.iter().enumerate() {
            if let Some(rect) = scene.rect_mut(*node) {
                rect.opacity = if i == index { theme.shape_opacity } else { theme.dim_opacity };
            }
        }
        let label = self.targets[index].1.clone();
        self.set_legend(scene, wrap_midpoint(&label));
    }

    /// Pointer left the plot area toward `related`. Reverts to Idle only if
    /// the new target is not itself a tracked sibling — moving between
    /// adjacent bars must not flicker through the idle state.
    pub fn pointer_leave(&mut self, scene: &mut Scene, theme: &Theme, related: Option<NodeId>) {
        if let Some(id) = related {
            if self.index_of(id).is_some() {
                return;
            }
        }
        if self.state == HoverState::Idle {
            return;
        }
        self.state = HoverState::Idle;
        self.apply_idle(scene, theme);
    }

    /// Paint the idle visuals (used right after the targets are drawn).
    pub fn reset(&mut self, scene: &mut Scene, theme: &Theme) {
        self.state = HoverState::Idle;
        self.apply_idle(scene, theme);
    }
}
