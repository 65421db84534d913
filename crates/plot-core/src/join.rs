// File: crates/plot-core/src/join.rs
// Summary: Keyed enter/update/exit reconciliation against the last-drawn state.

use std::collections::HashMap;

use crate::kde::DensityPoint;
use crate::scene::NodeId;
use crate::series::DataSeries;

/// Result of diffing a new series against the previously drawn labels.
/// `enter`/`update` are indices into the new series; `exit` holds the labels
/// whose shapes must go.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JoinPlan {
    pub enter: Vec<usize>,
    pub update: Vec<usize>,
    pub exit: Vec<String>,
}

/// Reconcile by label: present only in `next` enters, present in both
/// updates, present only in `prev` exits.
pub fn diff(prev: &[String], next: &DataSeries) -> JoinPlan {
    let mut plan = JoinPlan::default();
    for (i, point) in next.points().iter().enumerate() {
        if prev.iter().any(|l| *l == point.label) {
            plan.update.push(i);
        } else {
            plan.enter.push(i);
        }
    }
    for label in prev {
        if !next.points().iter().any(|p| p.label == *label) {
            plan.exit.push(label.clone());
        }
    }
    plan
}

/// Last-drawn baseline a chart instance carries between updates, so
/// transitions interpolate from the previous visual state rather than zero.
#[derive(Default)]
pub struct RenderState {
    /// Series as of the last completed join.
    pub series: DataSeries,
    /// Shape node per live label.
    pub nodes: HashMap<String, NodeId>,
    /// Density curve as of the last update (single-path charts).
    pub curve: Vec<DensityPoint>,
}

impl RenderState {
    pub fn labels(&self) -> Vec<String> {
        self.series.labels()
    }
}
