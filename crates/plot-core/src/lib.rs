// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod join;
pub mod kde;
pub mod layout;
pub mod margin;
pub mod scale;
pub mod scene;
pub mod series;
pub mod text;
pub mod theme;
pub mod transition;

pub use chart::{Chart, ChartConfig, ChartData, ChartKind, DisplayConfig, LabelMode, Readiness, ValueMode};
pub use error::ChartError;
pub use geometry::{Point, RectF, Size};
pub use hover::HoverState;
pub use join::{diff, JoinPlan, RenderState};
pub use kde::{epanechnikov, DensityPoint, KernelDensityEstimator};
pub use layout::{AxisMode, LayoutResult};
pub use margin::MarginConfig;
pub use scale::{BandScale, LinearScale};
pub use scene::{Anchor, Interpolation, Node, NodeId, PathNode, RectNode, Scene, Stroke, TextNode};
pub use series::{group_counts, ordered_series, pair_from_flag_counts, DataPoint, DataSeries, PairSeries, SampleVector};
pub use theme::{Color, Theme};
pub use transition::{Timeline, ANIMATION_DURATION_MS, STAGGER_MS};
