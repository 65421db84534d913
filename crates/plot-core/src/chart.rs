// File: crates/plot-core/src/chart.rs
// Summary: Chart driver: readiness barrier, render pipeline, data-path updates, hover routing.

use crate::error::ChartError;
use crate::geometry::{Point, Size};
use crate::hover::{HoverCoordinator, HoverState};
use crate::join::{diff, RenderState};
use crate::kde::{KernelDensityEstimator, DEFAULT_BANDWIDTH, GRID_RESOLUTION};
use crate::layout::{self, AxisMode, AxisSet, LayoutResult};
use crate::margin::MarginConfig;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Interpolation, NodeId, PathNode, RectNode, Scene, Stroke, TextNode};
use crate::series::{DataSeries, PairSeries, SampleVector};
use crate::text;
use crate::theme::Theme;
use crate::axis;
use crate::transition::{RectAttrs, Timeline, ANIMATION_DURATION_MS, STAGGER_MS};

/// Domain padding above the observed max, per chart type.
const DENSITY_PAD: f64 = 0.10;
const BAR_PAD_ABSOLUTE: f64 = 0.10;
const BAR_PAD_PERCENTAGE: f64 = 0.20;

/// The comparison bar is 1/6 of the inner height and animates 1.5x longer.
const PAIR_BAR_HEIGHT_PART: f64 = 6.0;
const PAIR_DURATION_FACTOR: f64 = 1.5;

const TITLE_FONT_SIZE: f64 = 14.0;
const LEGEND_FONT_SIZE: f64 = 12.0;
const LEGEND_GAP: f64 = 14.0;
const BAR_STROKE_WIDTH: f64 = 3.0;
const CURVE_STROKE_WIDTH: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    PairBar,
    Density,
}

/// Dataset accepted by `Chart::update`; must match the chart kind.
#[derive(Clone, Debug)]
pub enum ChartData {
    Series(DataSeries),
    Pair(PairSeries),
    Samples(SampleVector),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LabelMode {
    #[default]
    Raw,
    /// Display `#1..#n` instead of the raw category names.
    Anonymized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ValueMode {
    #[default]
    Absolute,
    Percentage,
}

#[derive(Clone, Debug)]
pub struct DisplayConfig {
    pub labels: LabelMode,
    pub values: ValueMode,
    pub legend_prompt: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            labels: LabelMode::default(),
            values: ValueMode::default(),
            legend_prompt: "Наведите курсор на столбец".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,
    pub margins: MarginConfig,
    pub display: DisplayConfig,
    pub theme: Theme,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        let margins = match kind {
            // The comparison chart only cedes horizontal space to margins.
            ChartKind::PairBar => MarginConfig::from_occupation(0.85, 1.0),
            _ => MarginConfig::default(),
        };
        Self {
            kind,
            title: title.into(),
            margins,
            display: DisplayConfig::default(),
            theme: Theme::default(),
        }
    }
}

/// Readiness barrier: rendering starts only after both the dataset and the
/// measurable view have arrived, in any order, exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    WaitingForBoth,
    /// View measured, dataset still pending.
    WaitingForData,
    /// Dataset held, view still pending.
    WaitingForView,
    Ready,
}

/// A single chart instance: one pipeline over one dataset, owning its scene,
/// timeline, and render state exclusively.
pub struct Chart {
    config: ChartConfig,
    readiness: Readiness,
    size: Option<Size>,
    pending: Option<ChartData>,
    last_data: Option<ChartData>,
    scene: Scene,
    timeline: Timeline,
    layout: Option<LayoutResult>,
    state: RenderState,
    hover: HoverCoordinator,

    scale_band: Option<BandScale>,
    scale_x: Option<LinearScale>,
    scale_y: Option<LinearScale>,
    estimator: Option<KernelDensityEstimator>,
    curve_node: Option<NodeId>,
    pair_value_node: Option<NodeId>,
    legend_node: Option<NodeId>,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        let prompt = config.display.legend_prompt.clone();
        Self {
            config,
            readiness: Readiness::WaitingForBoth,
            size: None,
            pending: None,
            last_data: None,
            scene: Scene::new(),
            timeline: Timeline::new(),
            layout: None,
            state: RenderState::default(),
            hover: HoverCoordinator::new(prompt),
            scale_band: None,
            scale_x: None,
            scale_y: None,
            estimator: None,
            curve_node: None,
            pair_value_node: None,
            legend_node: None,
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover.state()
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }

    /// Shape node currently bound to `label`, if drawn.
    pub fn node_for_label(&self, label: &str) -> Option<NodeId> {
        self.state.nodes.get(label).copied()
    }

    pub fn legend_node(&self) -> Option<NodeId> {
        self.legend_node
    }

    /// Resolve the view gate with the host's measured size. Called again
    /// after readiness, it behaves as a resize.
    pub fn attach_view(&mut self, size: Size) -> Result<(), ChartError> {
        if !size.is_finite() {
            return Err(ChartError::InvalidViewSize);
        }
        match self.readiness {
            Readiness::WaitingForBoth => {
                self.size = Some(size);
                self.readiness = Readiness::WaitingForData;
            }
            Readiness::WaitingForData => {
                self.size = Some(size);
            }
            Readiness::WaitingForView => {
                self.size = Some(size);
                self.readiness = Readiness::Ready;
                if let Some(data) = self.pending.take() {
                    self.render_full(&data, true);
                    self.last_data = Some(data);
                }
            }
            Readiness::Ready => return self.resize(size),
        }
        Ok(())
    }

    /// Supply a dataset. Before readiness this resolves the data gate (empty
    /// datasets are held back: the first *valid* update triggers
    /// initialization). After readiness only the data path re-runs.
    pub fn update(&mut self, data: ChartData) -> Result<(), ChartError> {
        if !self.kind_matches(&data) {
            return Err(ChartError::DataKindMismatch);
        }
        if Self::is_empty_data(&data) {
            // Skip layout entirely; stay pending / keep the previous frame.
            return Ok(());
        }
        match self.readiness {
            Readiness::WaitingForBoth => {
                self.pending = Some(data);
                self.readiness = Readiness::WaitingForView;
            }
            Readiness::WaitingForView => {
                self.pending = Some(data);
            }
            Readiness::WaitingForData => {
                self.readiness = Readiness::Ready;
                self.render_full(&data, true);
                self.last_data = Some(data);
            }
            Readiness::Ready => {
                self.data_update(&data);
                self.last_data = Some(data);
            }
        }
        Ok(())
    }

    /// Full synchronous relayout against a new container size. Shapes are
    /// redrawn at their current data values without animation.
    pub fn resize(&mut self, size: Size) -> Result<(), ChartError> {
        if !size.is_finite() {
            return Err(ChartError::InvalidViewSize);
        }
        self.size = Some(size);
        if self.readiness != Readiness::Ready {
            return Ok(());
        }
        if let Some(data) = self.last_data.take() {
            self.render_full(&data, false);
            self.last_data = Some(data);
        }
        Ok(())
    }

    /// Advance the animation clock; the host drives this from its frame loop.
    pub fn advance(&mut self, now_ms: f64) {
        self.timeline.advance(now_ms, &mut self.scene);
    }

    /// Jump all running transitions to their final state.
    pub fn finish_animations(&mut self) {
        self.timeline.finish(&mut self.scene);
    }

    pub fn pointer_enter(&mut self, id: NodeId) {
        self.hover.pointer_enter(&mut self.scene, &self.config.theme, id);
    }

    pub fn pointer_leave(&mut self, related: Option<NodeId>) {
        self.hover.pointer_leave(&mut self.scene, &self.config.theme, related);
    }

    // ---- pipeline ----------------------------------------------------------

    fn kind_matches(&self, data: &ChartData) -> bool {
        matches!(
            (self.config.kind, data),
            (ChartKind::Bar, ChartData::Series(_))
                | (ChartKind::PairBar, ChartData::Pair(_))
                | (ChartKind::Density, ChartData::Samples(_))
        )
    }

    fn is_empty_data(data: &ChartData) -> bool {
        match data {
            ChartData::Series(s) => s.is_empty(),
            ChartData::Pair(_) => false,
            ChartData::Samples(v) => v.is_empty(),
        }
    }

    fn render_full(&mut self, data: &ChartData, animate: bool) {
        self.scene.clear();
        self.timeline.cancel_all();
        self.state = RenderState::default();
        self.curve_node = None;
        self.pair_value_node = None;
        self.legend_node = None;

        match (self.config.kind, data) {
            (ChartKind::Bar, ChartData::Series(series)) => self.render_bar(series.clone(), animate),
            (ChartKind::PairBar, ChartData::Pair(pair)) => self.render_pair(pair, animate),
            (ChartKind::Density, ChartData::Samples(samples)) => self.render_density(samples, animate),
            _ => {}
        }
    }

    fn data_update(&mut self, data: &ChartData) {
        match (self.config.kind, data) {
            (ChartKind::Bar, ChartData::Series(series)) => {
                let duration = ANIMATION_DURATION_MS;
                self.apply_series(series.clone(), duration);
            }
            (ChartKind::PairBar, ChartData::Pair(pair)) => self.apply_pair(pair, ANIMATION_DURATION_MS * PAIR_DURATION_FACTOR),
            (ChartKind::Density, ChartData::Samples(samples)) => self.apply_samples(samples, ANIMATION_DURATION_MS),
            _ => {}
        }
    }

    fn display_series(&self, series: &DataSeries) -> DataSeries {
        match self.config.display.values {
            ValueMode::Absolute => series.clone(),
            ValueMode::Percentage => series.as_percentages(),
        }
    }

    fn display_labels(&self, series: &DataSeries) -> Vec<String> {
        match self.config.display.labels {
            LabelMode::Raw => series.labels(),
            LabelMode::Anonymized => (1..=series.len()).map(|i| format!("#{i}")).collect(),
        }
    }

    fn bar_pad(&self) -> f64 {
        match self.config.display.values {
            ValueMode::Absolute => BAR_PAD_ABSOLUTE,
            ValueMode::Percentage => BAR_PAD_PERCENTAGE,
        }
    }

    // ---- bar chart ---------------------------------------------------------

    fn render_bar(&mut self, series: DataSeries, animate: bool) {
        let Some(size) = self.size else { return };
        let display = self.display_series(&series);
        let display_labels = self.display_labels(&display);
        let labels = display.labels();
        let max_value = display.max_value();
        let pad = self.bar_pad();
        let theme = self.config.theme;

        let layout = layout::resolve(
            &mut self.scene,
            &theme,
            size,
            &self.config.margins,
            AxisMode::TwoAxis,
            |rect| {
                let band = BandScale::new(labels.clone()).range(0.0, rect.w).padding(0.2);
                let y = LinearScale::new().padded_domain(max_value, pad).range(rect.h, 0.0);
                AxisSet {
                    bottom: Some(axis::ticks_band(&band, Some(&display_labels))),
                    left: Some(axis::ticks_left(&y, rect.h)),
                }
            },
        );

        self.draw_title_centered(&layout);
        self.legend_node = Some(self.scene.insert_text(TextNode {
            x: layout.inner.x,
            y: layout.inner.bottom() + layout.axis_x.height + LEGEND_GAP + LEGEND_FONT_SIZE,
            anchor: Anchor::Start,
            lines: vec![self.config.display.legend_prompt.clone()],
            font_size: LEGEND_FONT_SIZE,
            fill: self.config.theme.legend,
            length_constraint: None,
        }));

        self.layout = Some(layout);
        let duration = if animate { ANIMATION_DURATION_MS } else { 0.0 };
        self.apply_series(series, duration);
    }

    /// The bar data path: rebuild scale domains against the cached inner
    /// rect, reconcile shapes by label, schedule staggered transitions.
    fn apply_series(&mut self, series: DataSeries, duration: f64) {
        let Some(layout) = self.layout.as_ref() else { return };
        let inner = layout.inner;
        let theme = self.config.theme;

        let display = self.display_series(&series);
        let display_labels = self.display_labels(&display);
        let band = BandScale::new(display.labels()).range(0.0, inner.w).padding(0.2);
        let y = LinearScale::new().padded_domain(display.max_value(), self.bar_pad()).range(inner.h, 0.0);

        let plan = diff(&self.state.labels(), &display);

        for label in &plan.exit {
            if let Some(id) = self.state.nodes.remove(label) {
                self.scene.remove(id);
                self.timeline.drop_node(id);
            }
        }

        for &i in &plan.enter {
            let point = &display.points()[i];
            // New shapes start at the baseline and grow to their value.
            let id = self.scene.insert_rect(RectNode {
                x: inner.x + band.position(i),
                y: inner.bottom(),
                w: band.bandwidth(),
                h: 0.0,
                fill: theme.bar_fill,
                stroke: Some(Stroke { color: theme.bar_stroke, width: BAR_STROKE_WIDTH }),
                opacity: theme.shape_opacity,
            });
            self.state.nodes.insert(point.label.clone(), id);
        }

        for (i, point) in display.points().iter().enumerate() {
            let Some(&id) = self.state.nodes.get(&point.label) else { continue };
            let target = RectAttrs {
                x: inner.x + band.position(i),
                y: inner.y + y.scale(point.value),
                w: band.bandwidth(),
                h: inner.h - y.scale(point.value),
            };
            if duration > 0.0 {
                self.timeline
                    .animate_rect(&self.scene, id, target, duration, i as f64 * STAGGER_MS);
            } else if let Some(rect) = self.scene.rect_mut(id) {
                rect.x = target.x;
                rect.y = target.y;
                rect.w = target.w;
                rect.h = target.h;
            }
        }

        let targets = display
            .points()
            .iter()
            .enumerate()
            .filter_map(|(i, p)| self.state.nodes.get(&p.label).map(|&id| (id, display_labels[i].clone())))
            .collect();
        self.hover.set_targets(targets, self.legend_node);
        self.hover.reset(&mut self.scene, &theme);

        self.scale_band = Some(band);
        self.scale_y = Some(y);
        self.state.series = display;
    }

    // ---- comparison (pair) chart --------------------------------------------

    fn pair_display(&self, pair: &PairSeries) -> PairSeries {
        match self.config.display.values {
            ValueMode::Absolute => pair.clone(),
            ValueMode::Percentage => pair.as_percentages(),
        }
    }

    fn render_pair(&mut self, pair: &PairSeries, animate: bool) {
        let Some(size) = self.size else { return };
        let display = self.pair_display(pair);
        let total = display.total();
        let theme = self.config.theme;

        let layout = layout::resolve(
            &mut self.scene,
            &theme,
            size,
            &self.config.margins,
            AxisMode::SingleAxis,
            |rect| {
                let x = LinearScale::new().domain(0.0, total).range(0.0, rect.w);
                AxisSet { bottom: Some(axis::ticks_bottom(&x, rect.w)), left: None }
            },
        );

        let inner = layout.inner;
        let bar_h = inner.h / PAIR_BAR_HEIGHT_PART;
        let bar_y = inner.bottom() - bar_h;

        // Base bar spans the full scale; the value bar grows over it.
        self.scene.insert_rect(RectNode {
            x: inner.x,
            y: bar_y,
            w: inner.w,
            h: bar_h,
            fill: theme.pair_base_fill,
            stroke: None,
            opacity: 1.0,
        });
        let value_node = self.scene.insert_rect(RectNode {
            x: inner.x,
            y: bar_y,
            w: 0.0,
            h: bar_h,
            fill: theme.pair_value_fill,
            stroke: None,
            opacity: 1.0,
        });
        self.pair_value_node = Some(value_node);

        self.scene.insert_text(TextNode {
            x: inner.x,
            y: inner.y,
            anchor: Anchor::Start,
            lines: vec![self.config.title.clone()],
            font_size: TITLE_FONT_SIZE,
            fill: theme.title,
            length_constraint: None,
        });

        self.layout = Some(layout);
        let duration = if animate { ANIMATION_DURATION_MS * PAIR_DURATION_FACTOR } else { 0.0 };
        self.apply_pair(pair, duration);
    }

    fn apply_pair(&mut self, pair: &PairSeries, duration: f64) {
        let (Some(layout), Some(node)) = (self.layout.as_ref(), self.pair_value_node) else { return };
        let inner = layout.inner;
        let display = self.pair_display(pair);
        let x = LinearScale::new().domain(0.0, display.total()).range(0.0, inner.w);

        let bar_h = inner.h / PAIR_BAR_HEIGHT_PART;
        let target = RectAttrs {
            x: inner.x,
            y: inner.bottom() - bar_h,
            w: x.scale(display.first().value),
            h: bar_h,
        };
        if duration > 0.0 {
            self.timeline.animate_rect(&self.scene, node, target, duration, 0.0);
        } else if let Some(rect) = self.scene.rect_mut(node) {
            rect.w = target.w;
        }
        self.scale_x = Some(x);
    }

    // ---- density chart -------------------------------------------------------

    fn render_density(&mut self, samples: &SampleVector, animate: bool) {
        let Some(size) = self.size else { return };
        let theme = self.config.theme;

        // Domains depend only on the data, so the estimator and curve are
        // computed once and shared by both layout passes.
        let x_domain = LinearScale::new().padded_domain(samples.max(), DENSITY_PAD);
        let estimator = KernelDensityEstimator::new(x_domain.ticks(GRID_RESOLUTION), DEFAULT_BANDWIDTH);
        let curve = estimator.estimate(samples.values());
        let max_density = curve.iter().map(|p| p.density).fold(0.0, f64::max);

        let layout = layout::resolve(
            &mut self.scene,
            &theme,
            size,
            &self.config.margins,
            AxisMode::TwoAxis,
            |rect| {
                let x = x_domain.range(0.0, rect.w);
                let y = LinearScale::new().padded_domain(max_density, DENSITY_PAD).range(rect.h, 0.0);
                AxisSet {
                    bottom: Some(axis::ticks_bottom(&x, rect.w)),
                    left: Some(axis::ticks_left(&y, rect.h)),
                }
            },
        );

        self.draw_title_centered(&layout);

        let inner = layout.inner;
        let x = x_domain.range(0.0, inner.w);
        let y = LinearScale::new().padded_domain(max_density, DENSITY_PAD).range(inner.h, 0.0);

        let target: Vec<Point> = curve
            .iter()
            .map(|p| Point::new(inner.x + x.scale(p.x), inner.y + y.scale(p.density)))
            .collect();
        // First paint draws the curve flat along the baseline, then raises it.
        let initial: Vec<Point> = if animate {
            curve.iter().map(|p| Point::new(inner.x + x.scale(p.x), inner.bottom())).collect()
        } else {
            target.clone()
        };

        let node = self.scene.insert_path(PathNode {
            points: initial,
            interpolation: Interpolation::Basis,
            closed: false,
            fill: Some(theme.curve_fill),
            stroke: Some(Stroke { color: theme.curve_stroke, width: CURVE_STROKE_WIDTH }),
            opacity: theme.shape_opacity,
        });
        if animate {
            self.timeline.animate_path(&self.scene, node, target, ANIMATION_DURATION_MS, 0.0);
        }

        self.curve_node = Some(node);
        self.estimator = Some(estimator);
        self.scale_x = Some(x);
        self.scale_y = Some(y);
        self.state.curve = curve;
        self.layout = Some(layout);
    }

    /// The density data path: re-estimate over the fixed grid and retarget
    /// the one path. Scales stay as initialized, matching the source.
    fn apply_samples(&mut self, samples: &SampleVector, duration: f64) {
        let (Some(layout), Some(node), Some(estimator), Some(x), Some(y)) = (
            self.layout.as_ref(),
            self.curve_node,
            self.estimator.as_ref(),
            self.scale_x.as_ref(),
            self.scale_y.as_ref(),
        ) else {
            return;
        };
        let inner = layout.inner;
        let curve = estimator.estimate(samples.values());
        let target: Vec<Point> = curve
            .iter()
            .map(|p| Point::new(inner.x + x.scale(p.x), inner.y + y.scale(p.density)))
            .collect();
        self.timeline.animate_path(&self.scene, node, target, duration, 0.0);
        self.state.curve = curve;
    }

    fn draw_title_centered(&mut self, layout: &LayoutResult) {
        if self.config.title.is_empty() {
            return;
        }
        let inner = layout.inner;
        let fraction = text::title_length_fraction(&self.config.title, inner.w);
        self.scene.insert_text(TextNode {
            x: inner.x + inner.w / 2.0,
            y: inner.y,
            anchor: Anchor::Middle,
            lines: vec![self.config.title.clone()],
            font_size: TITLE_FONT_SIZE,
            fill: self.config.theme.title,
            length_constraint: Some(inner.w * fraction),
        });
    }
}
