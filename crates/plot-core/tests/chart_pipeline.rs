// File: crates/plot-core/tests/chart_pipeline.rs
// Purpose: End-to-end chart driver behavior: readiness barrier, joins, hover, resize.

use plot_core::{
    Chart, ChartConfig, ChartData, ChartError, ChartKind, DataPoint, DataSeries, HoverState,
    LabelMode, Node, PairSeries, Readiness, SampleVector, Size, Theme, ValueMode,
};

const VIEW: Size = Size { w: 600.0, h: 500.0 };

fn series(pairs: &[(&str, f64)]) -> DataSeries {
    DataSeries::try_new(pairs.iter().map(|(l, v)| DataPoint::new(*l, *v)).collect()).unwrap()
}

fn ready_bar_chart(pairs: &[(&str, f64)]) -> Chart {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "Распределение"));
    chart.attach_view(VIEW).unwrap();
    chart.update(ChartData::Series(series(pairs))).unwrap();
    chart.finish_animations();
    chart
}

// ---- readiness barrier -------------------------------------------------------

#[test]
fn view_then_data_initializes_once() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "t"));
    assert_eq!(chart.readiness(), Readiness::WaitingForBoth);

    chart.attach_view(VIEW).unwrap();
    assert_eq!(chart.readiness(), Readiness::WaitingForData);
    assert!(chart.scene().is_empty());

    chart.update(ChartData::Series(series(&[("A", 1.0)]))).unwrap();
    assert_eq!(chart.readiness(), Readiness::Ready);
    assert!(!chart.scene().is_empty());
}

#[test]
fn data_then_view_initializes_once() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "t"));
    chart.update(ChartData::Series(series(&[("A", 1.0)]))).unwrap();
    assert_eq!(chart.readiness(), Readiness::WaitingForView);
    assert!(chart.scene().is_empty());

    chart.attach_view(VIEW).unwrap();
    assert_eq!(chart.readiness(), Readiness::Ready);
    assert!(!chart.scene().is_empty());
}

#[test]
fn latest_pending_dataset_wins() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "t"));
    chart.update(ChartData::Series(series(&[("old", 1.0)]))).unwrap();
    chart.update(ChartData::Series(series(&[("new", 1.0)]))).unwrap();
    chart.attach_view(VIEW).unwrap();
    assert!(chart.node_for_label("new").is_some());
    assert!(chart.node_for_label("old").is_none());
}

#[test]
fn empty_dataset_is_held_back() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "t"));
    chart.update(ChartData::Series(DataSeries::default())).unwrap();
    assert_eq!(chart.readiness(), Readiness::WaitingForBoth);

    chart.attach_view(VIEW).unwrap();
    chart.update(ChartData::Series(DataSeries::default())).unwrap();
    assert_eq!(chart.readiness(), Readiness::WaitingForData);

    // First non-empty update triggers initialization.
    chart.update(ChartData::Series(series(&[("A", 2.0)]))).unwrap();
    assert_eq!(chart.readiness(), Readiness::Ready);
}

#[test]
fn mismatched_dataset_kind_is_rejected() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "t"));
    let pair = PairSeries::try_new(DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)).unwrap();
    let err = chart.update(ChartData::Pair(pair)).unwrap_err();
    assert!(matches!(err, ChartError::DataKindMismatch));
    assert_eq!(chart.readiness(), Readiness::WaitingForBoth);
}

#[test]
fn non_measurable_view_is_rejected() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "t"));
    assert!(matches!(chart.attach_view(Size::new(0.0, 400.0)), Err(ChartError::InvalidViewSize)));
    assert!(matches!(chart.attach_view(Size::new(f64::NAN, 400.0)), Err(ChartError::InvalidViewSize)));
    assert_eq!(chart.readiness(), Readiness::WaitingForBoth);
}

// ---- bar chart joins -----------------------------------------------------------

#[test]
fn data_update_joins_by_label() {
    let mut chart = ready_bar_chart(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
    let b_before = chart.node_for_label("B").unwrap();
    let c_before = chart.node_for_label("C").unwrap();

    chart.update(ChartData::Series(series(&[("B", 2.0), ("C", 3.0), ("D", 4.0)]))).unwrap();
    chart.finish_animations();

    assert!(chart.node_for_label("A").is_none(), "exited label keeps no shape");
    assert_eq!(chart.node_for_label("B"), Some(b_before), "updated shapes are reused");
    assert_eq!(chart.node_for_label("C"), Some(c_before));
    assert!(chart.node_for_label("D").is_some(), "entered label gets a shape");
}

#[test]
fn bar_heights_are_proportional_to_values() {
    let mut chart = ready_bar_chart(&[("B", 10.0), ("C", 20.0)]);
    chart.finish_animations();

    let h = |label: &str| chart.scene().rect(chart.node_for_label(label).unwrap()).unwrap().h;
    assert!(h("B") > 0.0);
    assert!((h("C") / h("B") - 2.0).abs() < 1e-6);

    // Bars rest on the inner rect's baseline.
    let inner = chart.layout().unwrap().inner;
    let rect = chart.scene().rect(chart.node_for_label("C").unwrap()).unwrap();
    assert!((rect.y + rect.h - inner.bottom()).abs() < 1e-6);
}

#[test]
fn reapplying_the_same_series_is_idempotent() {
    let data = [("A", 5.0), ("B", 9.0)];
    let mut chart = ready_bar_chart(&data);
    let snapshot: Vec<(f64, f64, f64, f64)> = ["A", "B"]
        .iter()
        .map(|l| {
            let r = chart.scene().rect(chart.node_for_label(l).unwrap()).unwrap();
            (r.x, r.y, r.w, r.h)
        })
        .collect();

    chart.update(ChartData::Series(series(&data))).unwrap();
    chart.finish_animations();

    for (l, before) in ["A", "B"].iter().zip(snapshot) {
        let r = chart.scene().rect(chart.node_for_label(l).unwrap()).unwrap();
        assert!((r.x - before.0).abs() < 1e-6);
        assert!((r.y - before.1).abs() < 1e-6);
        assert!((r.w - before.2).abs() < 1e-6);
        assert!((r.h - before.3).abs() < 1e-6);
    }
}

#[test]
fn data_update_animates_between_values() {
    // B pins the domain max, so doubling A doubles its bar.
    let mut chart = ready_bar_chart(&[("A", 10.0), ("B", 20.0)]);
    let h = |c: &Chart| c.scene().rect(c.node_for_label("A").unwrap()).unwrap().h;
    let before = h(&chart);

    chart.advance(1000.0); // settle the clock past the initial transitions
    chart.update(ChartData::Series(series(&[("A", 20.0), ("B", 20.0)]))).unwrap();
    assert!(chart.is_animating());

    chart.advance(1350.0);
    let mid = h(&chart);
    assert!(mid > before);

    chart.finish_animations();
    assert!(!chart.is_animating());
    let after = h(&chart);
    assert!(mid < after);
    assert!((after - before * 2.0).abs() < 1e-6);
}

#[test]
fn anonymized_label_mode_renders_indices() {
    let mut config = ChartConfig::new(ChartKind::Bar, "t");
    config.display.labels = LabelMode::Anonymized;
    let mut chart = Chart::new(config);
    chart.attach_view(VIEW).unwrap();
    chart.update(ChartData::Series(series(&[("Кража", 3.0), ("Угрозы", 1.0)]))).unwrap();

    let texts: Vec<String> = chart
        .scene()
        .iter()
        .filter_map(|(_, n)| match n {
            Node::Text(t) => Some(t.lines.join(" ")),
            _ => None,
        })
        .collect();
    assert!(texts.iter().any(|t| t == "#1"));
    assert!(texts.iter().any(|t| t == "#2"));
    assert!(!texts.iter().any(|t| t == "Кража"));
}

// ---- comparison chart ---------------------------------------------------------

#[test]
fn pair_percentages_fill_the_proportional_width() {
    let mut config = ChartConfig::new(ChartKind::PairBar, "Пол пострадавших");
    config.display.values = ValueMode::Percentage;
    let mut chart = Chart::new(config);

    let pair = PairSeries::try_new(DataPoint::new("Мужчины", 30.0), DataPoint::new("Женщины", 70.0)).unwrap();
    chart.update(ChartData::Pair(pair)).unwrap();
    chart.attach_view(VIEW).unwrap();
    chart.finish_animations();

    let inner = chart.layout().unwrap().inner;
    let value_fill = Theme::mint().pair_value_fill;
    let value_rect = chart
        .scene()
        .iter()
        .find_map(|(_, n)| match n {
            Node::Rect(r) if r.fill == value_fill => Some(r.clone()),
            _ => None,
        })
        .expect("value bar present");

    // 30 of 100 percent of the inner width.
    assert!((value_rect.w - inner.w * 0.30).abs() < 1e-6);
    assert!((value_rect.x - inner.x).abs() < 1e-6);
}

// ---- density chart --------------------------------------------------------------

#[test]
fn density_curve_has_the_fixed_grid_resolution() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Density, "Возраст"));
    chart.attach_view(VIEW).unwrap();
    chart.update(ChartData::Samples(SampleVector::from_raw(vec![20.0, 30.0, 40.0, 35.0]))).unwrap();
    chart.finish_animations();

    let curve = chart
        .scene()
        .iter()
        .find_map(|(_, n)| match n {
            Node::Path(p) if p.fill.is_some() => Some(p.clone()),
            _ => None,
        })
        .expect("density curve present");
    assert_eq!(curve.points.len(), plot_core::kde::GRID_RESOLUTION);

    let before = curve.points.clone();
    chart.update(ChartData::Samples(SampleVector::from_raw(vec![60.0, 65.0, 70.0]))).unwrap();
    assert!(chart.is_animating());
    chart.finish_animations();

    let after = chart
        .scene()
        .iter()
        .find_map(|(_, n)| match n {
            Node::Path(p) if p.fill.is_some() => Some(p.points.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(after.len(), before.len());
    assert_ne!(after, before);
}

// ---- hover ----------------------------------------------------------------------

#[test]
fn hover_dims_siblings_and_restores_on_leave() {
    let mut chart = ready_bar_chart(&[("Кража", 3.0), ("Угрозы", 1.0)]);
    let a = chart.node_for_label("Кража").unwrap();
    let b = chart.node_for_label("Угрозы").unwrap();
    let theme = Theme::mint();

    chart.pointer_enter(a);
    assert!(matches!(chart.hover_state(), HoverState::Hovering(0)));
    assert_eq!(chart.scene().rect(a).unwrap().opacity, theme.shape_opacity);
    assert_eq!(chart.scene().rect(b).unwrap().opacity, theme.dim_opacity);

    chart.pointer_leave(None);
    assert_eq!(chart.hover_state(), HoverState::Idle);
    assert_eq!(chart.scene().rect(a).unwrap().opacity, theme.shape_opacity);
    assert_eq!(chart.scene().rect(b).unwrap().opacity, theme.shape_opacity);
}

#[test]
fn moving_between_siblings_does_not_flicker_through_idle() {
    let mut chart = ready_bar_chart(&[("A", 1.0), ("B", 2.0)]);
    let a = chart.node_for_label("A").unwrap();
    let b = chart.node_for_label("B").unwrap();

    chart.pointer_enter(a);
    // Leave event whose related target is the adjacent bar.
    chart.pointer_leave(Some(b));
    assert!(matches!(chart.hover_state(), HoverState::Hovering(0)));

    chart.pointer_enter(b);
    assert!(matches!(chart.hover_state(), HoverState::Hovering(1)));
}

#[test]
fn hover_on_an_untracked_node_is_a_noop() {
    let mut chart = ready_bar_chart(&[("A", 1.0)]);
    let legend = chart.legend_node().unwrap();
    chart.pointer_enter(legend);
    assert_eq!(chart.hover_state(), HoverState::Idle);
}

#[test]
fn legend_shows_the_hovered_label_and_reverts_to_the_prompt() {
    let long = "очень длинное название типа преступления здесь";
    let mut chart = ready_bar_chart(&[(long, 2.0), ("Кража", 1.0)]);
    let node = chart.node_for_label(long).unwrap();
    let legend = chart.legend_node().unwrap();

    chart.pointer_enter(node);
    let lines = match chart.scene().node(legend) {
        Some(Node::Text(t)) => t.lines.clone(),
        _ => panic!("legend is a text node"),
    };
    assert_eq!(lines.len(), 2, "long labels wrap at the midpoint word");
    assert_eq!(lines.join(" "), long);

    chart.pointer_leave(None);
    let lines = match chart.scene().node(legend) {
        Some(Node::Text(t)) => t.lines.clone(),
        _ => panic!("legend is a text node"),
    };
    assert_eq!(lines, vec!["Наведите курсор на столбец".to_string()]);
}

// ---- resize ----------------------------------------------------------------------

#[test]
fn resize_relayouts_synchronously_without_animation() {
    let mut chart = ready_bar_chart(&[("A", 10.0), ("B", 20.0)]);
    let inner_before = chart.layout().unwrap().inner;

    chart.resize(Size::new(900.0, 700.0)).unwrap();
    assert!(!chart.is_animating());

    let inner_after = chart.layout().unwrap().inner;
    assert!(inner_after.w > inner_before.w);

    // Shapes sit at their final data values in the new geometry.
    let h = |label: &str| chart.scene().rect(chart.node_for_label(label).unwrap()).unwrap().h;
    assert!(h("B") > 0.0);
    assert!((h("B") / h("A") - 2.0).abs() < 1e-6);
}

#[test]
fn attach_view_after_readiness_acts_as_resize() {
    let mut chart = ready_bar_chart(&[("A", 1.0)]);
    chart.attach_view(Size::new(800.0, 600.0)).unwrap();
    assert_eq!(chart.readiness(), Readiness::Ready);
    assert_eq!(chart.layout().unwrap().size, Size::new(800.0, 600.0));
    assert!(!chart.is_animating());
}

#[test]
fn resize_before_readiness_only_records_the_size() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "t"));
    chart.attach_view(VIEW).unwrap();
    chart.resize(Size::new(300.0, 200.0)).unwrap();
    assert_eq!(chart.readiness(), Readiness::WaitingForData);
    assert!(chart.scene().is_empty());
}
