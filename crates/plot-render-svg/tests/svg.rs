// File: crates/plot-render-svg/tests/svg.rs
// Purpose: End-to-end scene-to-SVG rendering, including a full chart pipeline.

use plot_core::{
    Anchor, Chart, ChartConfig, ChartData, ChartKind, Color, DataPoint, DataSeries, Interpolation,
    Node, PathNode, RectNode, SampleVector, Scene, Size, Stroke, TextNode,
};
use plot_render_svg::render_to_string;

const VIEW: Size = Size { w: 600.0, h: 500.0 };

#[test]
fn document_wraps_nodes_in_paint_order() {
    let mut scene = Scene::new();
    scene.insert_rect(RectNode {
        x: 10.0,
        y: 20.0,
        w: 30.0,
        h: 40.0,
        fill: Color::from_argb(255, 0x20, 0xc9, 0x97),
        stroke: Some(Stroke { color: Color::WHITE, width: 3.0 }),
        opacity: 0.8,
    });
    scene.insert_text(TextNode {
        x: 50.0,
        y: 60.0,
        anchor: Anchor::Middle,
        lines: vec!["Кража".to_string()],
        font_size: 10.0,
        fill: Color::BLACK,
        length_constraint: None,
    });

    let svg = render_to_string(&scene, Size::new(100.0, 100.0));
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100""#));
    assert!(svg.trim_end().ends_with("</svg>"));

    let rect_at = svg.find("<rect").expect("rect emitted");
    let text_at = svg.find("<text").expect("text emitted");
    assert!(rect_at < text_at, "insertion order is paint order");

    assert!(svg.contains(r#"fill="rgb(32,201,151)""#));
    assert!(svg.contains(r#"stroke="rgb(255,255,255)" stroke-width="3""#));
    assert!(svg.contains(r#"opacity="0.8""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains("Кража"));
}

#[test]
fn basis_paths_expand_to_cubic_segments() {
    let mut scene = Scene::new();
    scene.insert_path(PathNode {
        points: vec![
            plot_core::Point::new(0.0, 100.0),
            plot_core::Point::new(50.0, 20.0),
            plot_core::Point::new(100.0, 100.0),
        ],
        interpolation: Interpolation::Basis,
        closed: false,
        fill: Some(Color::from_argb(255, 0x69, 0xb3, 0xa2)),
        stroke: Some(Stroke { color: Color::BLACK, width: 1.0 }),
        opacity: 0.8,
    });

    let svg = render_to_string(&scene, Size::new(120.0, 120.0));
    assert!(svg.contains(r#"d="M0.00,100.00"#));
    assert!(svg.contains('C'), "basis expansion emits Bézier segments");
    assert!(svg.contains("L100.00,100.00"), "curve lands on the last control point");
    assert!(svg.contains(r#"stroke-linejoin="round""#));
}

#[test]
fn multi_line_text_becomes_tspans_and_constraints_become_text_length() {
    let mut scene = Scene::new();
    scene.insert_text(TextNode {
        x: 10.0,
        y: 10.0,
        anchor: Anchor::Start,
        lines: vec!["первая строка".to_string(), "вторая строка".to_string()],
        font_size: 12.0,
        fill: Color::BLACK,
        length_constraint: Some(240.0),
    });

    let svg = render_to_string(&scene, Size::new(300.0, 50.0));
    assert!(svg.contains(r#"textLength="240.00" lengthAdjust="spacingAndGlyphs""#));
    assert_eq!(svg.matches("<tspan").count(), 2);
    assert!(svg.contains(r#"dy="1.2em""#));
}

#[test]
fn reserved_characters_are_escaped() {
    let mut scene = Scene::new();
    scene.insert_text(TextNode {
        x: 0.0,
        y: 0.0,
        anchor: Anchor::Start,
        lines: vec!["a < b & c > d".to_string()],
        font_size: 10.0,
        fill: Color::BLACK,
        length_constraint: None,
    });
    let svg = render_to_string(&scene, Size::new(10.0, 10.0));
    assert!(svg.contains("a &lt; b &amp; c &gt; d"));
}

#[test]
fn rendered_bar_chart_contains_its_shapes_and_labels() {
    let series = DataSeries::try_new(vec![
        DataPoint::new("Кража", 12.0),
        DataPoint::new("Угрозы", 4.0),
    ])
    .unwrap();

    let mut chart = Chart::new(ChartConfig::new(ChartKind::Bar, "Распределение по типам"));
    chart.attach_view(VIEW).unwrap();
    chart.update(ChartData::Series(series)).unwrap();
    chart.finish_animations();

    let svg = render_to_string(chart.scene(), VIEW);
    assert_eq!(svg.matches(r#"fill="rgb(32,201,151)""#).count(), 2, "one bar per label");
    assert!(svg.contains("Распределение по типам"));
    assert!(svg.contains("Кража"));
    assert!(svg.contains("Наведите курсор на столбец"));
}

#[test]
fn rendered_density_chart_contains_one_curve() {
    let mut chart = Chart::new(ChartConfig::new(ChartKind::Density, "Возраст"));
    chart.attach_view(VIEW).unwrap();
    chart
        .update(ChartData::Samples(SampleVector::from_raw(vec![25.0, 31.0, 44.0, 37.0, 52.0])))
        .unwrap();
    chart.finish_animations();

    let filled_paths = chart
        .scene()
        .iter()
        .filter(|(_, n)| matches!(n, Node::Path(p) if p.fill.is_some()))
        .count();
    assert_eq!(filled_paths, 1);

    let svg = render_to_string(chart.scene(), VIEW);
    assert!(svg.contains('C'), "curve is emitted with Bézier smoothing");
    assert!(svg.contains("Возраст"));
}
