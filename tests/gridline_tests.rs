use chart_layout::api::{
    BackgroundLineStyle, ChartConfig, ChartLayout, XAxisLabelPosition, XAxisLabelStyle,
};
use chart_layout::core::Viewport;
use chart_layout::render::{Color, DashPattern, PrimitiveGroup};

fn config(data: Vec<f64>) -> ChartConfig {
    ChartConfig::new(data, Viewport::new(400.0, 300.0))
}

#[test]
fn x_axis_lines_emit_one_per_tick_plus_origin() {
    let layout = ChartLayout::new(config(vec![1.0, 2.0, 3.0]).with_x_axis_label_count(6))
        .expect("layout");
    let lines = layout.render_x_axis_lines();

    assert_eq!(lines.len(), 7);
    for (index, line) in lines.iter().enumerate() {
        assert_eq!(line.key.group, PrimitiveGroup::XAxisLine);
        assert_eq!(line.key.index, index);
    }
}

#[test]
fn x_axis_lines_span_plot_area_from_top_to_base() {
    let layout = ChartLayout::new(config(vec![1.0, 2.0, 3.0])).expect("layout");

    for line in layout.render_x_axis_lines() {
        assert_eq!(line.x1, 50.0);
        assert_eq!(line.x2, 400.0);
        assert_eq!(line.y1, 0.0);
        assert_eq!(line.y2, layout.base_height());
    }
}

#[test]
fn x_axis_lines_stop_before_right_gutter() {
    let layout = ChartLayout::new(config(vec![1.0, 2.0]).with_x_axis_label_style(
        XAxisLabelStyle::default().with_position(XAxisLabelPosition::Right),
    ))
    .expect("layout");

    for line in layout.render_x_axis_lines() {
        assert_eq!(line.x1, 0.0);
        assert_eq!(line.x2, 350.0);
    }
}

#[test]
fn x_axis_lines_end_at_mixed_sign_base_line() {
    let layout =
        ChartLayout::new(config(vec![-10.0, 0.0, 20.0]).with_start_at_zero(false)).expect("layout");

    for line in layout.render_x_axis_lines() {
        assert!((line.y2 - 200.0).abs() <= 1e-9);
    }
}

#[test]
fn background_line_defaults_are_black_dashed_one_pixel() {
    let layout = ChartLayout::new(config(vec![1.0])).expect("layout");
    let line = &layout.render_x_axis_lines()[0];

    assert_eq!(line.color, Color::BLACK);
    assert_eq!(line.stroke_width, 1.0);
    assert_eq!(line.dash, DashPattern::new(&[5.0, 10.0]));
}

#[test]
fn y_axis_lines_are_centered_in_category_slots() {
    let layout = ChartLayout::new(config(vec![3.0, 1.0, 4.0, 1.0, 5.0])).expect("layout");
    let lines = layout.render_y_axis_lines();
    let slot = layout.y_label_slot_width();

    assert_eq!(lines.len(), 5);
    for (index, line) in lines.iter().enumerate() {
        let expected_x = index as f64 * slot + slot / 2.0 + 50.0;
        assert!((line.x1 - expected_x).abs() <= 1e-9);
        assert_eq!(line.x1, line.x2);
        assert_eq!(line.y1, 0.0);
        assert_eq!(line.y2, 300.0);
        assert_eq!(line.key.group, PrimitiveGroup::YAxisLine);
    }
}

#[test]
fn custom_line_styles_are_applied_per_axis() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let layout = ChartLayout::new(
        config(vec![1.0, 2.0])
            .with_x_axis_background_line_style(BackgroundLineStyle {
                color: red.clone(),
                stroke_width: 2.0,
                dash: DashPattern::solid(),
            })
            .with_y_axis_background_line_style(BackgroundLineStyle {
                stroke_width: 3.0,
                ..BackgroundLineStyle::default()
            }),
    )
    .expect("layout");

    let x_line = &layout.render_x_axis_lines()[0];
    assert_eq!(x_line.color, red);
    assert_eq!(x_line.stroke_width, 2.0);
    assert!(x_line.dash.is_solid());

    let y_line = &layout.render_y_axis_lines()[0];
    assert_eq!(y_line.color, Color::BLACK);
    assert_eq!(y_line.stroke_width, 3.0);
}

#[test]
fn gridline_queries_are_idempotent() {
    let layout = ChartLayout::new(config(vec![2.0, 7.0, 1.0])).expect("layout");

    assert_eq!(layout.render_x_axis_lines(), layout.render_x_axis_lines());
    assert_eq!(layout.render_y_axis_lines(), layout.render_y_axis_lines());
}
