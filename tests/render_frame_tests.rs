use chart_layout::api::{ChartConfig, ChartLayout};
use chart_layout::core::Viewport;
use chart_layout::render::{NullRenderer, PrimitiveGroup, RenderFrame};

fn config() -> ChartConfig {
    ChartConfig::new(vec![12.0, 30.0, 18.0, 25.0], Viewport::new(640.0, 360.0))
}

#[test]
fn default_frame_contains_all_four_groups() {
    let layout = ChartLayout::new(config()).expect("layout");
    let frame = layout.build_render_frame();
    frame.validate().expect("valid frame");

    // 5 x-axis lines + 4 y-axis lines, 5 x-axis labels + 4 y-axis labels
    assert_eq!(frame.lines.len(), 9);
    assert_eq!(frame.texts.len(), 9);
    assert_eq!(frame.viewport, Viewport::new(640.0, 360.0));
}

#[test]
fn background_line_flags_gate_frame_lines() {
    let layout = ChartLayout::new(config().with_background_lines(false, true)).expect("layout");
    let frame = layout.build_render_frame();

    assert_eq!(frame.lines.len(), 4);
    assert!(
        frame
            .lines
            .iter()
            .all(|line| line.key.group == PrimitiveGroup::YAxisLine)
    );
}

#[test]
fn label_flags_gate_frame_texts() {
    let layout = ChartLayout::new(config().with_axis_labels(true, false)).expect("layout");
    let frame = layout.build_render_frame();

    assert_eq!(frame.texts.len(), 5);
    assert!(
        frame
            .texts
            .iter()
            .all(|text| text.key.group == PrimitiveGroup::XAxisLabel)
    );
}

#[test]
fn fully_disabled_frame_is_empty() {
    let layout = ChartLayout::new(
        config()
            .with_axis_labels(false, false)
            .with_background_lines(false, false),
    )
    .expect("layout");

    assert!(layout.build_render_frame().is_empty());
}

#[test]
fn null_renderer_receives_computed_frame_counts() {
    let layout = ChartLayout::new(config()).expect("layout");
    let mut renderer = NullRenderer::default();

    layout.render(&mut renderer).expect("render");
    layout.render(&mut renderer).expect("render again");

    assert_eq!(renderer.last_line_count, 9);
    assert_eq!(renderer.last_text_count, 9);
    assert_eq!(renderer.frames_rendered, 2);
}

#[test]
fn frame_json_snapshot_restores_identical_frame() {
    let layout = ChartLayout::new(config().with_labels(["q1", "q2", "q3", "q4"])).expect("layout");
    let frame = layout.build_render_frame();

    let json = frame.to_json_pretty().expect("serialize");
    assert!(json.contains("\"y-axis-label\""));
    assert!(json.contains("\"#000000\""));

    let restored = RenderFrame::from_json_str(&json).expect("parse");
    assert_eq!(restored, frame);
}

#[test]
fn frames_are_deterministic_across_layouts() {
    let first = ChartLayout::new(config()).expect("layout").build_render_frame();
    let second = ChartLayout::new(config()).expect("layout").build_render_frame();

    assert_eq!(first, second);
}
