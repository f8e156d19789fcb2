use chart_layout::api::{ChartConfig, ChartLayout};
use chart_layout::core::Viewport;

fn layout(data: Vec<f64>, start_at_zero: bool) -> ChartLayout {
    ChartLayout::new(
        ChartConfig::new(data, Viewport::new(400.0, 300.0)).with_start_at_zero(start_at_zero),
    )
    .expect("layout")
}

#[test]
fn zero_origin_scaling_is_linear_to_plot_height() {
    let layout = layout(vec![0.0, 50.0, 100.0], true);
    let plot_height = 300.0 - layout.y_axis_label_height();

    assert_eq!(layout.calc_data_point_height(0.0), 0.0);
    assert!((layout.calc_data_point_height(100.0) - plot_height).abs() <= 1e-9);
    assert!((layout.calc_data_point_height(50.0) - plot_height / 2.0).abs() <= 1e-9);
}

#[test]
fn non_negative_series_scales_from_minimum() {
    let layout = layout(vec![20.0, 60.0, 100.0], false);

    assert_eq!(layout.calc_data_point_height(20.0), 0.0);
    assert!((layout.calc_data_point_height(60.0) - 125.0).abs() <= 1e-9);
    assert!((layout.calc_data_point_height(100.0) - 250.0).abs() <= 1e-9);
}

#[test]
fn mixed_sign_series_measures_offset_from_maximum() {
    let layout = layout(vec![-10.0, 0.0, 20.0], false);

    assert_eq!(layout.calc_data_point_height(20.0), 0.0);
    assert!((layout.calc_data_point_height(0.0) + 200.0).abs() <= 1e-9);
    assert!((layout.calc_data_point_height(-10.0) + 300.0).abs() <= 1e-9);
    // zero maps onto the base line measured from the top
    assert!((layout.base_height() + layout.calc_data_point_height(0.0)).abs() <= 1e-9);
}

#[test]
fn all_negative_series_uses_signed_regime() {
    let layout = layout(vec![-40.0, -20.0], false);

    assert_eq!(layout.base_height(), 0.0);
    assert_eq!(layout.calc_data_point_height(-20.0), 0.0);
    assert!((layout.calc_data_point_height(-40.0) + 300.0).abs() <= 1e-9);
}

#[test]
fn constant_series_floors_span_without_division_by_zero() {
    let layout = layout(vec![5.0, 5.0, 5.0], false);

    assert_eq!(layout.value_span(), 1.0);
    assert!(layout.value_scale().is_degenerate());
    assert_eq!(layout.calc_data_point_height(5.0), 0.0);
    layout.build_render_frame().validate().expect("finite frame");
}

#[test]
fn constant_series_with_zero_origin_uses_its_maximum() {
    let layout = layout(vec![5.0, 5.0, 5.0], true);

    assert_eq!(layout.value_span(), 5.0);
    assert!((layout.calc_data_point_height(5.0) - 250.0).abs() <= 1e-9);
    layout.build_render_frame().validate().expect("finite frame");
}

#[test]
fn all_zero_series_maps_to_zero_height() {
    let layout = layout(vec![0.0, 0.0, 0.0], true);

    assert_eq!(layout.value_span(), 1.0);
    assert_eq!(layout.calc_data_point_height(0.0), 0.0);
    assert!(layout.calc_data_point_height(3.0).is_finite());
    layout.build_render_frame().validate().expect("finite frame");
}

#[test]
fn batch_heights_match_single_point_scaling() {
    let layout = layout(vec![4.0, 8.0, 1.0, 6.0], true);
    let heights = layout.data_point_heights();

    assert_eq!(heights.len(), 4);
    for (value, height) in layout.data().iter().zip(&heights) {
        assert_eq!(*height, layout.calc_data_point_height(*value));
    }
}
