use chart_layout::api::{ChartConfig, ChartLayout, LabelFont, YAxisLabelStyle};
use chart_layout::core::Viewport;
use chart_layout::render::{
    Color, DashPattern, LinePrimitive, PrimitiveGroup, PrimitiveKey, Renderer, SvgRenderer,
    TextHAlign, TextPrimitive, line_to_svg, text_to_svg,
};

#[test]
fn line_markup_carries_stroke_and_dash() {
    let line = LinePrimitive {
        key: PrimitiveKey::new(PrimitiveGroup::YAxisLine, 2),
        x1: 125.5,
        y1: 0.0,
        x2: 125.5,
        y2: 250.0,
        stroke_width: 1.0,
        color: Color::BLACK,
        dash: DashPattern::default(),
    };

    assert_eq!(
        line_to_svg(&line),
        "<line data-key=\"y-axis-line-2\" x1=\"125.5\" y1=\"0\" x2=\"125.5\" y2=\"250\" \
         stroke=\"#000000\" stroke-width=\"1\" stroke-dasharray=\"5, 10\"/>"
    );
}

#[test]
fn solid_lines_omit_dasharray() {
    let line = LinePrimitive {
        key: PrimitiveKey::new(PrimitiveGroup::XAxisLine, 0),
        x1: 0.0,
        y1: 0.0,
        x2: 10.0,
        y2: 10.0,
        stroke_width: 2.0,
        color: Color::rgb(1.0, 0.0, 0.0),
        dash: DashPattern::solid(),
    };

    let markup = line_to_svg(&line);
    assert!(markup.contains("stroke=\"#ff0000\""));
    assert!(!markup.contains("stroke-dasharray"));
}

#[test]
fn css_color_is_emitted_verbatim_and_escaped() {
    let line = LinePrimitive {
        key: PrimitiveKey::new(PrimitiveGroup::XAxisLine, 1),
        x1: 0.0,
        y1: 0.0,
        x2: 10.0,
        y2: 0.0,
        stroke_width: 1.0,
        color: Color::Css("rgba(0, 0, 0, .2)".to_owned()),
        dash: DashPattern::solid(),
    };
    assert!(line_to_svg(&line).contains("stroke=\"rgba(0, 0, 0, .2)\""));

    let quoted = LinePrimitive {
        color: Color::Css("red\" onload=\"x".to_owned()),
        ..line
    };
    assert!(line_to_svg(&quoted).contains("stroke=\"red&quot; onload=&quot;x\""));
}

#[test]
fn text_markup_escapes_content_and_rotates_around_anchor() {
    let text = TextPrimitive {
        key: PrimitiveKey::new(PrimitiveGroup::YAxisLabel, 0),
        text: "R&D <2024>".to_owned(),
        x: 40.0,
        y: 286.0,
        rotation_deg: 30.0,
        font_family: "monospace".to_owned(),
        font_size_px: 14.0,
        font_weight: 500,
        color: Color::BLACK,
        h_align: TextHAlign::Center,
    };

    assert_eq!(
        text_to_svg(&text),
        "<text data-key=\"y-axis-label-0\" x=\"40\" y=\"286\" transform=\"rotate(30, 40, 286)\" \
         text-anchor=\"middle\" font-family=\"monospace\" font-size=\"14\" font-weight=\"500\" \
         fill=\"#000000\">R&amp;D &lt;2024&gt;</text>"
    );
}

#[test]
fn unrotated_text_has_no_transform() {
    let layout = ChartLayout::new(ChartConfig::new(vec![1.0], Viewport::new(200.0, 200.0)))
        .expect("layout");
    let label = &layout.render_y_axis_labels()[0];

    assert!(!text_to_svg(label).contains("transform"));
}

#[test]
fn fragment_renderer_emits_one_element_per_primitive() {
    let layout = ChartLayout::new(ChartConfig::new(
        vec![1.0, 2.0, 3.0],
        Viewport::new(400.0, 300.0),
    ))
    .expect("layout");
    let mut renderer = SvgRenderer::fragment();
    renderer
        .render(&layout.build_render_frame())
        .expect("render");

    let output = renderer.output();
    assert_eq!(output.matches("<line ").count(), 8);
    assert_eq!(output.matches("<text ").count(), 8);
    assert!(!output.contains("<svg"));
}

#[test]
fn standalone_renderer_wraps_document_in_svg_root() {
    let font = LabelFont {
        rotation_deg: 90.0,
        ..LabelFont::default()
    };
    let layout = ChartLayout::new(
        ChartConfig::new(vec![1.0, 2.0], Viewport::new(320.0, 240.0))
            .with_y_axis_label_style(YAxisLabelStyle::default().with_font(font)),
    )
    .expect("layout");

    let mut renderer = SvgRenderer::standalone();
    layout.render(&mut renderer).expect("render");
    let output = renderer.into_output();

    assert!(output.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"320\" height=\"240\" viewBox=\"0 0 320 240\">"
    ));
    assert!(output.trim_end().ends_with("</svg>"));
    assert!(output.contains("rotate(90,"));
}
