//! Integration tests for the core rendering and accessibility plumbing.

use rateline_core::{
    accessibility::AccessibleNode, Canvas, Color, Constraints, DrawCommand, IdSource, Point, Rect,
    RecordingCanvas, SequentialIds, Size, SplitFill, SvgCanvas,
};

fn triangle() -> Vec<Point> {
    vec![
        Point::new(0.0, 24.0),
        Point::new(12.0, 0.0),
        Point::new(24.0, 24.0),
    ]
}

fn half_fill(id: u64) -> SplitFill {
    SplitFill {
        gradient_id: format!("grad-{id}-1"),
        mask_id: format!("mask-{id}-1"),
        split: 0.5,
        full: Color::GOLD,
        empty: Color::LIGHT_GRAY,
    }
}

#[test]
fn test_recording_and_svg_agree_on_split_fills() {
    let mut recording = RecordingCanvas::new();
    let mut svg = SvgCanvas::new(Size::new(24.0, 24.0));

    for canvas in [&mut recording as &mut dyn Canvas, &mut svg as &mut dyn Canvas] {
        canvas.set_title("2.5 out of 5");
        canvas.fill_polygon_split(&triangle(), &half_fill(1));
    }

    assert_eq!(recording.title(), Some("2.5 out of 5"));
    assert_eq!(recording.split_fills().count(), 1);

    let markup = svg.finish(&[]);
    assert!(markup.contains("<title>2.5 out of 5</title>"));
    assert!(markup.contains(r#"<linearGradient id="grad-1-1">"#));
    assert!(markup.contains(r##"<stop offset="50%" stop-color="#ffd700"/>"##));
    assert!(markup.contains(r##"<stop offset="50%" stop-color="#e0e0e0"/>"##));
    assert!(markup.contains(r#"<mask id="mask-1-1"><polygon points="0,24 12,0 24,24" fill="white"/></mask>"#));
    assert!(markup.contains(r#"fill="url(#grad-1-1)" mask="url(#mask-1-1)""#));
}

#[test]
fn test_svg_root_carries_aria_attributes() {
    let node = AccessibleNode::slider("Rating", 3.0, 0.0, 5.0, Rect::new(0.0, 0.0, 120.0, 24.0))
        .with_value_text("3 - Good & solid");
    let markup = SvgCanvas::new(Size::new(120.0, 24.0)).finish(&node.aria_attributes());

    assert!(markup.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="24" viewBox="0 0 120 24" role="slider""#
    ));
    assert!(markup.contains(r#"aria-valuetext="3 - Good &amp; solid""#));
    assert!(markup.contains(r#"tabindex="0""#));
}

#[test]
fn test_sequential_ids_yield_distinct_resource_ids() {
    let ids = SequentialIds::new();
    let a = ids.next_id();
    let b = ids.next_id();
    assert_ne!(a, b);

    let mut canvas = RecordingCanvas::new();
    canvas.fill_polygon_split(&triangle(), &half_fill(a.0));
    canvas.fill_polygon_split(&triangle(), &half_fill(b.0));
    let gradients: Vec<_> = canvas
        .split_fills()
        .map(|f| f.gradient_id.clone())
        .collect();
    assert_ne!(gradients[0], gradients[1]);
}

#[test]
fn test_constraints_bound_intrinsic_row() {
    let intrinsic = Size::new(5.0 * 24.0, 24.0);
    let constrained = Constraints::loose(Size::new(100.0, 100.0)).constrain(intrinsic);
    assert_eq!(constrained, Size::new(100.0, 24.0));
}

#[test]
fn test_take_commands_drains() {
    let mut canvas = RecordingCanvas::new();
    canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
    let taken = canvas.take_commands();
    assert_eq!(taken, vec![DrawCommand::rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK)]);
    assert!(canvas.is_empty());
}
