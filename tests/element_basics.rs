use doc_composer::element::{self, Element, ElementType};
use doc_composer::render::{DrawCommand, RecordingSurface};
use doc_composer::{ElementError, MonospaceMeasurer, Point, Rect};

fn create_test_text() -> ElementType {
    element::factory::create_text(Point::new(10, 40), "Hello", 20.0).unwrap()
}

fn create_test_image() -> ElementType {
    element::factory::create_image(Point::new(10, 20), 100, 50, "logo.png")
}

#[test]
fn test_element_creation() {
    let text = create_test_text();
    let image = create_test_image();
    let chart = element::factory::create_chart(Point::new(0, 0), 40, 30, "Sales");

    assert_eq!(text.element_type(), "text");
    assert_eq!(image.element_type(), "image");
    assert_eq!(chart.element_type(), "chart");
    assert_ne!(text.id(), image.id());
    assert!(text.is_leaf() && image.is_leaf() && chart.is_leaf());
}

#[test]
fn test_invalid_text_size_is_rejected() {
    let result = element::factory::create_text(Point::new(0, 0), "x", -3.0);
    assert_eq!(result.unwrap_err(), ElementError::InvalidTextSize(-3.0));
}

#[test]
fn test_element_move() {
    let measurer = MonospaceMeasurer::default();

    let mut image = create_test_image();
    image.move_by(15, 25);
    assert_eq!(image.bounds(&measurer), Some(Rect::new(25, 45, 100, 50)));

    let mut text = create_test_text();
    let before = text.bounds(&measurer).unwrap();
    text.move_by(-5, 7);
    let after = text.bounds(&measurer).unwrap();
    assert_eq!(after.x, before.x - 5);
    assert_eq!(after.y, before.y + 7);
    assert_eq!((after.width, after.height), (before.width, before.height));
}

#[test]
fn test_element_resize_rounds_to_nearest() {
    let measurer = MonospaceMeasurer::default();
    let mut image = element::factory::create_image(Point::new(0, 0), 15, 7, "a.png");

    image.resize(1.5).unwrap();
    // 22.5 -> 23, 10.5 -> 11
    assert_eq!(image.bounds(&measurer), Some(Rect::new(0, 0, 23, 11)));
}

#[test]
fn test_resize_steps_diverge_from_product() {
    let measurer = MonospaceMeasurer::default();
    let mut stepped = element::factory::create_image(Point::new(0, 0), 15, 15, "a.png");
    let mut direct = element::factory::create_image(Point::new(0, 0), 15, 15, "a.png");

    stepped.resize(1.5).unwrap();
    stepped.resize(1.5).unwrap();
    direct.resize(1.5 * 1.5).unwrap();

    let stepped = stepped.bounds(&measurer).unwrap();
    let direct = direct.bounds(&measurer).unwrap();

    // 15 -> 23 -> 35 versus 15 -> 34: each step rounds on its own
    assert_eq!(stepped.width, 35);
    assert_eq!(direct.width, 34);
    assert_eq!((stepped.width - direct.width).abs(), 1);
}

#[test]
fn test_invalid_resize_factor_is_rejected() {
    let measurer = MonospaceMeasurer::default();

    for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut image = create_test_image();
        let result = image.resize(factor);
        assert!(matches!(result, Err(ElementError::InvalidResizeFactor(_))));
        assert_eq!(image.bounds(&measurer), Some(Rect::new(10, 20, 100, 50)));
    }

    let mut text = create_test_text();
    assert!(text.resize(0.0).is_err());
    assert_eq!(text.as_editable_text().unwrap().size(), 20.0);
}

#[test]
fn test_element_hit_testing() {
    let measurer = MonospaceMeasurer::default();

    let image = create_test_image();
    assert!(image.contains(Point::new(50, 40), &measurer));
    assert!(!image.contains(Point::new(200, 200), &measurer));
    assert!(!image.contains(Point::new(110, 20), &measurer));

    // "Hello" at size 20: 60 wide, 24 tall, 16 above the baseline at y=40
    let text = create_test_text();
    assert!(text.contains(Point::new(10, 24), &measurer));
    assert!(text.contains(Point::new(69, 47), &measurer));
    assert!(!text.contains(Point::new(10, 23), &measurer));
    assert!(!text.contains(Point::new(70, 30), &measurer));
}

#[test]
fn test_draw_emits_without_mutating() {
    let measurer = MonospaceMeasurer::default();
    let text = create_test_text();
    let before = text.bounds(&measurer);

    let mut surface = RecordingSurface::new();
    text.draw(&mut surface);

    assert_eq!(
        surface.commands(),
        &[DrawCommand::Text {
            position: Point::new(10, 40),
            text: "Hello".to_owned(),
            size: 20.0,
        }]
    );
    assert_eq!(text.bounds(&measurer), before);
}

#[test]
fn test_editable_text_capability() {
    let mut text = create_test_text();
    let image = create_test_image();
    let chart = element::factory::create_chart(Point::new(0, 0), 10, 10, "Sales");
    let group = element::factory::create_group([create_test_image()]);

    assert!(image.as_editable_text().is_none());
    assert!(chart.as_editable_text().is_none());
    assert!(group.as_editable_text().is_none());

    text.as_editable_text_mut().unwrap().set_content("Changed");
    assert_eq!(text.as_editable_text().unwrap().content(), "Changed");
}

#[test]
fn test_move_saturates_at_coordinate_limits() {
    let measurer = MonospaceMeasurer::default();
    let mut image = element::factory::create_image(Point::new(i32::MAX - 1, 0), 10, 10, "a");

    image.move_by(5, 0);
    assert_eq!(image.bounds(&measurer).map(|r| r.x), Some(i32::MAX));

    let mut group = element::factory::create_group([create_test_text()]);
    group.move_by(i32::MIN, i32::MIN);
    group.move_by(i32::MIN, 0);
    assert!(group.bounds(&measurer).is_some());
}

#[test]
fn test_hit_testing_near_coordinate_limits() {
    let measurer = MonospaceMeasurer::default();
    let image = element::factory::create_image(Point::new(i32::MAX - 5, 0), 100, 10, "a");
    let image_id = image.id();

    assert!(image.contains(Point::new(i32::MAX - 2, 1), &measurer));
    assert!(!image.contains(Point::new(i32::MAX - 6, 1), &measurer));

    let group = element::factory::create_group([image]);
    let hit = group
        .as_group()
        .and_then(|g| g.find_element_at(Point::new(i32::MAX, 5), &measurer));
    assert_eq!(hit.map(|e| e.id()), Some(image_id));
}

#[test]
fn test_group_resize_rejects_text_overflow_without_partial_changes() {
    let measurer = MonospaceMeasurer::default();
    let mut group = element::factory::create_group([create_test_image(), create_test_text()]);
    let before = group.bounds(&measurer);

    let err = group.resize(1e308).unwrap_err();
    assert!(matches!(err, ElementError::InvalidTextSize(size) if size.is_infinite()));
    assert_eq!(group.bounds(&measurer), before);
}
