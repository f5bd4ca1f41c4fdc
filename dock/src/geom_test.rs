use super::*;

#[test]
fn offset_from_is_vector_between_points() {
    let grab = Point::new(130.0, 415.0).offset_from(Point::new(100.0, 400.0));
    assert_eq!(grab, Point::new(30.0, 15.0));
}

#[test]
fn translate_adds_deltas() {
    assert_eq!(Point::new(10.0, 10.0).translate(-5.0, 2.5), Point::new(5.0, 12.5));
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn size_measurable_requires_positive_finite_extents() {
    assert!(Size::new(40.0, 120.0).is_measurable());
    assert!(!Size::new(0.0, 120.0).is_measurable());
    assert!(!Size::new(40.0, -1.0).is_measurable());
    assert!(!Size::new(f64::NAN, 10.0).is_measurable());
    assert!(!Size::new(10.0, f64::INFINITY).is_measurable());
    assert!(!Size::default().is_measurable());
}
