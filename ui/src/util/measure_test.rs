use super::*;

#[test]
fn checked_size_accepts_laid_out_boxes() {
    assert_eq!(checked_size("dock", 48.0, 180.0), Ok(Size::new(48.0, 180.0)));
}

#[test]
fn checked_size_rejects_unlaid_out_boxes() {
    assert_eq!(
        checked_size("dock", 0.0, 0.0),
        Err(MeasureError::Degenerate { what: "dock", width: 0.0, height: 0.0 })
    );
    assert!(checked_size("viewport", f64::NAN, 600.0).is_err());
    assert!(checked_size("viewport", 800.0, -1.0).is_err());
}

#[test]
fn measure_errors_describe_the_failure() {
    assert_eq!(MeasureError::NotMounted.to_string(), "dock element is not mounted");
    assert_eq!(
        MeasureError::Degenerate { what: "viewport", width: 0.0, height: 600.0 }.to_string(),
        "viewport has unusable size 0x600"
    );
    assert_eq!(MeasureError::NotANumber { what: "viewport" }.to_string(), "viewport size is not a number");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn viewport_is_unavailable_off_browser() {
    assert_eq!(viewport_size(), Err(MeasureError::NoWindow));
}
