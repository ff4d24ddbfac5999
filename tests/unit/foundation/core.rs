use super::*;

#[test]
fn rate_rejects_non_positive_and_non_finite() {
    assert!(Rate::new(0.0).is_err());
    assert!(Rate::new(-5.0).is_err());
    assert!(Rate::new(f64::NAN).is_err());
    assert!(Rate::new(f64::INFINITY).is_err());
    assert!(matches!(Rate::new(0.0), Err(FacepipeError::InvalidRate(_))));
    assert_eq!(Rate::new(30.0).unwrap().as_f64(), 30.0);
}

#[test]
fn format_rate_uses_integer_form_for_whole_rates() {
    assert_eq!(format_rate(30.0), "30");
    assert_eq!(format_rate(60.0), "60");
    assert_eq!(format_rate(29.97), "29.97");
    assert_eq!(format_rate(30.25), "30.25");
    assert_eq!(format_rate(23.976), "23.98");
}

#[test]
fn scale_to_is_target_over_source() {
    let src = Rate::new(30.0).unwrap();
    let dst = Rate::new(24.0).unwrap();
    assert_eq!(src.scale_to(dst), 0.8);
    assert_eq!(dst.scale_to(src), 1.25);
}

#[test]
fn rate_serde_validates_on_deserialize() {
    let r: Rate = serde_json::from_str("24.0").unwrap();
    assert_eq!(r.as_f64(), 24.0);
    assert!(serde_json::from_str::<Rate>("0.0").is_err());
    assert_eq!(serde_json::to_string(&r).unwrap(), "24.0");
}
