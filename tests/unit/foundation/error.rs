use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(FacepipeError::io("x").to_string().contains("io error:"));
    assert!(
        FacepipeError::not_numeric(0, 1, "abc")
            .to_string()
            .contains("parse error:")
    );
    assert!(
        FacepipeError::rate_unavailable("x")
            .to_string()
            .contains("rate unavailable:")
    );
    assert!(
        FacepipeError::invalid_rate("x")
            .to_string()
            .contains("invalid rate:")
    );
    assert!(
        FacepipeError::duplicate_channel("x")
            .to_string()
            .contains("duplicate channel:")
    );
    assert!(
        FacepipeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn parse_errors_carry_location_and_cause() {
    let msg = FacepipeError::not_numeric(3, 2, "abc").to_string();
    assert!(msg.contains(VALUE_NOT_NUMERIC));
    assert!(msg.contains("row 3"));
    assert!(msg.contains("column 2"));
    assert!(msg.contains("\"abc\""));

    let msg = FacepipeError::row_too_short(0, 5).to_string();
    assert!(msg.contains(ROW_TOO_SHORT));
    assert!(msg.contains("column 5"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FacepipeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
