use super::*;

#[test]
fn side_suffixes_are_rewritten() {
    assert_eq!(normalize_channel_name("browLeftDown"), "brow_LDown");
    assert_eq!(normalize_channel_name("eyeBlinkLeft"), "eyeBlink_L");
    assert_eq!(normalize_channel_name("eyeBlinkRight"), "eyeBlink_R");
    assert_eq!(normalize_channel_name("mouthSmileRight"), "mouthSmile_R");
}

#[test]
fn exceptions_pass_through() {
    for name in SIDE_SUFFIX_EXCEPTIONS {
        assert_eq!(normalize_channel_name(name), name);
    }
}

#[test]
fn replacement_is_not_token_aware() {
    assert_eq!(normalize_channel_name("LeftField"), "_LField");
    assert_eq!(normalize_channel_name("LeftRightLeft"), "_L_R_L");
    // Only exact matches are exempt.
    assert_eq!(normalize_channel_name("jawLeftX"), "jaw_LX");
}

#[test]
fn names_without_sides_are_unchanged() {
    assert_eq!(normalize_channel_name("jawOpen"), "jawOpen");
    assert_eq!(normalize_channel_name(""), "");
    assert_eq!(normalize_channel_name("left"), "left");
}

#[test]
fn normalization_is_idempotent() {
    for name in [
        "jawLeft",
        "mouthRight",
        "browLeftDown",
        "cheekSquintRight",
        "tongueOut",
        "LeftRight",
    ] {
        let once = normalize_channel_name(name);
        assert_eq!(normalize_channel_name(&once), once, "{name}");
    }
}

#[test]
fn header_order_is_preserved() {
    let header = vec![
        "eyeBlinkLeft".to_string(),
        "jawLeft".to_string(),
        "eyeBlinkRight".to_string(),
    ];
    assert_eq!(
        normalize_header(&header),
        vec!["eyeBlink_L", "jawLeft", "eyeBlink_R"]
    );
}
