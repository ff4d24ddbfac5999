use super::*;

fn sample_track() -> Track {
    let mut a = Channel::new("eyeBlink_L");
    a.keys = vec![Keyframe::new(1.0, 0.1), Keyframe::new(2.0, 0.5)];
    let mut b = Channel::new("eyeBlink_R");
    b.keys = vec![Keyframe::new(1.0, 0.2), Keyframe::new(2.0, 0.6)];
    Track {
        name: "take_30".to_string(),
        base_name: "take".to_string(),
        rate: Rate::new(30.0).unwrap(),
        channels: vec![Channel::new(BASIS_CHANNEL), a, b],
    }
}

#[test]
fn basis_is_first_and_excluded_from_shapes() {
    let t = sample_track();
    assert!(t.basis().unwrap().keys.is_empty());
    assert_eq!(t.channel_names(), vec!["eyeBlink_L", "eyeBlink_R"]);
    assert_eq!(t.frame_count(), 2);
}

#[test]
fn frame_range_spans_all_shape_keys() {
    let t = sample_track();
    assert_eq!(t.frame_range(), Some((1.0, 2.0)));

    let empty = Track {
        channels: vec![Channel::new(BASIS_CHANNEL)],
        ..sample_track()
    };
    assert_eq!(empty.frame_range(), None);
    assert_eq!(empty.frame_count(), 0);
}

#[test]
fn samples_flatten_in_channel_then_frame_order() {
    let t = sample_track();
    let got: Vec<_> = t.samples().map(|s| (s.channel, s.frame, s.value)).collect();
    assert_eq!(
        got,
        vec![
            ("eyeBlink_L", 1.0, 0.1),
            ("eyeBlink_L", 2.0, 0.5),
            ("eyeBlink_R", 1.0, 0.2),
            ("eyeBlink_R", 2.0, 0.6),
        ]
    );
}

#[test]
fn new_keyframe_defaults_to_auto_clamped_bezier() {
    let k = Keyframe::new(3.0, 0.25);
    assert_eq!(k.interpolation, Interpolation::Bezier);
    assert_eq!(k.handle_left_type, HandleType::AutoClamped);
    assert_eq!(k.handle_right_type, HandleType::AutoClamped);
    assert_eq!(k.frame(), 3.0);
    assert_eq!(k.value(), 0.25);
}

#[test]
fn track_serializes_with_snake_case_enums() {
    let json = serde_json::to_string(&sample_track()).unwrap();
    assert!(json.contains("\"auto_clamped\""));
    assert!(json.contains("\"bezier\""));
    let back: Track = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample_track());
}

#[test]
fn header_column_named_basis_is_still_a_shape_channel() {
    let mut t = sample_track();
    t.channels.push(Channel::new(BASIS_CHANNEL));
    assert_eq!(t.shape_channels().count(), 3);
}
