use super::*;

#[test]
fn label_formats_rate_like_the_host_ui() {
    assert_eq!(track_label("take1", 30.0), "take1_30");
    assert_eq!(track_label("take1", 59.94), "take1_59.94");
    assert_eq!(track_label("take1", 30.25), "take1_30.25");
}

#[test]
fn display_name_is_file_stem() {
    assert_eq!(
        display_name_from_path(Path::new("/captures/session01.csv")),
        "session01"
    );
    assert_eq!(
        display_name_from_path(Path::new("relative/face.take.csv")),
        "face.take"
    );
}

#[test]
fn display_name_falls_back_to_default() {
    assert_eq!(display_name_from_path(Path::new("/")), DEFAULT_DISPLAY_NAME);
    assert_eq!(display_name_from_path(Path::new("")), DEFAULT_DISPLAY_NAME);
}
