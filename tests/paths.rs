use fpanalyze::paths;

#[test]
fn test_base_path() {
    assert_eq!(paths::base_path("capture-test.pgm"), "capture-test");
    assert_eq!(paths::base_path("dir/a.b.pgm"), "dir/a.b");
    assert_eq!(paths::base_path("./dir.v2/capture"), "./dir.v2/capture");
    assert_eq!(paths::base_path("noext"), "noext");
}

#[test]
fn test_log_and_preview_names() {
    assert_eq!(paths::log_path_for("caps/finger.pgm"), "caps/finger.log");
    assert_eq!(
        paths::preview_paths("caps/finger", 8),
        (
            "caps/finger_x8.png".to_owned(),
            "caps/finger_enhanced_x8.png".to_owned()
        )
    );
}

#[test]
fn test_auto_log_path() {
    assert_eq!(
        paths::auto_log_path("tests/testdata/capture.pgm"),
        Some("tests/testdata/capture.log".to_owned())
    );
    assert_eq!(paths::auto_log_path("tests/testdata/strict.pgm"), None);
}

#[test]
fn test_file_name() {
    assert_eq!(paths::file_name("tests/testdata/capture.pgm"), "capture.pgm");
}
