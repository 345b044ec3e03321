use super::*;

#[test]
fn spaces_become_underscores() {
    assert_eq!(sanitize_filename("Hello World"), "Hello_World");
}

#[test]
fn reserved_and_control_characters_are_dropped() {
    assert_eq!(sanitize_filename("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
    assert_eq!(sanitize_filename("x\u{7}y"), "xy");
}

#[test]
fn empty_result_falls_back_to_output() {
    assert_eq!(sanitize_filename(""), "output");
    assert_eq!(sanitize_filename("???"), "output");
}

#[test]
fn stops_after_exceeding_twenty_bytes() {
    let out = sanitize_filename("abcdefghijklmnopqrstuvwxyz");
    assert_eq!(out, "abcdefghijklmnopqrstu");
    assert_eq!(out.len(), 21);

    // Multi-byte chars count by bytes.
    let out = sanitize_filename("ééééééééééééééé");
    assert_eq!(out.len(), 22);
    assert_eq!(out.chars().count(), 11);
}

#[test]
fn non_ascii_letters_and_emoji_are_kept() {
    assert_eq!(sanitize_filename("héllo 😀"), "héllo_😀");
}

#[test]
fn output_path_creates_the_directory() {
    let dir = std::env::temp_dir()
        .join(format!("glyphloom_out_{}", std::process::id()))
        .join("nested");
    let _ = std::fs::remove_dir_all(&dir);
    let path = output_path(&dir, "Hi there", "png").unwrap();
    assert!(dir.is_dir());
    assert_eq!(path, dir.join("Hi_there.png"));
    let _ = std::fs::remove_dir_all(&dir);
}
