use std::path::Path;

use tempfile::TempDir;

use tagclip_core::{clip_path, is_cached};

#[test]
fn clip_path_is_tag_plus_extension_under_cache_dir() {
    let path = clip_path(Path::new("/home/user/Videos/clips"), "intro");
    assert_eq!(path, Path::new("/home/user/Videos/clips/intro.mp4"));
}

#[test]
fn clip_path_does_not_sanitize_the_tag() {
    // Path separators in a tag move the target; documented limitation.
    let path = clip_path(Path::new("/cache"), "a/b");
    assert_eq!(path, Path::new("/cache/a/b.mp4"));
}

#[test]
fn missing_file_is_a_miss() {
    let dir = TempDir::new().expect("tempdir");
    assert!(!is_cached(&dir.path().join("intro.mp4")));
}

#[test]
fn existing_file_is_a_hit_regardless_of_contents() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("intro.mp4");
    std::fs::write(&path, b"partial").expect("seed file");
    assert!(is_cached(&path));
}
