use std::path::{Path, PathBuf};

/// Cache path for a tag's clip.
///
/// The tag is used as-is: a tag containing path separators changes the
/// target directory.
pub fn clip_path(cache_dir: &Path, tag: &str) -> PathBuf {
    cache_dir.join(format!("{tag}.mp4"))
}

/// Whether a produced clip already exists at `path`.
///
/// Existence is the only signal; any stat failure counts as a miss and the
/// clip is re-produced.
pub fn is_cached(path: &Path) -> bool {
    path.exists()
}
