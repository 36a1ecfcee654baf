use std::path::PathBuf;

use crate::error::{ClipError, Result};

/// One row of the clip config file: which source to cut and where.
///
/// All four fields are non-empty; `timestamp` and `duration` are passed
/// through verbatim as ffmpeg time specifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRecord {
    pub tag: String,
    pub timestamp: String,
    pub duration: String,
    pub url: String,
}

/// Process-wide settings, resolved once at startup and passed into every
/// component.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Clip config file, one `tag,timestamp,duration,url` record per line.
    pub config_file: PathBuf,
    /// Directory holding produced clips, one `<tag>.mp4` per tag.
    pub cache_dir: PathBuf,
    /// When false, an existing cached clip is ignored and re-produced.
    pub use_cache: bool,
}

impl Settings {
    pub const DEFAULT_CONFIG_FILE: &'static str = "input.txt";

    /// Default settings: `input.txt` next to the working directory and a
    /// cache under the user's home.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ClipError::HomeDirUnavailable)?;

        Ok(Self {
            config_file: PathBuf::from(Self::DEFAULT_CONFIG_FILE),
            cache_dir: home.join("Videos").join("clips"),
            use_cache: true,
        })
    }
}
