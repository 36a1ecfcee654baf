use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipError {
    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    #[error("Could not read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at line {line} of {path}: expected 4 parts (tag, timestamp, duration, url)")]
    MalformedRecord { path: PathBuf, line: usize },

    #[error("Tag {tag} malformed or not found in config file {path}")]
    TagNotFound { tag: String, path: PathBuf },

    #[error("Could not create temp download file for {tag}: {source}")]
    TempFile {
        tag: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Download failed for {tag} from {url}: {reason}")]
    DownloadFailed {
        tag: String,
        url: String,
        reason: String,
    },

    #[error("Trim failed for {tag} from {input} to {output}: {reason}")]
    TrimFailed {
        tag: String,
        input: PathBuf,
        output: PathBuf,
        reason: String,
    },

    #[error("Playback failed for {path}: {reason}")]
    PlaybackFailed { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClipError>;
