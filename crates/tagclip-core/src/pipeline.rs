use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use tokio::fs;

use crate::{
    cache, config,
    error::{ClipError, Result},
    runner::ProcessRunner,
    types::{ClipRecord, Settings},
};

/// How the requested clip was obtained.
#[derive(Debug)]
pub enum ClipOutcome {
    /// A previously produced clip was found in the cache.
    Cached(PathBuf),
    /// The clip was downloaded and trimmed on this run.
    Produced(PathBuf),
}

impl ClipOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ClipOutcome::Cached(path) | ClipOutcome::Produced(path) => path,
        }
    }
}

/// Unique path for the intermediate download, removed when the guard drops.
///
/// The reservation file only proves the temp directory is writable and
/// yields a collision-free name; it is released right away and the download
/// tool writes the real file later.
struct TempDownload {
    path: PathBuf,
}

impl TempDownload {
    fn acquire() -> std::io::Result<Self> {
        let reserved = tempfile::Builder::new().prefix("clip_video").tempfile()?;
        let path = reserved.path().with_extension("mp4");
        reserved.close()?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDownload {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Resolve a tag to a cached clip, producing it on a cache miss.
///
/// On a hit the config file is never read; the cached file is trusted as a
/// complete clip for the tag.
pub async fn fetch_clip<R: ProcessRunner>(
    settings: &Settings,
    tag: &str,
    runner: &R,
) -> Result<ClipOutcome> {
    let output = cache::clip_path(&settings.cache_dir, tag);
    if settings.use_cache && cache::is_cached(&output) {
        return Ok(ClipOutcome::Cached(output));
    }

    let record = config::resolve_record(&settings.config_file, tag).await?;
    fs::create_dir_all(&settings.cache_dir).await?;
    produce_clip(&record, &output, runner).await?;

    Ok(ClipOutcome::Produced(output))
}

/// Download the source and trim the clip range into `output`.
///
/// The intermediate download is deleted on every exit path, whichever step
/// fails. A failed trim may still leave a partial file at `output`.
pub async fn produce_clip<R: ProcessRunner>(
    record: &ClipRecord,
    output: &Path,
    runner: &R,
) -> Result<()> {
    let temp = TempDownload::acquire().map_err(|source| ClipError::TempFile {
        tag: record.tag.clone(),
        source,
    })?;

    download_source(record, temp.path(), runner).await?;
    trim_clip(record, temp.path(), output, runner).await?;

    Ok(())
}

/// Download the source video with yt-dlp.
pub async fn download_source<R: ProcessRunner>(
    record: &ClipRecord,
    dest: &Path,
    runner: &R,
) -> Result<()> {
    let args: [OsString; 5] = [
        "-f".into(),
        "mp4".into(),
        "-o".into(),
        dest.as_os_str().into(),
        record.url.as_str().into(),
    ];

    runner
        .run("yt-dlp", &args)
        .await
        .map_err(|e| ClipError::DownloadFailed {
            tag: record.tag.clone(),
            url: record.url.clone(),
            reason: e.to_string(),
        })
}

/// Cut the clip range out of the downloaded source with ffmpeg.
///
/// Stream copy only, no re-encode; timestamp and duration go through
/// verbatim, so bad time specifiers surface here as tool failures.
pub async fn trim_clip<R: ProcessRunner>(
    record: &ClipRecord,
    input: &Path,
    output: &Path,
    runner: &R,
) -> Result<()> {
    let args: [OsString; 9] = [
        "-i".into(),
        input.as_os_str().into(),
        "-ss".into(),
        record.timestamp.as_str().into(),
        "-t".into(),
        record.duration.as_str().into(),
        "-c".into(),
        "copy".into(),
        output.as_os_str().into(),
    ];

    runner
        .run("ffmpeg", &args)
        .await
        .map_err(|e| ClipError::TrimFailed {
            tag: record.tag.clone(),
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Play a produced clip with ffplay.
pub async fn play_clip<R: ProcessRunner>(path: &Path, runner: &R) -> Result<()> {
    let args: [OsString; 1] = [path.as_os_str().into()];

    runner
        .run("ffplay", &args)
        .await
        .map_err(|e| ClipError::PlaybackFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
