use std::path::Path;

use tokio::fs;

use crate::{
    error::{ClipError, Result},
    types::ClipRecord,
};

/// Look up the config record for a tag.
///
/// One record per line as `tag,timestamp,duration,url`; blank lines and
/// lines starting with `#` are skipped. The first record whose tag matches
/// wins and the scan stops there, so later duplicates are never read. A line
/// with any other field count aborts the whole resolution.
pub async fn resolve_record(config_file: &Path, tag: &str) -> Result<ClipRecord> {
    let contents = fs::read_to_string(config_file)
        .await
        .map_err(|source| ClipError::ConfigRead {
            path: config_file.to_path_buf(),
            source,
        })?;

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 4 {
            return Err(ClipError::MalformedRecord {
                path: config_file.to_path_buf(),
                line: index + 1,
            });
        }

        if parts[0] == tag {
            // Fields are taken verbatim, no per-field trimming.
            let record = ClipRecord {
                tag: parts[0].to_string(),
                timestamp: parts[1].to_string(),
                duration: parts[2].to_string(),
                url: parts[3].to_string(),
            };

            if record.timestamp.is_empty() || record.duration.is_empty() || record.url.is_empty() {
                return Err(ClipError::TagNotFound {
                    tag: tag.to_string(),
                    path: config_file.to_path_buf(),
                });
            }

            return Ok(record);
        }
    }

    Err(ClipError::TagNotFound {
        tag: tag.to_string(),
        path: config_file.to_path_buf(),
    })
}
