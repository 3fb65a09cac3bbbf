//! Report artifact sink
//!
//! Each artifact is written to a hidden sibling file and renamed over the
//! target, so a failed write never leaves a truncated report behind.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::OutputError;

/// File name of the JSON document
pub const JSON_REPORT_FILENAME: &str = "comprehensive-rules.json";

/// File name of the text summary
pub const SUMMARY_FILENAME: &str = "business-rules-summary.txt";

/// Where the artifacts of a run were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub json: PathBuf,
    pub summary: PathBuf,
}

/// Create `dir` and its parents
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.display().to_string(),
        source,
    })
}

/// Write `contents` to `path` all-or-nothing
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), OutputError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = path.with_file_name(format!(".{file_name}.tmp"));

    let to_error = |source: std::io::Error| OutputError::FileWrite {
        path: path.display().to_string(),
        source,
    };

    if let Err(source) = fs::write(&staging, contents).and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(to_error(source));
    }

    debug!(path = %path.display(), bytes = contents.len(), "Artifact written");
    Ok(())
}

/// Write both artifacts into `output_dir`, creating it if needed
pub fn write_artifacts(
    output_dir: &Path,
    json: &str,
    summary: &str,
) -> Result<ArtifactPaths, OutputError> {
    ensure_dir(output_dir)?;

    let paths = ArtifactPaths {
        json: output_dir.join(JSON_REPORT_FILENAME),
        summary: output_dir.join(SUMMARY_FILENAME),
    };
    write_atomic(&paths.json, json)?;
    write_atomic(&paths.summary, summary)?;

    Ok(paths)
}
