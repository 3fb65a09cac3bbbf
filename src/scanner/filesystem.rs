//! File system scanning utilities

use ignore::WalkBuilder;
use std::path::Path;
use tracing::warn;

/// A controller file found under the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Relative path from the scan root, `/`-separated
    pub path: String,
    /// Basename, used for classification and reporting
    pub name: String,
}

/// List the files under `root`, sorted by relative path.
///
/// Every file is listed: ignore files are not consulted and symlinks are
/// followed. Without `recursive` only direct children are returned.
pub fn scan_directory(root: &Path, recursive: bool) -> Vec<FileInfo> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(true)
        .max_depth(if recursive { None } else { Some(1) })
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();

        // is_file follows symlinks
        if path == root || !path.is_file() {
            continue;
        }

        let Some(relative) = path.strip_prefix(root).ok() else {
            continue;
        };
        if relative.components().any(|c| c.as_os_str() == ".git") {
            continue;
        }
        let Some(relative_path) = relative.to_str().map(|s| s.replace('\\', "/")) else {
            continue;
        };

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        files.push(FileInfo {
            path: relative_path,
            name,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}
