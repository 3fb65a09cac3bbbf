//! Scanner module - Controller discovery and reading

mod filesystem;

use std::path::{Path, PathBuf};

pub use filesystem::FileInfo;

use crate::error::ScanError;

/// Enumerates controller files under a root directory
pub struct Scanner {
    root: PathBuf,
    file_cache: Vec<FileInfo>,
}

impl Scanner {
    /// Create a scanner over `root`, which must be an existing directory
    pub fn new(root: PathBuf, recursive: bool) -> Result<Self, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.display().to_string(),
            });
        }

        let file_cache = filesystem::scan_directory(&root, recursive);
        Ok(Self { root, file_cache })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a file as UTF-8 text
    pub fn read_file(&self, file: &FileInfo) -> Result<String, ScanError> {
        std::fs::read_to_string(self.root.join(&file.path)).map_err(|source| {
            ScanError::FileRead {
                path: file.path.clone(),
                source,
            }
        })
    }

    /// All files, sorted by relative path
    pub fn all_files(&self) -> &[FileInfo] {
        &self.file_cache
    }
}
