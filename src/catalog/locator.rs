use crate::error::{AnnotateError, Result};
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Locates the translation catalog by walking a directory subtree
///
/// The walk respects `.gitignore` rules and skips hidden files and
/// directories, so a catalog buried in `node_modules` of an ignored
/// build tree is never picked up by accident.
pub struct CatalogLocator {
    base_dir: PathBuf,
}

impl CatalogLocator {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Walk the subtree and return the first file whose name equals
    /// `file_name` exactly, or `None` if no such file exists.
    ///
    /// An invalid base directory is a fatal error; a missing catalog is not.
    pub fn find_first(&self, file_name: &str) -> Result<Option<PathBuf>> {
        if !self.base_dir.is_dir() {
            return Err(AnnotateError::invalid_root(&self.base_dir));
        }

        let walker = WalkBuilder::new(&self.base_dir)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build();

        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                continue;
            }

            if entry.file_name() == file_name {
                return Ok(Some(entry.into_path()));
            }
        }

        Ok(None)
    }
}
