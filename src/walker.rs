use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;

/// True if `path` has one of `extensions` (lowercase, leading dot), ignoring case
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = format!(".{}", ext.to_lowercase());
            extensions.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// Collect regular files under `root` whose extension is in `extensions`
///
/// Entries are visited in file-name order within each directory so runs are
/// reproducible. Symlinks to regular files count as files; symlinked
/// directories are not descended into. A `root` that is not a directory
/// yields nothing. Unreadable directory entries abort the walk.
pub fn source_files(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !root.is_dir() {
        return Ok(files);
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        // Path::is_file follows links, unlike entry.file_type()
        if entry.path().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
