//! Source discovery under the input directory.

use std::path::{Path, PathBuf};

use routegen_core::{Error, Result};
use walkdir::WalkDir;

/// One page file, read once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Root-relative path, `/`-separated, suffix included.
    pub relative_path: String,
    /// Path on disk.
    pub path: PathBuf,
    pub content: String,
}

impl SourceUnit {
    /// Read the file at `path`, recording it under `relative_path`.
    pub fn read(relative_path: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Ok(Self {
            relative_path: relative_path.into(),
            path,
            content,
        })
    }
}

/// Find every regular file under `root` whose name ends with `suffix`.
///
/// Returns `(relative_path, absolute_path)` pairs in file-name order.
/// Symbolic links are not followed.
pub fn find_source_files(root: &Path, suffix: &str) -> Result<Vec<(String, PathBuf)>> {
    if !root.is_dir() {
        return Err(Error::missing_input_directory(root));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(Error::missing_input_directory(root)),
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                return Err(Error::io(&path, err.into()));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(suffix) {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        tracing::trace!(file = %relative, "found source file");
        files.push((relative, entry.path().to_path_buf()));
    }

    Ok(files)
}
