use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render and write the file to disk, always overwriting.
    ///
    /// The content is rendered completely before anything touches the disk.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();
        write_file(&path, &content)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::failed_to_create_file(parent, e))?;
        }
    }

    let result = match std::fs::read_to_string(path) {
        Ok(existing) if existing == content => WriteResult::Unchanged,
        Ok(_) => WriteResult::Updated,
        Err(_) => WriteResult::Created,
    };

    std::fs::write(path, content).map_err(|e| Error::failed_to_create_file(path, e))?;
    tracing::debug!(path = %path.display(), ?result, "wrote generated file");
    Ok(result)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// File existed with different content
    Updated,
    /// File was rewritten with identical content
    Unchanged,
}

impl WriteResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteResult::Created => "created",
            WriteResult::Updated => "updated",
            WriteResult::Unchanged => "unchanged",
        }
    }
}
