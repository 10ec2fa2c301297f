//! Reading source text from disk.

use std::fs;
use std::path::{Path, PathBuf};
use wordgraph_core::{PathValidator, Result};

/// Read a text file confined to `root`, joining its lines with single spaces.
///
/// Paths escaping `root` are rejected with `PathTraversalAttempt`; paths
/// inside it that do not exist yield `FileNotFound`.
pub fn read_text_file(root: &Path, path: &Path) -> Result<String> {
    let full_path = PathValidator::validate_file_exists(root, path)?;
    let content = fs::read_to_string(&full_path)?;
    log::debug!(
        "Read {} bytes from {}",
        content.len(),
        full_path.display()
    );
    Ok(content.lines().collect::<Vec<_>>().join(" "))
}

/// Resolve an output path inside `root`, creating missing parent directories
pub fn prepare_output_path(root: &Path, path: &Path) -> Result<PathBuf> {
    let full_path = PathValidator::validate_path_in_root(root, path)?;
    if let Some(parent) = full_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(full_path)
}
