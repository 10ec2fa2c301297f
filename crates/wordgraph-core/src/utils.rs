//! Path validation helpers.
//!
//! Every file the outer surface touches (text sources, rendered images) must
//! resolve inside an allowed root directory.

use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Path validation helpers
pub struct PathValidator;

impl PathValidator {
    /// Ensure a path is within the allowed root (prevents directory traversal).
    ///
    /// Both the root and the target are made absolute and resolved through
    /// their deepest existing ancestor, so relative roots work and symlinks
    /// inside the root cannot point outside it, even for files not yet created.
    /// Returns the target joined onto `root`, unresolved.
    pub fn validate_path_in_root(root: &Path, path: &Path) -> Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_path("path is empty"));
        }

        let full_path = root.join(path);
        let root_bound = resolve_existing_prefix(root)?;
        let resolved = resolve_existing_prefix(&full_path)?;

        if !resolved.starts_with(&root_bound) {
            log::warn!(
                "Rejected path outside root: {} resolves to {}",
                full_path.display(),
                resolved.display()
            );
            return Err(Error::path_traversal(full_path));
        }

        Ok(full_path)
    }

    /// Ensure a path is inside the root and names an existing regular file
    pub fn validate_file_exists(root: &Path, path: &Path) -> Result<PathBuf> {
        let full_path = Self::validate_path_in_root(root, path)?;
        if !full_path.exists() {
            return Err(Error::file_not_found(&full_path));
        }
        if !full_path.is_file() {
            return Err(Error::invalid_path(format!(
                "not a regular file: {}",
                full_path.display()
            )));
        }
        Ok(full_path)
    }
}

/// Absolute form of `path`: the deepest existing ancestor is canonicalized
/// and the not-yet-existing remainder is applied on top of it.
fn resolve_existing_prefix(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    for ancestor in absolute.ancestors() {
        let Ok(mut resolved) = ancestor.canonicalize() else {
            continue;
        };
        let Ok(rest) = absolute.strip_prefix(ancestor) else {
            continue;
        };
        // Nothing below `ancestor` exists, so `..` here is purely lexical
        for component in rest.components() {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => resolved.push(name),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
        return Ok(resolved);
    }

    Err(Error::invalid_path(format!("cannot resolve {}", path.display())))
}
