// src/filesystem.rs
use crate::error::{InventoryError, Result};
use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::Path;
use tracing::trace;

/// Check that `root` exists and is a directory before walking it.
///
/// # Errors
/// `RootNotFound` / `NotADirectory` for a bad root, `Io` when its metadata
/// cannot be read.
pub fn validate_root(root: &Path) -> Result<()> {
    let meta = std::fs::metadata(root).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InventoryError::RootNotFound {
            path: root.to_path_buf(),
        },
        _ => InventoryError::Io(e),
    })?;
    if !meta.is_dir() {
        return Err(InventoryError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Sequential recursive walk calling `visit(containing_dir, file_name)` for
/// every non-directory entry under `root`.
///
/// Hidden files and ignore files are not consulted. Symlinks are not
/// followed: a symlink to a directory is neither descended nor reported, any
/// other symlink is reported like a file.
///
/// # Errors
/// Fails on an invalid root, on the first traversal error, and on the first
/// error returned by `visit`.
pub fn walk_files<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Path, &OsStr) -> Result<()>,
{
    validate_root(root)?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = entry?;
        if is_directory(&entry) {
            continue;
        }
        let path = entry.path();
        match (path.parent(), path.file_name()) {
            (Some(dir), Some(name)) => visit(dir, name)?,
            _ => trace!(path = %path.display(), "entry without parent or name"),
        }
    }
    Ok(())
}

fn is_directory(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        // An unfollowed link still counts as a directory when its target is one.
        Some(ft) if ft.is_symlink() => std::fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false),
        Some(_) => false,
        None => true,
    }
}
