// src/grouping.rs
use crate::error::{InventoryError, Result};
use std::path::{Component, Path};

/// Key used for files sitting directly in the scan root.
pub const ROOT_KEY: &str = ".";

/// Resolve the grouping key for a file whose containing directory is `dir`.
///
/// The key is the first segment of `dir` relative to `root`, i.e. the name of
/// the immediate child of `root` that contains the file, or [`ROOT_KEY`] when
/// `dir` is the root itself.
///
/// # Errors
/// `NonUtf8Name` when that segment is not valid UTF-8. Distinct names must
/// never collapse into one key.
pub fn group_key(dir: &Path, root: &Path) -> Result<String> {
    let rel = dir.strip_prefix(root).unwrap_or(dir);
    let Some(name) = rel.components().find_map(|c| match c {
        Component::Normal(name) => Some(name),
        _ => None,
    }) else {
        return Ok(ROOT_KEY.to_string());
    };
    name.to_str()
        .map(str::to_string)
        .ok_or_else(|| InventoryError::NonUtf8Name {
            path: root.join(name),
        })
}
