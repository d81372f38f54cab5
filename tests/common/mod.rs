// tests/common/mod.rs
//! 共通テストユーティリティ

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// 指定された相対パスの空ファイルを持つ一時ツリーを作成
pub fn tree(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for rel in files {
        touch(dir.path(), rel);
    }
    dir
}

pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "").unwrap();
}
