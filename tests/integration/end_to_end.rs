// tests/integration/end_to_end.rs
use inventory_ts::{Config, CountTable, InventoryError, presentation, run};

use crate::common::{touch, tree};

const MIXED: &[&str] = &[
    "app.ts",
    "components/Button.tsx",
    "components/nested/deep/Icon.jsx",
    "components/Button.module.css",
    "utils/a.js",
    "utils/b.ts",
    "README.md",
    "package.json",
];

#[test]
fn groups_by_top_level_directory() {
    let dir = tree(MIXED);
    let table = run(&Config::new(dir.path())).unwrap();

    assert_eq!(table.get("."), Some(1));
    assert_eq!(table.get("components"), Some(2));
    assert_eq!(table.get("utils"), Some(2));
    assert_eq!(table.len(), 3);
}

#[test]
fn total_matches_file_count_at_any_depth() {
    let dir = tree(&[
        "x.ts",
        "a/1.ts",
        "a/b/2.tsx",
        "a/b/c/3.js",
        "a/b/c/d/4.jsx",
        "a/b/c/d/e/5.ts",
        "a/b/c/d/e/skip.txt",
    ]);
    let table = run(&Config::new(dir.path())).unwrap();
    assert_eq!(table.total(), 6);
    assert_eq!(table.get("a"), Some(5));
}

#[test]
fn unmatched_files_do_not_create_groups() {
    let dir = tree(&["docs/guide.md", "assets/logo.svg", "scripts/build.sh", "src/Main.TSX"]);
    let table = run(&Config::new(dir.path())).unwrap();
    assert_eq!(table, CountTable::new());
    assert_eq!(presentation::render(&table).unwrap(), "{}");
}

#[test]
fn adding_a_file_updates_only_its_group() {
    let dir = tree(MIXED);
    let before = run(&Config::new(dir.path())).unwrap();

    touch(dir.path(), "utils/deeper/c.jsx");
    let after = run(&Config::new(dir.path())).unwrap();

    assert_eq!(after.get("utils"), before.get("utils").map(|n| n + 1));
    assert_eq!(after.get("components"), before.get("components"));
    assert_eq!(after.total(), before.total() + 1);
}

#[test]
fn hidden_and_ignored_paths_are_counted() {
    let dir = tree(&[".storybook/main.ts", "dist/bundle.js", ".gitignore"]);
    std::fs::write(dir.path().join(".gitignore"), "dist/\n").unwrap();

    let table = run(&Config::new(dir.path())).unwrap();
    assert_eq!(table.get(".storybook"), Some(1));
    assert_eq!(table.get("dist"), Some(1));
}

#[test]
fn nonexistent_root_is_reported() {
    let dir = tree(&[]);
    let err = run(&Config::new(dir.path().join("missing"))).unwrap_err();
    assert!(matches!(err, InventoryError::RootNotFound { .. }));
}
