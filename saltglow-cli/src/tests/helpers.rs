//! Test helpers for writing command inputs into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Evaluation time shared by the command tests (14:00 local, the daily peak).
pub(super) const EVALUATED_AT: &str = "2025-06-01T14:00:00+08:00";

pub(super) const LAKES: &str = r#"[{"id": 1, "name": "Rose Flat"}, {"id": 2, "name": "Crimson Pan"}]"#;

pub(super) const CANDIDATES: &str = r#"[
    {"id": 10, "name": "Salt Terrace", "accessibility": 0.2, "thematic": 0.9, "colorfulness": 0.9},
    {"id": 11, "name": "Visitor Pier", "accessibility_score": 0.9, "thematic_score": 0.3, "colorfulness_score": 0.3},
    {"id": 12, "name": "Unrated Shore"}
]"#;

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn json_output(bytes: &[u8]) -> serde_json::Value {
    let text = std::str::from_utf8(bytes).expect("utf-8 output");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output should be JSON")
}
