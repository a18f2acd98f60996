//! Shared helpers for building directory trees with JSON files

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp directory with a nested `root/project/feature` layout
pub struct Tree {
    pub temp: TempDir,
}

impl Tree {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("root/project/feature")).unwrap();
        Self { temp }
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        self.temp.path().join(rel)
    }

    pub fn write(&self, rel_dir: &str, file_name: &str, content: &str) -> PathBuf {
        let path = self.dir(rel_dir).join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn feature(&self) -> PathBuf {
        self.dir("root/project/feature")
    }
}

/// Levels from `dir` up to and including `top`.
pub fn levels_to(dir: &Path, top: &Path) -> usize {
    dir.strip_prefix(top).unwrap().components().count() + 1
}
