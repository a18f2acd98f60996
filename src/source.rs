//! Document sources: reading candidate files and decoding them as JSON

use crate::error::LoadError;
use serde_json::Value;
use std::io;
use std::path::Path;

/// Reads the raw bytes of a candidate document.
pub trait DocumentSource {
    fn read(&self, path: &Path) -> Result<Vec<u8>, LoadError>;
}

/// Filesystem-backed source
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn read(&self, path: &Path) -> Result<Vec<u8>, LoadError> {
        std::fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })
    }
}

/// Decode raw bytes into a JSON value.
pub fn decode(path: &Path, bytes: &[u8]) -> Result<Value, LoadError> {
    serde_json::from_slice(bytes).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
