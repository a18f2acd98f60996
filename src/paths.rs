//! Path resolution helpers

use crate::error::CliError;
use std::path::{Component, Path, PathBuf};

/// Resolve `path` to an absolute path without touching the filesystem.
///
/// Relative paths are joined to the current directory and `.`/`..` are
/// removed lexically. Symlinks are not resolved and the directory does not
/// need to exist.
pub fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| {
            CliError::InvalidArguments(format!("Failed to resolve current directory: {}", e))
        })?;
        cwd.join(path)
    };
    Ok(dunce::simplified(&clean(&joined)).to_path_buf())
}

/// Lexically normalize a path: drop `.`, fold `..` into its parent.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Whether `path` carries a root or drive prefix, so that joining it onto a
/// directory would discard that directory.
pub fn is_rooted(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

/// Drop root and prefix components so `dir.join(result)` stays under `dir`
/// (`/etc/x` becomes `etc/x`).
pub fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

/// Number of separator-delimited pieces in `path`, the leading empty piece
/// of an absolute path included (`/a/b` has 3).
pub fn segment_count(path: &Path) -> usize {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.split('/').count()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/").split('/').count()
    }
}
