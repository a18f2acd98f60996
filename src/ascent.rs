//! Ascent driver
//!
//! Climbs from a starting directory towards the filesystem root, loading a
//! named JSON file at each level and folding it into an accumulator with the
//! deep merge engine. Documents found closer to the start act as the base, so
//! their values win over those found further up.
//!
//! A level that cannot contribute (missing file, unreadable or malformed
//! JSON, incompatible kind, failed merge) is skipped and the accumulator is
//! left as it was. Every skip is recorded in the returned [`AscentOutcome`]
//! and logged, but never aborts the ascent.

use crate::error::{LoadError, MergeError};
use crate::kind::JsonKind;
use crate::merge::merge;
use crate::paths::{segment_count, strip_root};
use crate::source::{decode, DocumentSource, FsSource};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What happened at a single level of the ascent
#[derive(Debug, Clone, PartialEq)]
pub enum LevelOutcome {
    /// First document found; became the accumulator
    Seeded,
    /// Document merged into the accumulator
    Merged,
    NotFound,
    Unreadable(String),
    Unparsable(String),
    /// Document was JSON `null`
    Empty,
    KindMismatch {
        accumulated: JsonKind,
        found: JsonKind,
    },
    MergeFailed(MergeError),
}

impl LevelOutcome {
    /// Whether this level changed the accumulator
    pub fn contributed(&self) -> bool {
        matches!(self, LevelOutcome::Seeded | LevelOutcome::Merged)
    }

    /// Whether a document existed at this level but was dropped
    pub fn dropped(&self) -> bool {
        !self.contributed() && !matches!(self, LevelOutcome::NotFound)
    }
}

impl fmt::Display for LevelOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelOutcome::Seeded => write!(f, "seeded"),
            LevelOutcome::Merged => write!(f, "merged"),
            LevelOutcome::NotFound => write!(f, "not found"),
            LevelOutcome::Unreadable(reason) => write!(f, "skipped (unreadable: {})", reason),
            LevelOutcome::Unparsable(reason) => write!(f, "skipped (invalid JSON: {})", reason),
            LevelOutcome::Empty => write!(f, "skipped (null document)"),
            LevelOutcome::KindMismatch { accumulated, found } => write!(
                f,
                "skipped (found {}, accumulated {})",
                found, accumulated
            ),
            LevelOutcome::MergeFailed(err) => write!(f, "skipped ({})", err),
        }
    }
}

/// Record of one visited level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelReport {
    /// 1-based level number; 1 is the starting directory
    pub level: usize,
    pub path: PathBuf,
    pub outcome: LevelOutcome,
}

/// Result of a complete ascent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AscentOutcome {
    /// Merged document, `None` when no level contributed
    pub value: Option<Value>,
    pub levels: Vec<LevelReport>,
}

impl AscentOutcome {
    /// Levels where a document existed but did not contribute
    pub fn dropped_levels(&self) -> impl Iterator<Item = &LevelReport> {
        self.levels.iter().filter(|report| report.outcome.dropped())
    }
}

/// Upward directory walk that merges every `file_name` it finds
#[derive(Debug, Clone)]
pub struct Ascent<S = FsSource> {
    start_dir: PathBuf,
    file_name: PathBuf,
    max_levels: usize,
    source: S,
}

impl Ascent<FsSource> {
    /// A rooted `file_name` is looked up relative to each level, never as an
    /// absolute path.
    pub fn new(
        start_dir: impl Into<PathBuf>,
        file_name: impl Into<PathBuf>,
        max_levels: usize,
    ) -> Self {
        Self {
            start_dir: start_dir.into(),
            file_name: strip_root(&file_name.into()),
            max_levels,
            source: FsSource,
        }
    }
}

impl<S: DocumentSource> Ascent<S> {
    /// Replace the document source (used to read from somewhere other than disk).
    pub fn with_source<T: DocumentSource>(self, source: T) -> Ascent<T> {
        Ascent {
            start_dir: self.start_dir,
            file_name: self.file_name,
            max_levels: self.max_levels,
            source,
        }
    }

    pub fn run(&self) -> AscentOutcome {
        let mut outcome = AscentOutcome::default();
        let mut dir = Some(self.start_dir.clone());
        let mut remaining = self.max_levels;

        while remaining > 0 {
            let Some(current) = dir.take() else {
                break;
            };
            let path = current.join(&self.file_name);
            dir = current.parent().map(Path::to_path_buf);
            remaining -= 1;

            let level = outcome.levels.len() + 1;
            let level_outcome = self.visit(&path, &mut outcome.value);
            log_level(level, &path, &level_outcome);
            outcome.levels.push(LevelReport {
                level,
                path,
                outcome: level_outcome,
            });
        }

        debug!(
            levels = outcome.levels.len(),
            found = outcome.value.is_some(),
            "Ascent finished"
        );
        outcome
    }

    fn visit(&self, path: &Path, acc: &mut Option<Value>) -> LevelOutcome {
        let bytes = match self.source.read(path) {
            Ok(bytes) => bytes,
            Err(LoadError::NotFound(_)) => return LevelOutcome::NotFound,
            Err(e) => return LevelOutcome::Unreadable(e.to_string()),
        };

        let doc = match decode(path, &bytes) {
            Ok(doc) => doc,
            Err(e) => return LevelOutcome::Unparsable(e.to_string()),
        };
        if doc.is_null() {
            return LevelOutcome::Empty;
        }

        let Some(current) = acc.as_ref() else {
            *acc = Some(doc);
            return LevelOutcome::Seeded;
        };

        let accumulated = JsonKind::of(current);
        let found = JsonKind::of(&doc);
        if accumulated != found {
            return LevelOutcome::KindMismatch { accumulated, found };
        }

        match merge(current, &doc) {
            Ok(merged) => {
                *acc = Some(merged);
                LevelOutcome::Merged
            }
            Err(e) => LevelOutcome::MergeFailed(e),
        }
    }
}

fn log_level(level: usize, path: &Path, outcome: &LevelOutcome) {
    if outcome.dropped() {
        warn!(depth = level, path = %path.display(), outcome = %outcome, "Level dropped");
    } else {
        debug!(depth = level, path = %path.display(), outcome = %outcome, "Level visited");
    }
}

/// Walk up from `start_dir` and merge every `file_name` found.
pub fn ascend(start_dir: &Path, file_name: &str, max_levels: usize) -> Option<Value> {
    Ascent::new(start_dir, file_name, max_levels).run().value
}

/// Number of levels to climb from `start_dir`.
///
/// A requested count of zero, none, or more than the segments of
/// `start_dir` means "climb to the root".
pub fn level_budget(start_dir: &Path, requested: Option<usize>) -> usize {
    let segments = segment_count(start_dir);
    match requested {
        Some(n) if n > 0 && n <= segments => n,
        _ => segments,
    }
}
