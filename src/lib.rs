//! cascade-json: Cascading JSON Configuration
//!
//! Walks from a directory up towards the filesystem root, loads a named JSON
//! file at every level, and deep-merges the documents so that values closer
//! to the starting directory take precedence.

pub mod ascent;
pub mod cli;
pub mod config;
pub mod error;
pub mod kind;
pub mod logging;
pub mod merge;
pub mod paths;
pub mod source;

pub use ascent::{ascend, level_budget, Ascent, AscentOutcome, LevelOutcome, LevelReport};
pub use error::{CliError, LoadError, MergeError};
pub use kind::JsonKind;
pub use merge::{merge, merge_all};
