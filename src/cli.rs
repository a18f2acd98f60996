//! CLI domain: parse, route, and output only.
//! Ascent and merge semantics live in the library modules.

mod output;
mod parse;
mod route;

pub use output::{format_report, map_error, render_value};
pub use parse::Cli;
pub use route::{Execution, RunContext};
