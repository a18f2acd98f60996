//! CLI output: result rendering, level report, and error mapping.

use crate::ascent::AscentOutcome;
use crate::error::CliError;
use serde_json::Value;

/// Literal printed when no level contributed a document
pub const EMPTY_RESULT: &str = "{}";

/// Render the merged value as a single line of JSON.
pub fn render_value(value: Option<&Value>) -> Result<String, CliError> {
    match value {
        Some(value) => Ok(serde_json::to_string(value)?),
        None => Ok(EMPTY_RESULT.to_string()),
    }
}

/// One line per visited level, nearest first.
pub fn format_report(outcome: &AscentOutcome) -> String {
    let mut out = String::new();
    for report in &outcome.levels {
        out.push_str(&format!(
            "level {}: {}: {}\n",
            report.level,
            report.path.display(),
            report.outcome
        ));
    }
    out
}

/// Map CLI errors to a string for stderr.
pub fn map_error(e: &CliError) -> String {
    format!("cascade-json: {}", e)
}
