//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a response body or extracted value.
///
/// With `pretty`, text that parses as JSON is re-indented; anything else is
/// printed as received.
pub fn response(text: &str, pretty: bool) -> Result<()> {
    if text.is_empty() {
        eprintln!("{}", "(empty response)".dimmed());
        return Ok(());
    }

    if pretty && let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", text);
    Ok(())
}
