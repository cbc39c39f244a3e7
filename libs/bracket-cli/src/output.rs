//! Output formatting for the CLI.

use colored::Colorize;
use serde::Serialize;

use crate::OutputFormat;

/// Print a value as pretty JSON when the JSON format is selected.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }

    match format {
        OutputFormat::Text => {
            // Text output is handled by the caller
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{json}");
            }
        }
    }
}

/// Print the report block in text mode.
pub fn report(text: &str, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Text {
        return;
    }
    print!("{text}");
}

/// Print a success message.
pub fn success(msg: &str, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Text {
        return;
    }
    println!("{} {}", "✓".green().bold(), msg);
}

/// Print a warning to stderr. Shown in every format unless quiet.
pub fn warning(msg: &str, quiet: bool) {
    if quiet {
        return;
    }
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}
