//! Respan CLI binary
//!
//! This is the main entry point for the respan command-line interface.
//! The CLI is a thin adapter over existing APIs - NO logic is implemented here.

use std::path::Path;
use std::process::ExitCode;

use respan::cli::{CliErrorPayload, CliSuccessPayload};
use respan::{preview_replace, replace_lines, LineRange, ReplacementBlock};
use serde_json::Value;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = respan::cli::parse_args();

    // Initialize logger if verbose
    if cli.verbose {
        env_logger::init();
    }

    // Execute command
    match cli.command {
        respan::cli::Commands::Replace {
            file,
            start,
            end,
            with_,
            content,
            preview,
            json,
        } => {
            let result = execute_replace(
                &file,
                start,
                end,
                with_.as_deref(),
                content.as_deref(),
                preview,
            );
            render_result(result, json)
        }
    }
}

/// Execute the replace command.
///
/// This function is a thin adapter that:
/// 1. Builds the replacement block from --with or --content
/// 2. Routes to preview or commit
/// 3. Formats the summary for display
///
/// All logic is delegated to existing APIs.
fn execute_replace(
    file: &Path,
    start: usize,
    end: usize,
    with_file: Option<&Path>,
    inline: Option<&str>,
    preview: bool,
) -> Result<(String, Value), respan::RespanError> {
    // Step 1: Build the replacement block
    let block = match (with_file, inline) {
        (Some(path), _) => {
            let text =
                std::fs::read_to_string(path).map_err(|e| respan::RespanError::io(path, e))?;
            ReplacementBlock::from_text(&text)
        }
        (None, Some(text)) => ReplacementBlock::from_text(text),
        (None, None) => unreachable!("clap requires --with or --content"),
    };

    let range = LineRange::new(start, end);

    // Step 2: Preview or commit
    if preview {
        let report = preview_replace(file, range, &block)?;
        let message = format!(
            "Would replace lines {}..={} in {} (-{} +{} lines)",
            report.line_start, report.line_end, report.file, report.lines_removed, report.lines_added
        );
        let data = serde_json::to_value(&report).unwrap_or(Value::Null);
        Ok((message, data))
    } else {
        let summary = replace_lines(file, range, &block)?;
        let message = format!(
            "Replaced lines {}..={} in {} (hash: {} -> {})",
            start,
            end,
            summary.file.display(),
            summary.before_hash,
            summary.after_hash
        );
        let data = serde_json::to_value(&summary).unwrap_or(Value::Null);
        Ok((message, data))
    }
}

/// Print the outcome and map it to an exit code.
fn render_result(result: Result<(String, Value), respan::RespanError>, json: bool) -> ExitCode {
    match result {
        Ok((message, data)) => {
            if json {
                let payload = CliSuccessPayload::with_data(message, data);
                match serde_json::to_string_pretty(&payload) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(_) => println!("{}", payload.message),
                }
            } else {
                println!("{}", message);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if json {
                let payload = CliErrorPayload::from_error(&e);
                match serde_json::to_string_pretty(&payload) {
                    Ok(rendered) => eprintln!("{}", rendered),
                    Err(_) => eprintln!("Error: {}", e),
                }
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(1)
        }
    }
}
