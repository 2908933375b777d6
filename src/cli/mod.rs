//! Command-line interface for respan.
//!
//! This module handles argument parsing and user interface only.
//! NO replacement logic is implemented here.

use clap::Parser;
use serde::Serialize;
use serde_json::Value;

/// Respan: atomic line-range replacement for text files.
#[derive(Parser, Debug)]
#[command(name = "respan")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available respan commands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Replace an inclusive 1-based line range of a file with new content.
    Replace {
        /// Path to the file to rewrite.
        #[arg(short, long, default_value = "demo.txt")]
        file: std::path::PathBuf,

        /// First line to replace (1-based, inclusive).
        #[arg(short, long)]
        start: usize,

        /// Last line to replace (1-based, inclusive).
        #[arg(short, long)]
        end: usize,

        /// Path to a file containing the replacement content.
        #[arg(
            short = 'w',
            long = "with",
            value_name = "FILE",
            conflicts_with = "content",
            required_unless_present = "content"
        )]
        with_: Option<std::path::PathBuf>,

        /// Replacement content supplied inline.
        #[arg(short, long, required_unless_present = "with_")]
        content: Option<String>,

        /// Report the effect without rewriting the file.
        #[arg(long)]
        preview: bool,

        /// Emit machine-readable JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
}

/// Parse command-line arguments.
///
/// This function is the entry point for CLI argument parsing.
/// It returns the parsed Cli struct or exits on error.
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// JSON success payload for CLI responses.
#[derive(Serialize)]
pub struct CliSuccessPayload {
    /// Status indicator ("ok").
    pub status: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Optional structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CliSuccessPayload {
    /// Construct a payload containing only the message.
    pub fn message_only(message: String) -> Self {
        Self {
            status: "ok",
            message,
            data: None,
        }
    }

    /// Construct a payload with structured data.
    pub fn with_data(message: String, data: Value) -> Self {
        Self {
            status: "ok",
            message,
            data: Some(data),
        }
    }
}

/// JSON error payload for CLI responses.
#[derive(Serialize)]
pub struct CliErrorPayload {
    /// Status indicator ("error").
    pub status: &'static str,
    /// Structured error details.
    pub error: ErrorDetails,
}

/// Details for a CLI error payload.
#[derive(Serialize)]
pub struct ErrorDetails {
    /// Error kind identifier (OutOfRange, Io).
    pub kind: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Optional file context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl CliErrorPayload {
    /// Build payload from a RespanError instance.
    pub fn from_error(error: &crate::RespanError) -> Self {
        CliErrorPayload {
            status: "error",
            error: ErrorDetails {
                kind: error.kind(),
                message: error.to_string(),
                file: error
                    .file_path()
                    .map(|path| path.to_string_lossy().to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_payload_carries_kind_and_file() {
        let err = crate::RespanError::OutOfRange {
            file: PathBuf::from("demo.txt"),
            start: 4,
            end: 5,
            line_count: 3,
        };
        let payload = CliErrorPayload::from_error(&err);
        assert_eq!(payload.status, "error");
        assert_eq!(payload.error.kind, "OutOfRange");
        assert_eq!(payload.error.file.as_deref(), Some("demo.txt"));

        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["error"]["kind"], "OutOfRange");
    }

    #[test]
    fn test_success_payload_omits_empty_data() {
        let payload = CliSuccessPayload::message_only("done".to_string());
        let json = serde_json::to_string(&payload).expect("payload should serialize");
        assert!(!json.contains("data"));
    }
}
