//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, rejected values)
//! - 3: Graph error (bad vertex index, unreached vertex)

mod macros;

use thiserror::Error;

use crate::graph::VertexIndex;

/// Exit codes for the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph error - structural violation or unreached query (3)
    Graph = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Graph errors (exit code 3)
    #[error("no such index: {index} (graph has {size} vertices)")]
    InvalidIndex { index: VertexIndex, size: usize },

    #[error("vertex {index} was not reached by this search")]
    Unreached { index: VertexIndex },

    // Usage errors (exit code 2)
    #[error("invalid cost {cost} on edge ({from}, {to}): costs must be finite and non-negative")]
    InvalidCost {
        from: VertexIndex,
        to: VertexIndex,
        cost: f64,
    },

    #[error("unsupported operation: {operation}")]
    Unsupported { operation: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an out-of-range vertex index
    pub fn invalid_index(index: VertexIndex, size: usize) -> Self {
        GraphError::InvalidIndex { index, size }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an operation the graph does not support
    pub fn unsupported(operation: &str) -> Self {
        GraphError::Unsupported {
            operation: operation.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidIndex { .. } | GraphError::Unreached { .. } => ExitCode::Graph,

            GraphError::InvalidCost { .. }
            | GraphError::Unsupported { .. }
            | GraphError::InvalidValue { .. }
            | GraphError::UnknownFormat(_)
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidIndex { .. } => "invalid_index",
            GraphError::Unreached { .. } => "unreached",
            GraphError::InvalidCost { .. } => "invalid_cost",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            GraphError::InvalidIndex { index, size } => {
                error_obj["index"] = serde_json::json!(index);
                error_obj["size"] = serde_json::json!(size);
            }
            GraphError::Unreached { index } => {
                error_obj["index"] = serde_json::json!(index);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
