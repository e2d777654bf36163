//! Error types for the mining engine.
//!
//! Every fatal condition the engine can hit is one of three kinds (malformed
//! input, I/O failure, bad parameter) — all are terminal for the run. Internal
//! invariant violations are programmer errors and panic instead of routing
//! through here.

use thiserror::Error;

/// Errors surfaced across the parse → prune → mine pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A line of the input file could not be parsed.
    #[error("malformed input at line {line}: {detail}")]
    InputFormat {
        /// 1-based line number in the source file.
        line: usize,
        /// What was wrong with the line.
        detail: String,
    },

    /// The input or output file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-supplied parameter is out of range or missing.
    #[error("invalid parameter: {0}")]
    Parameter(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
