//! Error types for chart reading.
//!
//! This module provides the main error type [`LiuyaoError`] which wraps
//! the error conditions that can occur while reading a chart.

use std::io;

use thiserror::Error;

use liuyao_core::ChartRecord;
use liuyao_parser::error::ChartError;

/// The main error type for chart reading.
///
/// # Diagnostic Variants
///
/// The `Invalid` variant carries the parsed record, its coded diagnostics,
/// and the text that was parsed, so callers can render the user-facing
/// report, dump the record, or point at the offending source lines.
#[derive(Debug, Error)]
pub enum LiuyaoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("插件已加载。请在同一条消息中发送 `/liuyao` + 六爻排盘纯文本。")]
    EmptyInput,

    #[error("{err}")]
    Invalid {
        err: ChartError,
        record: Box<ChartRecord>,
        src: String,
    },
}

impl LiuyaoError {
    /// Create a new `Invalid` error for a record that failed validation.
    pub fn new_invalid(err: ChartError, record: ChartRecord, src: impl Into<String>) -> Self {
        Self::Invalid {
            err,
            record: Box::new(record),
            src: src.into(),
        }
    }
}
