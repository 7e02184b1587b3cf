//! The diagnostic type carried in a chart record's error list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A single itemized problem found in a chart.
///
/// Serializes as `{"code": "E101", "message": "..."}`; the label and help
/// text are kept for terminal rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    #[serde(skip)]
    label: Option<Label>,
    #[serde(skip)]
    help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            label: None,
            help: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source label, if any.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Point this diagnostic at a span of the source.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label::new(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}
