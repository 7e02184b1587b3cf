//! Error codes for chart diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Input errors
//! - `E1xx` - Structure errors
//! - `E2xx` - Line content errors
//!
//! The literal code strings are part of the record format and are matched by
//! downstream templates, so they never change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // =========================================================================
    // Input Errors (E0xx)
    // =========================================================================
    /// Input too long.
    ///
    /// The text exceeds the character limit and was not parsed at all.
    E001,

    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Wrong line count.
    ///
    /// A chart must contain exactly six hexagram lines.
    E101,

    /// Incomplete line indices.
    ///
    /// Line indices must cover 1 through 6 with no gaps or duplicates.
    E102,

    // =========================================================================
    // Line Content Errors (E2xx)
    // =========================================================================
    /// Incomplete moving line.
    ///
    /// A moving line is missing its transformed relative or transformed stroke.
    E201,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "input too long",
            ErrorCode::E101 => "wrong line count",
            ErrorCode::E102 => "incomplete line indices",
            ErrorCode::E201 => "incomplete moving line",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
