//! Error accumulation for the parsing lifecycle.
//!
//! The diagnostic type itself lives in [`liuyao_core::error`] because it is
//! part of the chart record. This module adds:
//! - [`DiagnosticCollector`] for accumulating diagnostics without short-circuiting
//! - [`ChartError`] for returning a non-empty diagnostic list as an error

mod chart_error;
mod collector;

pub use chart_error::ChartError;
pub use collector::DiagnosticCollector;
pub use liuyao_core::error::{Diagnostic, ErrorCode, Label};
