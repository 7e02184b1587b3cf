//! Collector for accumulating diagnostics during validation.
//!
//! The [`DiagnosticCollector`] lets every check report its findings instead
//! of stopping at the first failure.

use crate::error::{ChartError, Diagnostic};

/// A collector for accumulating diagnostics.
///
/// Diagnostics are kept in emission order and never deduplicated. A
/// collector may be seeded with diagnostics raised earlier (for example by
/// the parser's length guard); those stay at the front of the list.
///
/// # Example
///
/// ```
/// # use liuyao_parser::error::{Diagnostic, DiagnosticCollector, ErrorCode};
///
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(Diagnostic::new(ErrorCode::E101, "必须识别到 6 行爻象，当前识别到 5 行。"));
///
/// assert!(collector.finish().is_err());
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector, returning every diagnostic in order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Finish collection and return a result.
    ///
    /// - If anything was emitted, returns `Err(ChartError)` with all diagnostics.
    /// - Otherwise returns `Ok(())`.
    pub fn finish(self) -> Result<(), ChartError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ChartError::new(self.diagnostics))
        }
    }
}

impl From<Vec<Diagnostic>> for DiagnosticCollector {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
