//! Terminal reports for failed chart reads.
//!
//! A chart that fails validation becomes one report per coded finding, each
//! drawn against the casting-sheet text so the offending yao line is
//! underlined. Failures that happen before a chart exists (unreadable input,
//! JSON output, a bare `/liuyao` command) become a single plain report.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use liuyao::LiuyaoError;
use liuyao_parser::{Span, error::Diagnostic};

/// One coded finding against the sheet it was found in.
pub struct ChartReport<'a> {
    finding: &'a Diagnostic,
    sheet: &'a str,
}

impl<'a> ChartReport<'a> {
    pub fn new(finding: &'a Diagnostic, sheet: &'a str) -> Self {
        Self { finding, sheet }
    }
}

impl fmt::Debug for ChartReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.finding, f)
    }
}

impl fmt::Display for ChartReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.finding.message())
    }
}

impl std::error::Error for ChartReport<'_> {}

impl MietteDiagnostic for ChartReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.finding.code()))
    }

    /// Explicit help wins; otherwise the code's short description.
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.finding.code();
        let hint = self.finding.help().unwrap_or_else(|| code.description());
        Some(Box::new(hint))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.sheet)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let line = self.finding.label()?;
        let underline = LabeledSpan::new_primary_with_span(
            Some(line.message().to_owned()),
            source_span(line.span()),
        );
        Some(Box::new(std::iter::once(underline)))
    }
}

/// A read that failed before any chart could be checked.
pub struct FailureReport<'a>(&'a LiuyaoError);

impl fmt::Debug for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for FailureReport<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for FailureReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            LiuyaoError::Io(_) => "liuyao::io",
            LiuyaoError::Json(_) => "liuyao::json",
            LiuyaoError::EmptyInput => "liuyao::empty_input",
            LiuyaoError::Invalid { .. } => return None,
        };
        Some(Box::new(code))
    }
}

/// Anything the CLI prints on a failed read.
#[derive(Debug)]
pub enum Report<'a> {
    Chart(ChartReport<'a>),
    Failure(FailureReport<'a>),
}

impl Report<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Report::Chart(report) => report,
            Report::Failure(report) => report,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Report<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split a failed read into the reports to print, one per finding for an
/// invalid chart.
pub fn chart_reports(err: &LiuyaoError) -> Vec<Report<'_>> {
    match err {
        LiuyaoError::Invalid { err: findings, src, .. } => findings
            .diagnostics()
            .iter()
            .map(|finding| Report::Chart(ChartReport::new(finding, src)))
            .collect(),
        _ => vec![Report::Failure(FailureReport(err))],
    }
}
