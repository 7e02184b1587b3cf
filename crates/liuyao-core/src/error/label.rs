//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a location in the parsed text.
///
/// ```text
/// error[E201]: 第 5 爻为动爻，但缺少变卦爻/变卦爻阴阳。
///    |
///  9 | 蛇 官申 父亥 - -Χ
///    | ^^^^^^^^^^^^^^^^^^ moving line without a transformed line
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Get the span this label points to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
