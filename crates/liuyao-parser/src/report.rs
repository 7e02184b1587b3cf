//! Plain-text rendering of chart errors for end users.

use crate::error::Diagnostic;

/// Returned when there is nothing specific to report.
pub const UNKNOWN_ERROR: &str = "未知错误。";

const HEADER: &str = "解析失败：";
const RESUBMIT_HINT: &str = "请补充缺失字段后重新发送 /liuyao。";

/// Render an error list as a user-facing message.
///
/// ```
/// # use liuyao_parser::{format_errors, error::{Diagnostic, ErrorCode}};
/// let text = format_errors(&[Diagnostic::new(ErrorCode::E101, "必须识别到 6 行爻象，当前识别到 5 行。")]);
///
/// assert_eq!(
///     text,
///     "解析失败：\n- E101: 必须识别到 6 行爻象，当前识别到 5 行。\n请补充缺失字段后重新发送 /liuyao。"
/// );
/// ```
pub fn format_errors(errors: &[Diagnostic]) -> String {
    if errors.is_empty() {
        return UNKNOWN_ERROR.to_string();
    }

    let mut lines = Vec::with_capacity(errors.len() + 2);
    lines.push(HEADER.to_string());
    lines.extend(
        errors
            .iter()
            .map(|err| format!("- {}: {}", err.code(), err.message())),
    );
    lines.push(RESUBMIT_HINT.to_string());
    lines.join("\n")
}
