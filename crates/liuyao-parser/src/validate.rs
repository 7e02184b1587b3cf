//! Structural validation of parsed chart records.
//!
//! The parser is deliberately lenient, so this is the one place where a
//! chart's completeness is enforced. All checks run on every record and
//! their findings accumulate:
//!
//! - `E101` - the record must hold exactly six lines
//! - `E102` - line indices must be exactly 1 through 6
//! - `E201` - every moving line needs its transformed relative and stroke

use log::debug;

use liuyao_core::{ChartRecord, YaoLine};

use crate::{
    error::{ChartError, Diagnostic, DiagnosticCollector, ErrorCode},
    parser::LINE_COUNT,
};

const EXPECTED_INDICES: [u8; LINE_COUNT] = [1, 2, 3, 4, 5, 6];

/// Validate a parsed record.
///
/// Returns whether the record is valid together with the full error list:
/// errors already on the record come first, followed by any found here.
///
/// ```
/// let record = liuyao_parser::parse("虎 财戌 官酉 - - 父子 - -");
/// let (ok, errors) = liuyao_parser::validate(&record);
///
/// assert!(!ok);
/// assert_eq!(errors[0].code().as_str(), "E101");
/// ```
pub fn validate(record: &ChartRecord) -> (bool, Vec<Diagnostic>) {
    let diagnostics = collect(record).into_diagnostics();
    (diagnostics.is_empty(), diagnostics)
}

/// Validate a parsed record, returning the error list as a [`ChartError`].
pub fn check(record: &ChartRecord) -> Result<(), ChartError> {
    collect(record).finish()
}

fn collect(record: &ChartRecord) -> DiagnosticCollector {
    let mut collector = DiagnosticCollector::from(record.errors.clone());

    check_line_count(&record.yao_lines, &mut collector);
    check_indices(&record.yao_lines, &mut collector);
    for line in &record.yao_lines {
        check_moving_line(line, &mut collector);
    }

    debug!(
        lines = record.yao_lines.len(),
        valid = collector.is_empty();
        "Validated chart record"
    );
    collector
}

fn check_line_count(lines: &[YaoLine], collector: &mut DiagnosticCollector) {
    if lines.len() != LINE_COUNT {
        collector.emit(
            Diagnostic::new(
                ErrorCode::E101,
                format!("必须识别到 6 行爻象，当前识别到 {} 行。", lines.len()),
            )
            .with_help("每一爻占一行，并以六神（青龙、朱雀、勾陈、螣蛇、白虎、玄武）开头"),
        );
    }
}

fn check_indices(lines: &[YaoLine], collector: &mut DiagnosticCollector) {
    let indices: Vec<u8> = lines.iter().map(|line| line.index).collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();

    if sorted != EXPECTED_INDICES {
        collector.emit(Diagnostic::new(
            ErrorCode::E102,
            format!("index 必须完整为 6..1 且不重复，当前为 {indices:?}。"),
        ));
    }
}

fn check_moving_line(line: &YaoLine, collector: &mut DiagnosticCollector) {
    if !line.moving || line.has_transformation() {
        return;
    }

    let mut diagnostic = Diagnostic::new(
        ErrorCode::E201,
        format!("第 {} 爻为动爻，但缺少变卦爻/变卦爻阴阳。", line.index),
    )
    .with_help("在本卦爻阴阳之后补充变卦爻及其阴阳，例如 `财戌 —`");

    if let Some(span) = line.span {
        diagnostic = diagnostic.with_label(span, "moving line without a transformed line");
    }
    collector.emit(diagnostic);
}

#[cfg(test)]
mod tests {
    use liuyao_core::glyph::Stroke;

    use super::*;

    fn complete_lines() -> Vec<YaoLine> {
        (1..=6u8)
            .rev()
            .map(|index| {
                let mut line = YaoLine::new(index, "", false);
                line.set_ben_hua(Some(Stroke::Yang));
                line
            })
            .collect()
    }

    fn record(yao_lines: Vec<YaoLine>) -> ChartRecord {
        ChartRecord {
            yao_lines,
            ..ChartRecord::default()
        }
    }

    fn codes(errors: &[Diagnostic]) -> Vec<ErrorCode> {
        errors.iter().map(Diagnostic::code).collect()
    }

    #[test]
    fn test_complete_record_is_valid() {
        let (ok, errors) = validate(&record(complete_lines()));

        assert!(ok);
        assert!(errors.is_empty());
        assert!(check(&record(complete_lines())).is_ok());
    }

    #[test]
    fn test_empty_record_reports_count_and_indices() {
        let (ok, errors) = validate(&ChartRecord::default());

        assert!(!ok);
        assert_eq!(codes(&errors), vec![ErrorCode::E101, ErrorCode::E102]);
        assert_eq!(errors[0].message(), "必须识别到 6 行爻象，当前识别到 0 行。");
        assert_eq!(errors[1].message(), "index 必须完整为 6..1 且不重复，当前为 []。");
    }

    #[test]
    fn test_duplicate_index_reports_unsorted_list() {
        let mut lines = complete_lines();
        lines[5].index = 2;

        let (ok, errors) = validate(&record(lines));

        assert!(!ok);
        assert_eq!(codes(&errors), vec![ErrorCode::E102]);
        assert_eq!(
            errors[0].message(),
            "index 必须完整为 6..1 且不重复，当前为 [6, 5, 4, 3, 2, 2]。"
        );
    }

    #[test]
    fn test_every_incomplete_moving_line_is_reported() {
        let mut lines = complete_lines();
        lines[1].moving = true;
        lines[4].moving = true;
        lines[4].bian_yao = Some("妻财戌土".to_string());

        let (ok, errors) = validate(&record(lines));

        assert!(!ok);
        assert_eq!(codes(&errors), vec![ErrorCode::E201, ErrorCode::E201]);
        assert_eq!(errors[0].message(), "第 5 爻为动爻，但缺少变卦爻/变卦爻阴阳。");
        assert_eq!(errors[1].message(), "第 2 爻为动爻，但缺少变卦爻/变卦爻阴阳。");
    }

    #[test]
    fn test_complete_moving_line_passes() {
        let mut lines = complete_lines();
        lines[0].moving = true;
        lines[0].bian_yao = Some("父母子水".to_string());
        lines[0].bian_hua = Some(Stroke::Yin);

        assert!(validate(&record(lines)).0);
    }

    #[test]
    fn test_existing_errors_are_preserved_first() {
        let chart = ChartRecord::from_errors(vec![Diagnostic::new(ErrorCode::E001, "too long")]);

        let (ok, errors) = validate(&chart);

        assert!(!ok);
        assert_eq!(
            codes(&errors),
            vec![ErrorCode::E001, ErrorCode::E101, ErrorCode::E102]
        );
        assert_eq!(chart.errors.len(), 1);
    }

    #[test]
    fn test_moving_line_label_uses_line_span() {
        let mut lines = complete_lines();
        lines[2] = YaoLine::new(4, "雀 财辰 官酉 —X", true).with_span(liuyao_core::Span::new(30..48));
        lines[2].set_ben_hua(Some(Stroke::Yang));

        let (_, errors) = validate(&record(lines));

        let label = errors[0].label().expect("E201 carries the line span");
        assert_eq!(label.span(), liuyao_core::Span::new(30..48));
    }

    #[test]
    fn test_check_wraps_errors() {
        let err = check(&ChartRecord::default()).unwrap_err();

        assert_eq!(err.diagnostics().len(), 2);
        assert!(err.to_string().starts_with("error[E101]"));
    }
}
