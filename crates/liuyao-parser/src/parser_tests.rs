//! Unit tests for hexagram line recognition and field extraction.

use liuyao_core::{
    Span, YaoLine,
    glyph::{ShiYing, Stroke, YinYang},
};

use crate::{
    lexer::{self, SourceLine},
    parser,
};

/// Helper to parse a single line as if it were found at `index`.
fn parse_line(index: u8, text: &str) -> YaoLine {
    let line = SourceLine {
        text,
        span: Span::new(0..text.len()),
    };
    parser::parse_yao_line(index, &line)
}

#[test]
fn test_full_line_with_transformation() {
    let yao = parse_line(6, "虎 财戌 官酉 - -     　 父子 - -");

    assert_eq!(yao.index, 6);
    assert_eq!(yao.pos, "上六");
    assert_eq!(yao.six_god.as_deref(), Some("白虎"));
    assert_eq!(yao.fu_shen.as_deref(), Some("妻财戌土"));
    assert_eq!(yao.ben_yao.as_deref(), Some("官鬼酉金"));
    assert_eq!(yao.ben_hua, Some(Stroke::Yin));
    assert_eq!(yao.yin_yang, YinYang::Yin);
    assert_eq!(yao.shi_ying, None);
    assert!(!yao.moving);
    assert_eq!(yao.bian_yao.as_deref(), Some("父母子水"));
    assert_eq!(yao.bian_hua, Some(Stroke::Yin));
    assert_eq!(yao.raw, "虎 财戌 官酉 - -     　 父子 - -");
}

#[test]
fn test_moving_line_with_marker_glued_to_stroke() {
    let yao = parse_line(5, "蛇 官申 父亥 - -Χ 　 财戌 —");

    assert!(yao.moving);
    assert_eq!(yao.six_god.as_deref(), Some("螣蛇"));
    assert_eq!(yao.ben_hua, Some(Stroke::Yin));
    assert_eq!(yao.bian_yao.as_deref(), Some("妻财戌土"));
    assert_eq!(yao.bian_hua, Some(Stroke::Yang));
}

#[test]
fn test_shi_ying_marker() {
    let shi = parse_line(4, "勾 孙午 财丑 - -     世 官申 - -");
    assert_eq!(shi.shi_ying, Some(ShiYing::Shi));
    assert_eq!(shi.bian_yao.as_deref(), Some("官鬼申金"));
    assert_eq!(shi.bian_hua, Some(Stroke::Yin));

    let ying = parse_line(1, "玄 父子 财丑 - -     应 财丑 - -");
    assert_eq!(ying.shi_ying, Some(ShiYing::Ying));
    assert_eq!(ying.pos, "初爻");
    assert_eq!(ying.bian_yao.as_deref(), Some("妻财丑土"));
}

#[test]
fn test_solid_stroke_is_yang() {
    let yao = parse_line(3, "雀 财辰 官酉 —     　 官酉 —");

    assert_eq!(yao.ben_hua, Some(Stroke::Yang));
    assert_eq!(yao.yin_yang, YinYang::Yang);
    assert_eq!(yao.bian_yao.as_deref(), Some("官鬼酉金"));
    assert_eq!(yao.bian_hua, Some(Stroke::Yang));
}

#[test]
fn test_solid_stroke_before_broken_wins() {
    let yao = parse_line(3, "雀 财辰 官酉 x— - -");
    assert_eq!(yao.ben_hua, Some(Stroke::Yang));
}

#[test]
fn test_short_line_keeps_six_god_only() {
    let yao = parse_line(2, "龙 兄寅 ○");

    assert_eq!(yao.six_god.as_deref(), Some("青龙"));
    assert!(yao.moving);
    assert_eq!(yao.fu_shen, None);
    assert_eq!(yao.ben_yao, None);
    assert_eq!(yao.ben_hua, None);
    assert_eq!(yao.yin_yang, YinYang::Unknown);
    assert_eq!(yao.bian_yao, None);
}

#[test]
fn test_line_without_stroke_keeps_relatives() {
    let yao = parse_line(2, "龙 兄寅 父亥 世 财丑");

    assert_eq!(yao.fu_shen.as_deref(), Some("兄弟寅木"));
    assert_eq!(yao.ben_yao.as_deref(), Some("父母亥水"));
    assert_eq!(yao.ben_hua, None);
    assert_eq!(yao.yin_yang, YinYang::Unknown);
    assert_eq!(yao.shi_ying, None);
    assert_eq!(yao.bian_yao, None);
    assert_eq!(yao.bian_hua, None);
}

#[test]
fn test_missing_second_stroke_takes_leading_token() {
    let yao = parse_line(5, "蛇 官申 父亥 - -X 应 财戌");

    assert!(yao.moving);
    assert_eq!(yao.shi_ying, Some(ShiYing::Ying));
    assert_eq!(yao.bian_yao.as_deref(), Some("妻财戌土"));
    assert_eq!(yao.bian_hua, None);
}

#[test]
fn test_missing_transformed_relative() {
    let yao = parse_line(5, "蛇 官申 父亥 - -× —");

    assert!(yao.moving);
    assert_eq!(yao.bian_yao, None);
    assert_eq!(yao.bian_hua, Some(Stroke::Yang));
}

#[test]
fn test_unrecognized_relative_passes_through() {
    let yao = parse_line(4, "勾 财 财丑午 - - 某某 - -");

    assert_eq!(yao.fu_shen.as_deref(), Some("财"));
    assert_eq!(yao.ben_yao.as_deref(), Some("妻财丑土"));
    assert_eq!(yao.bian_yao.as_deref(), Some("某某"));
}

#[test]
fn test_double_glyph_six_god_is_kept_canonical() {
    let yao = parse_line(6, "白虎 财戌 官酉 - - 父子 - -");
    assert_eq!(yao.six_god.as_deref(), Some("白虎"));
}

#[test]
fn test_parse_yao_lines_assigns_descending_indices() {
    let source = "标题\n虎 a b - -\n说明\n蛇 a b - -\n勾 a b - -\n雀 a b —\n龙 a b —\n玄 a b - -\n虎 extra b —";
    let lines = lexer::source_lines(source);
    let yao_lines = parser::parse_yao_lines(&lines);

    let indices: Vec<u8> = yao_lines.iter().map(|yao| yao.index).collect();
    assert_eq!(indices, vec![6, 5, 4, 3, 2, 1]);
    assert_eq!(yao_lines[0].raw, "虎 a b - -");
    assert_eq!(yao_lines[5].raw, "玄 a b - -");
}

#[test]
fn test_parse_yao_lines_ignores_non_candidates() {
    let lines = lexer::source_lines("时间：2026\n马 a b - -\n  青龙 a b —");
    let yao_lines = parser::parse_yao_lines(&lines);

    assert_eq!(yao_lines.len(), 1);
    assert_eq!(yao_lines[0].index, 6);
    assert_eq!(yao_lines[0].raw, "  青龙 a b —");
}

#[test]
fn test_parse_yao_lines_records_spans() {
    let source = "头\n虎 财戌 官酉 - - 父子 - -\n";
    let lines = lexer::source_lines(source);
    let yao_lines = parser::parse_yao_lines(&lines);

    let span = yao_lines[0].span.expect("parsed lines carry spans");
    assert_eq!(&source[span.start()..span.end()], "虎 财戌 官酉 - - 父子 - -");
}

mod proptest_tests {
    use proptest::prelude::*;

    use crate::{MAX_INPUT_CHARS, lexer::normalize, parse};

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in "[ \t\u{3000}a-z虎财戌—-]{0,40}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(!once.contains("  "));
        }

        #[test]
        fn oversized_input_yields_only_e001(extra in 1usize..64, fill in "[虎a\n -]") {
            let source = fill.repeat(MAX_INPUT_CHARS + extra);
            let record = parse(&source);

            prop_assert!(record.yao_lines.is_empty());
            prop_assert!(record.base_info.is_empty());
            prop_assert_eq!(record.errors.len(), 1);
            prop_assert_eq!(record.errors[0].code().as_str(), "E001");
        }
    }
}
