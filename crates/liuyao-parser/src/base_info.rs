//! Chart metadata extraction.
//!
//! The header of a casting sheet is a handful of `label：value` lines plus
//! two unlabeled lines (four pillars and void branches) that are recognized
//! by the glyphs they contain. None of these fields are validated; anything
//! not found is simply left empty.

use log::trace;
use winnow::{
    Parser as _,
    combinator::preceded,
    token::{literal, one_of, take_till},
};

use liuyao_core::BaseInfo;

use crate::lexer::{self, IResult, SourceLine, whitespace0};

const PILLAR_GLYPHS: [&str; 4] = ["年", "月", "日", "时"];
const PILLAR_EXCLUDES: [&str; 4] = ["时间", "本卦", "变卦", "占问"];

/// Extract chart metadata from the non-blank source lines.
pub(crate) fn parse_base_info(lines: &[SourceLine<'_>]) -> BaseInfo {
    let text = lines
        .iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n");

    let (primary_hexagram, primary_house) = labelled_value(&text, "本卦")
        .map(|value| split_hexagram(&value))
        .unwrap_or_default();
    let (transformed_hexagram, transformed_house) = labelled_value(&text, "变卦")
        .map(|value| split_hexagram(&value))
        .unwrap_or_default();

    let info = BaseInfo {
        question: labelled_value(&text, "占问"),
        cast_time: labelled_value(&text, "时间"),
        four_pillars: four_pillars(lines),
        void_branches: void_branches(lines),
        primary_hexagram,
        transformed_hexagram,
        house: primary_house.or(transformed_house),
    };
    trace!(info:?; "Extracted base info");
    info
}

/// Parse `label`, a half- or full-width colon, optional whitespace, then the
/// rest of that line.
fn labelled<'src>(input: &mut &'src str, label: &str) -> IResult<&'src str> {
    preceded(
        (literal(label), one_of([':', '：']), whitespace0),
        take_till(1.., '\n'),
    )
    .parse_next(input)
}

/// The trimmed value of the first `label：value` occurrence in `text`.
fn labelled_value(text: &str, label: &str) -> Option<String> {
    text.match_indices(label).find_map(|(offset, _)| {
        let mut input = &text[offset..];
        labelled(&mut input, label)
            .ok()
            .map(|value| value.trim().to_string())
    })
}

/// Split a hexagram value of the form `name[/house][·number]`.
///
/// The name is everything before the first `/`; the house runs from there up
/// to an optional `·` suffix. Either part may be missing.
pub(crate) fn split_hexagram(value: &str) -> (Option<String>, Option<String>) {
    let value = lexer::normalize(value);
    if value.is_empty() {
        return (None, None);
    }

    let Some((name, rest)) = value.split_once('/') else {
        return (Some(value.trim().to_string()), None);
    };

    // A value starting with `/` has no name to anchor on; keep it whole.
    if name.is_empty() {
        return (Some(value.clone()), None);
    }

    let house = rest.split('·').next().unwrap_or_default().trim();
    (non_empty(name.trim()), non_empty(house))
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// The first line naming all four pillars that is not another header field.
fn four_pillars(lines: &[SourceLine<'_>]) -> Option<String> {
    lines.iter().map(|line| lexer::normalize(line.text)).find(|line| {
        PILLAR_GLYPHS.iter().all(|glyph| line.contains(glyph))
            && !PILLAR_EXCLUDES.iter().any(|label| line.contains(label))
    })
}

/// The first line mentioning `空` that is not a date or hexagram line.
fn void_branches(lines: &[SourceLine<'_>]) -> Option<String> {
    lines.iter().map(|line| lexer::normalize(line.text)).find(|line| {
        line.contains('空')
            && !line.contains('年')
            && !line.contains("时间")
            && !line.contains('卦')
    })
}
