//! Hexagram line recognition and field extraction.
//!
//! A hexagram line on a casting sheet looks like
//!
//! ```text
//! 蛇 官申 父亥 - -Χ 　 财戌 —
//! ^  ^    ^    ^^^^    ^    ^
//! |  |    |    |       |    transformed stroke
//! |  |    |    |       transformed relative
//! |  |    |    primary stroke (+ moving marker)
//! |  |    primary relative
//! |  hidden relative
//! six god
//! ```
//!
//! with an optional `世`/`应` column right after the primary stroke. Any
//! column may be missing; each missing piece leaves its field empty instead
//! of failing the line.

use log::{debug, trace};

use liuyao_core::{
    YaoLine,
    glyph::{self, SixGod},
};

use crate::lexer::{self, Cursor, SourceLine};

/// Number of lines in a hexagram.
pub(crate) const LINE_COUNT: usize = 6;

/// Minimum token count for a line to carry stroke columns.
const MIN_TOKENS: usize = 4;

/// Returns `true` if the line starts with a six-god glyph.
fn is_yao_candidate(line: &SourceLine<'_>) -> bool {
    line.text
        .split_whitespace()
        .next()
        .is_some_and(|first| first.parse::<SixGod>().is_ok())
}

/// Canonical six-god name, or the token itself if it is not recognized.
fn six_god_name(token: &str) -> String {
    token
        .parse::<SixGod>()
        .map(|god| god.name().to_string())
        .unwrap_or_else(|_| token.to_string())
}

/// Recognize and parse up to six hexagram lines, top line first.
///
/// Lines are indexed 6 down to 1 in source order; candidates beyond the
/// sixth are ignored.
pub(crate) fn parse_yao_lines(lines: &[SourceLine<'_>]) -> Vec<YaoLine> {
    let candidates: Vec<_> = lines.iter().filter(|line| is_yao_candidate(line)).collect();
    debug!(candidates = candidates.len(); "Classified hexagram lines");

    candidates
        .into_iter()
        .take(LINE_COUNT)
        .zip((1..=LINE_COUNT as u8).rev())
        .map(|(line, index)| parse_yao_line(index, line))
        .collect()
}

/// Extract every recoverable field from one hexagram line.
pub(crate) fn parse_yao_line(index: u8, line: &SourceLine<'_>) -> YaoLine {
    let moving = glyph::has_moving_marker(line.text);
    let mut yao = YaoLine::new(index, line.text, moving).with_span(line.span);

    let normalized = lexer::normalize(line.text);
    let tokens: Vec<&str> = normalized.split(' ').collect();
    yao.six_god = tokens.first().map(|token| six_god_name(token));

    if tokens.len() < MIN_TOKENS {
        debug!(index, tokens = tokens.len(); "Hexagram line too short, keeping six god only");
        return yao;
    }

    yao.fu_shen = Some(glyph::expand_relative(tokens[1]));
    yao.ben_yao = Some(glyph::expand_relative(tokens[2]));

    let tail = tokens[MIN_TOKENS - 1..].join(" ");
    let mut cursor = Cursor::new(&tail);

    let Some(primary) = cursor.next_stroke() else {
        debug!(index, tail = tail.as_str(); "No stroke found in hexagram line");
        return yao;
    };
    yao.set_ben_hua(Some(primary.stroke));
    yao.shi_ying = cursor.take_shi_ying();

    let segment = match cursor.next_stroke() {
        Some(transformed) => {
            yao.bian_hua = Some(transformed.stroke);
            transformed.before
        }
        None => cursor.rest(),
    };
    yao.bian_yao = lexer::relative_token(segment).map(glyph::expand_relative);

    trace!(index, moving, yao:?; "Parsed hexagram line");
    yao
}
