//! Line splitting, whitespace normalization, and the stroke-token cursor.
//!
//! Casting sheets are loosely aligned tables: columns are separated by any
//! mix of ASCII spaces, tabs and full-width spaces. Everything downstream
//! works on [`normalize`]d text where each whitespace run is a single space.
//!
//! The part of a line after the relative columns (the "tail") is walked by a
//! [`Cursor`], which recognizes three things:
//!
//! - stroke tokens: `- -` / `--` (broken) or `—` (solid), optionally followed
//!   by a moving-line marker
//! - a standalone `世` / `应` marker
//! - the leading relative token of whatever remains

use std::ops::Range;

use winnow::{
    Parser as _,
    combinator::{alt, eof, opt, peek, preceded},
    error::{ContextError, ErrMode},
    token::{any, one_of, take_while},
};

use liuyao_core::{
    Span,
    glyph::{MOVING_MARKERS, ShiYing, Stroke},
};

type Input<'src> = &'src str;
pub(crate) type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Collapse every whitespace run (including full-width space and tab) into a
/// single ASCII space and trim both ends.
///
/// Normalizing already-normalized text returns it unchanged.
///
/// ```
/// # use liuyao_parser::normalize;
/// assert_eq!(normalize("蛇\t官申 父亥 - -Χ \u{3000} 财戌 —"), "蛇 官申 父亥 - -Χ 财戌 —");
/// ```
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A non-blank source line with trailing whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceLine<'src> {
    pub text: &'src str,
    pub span: Span,
}

/// Characters that end a line: LF, CR, VT, FF, the file/group/record
/// separators, NEL, and the Unicode line and paragraph separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Split `source` into its non-blank lines, keeping order and byte spans.
///
/// Any of [`LINE_BREAKS`] ends a line, and `\r\n` counts as a single break.
/// Trailing whitespace is dropped from each line.
pub(crate) fn source_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }

        push_line(&mut lines, source, start..offset);
        start = offset + c.len_utf8();

        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    push_line(&mut lines, source, start..source.len());

    lines
}

fn push_line<'src>(lines: &mut Vec<SourceLine<'src>>, source: &'src str, range: Range<usize>) {
    let text = source[range.clone()].trim_end();
    if !text.trim_start().is_empty() {
        lines.push(SourceLine {
            text,
            span: Span::new(range.start..range.start + text.len()),
        });
    }
}

/// Parse zero or more whitespace characters.
pub(crate) fn whitespace0<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(0.., |c: char| c.is_whitespace()).parse_next(input)
}

/// Parse a stroke token: `-`, optional whitespace, `-` for a broken line, or
/// `—` for a solid one, followed by an optional moving-line marker.
fn stroke_token(input: &mut Input<'_>) -> IResult<Stroke> {
    let stroke = alt((
        ('-', whitespace0, '-').value(Stroke::Yin),
        '—'.value(Stroke::Yang),
    ))
    .parse_next(input)?;

    (whitespace0, opt(one_of(MOVING_MARKERS)))
        .void()
        .parse_next(input)?;

    Ok(stroke)
}

/// Parse a standalone `世` / `应` token, allowing leading whitespace.
///
/// The marker must be followed by whitespace or the end of input, so a
/// relative token that merely starts with the glyph is not mistaken for it.
fn shi_ying_token(input: &mut Input<'_>) -> IResult<ShiYing> {
    let marker = preceded(whitespace0, any.verify_map(ShiYing::from_glyph)).parse_next(input)?;

    peek(alt((take_while(1.., |c: char| c.is_whitespace()), eof)))
        .void()
        .parse_next(input)?;

    Ok(marker)
}

/// A stroke token located by [`Cursor::next_stroke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StrokeMatch<'src> {
    /// Text skipped between the cursor position and the stroke.
    pub before: &'src str,
    pub stroke: Stroke,
}

/// A forward-only position in a normalized line tail.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    /// Text not yet consumed.
    pub fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Scan forward for the leftmost stroke token and move past it.
    ///
    /// Returns `None` and leaves the cursor in place if no stroke remains.
    pub fn next_stroke(&mut self) -> Option<StrokeMatch<'src>> {
        let rest = self.rest();

        for (offset, c) in rest.char_indices() {
            if c != '-' && c != '—' {
                continue;
            }

            let mut input = &rest[offset..];
            if let Ok(stroke) = stroke_token(&mut input) {
                self.pos += rest.len() - input.len();
                return Some(StrokeMatch {
                    before: &rest[..offset],
                    stroke,
                });
            }
        }

        None
    }

    /// Consume a `世` / `应` token if it is the next token.
    pub fn take_shi_ying(&mut self) -> Option<ShiYing> {
        let mut input = self.rest();
        let marker = shi_ying_token(&mut input).ok()?;
        self.pos = self.src.len() - input.len();
        Some(marker)
    }
}

/// The first whitespace-delimited token of `segment`, unless it is a bare
/// stroke glyph.
pub(crate) fn relative_token(segment: &str) -> Option<&str> {
    segment
        .split_whitespace()
        .next()
        .filter(|token| !matches!(*token, "—" | "-" | "--"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  a \t b\u{3000}\u{3000}c  "), "a b c");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\u{3000}\t "), "");
    }

    #[test]
    fn test_source_lines_skip_blank_and_keep_spans() {
        let source = "时间：x\r\n\n   \n  虎 财戌  \nend";
        let lines = source_lines(source);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "时间：x");
        assert_eq!(lines[1].text, "  虎 财戌");
        assert_eq!(lines[2].text, "end");

        for line in &lines {
            assert_eq!(&source[line.span.start()..line.span.end()], line.text);
        }
    }

    #[test]
    fn test_source_lines_every_line_break() {
        let source = "a\rb\r\nc\u{0b}d\u{0c}e\u{1c}f\u{1d}g\u{1e}h\u{85}i\u{2028}j\u{2029}k\n";
        let lines = source_lines(source);

        let texts: Vec<&str> = lines.iter().map(|line| line.text).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]);

        for line in &lines {
            assert_eq!(&source[line.span.start()..line.span.end()], line.text);
        }
    }

    #[test]
    fn test_source_lines_crlf_is_one_break() {
        let lines = source_lines("a\r\n\r\nb\r\rc");

        let texts: Vec<&str> = lines.iter().map(|line| line.text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(lines[1].span, Span::new(5..6));
    }

    #[test]
    fn test_stroke_token_variants() {
        for (text, expected) in [
            ("- -", Stroke::Yin),
            ("--", Stroke::Yin),
            ("- -Χ", Stroke::Yin),
            ("—", Stroke::Yang),
            ("— ○", Stroke::Yang),
            ("—X", Stroke::Yang),
        ] {
            let mut input = text;
            assert_eq!(stroke_token(&mut input).ok(), Some(expected), "input: {text}");
            assert!(input.is_empty(), "unconsumed input for {text}: {input:?}");
        }
    }

    #[test]
    fn test_stroke_token_rejects_single_dash() {
        let mut input = "- 财";
        assert!(stroke_token(&mut input).is_err());
    }

    #[test]
    fn test_next_stroke_is_leftmost() {
        let mut cursor = Cursor::new("财戌 — - -");
        let first = cursor.next_stroke().unwrap();

        assert_eq!(first.stroke, Stroke::Yang);
        assert_eq!(first.before, "财戌 ");

        let second = cursor.next_stroke().unwrap();
        assert_eq!(second.stroke, Stroke::Yin);
        assert_eq!(second.before, "");
        assert!(cursor.next_stroke().is_none());
    }

    #[test]
    fn test_next_stroke_consumes_marker() {
        let mut cursor = Cursor::new("- -Χ 财戌 —");
        let first = cursor.next_stroke().unwrap();

        assert_eq!(first.stroke, Stroke::Yin);
        assert_eq!(cursor.rest(), " 财戌 —");
    }

    #[test]
    fn test_next_stroke_none_leaves_cursor() {
        let mut cursor = Cursor::new("世 官申");
        assert!(cursor.next_stroke().is_none());
        assert_eq!(cursor.rest(), "世 官申");
    }

    #[test]
    fn test_take_shi_ying() {
        let mut cursor = Cursor::new(" 世 官申 - -");
        assert_eq!(cursor.take_shi_ying(), Some(ShiYing::Shi));
        assert_eq!(cursor.rest(), " 官申 - -");

        let mut cursor = Cursor::new("应");
        assert_eq!(cursor.take_shi_ying(), Some(ShiYing::Ying));
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_take_shi_ying_requires_standalone_token() {
        let mut cursor = Cursor::new("世爻 官申");
        assert_eq!(cursor.take_shi_ying(), None);
        assert_eq!(cursor.rest(), "世爻 官申");

        let mut cursor = Cursor::new("官申 世");
        assert_eq!(cursor.take_shi_ying(), None);
    }

    #[test]
    fn test_relative_token() {
        assert_eq!(relative_token(" 财戌 "), Some("财戌"));
        assert_eq!(relative_token("父子 - -"), Some("父子"));
        assert_eq!(relative_token("—"), None);
        assert_eq!(relative_token("-- x"), None);
        assert_eq!(relative_token(""), None);
    }
}
