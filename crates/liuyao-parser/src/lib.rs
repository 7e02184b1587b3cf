//! # Liuyao Parser
//!
//! Parser and structural validator for Liuyao casting sheets: the loosely
//! aligned, whitespace-separated text that divination apps export for a
//! hexagram cast.
//!
//! ## Usage
//!
//! ```
//! let source = "本卦：地风升/震宫·5\n虎 财戌 官酉 - - 父子 - -";
//!
//! let record = liuyao_parser::parse(source);
//! assert_eq!(record.base_info.house.as_deref(), Some("震宫"));
//!
//! let (ok, errors) = liuyao_parser::validate(&record);
//! assert!(!ok);
//! println!("{}", liuyao_parser::format_errors(&errors));
//! ```

pub mod error;

mod base_info;
mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod report;
mod validate;

pub use liuyao_core::Span;
pub use lexer::normalize;
pub use report::{UNKNOWN_ERROR, format_errors};
pub use validate::{check, validate};

use log::{debug, warn};

use liuyao_core::{
    ChartRecord,
    error::{Diagnostic, ErrorCode},
};

/// Inputs longer than this many characters are rejected unparsed.
pub const MAX_INPUT_CHARS: usize = 12_000;

/// Parse casting-sheet text into a chart record.
///
/// Parsing never fails: malformed pieces leave fields empty, and the record
/// is checked for completeness separately by [`validate`]. The pipeline is:
///
/// 1. **Guard** - reject input over [`MAX_INPUT_CHARS`] with a single `E001`
/// 2. **Split** - keep non-blank, right-trimmed lines in order
/// 3. **Base info** - extract labelled header fields and the pillar/void lines
/// 4. **Lines** - recognize up to six hexagram lines and decode their columns
///
/// # Example
///
/// ```
/// let record = liuyao_parser::parse(&"x".repeat(12_001));
///
/// assert!(record.yao_lines.is_empty());
/// assert_eq!(record.errors[0].code().as_str(), "E001");
/// ```
pub fn parse(source: &str) -> ChartRecord {
    let chars = source.chars().count();
    if chars > MAX_INPUT_CHARS {
        warn!(chars, limit = MAX_INPUT_CHARS; "Input exceeds length limit");
        return ChartRecord::from_errors(vec![
            Diagnostic::new(ErrorCode::E001, "输入文本过长，请控制在 12000 字以内。")
                .with_help("只发送排盘文本本身，去掉多余的说明文字"),
        ]);
    }

    // Step 1: Split into lines
    let lines = lexer::source_lines(source);

    // Step 2: Extract base info
    let base_info = base_info::parse_base_info(&lines);

    // Step 3: Parse hexagram lines
    let yao_lines = parser::parse_yao_lines(&lines);

    debug!(lines = lines.len(), yao_lines = yao_lines.len(); "Parsed chart text");

    ChartRecord {
        base_info,
        yao_lines,
        errors: Vec::new(),
    }
}
