//! Diagnostics attached to chart records.
//!
//! A [`Diagnostic`] is one itemized problem found while reading a chart. It
//! always carries an [`ErrorCode`] and a message, and may point at the source
//! line it concerns through a [`Label`].
//!
//! Only the code and message are part of the serialized record; labels and
//! help text exist for rich terminal rendering.
//!
//! # Example
//!
//! ```
//! # use liuyao_core::error::{Diagnostic, ErrorCode};
//! # use liuyao_core::Span;
//!
//! let diag = Diagnostic::new(ErrorCode::E201, "第 4 爻为动爻，但缺少变卦爻/变卦爻阴阳。")
//!     .with_label(Span::new(40..62), "moving line")
//!     .with_help("add the transformed relative after the stroke");
//!
//! assert_eq!(diag.to_string(), "error[E201]: 第 4 爻为动爻，但缺少变卦爻/变卦爻阴阳。");
//! ```

mod diagnostic;
mod error_code;
mod label;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
