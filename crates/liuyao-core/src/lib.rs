//! Liuyao Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Liuyao chart
//! parser and its front ends. It includes:
//!
//! - **Records**: The parsed chart ([`record::ChartRecord`]) and its lines ([`record::YaoLine`])
//! - **Glyphs**: Fixed lookup tables for spirits, relatives, branches and strokes ([`glyph`] module)
//! - **Errors**: Coded diagnostics carried in a record's error list ([`error`] module)
//! - **Spans**: Byte ranges into parsed text ([`Span`])

pub mod error;
pub mod glyph;
pub mod record;

mod span;

pub use record::{BaseInfo, ChartRecord, YaoLine};
pub use span::Span;
