//! The chart record produced by the parser.
//!
//! Field names serialize to the fixed Chinese keys that downstream prompt
//! templates reference literally. Absent values serialize as `null`.

use serde::{Deserialize, Serialize};

use crate::{
    error::Diagnostic,
    glyph::{self, ShiYing, Stroke, YinYang},
    span::Span,
};

/// A parsed casting sheet: metadata, lines, and accumulated errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    #[serde(rename = "基础信息", default)]
    pub base_info: BaseInfo,
    #[serde(rename = "爻象数据", default)]
    pub yao_lines: Vec<YaoLine>,
    #[serde(default)]
    pub errors: Vec<Diagnostic>,
}

impl ChartRecord {
    /// A record holding nothing but the given errors.
    pub fn from_errors(errors: Vec<Diagnostic>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }
}

/// Chart metadata. Every field is a best-effort extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseInfo {
    #[serde(rename = "占问事由", default)]
    pub question: Option<String>,
    #[serde(rename = "起卦时间", default)]
    pub cast_time: Option<String>,
    #[serde(rename = "四柱", default)]
    pub four_pillars: Option<String>,
    #[serde(rename = "空亡_raw", default)]
    pub void_branches: Option<String>,
    #[serde(rename = "主卦", default)]
    pub primary_hexagram: Option<String>,
    #[serde(rename = "变卦", default)]
    pub transformed_hexagram: Option<String>,
    #[serde(rename = "所属宫位", default)]
    pub house: Option<String>,
}

impl BaseInfo {
    /// Returns `true` if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One hexagram line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YaoLine {
    pub index: u8,
    pub pos: String,
    #[serde(rename = "阴阳", default)]
    pub yin_yang: YinYang,
    #[serde(rename = "六神", default)]
    pub six_god: Option<String>,
    #[serde(rename = "伏神", default)]
    pub fu_shen: Option<String>,
    #[serde(rename = "本卦爻", default)]
    pub ben_yao: Option<String>,
    #[serde(rename = "本卦爻阴阳", default)]
    pub ben_hua: Option<Stroke>,
    #[serde(rename = "世应", default)]
    pub shi_ying: Option<ShiYing>,
    #[serde(rename = "动爻", default)]
    pub moving: bool,
    #[serde(rename = "变卦爻", default)]
    pub bian_yao: Option<String>,
    #[serde(rename = "变卦爻阴阳", default)]
    pub bian_hua: Option<Stroke>,
    #[serde(default)]
    pub raw: String,
    /// Location of `raw` in the parsed text.
    #[serde(skip)]
    pub span: Option<Span>,
}

impl YaoLine {
    /// A line with only its position, moving flag, and source text filled in.
    ///
    /// Every parse branch starts here and fills in what it could recover.
    pub fn new(index: u8, raw: impl Into<String>, moving: bool) -> Self {
        Self {
            index,
            pos: glyph::position_label(index)
                .map(str::to_string)
                .unwrap_or_else(|| index.to_string()),
            yin_yang: YinYang::Unknown,
            six_god: None,
            fu_shen: None,
            ben_yao: None,
            ben_hua: None,
            shi_ying: None,
            moving,
            bian_yao: None,
            bian_hua: None,
            raw: raw.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Set the primary stroke; the overall polarity follows it.
    pub fn set_ben_hua(&mut self, stroke: Option<Stroke>) {
        self.ben_hua = stroke;
        self.yin_yang = YinYang::from(stroke);
    }

    /// Returns `true` if both transformed fields are present and non-empty.
    pub fn has_transformation(&self) -> bool {
        self.bian_yao.as_deref().is_some_and(|yao| !yao.is_empty()) && self.bian_hua.is_some()
    }
}
