//! Glyph vocabularies used by Liuyao casting sheets.
//!
//! Every table here is a fixed `match`, so lookups need no runtime
//! initialization and can never be mutated.
//!
//! - [`SixGod`] - the six spirits, accepted in one- or two-glyph form
//! - [`Kin`] - the relative categories, keyed by their short glyph
//! - [`Branch`] and [`Element`] - earthly branches and their elements
//! - [`Stroke`], [`YinYang`], [`ShiYing`] - line-level markers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyphs that flag a moving line wherever they appear on a line.
///
/// The second entry is the Greek capital chi, which casting apps emit in
/// place of a Latin `X`.
pub const MOVING_MARKERS: [char; 5] = ['X', '\u{03A7}', '×', 'O', '○'];

/// Returns `true` if `text` contains any moving-line marker.
pub fn has_moving_marker(text: &str) -> bool {
    text.contains(MOVING_MARKERS)
}

/// Display label for a line position, counted from the bottom.
///
/// Indices outside `1..=6` have no label and yield `None`.
pub fn position_label(index: u8) -> Option<&'static str> {
    match index {
        6 => Some("上六"),
        5 => Some("五爻"),
        4 => Some("四爻"),
        3 => Some("三爻"),
        2 => Some("二爻"),
        1 => Some("初爻"),
        _ => None,
    }
}

/// Error returned when a token is not part of a glyph vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} glyph `{token}`")]
pub struct GlyphError {
    kind: &'static str,
    token: String,
}

impl GlyphError {
    fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }

    /// The token that failed to match.
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// One of the six spirits (六神) assigned to hexagram lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SixGod {
    QingLong,
    ZhuQue,
    GouChen,
    TengShe,
    BaiHu,
    XuanWu,
}

impl SixGod {
    /// Canonical two-glyph name.
    pub fn name(&self) -> &'static str {
        match self {
            SixGod::QingLong => "青龙",
            SixGod::ZhuQue => "朱雀",
            SixGod::GouChen => "勾陈",
            SixGod::TengShe => "螣蛇",
            SixGod::BaiHu => "白虎",
            SixGod::XuanWu => "玄武",
        }
    }
}

impl FromStr for SixGod {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "龙" | "青龙" => Ok(SixGod::QingLong),
            "雀" | "朱雀" => Ok(SixGod::ZhuQue),
            "勾" | "勾陈" => Ok(SixGod::GouChen),
            "蛇" | "螣蛇" => Ok(SixGod::TengShe),
            "虎" | "白虎" => Ok(SixGod::BaiHu),
            "玄" | "玄武" => Ok(SixGod::XuanWu),
            _ => Err(GlyphError::new("six-god", s)),
        }
    }
}

impl fmt::Display for SixGod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative category (六亲) of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kin {
    Wealth,
    Officer,
    Offspring,
    Sibling,
    Parent,
}

impl Kin {
    /// Look up a category by its short glyph, e.g. `财`.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '财' => Some(Kin::Wealth),
            '官' => Some(Kin::Officer),
            '孙' => Some(Kin::Offspring),
            '兄' => Some(Kin::Sibling),
            '父' => Some(Kin::Parent),
            _ => None,
        }
    }

    /// Full two-glyph name, e.g. `妻财`.
    pub fn name(&self) -> &'static str {
        match self {
            Kin::Wealth => "妻财",
            Kin::Officer => "官鬼",
            Kin::Offspring => "子孙",
            Kin::Sibling => "兄弟",
            Kin::Parent => "父母",
        }
    }
}

/// Five-phase element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Water,
    Wood,
    Fire,
    Earth,
    Metal,
}

impl Element {
    pub fn glyph(&self) -> char {
        match self {
            Element::Water => '水',
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
        }
    }
}

/// One of the twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '子' => Some(Branch::Zi),
            '丑' => Some(Branch::Chou),
            '寅' => Some(Branch::Yin),
            '卯' => Some(Branch::Mao),
            '辰' => Some(Branch::Chen),
            '巳' => Some(Branch::Si),
            '午' => Some(Branch::Wu),
            '未' => Some(Branch::Wei),
            '申' => Some(Branch::Shen),
            '酉' => Some(Branch::You),
            '戌' => Some(Branch::Xu),
            '亥' => Some(Branch::Hai),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Branch::Zi => '子',
            Branch::Chou => '丑',
            Branch::Yin => '寅',
            Branch::Mao => '卯',
            Branch::Chen => '辰',
            Branch::Si => '巳',
            Branch::Wu => '午',
            Branch::Wei => '未',
            Branch::Shen => '申',
            Branch::You => '酉',
            Branch::Xu => '戌',
            Branch::Hai => '亥',
        }
    }

    /// The element this branch belongs to.
    pub fn element(&self) -> Element {
        match self {
            Branch::Zi | Branch::Hai => Element::Water,
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
        }
    }
}

/// Expand a short relative token such as `财戌` into `妻财戌土`.
///
/// Only the first two glyphs are inspected. Tokens that are shorter, or whose
/// glyphs are not a known category followed by a known branch, are returned
/// unchanged.
pub fn expand_relative(token: &str) -> String {
    let mut chars = token.chars();
    let (Some(kin), Some(branch)) = (chars.next(), chars.next()) else {
        return token.to_string();
    };

    match (Kin::from_glyph(kin), Branch::from_glyph(branch)) {
        (Some(kin), Some(branch)) => {
            format!("{}{}{}", kin.name(), branch.glyph(), branch.element().glyph())
        }
        _ => token.to_string(),
    }
}

/// Stroke drawn for a line: solid (阳) or broken (阴).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stroke {
    #[serde(rename = "阳")]
    Yang,
    #[serde(rename = "阴")]
    Yin,
}

impl Stroke {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stroke::Yang => "阳",
            Stroke::Yin => "阴",
        }
    }
}

/// Overall line polarity as reported in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YinYang {
    #[serde(rename = "阳爻")]
    Yang,
    #[serde(rename = "阴爻")]
    Yin,
    #[default]
    #[serde(rename = "未知")]
    Unknown,
}

impl From<Option<Stroke>> for YinYang {
    fn from(stroke: Option<Stroke>) -> Self {
        match stroke {
            Some(Stroke::Yang) => YinYang::Yang,
            Some(Stroke::Yin) => YinYang::Yin,
            None => YinYang::Unknown,
        }
    }
}

/// Self (世) or correspondence (应) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiYing {
    #[serde(rename = "世")]
    Shi,
    #[serde(rename = "应")]
    Ying,
}

impl ShiYing {
    /// The marker written as `glyph`, if it is one.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '世' => Some(ShiYing::Shi),
            '应' => Some(ShiYing::Ying),
            _ => None,
        }
    }
}
