//! 跨页（Spread）与单词条目类型定义

use serde::{Deserialize, Serialize};

/// 发音次数达到此值时进入第一档溢出样式
pub const OVERFLOW_TIER_FOUR: usize = 4;
/// 发音次数达到此值时进入第二档溢出样式
pub const OVERFLOW_TIER_FIVE: usize = 5;

/// 单个发音练习条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// 单词本身（必填，非空）
    #[serde(alias = "word")]
    pub headword: String,

    /// 第一次发音（可为空字符串）
    #[serde(default, alias = "first", alias = "first_attempt")]
    pub first_attempt: String,

    /// 之后“发展”出的发音，按顺序
    #[serde(
        default,
        alias = "developed",
        alias = "later",
        alias = "later_attempts"
    )]
    pub later_attempts: Vec<String>,
}

impl WordEntry {
    /// 创建条目
    #[must_use]
    pub fn new(
        headword: impl Into<String>,
        first_attempt: impl Into<String>,
        later_attempts: Vec<String>,
    ) -> Self {
        Self {
            headword: headword.into(),
            first_attempt: first_attempt.into(),
            later_attempts,
        }
    }

    /// 发音总数：第一次发音 + 之后的发音
    pub fn pronunciation_count(&self) -> usize {
        1 + self.later_attempts.len()
    }

    /// 溢出样式档位
    pub fn overflow_tier(&self) -> OverflowTier {
        OverflowTier::from_count(self.pronunciation_count())
    }
}

/// 溢出样式档位（按发音总数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverflowTier {
    /// 三次及以下
    #[default]
    Normal,
    /// 四次
    Four,
    /// 五次及以上
    Five,
}

impl OverflowTier {
    /// 由发音总数计算档位
    pub fn from_count(count: usize) -> Self {
        if count >= OVERFLOW_TIER_FIVE {
            Self::Five
        } else if count >= OVERFLOW_TIER_FOUR {
            Self::Four
        } else {
            Self::Normal
        }
    }

    /// 样式类名（标记宿主使用）
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Four => Some("overflow-4"),
            Self::Five => Some("overflow-5"),
        }
    }
}

/// 封面跨页
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverSpread {
    pub title: String,
    /// 序言文本，保留原有换行
    pub prologue_text: String,
}

/// 内容跨页
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSpread {
    pub title: String,
    pub memo: Option<String>,
    pub photo_caption: Option<String>,
    pub words: Vec<WordEntry>,
}

impl ContentSpread {
    /// 创建空的内容跨页
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// 跨页：书本的一个翻页单位（左右两页）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Spread {
    Cover(CoverSpread),
    Content(ContentSpread),
}

impl Spread {
    /// 创建封面跨页
    #[must_use]
    pub fn cover(title: impl Into<String>, prologue_text: impl Into<String>) -> Self {
        Self::Cover(CoverSpread {
            title: title.into(),
            prologue_text: prologue_text.into(),
        })
    }

    /// 是否为封面
    pub fn is_cover(&self) -> bool {
        matches!(self, Self::Cover(_))
    }

    /// 跨页标题
    pub fn title(&self) -> &str {
        match self {
            Self::Cover(cover) => &cover.title,
            Self::Content(content) => &content.title,
        }
    }

    /// 单词数量（封面为 0）
    pub fn word_count(&self) -> usize {
        match self {
            Self::Cover(_) => 0,
            Self::Content(content) => content.words.len(),
        }
    }
}

/// 列表首位是否为封面（决定页码与编号的偏移）
pub fn has_leading_cover(spreads: &[Spread]) -> bool {
    spreads.first().is_some_and(Spread::is_cover)
}
