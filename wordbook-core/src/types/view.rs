//! 渲染结果（呈现模型）
//!
//! 渲染器先把当前跨页计算成 `SpreadView`，再逐项写入宿主表面。

use serde::Serialize;

use super::OverflowTier;

/// 左右页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 左右两侧
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// 网格中的一行单词
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRow {
    /// 从 1 开始的全书编号
    pub number: usize,
    pub headword: String,
    pub first_attempt: String,
    pub later_attempts: Vec<String>,
    pub tier: OverflowTier,
}

/// 网格行：真实单词或占位空行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "camelCase")]
pub enum GridRow {
    Word(WordRow),
    Empty,
}

impl GridRow {
    /// 是否为占位空行
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// 文本位：有内容或显示占位文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "camelCase")]
pub enum SlotText {
    Filled(String),
    Placeholder(&'static str),
}

impl SlotText {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Filled(text) => text,
            Self::Placeholder(text) => text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// 左右页码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageNumbers {
    pub left: usize,
    pub right: usize,
}

impl PageNumbers {
    pub fn get(self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// 内容跨页的呈现
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentView {
    pub title: String,
    /// 第一行的编号
    pub start_number: usize,
    /// 恰好 `words_per_page` 行（单词更多时全部保留，无空行）
    pub rows: Vec<GridRow>,
    pub memo: SlotText,
    pub photo: SlotText,
    pub pages: PageNumbers,
}

/// 当前跨页的呈现
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layer", rename_all = "camelCase")]
pub enum SpreadView {
    Cover { title: String, prologue: String },
    Content(ContentView),
}

impl SpreadView {
    pub fn is_cover(&self) -> bool {
        matches!(self, Self::Cover { .. })
    }
}

/// 边界信息：决定上一页/下一页控件与首尾页提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Boundary {
    pub has_previous: bool,
    pub has_next: bool,
}

impl Boundary {
    /// 由位置与总数计算
    pub fn at(index: usize, total: usize) -> Self {
        Self {
            has_previous: total > 0 && index > 0,
            has_next: index + 1 < total,
        }
    }

    /// 位于第一页
    pub fn is_first(self) -> bool {
        !self.has_previous
    }

    /// 位于最后一页
    pub fn is_last(self) -> bool {
        !self.has_next
    }
}
