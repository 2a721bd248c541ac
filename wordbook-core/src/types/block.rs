//! 已分类的内容块
//!
//! 宿主（Markdown 渲染结果、JSON 等）先把文档切成有序的内容块，
//! 提取器只遍历这些块，从不直接接触标记文本。

use serde::{Deserialize, Serialize};

/// 内容块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    /// 标题（开始一个新的内容跨页）
    Heading {
        #[serde(default = "default_heading_level")]
        level: u8,
        text: String,
    },
    /// 段落（可能携带 `[메모: …]` / `[사진: …]` 标签或序言文本）
    Paragraph { text: String },
    /// 表格，每行是若干单元格文本
    Table { rows: Vec<Vec<String>> },
    /// 其他块，提取时忽略
    #[serde(other)]
    Other,
}

fn default_heading_level() -> u8 {
    2
}

impl ContentBlock {
    /// 创建标题块
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// 创建段落块
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// 由字符串切片创建表格块
    #[must_use]
    pub fn table<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self::Table {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}
