//! 结构化数据模式的记录类型

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::WordEntry;

/// 记录 ID（非负整数或字符串）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    /// 从 JSON 值读取；小数、负数、空串等视为缺省
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(Self::Number),
            Value::String(s) if !s.trim().is_empty() => Some(Self::Text(s.trim().to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// 一条跨页记录（嵌入的 JSON 数据）
///
/// 逐字段宽松读取：类型不符的字段按缺省处理，
/// 格式错误的单词条目只丢弃该条目本身。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadRecord {
    /// 记录类型，`"cover"` 表示封面，其余一律视为内容
    pub record_type: Option<String>,

    pub id: Option<RecordId>,

    /// 封面标题
    pub title: Option<String>,

    /// 封面序言
    pub prologue: Option<String>,

    pub memo: Option<String>,

    pub photo: Option<String>,

    pub words: Vec<WordEntry>,
}

impl SpreadRecord {
    /// 从 JSON 值读取记录；非对象返回 `None`
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let text = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_str))
                .map(str::to_string)
        };

        Some(Self {
            record_type: text(&["type", "kind"]),
            id: fields.get("id").and_then(RecordId::from_value),
            title: text(&["title"]),
            prologue: text(&["prologue", "prologueText"]),
            memo: text(&["memo"]),
            photo: text(&["photo", "photoCaption"]),
            words: fields
                .get("words")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .map(parse_words)
                .unwrap_or_default(),
        })
    }

    /// 是否为封面记录
    pub fn is_cover(&self) -> bool {
        self.record_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("cover"))
    }
}

fn parse_words(items: &[Value]) -> Vec<WordEntry> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match WordEntry::deserialize(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping malformed word entry #{index}: {e}");
                None
            }
        })
        .collect()
}
