//! 结构化数据模式：记录序列 → 跨页

use serde_json::Value;

use crate::types::{ContentSpread, Locale, Spread, SpreadRecord, WordEntry};

/// 把记录序列转成跨页列表
///
/// 非序列输入返回空列表并记录警告；非对象的条目被跳过，
/// 对象内类型不符的字段按缺省处理。
pub(super) fn extract_records(value: &Value, locale: Locale) -> Vec<Spread> {
    let Some(items) = value.as_array() else {
        log::warn!("Spread data is not a sequence; nothing to render");
        return Vec::new();
    };

    let mut spreads = Vec::with_capacity(items.len());
    let mut content_ordinal = 0usize;

    for (position, item) in items.iter().enumerate() {
        let Some(record) = SpreadRecord::from_value(item) else {
            log::warn!("Skipping spread record #{position}: not an object");
            continue;
        };

        if record.is_cover() {
            // 封面只能出现在首位
            if spreads.is_empty() {
                spreads.push(cover_from_record(record, locale));
            } else {
                log::warn!("Ignoring cover record #{position}: only a leading cover is allowed");
            }
            continue;
        }

        content_ordinal += 1;
        spreads.push(Spread::Content(content_from_record(record, content_ordinal)));
    }

    spreads
}

fn cover_from_record(record: SpreadRecord, locale: Locale) -> Spread {
    let title = non_blank(record.title)
        .unwrap_or_else(|| locale.labels().cover_title.to_string());
    Spread::cover(title, record.prologue.unwrap_or_default())
}

fn content_from_record(record: SpreadRecord, ordinal: usize) -> ContentSpread {
    // 内容跨页标题只取决于 id；记录里的 title 仅对封面有效
    let title = match &record.id {
        Some(id) => format!("Spread {id}"),
        None => format!("Spread {ordinal}"),
    };

    let words = record
        .words
        .into_iter()
        .filter(|entry| !entry.headword.trim().is_empty())
        .map(|entry| {
            WordEntry::new(
                entry.headword.trim(),
                entry.first_attempt.trim(),
                entry
                    .later_attempts
                    .iter()
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        })
        .collect();

    ContentSpread {
        title,
        memo: non_blank(record.memo),
        photo_caption: non_blank(record.photo),
        words,
    }
}

/// 去掉首尾空白，空串视为缺省
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
