//! 测试辅助模块
//!
//! 提供记录型 `Surfaces` mock 和便捷的跨页工厂方法。

use std::collections::HashSet;

use crate::traits::{SurfaceId, SurfaceUpdate, Surfaces};
use crate::types::{Boundary, ContentSpread, GridRow, Spread, WordEntry};

// ===== RecordingSurfaces =====

/// 一次写入的快照（拥有数据，便于断言）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedWrite {
    Visible(bool),
    Enabled(bool),
    Text(String),
    Grid(Vec<GridRow>),
    Boundary(Boundary),
    Clear,
}

impl From<SurfaceUpdate<'_>> for RecordedWrite {
    fn from(update: SurfaceUpdate<'_>) -> Self {
        match update {
            SurfaceUpdate::Visible(v) => Self::Visible(v),
            SurfaceUpdate::Enabled(v) => Self::Enabled(v),
            SurfaceUpdate::Text(text) => Self::Text(text.to_string()),
            SurfaceUpdate::Grid(rows) => Self::Grid(rows.to_vec()),
            SurfaceUpdate::Boundary(b) => Self::Boundary(b),
            SurfaceUpdate::Clear => Self::Clear,
        }
    }
}

/// 按顺序记录全部写入
pub struct RecordingSurfaces {
    present: HashSet<SurfaceId>,
    writes: Vec<(SurfaceId, RecordedWrite)>,
    history: Vec<String>,
}

impl RecordingSurfaces {
    /// 提供全部表面
    pub fn all() -> Self {
        Self::only(SurfaceId::ALL)
    }

    /// 只提供指定表面
    pub fn only(ids: impl IntoIterator<Item = SurfaceId>) -> Self {
        Self {
            present: ids.into_iter().collect(),
            writes: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn writes(&self) -> &[(SurfaceId, RecordedWrite)] {
        &self.writes
    }

    /// 某表面最近一次写入
    pub fn last(&self, id: SurfaceId) -> Option<&RecordedWrite> {
        self.writes
            .iter()
            .rev()
            .find(|(written, _)| *written == id)
            .map(|(_, write)| write)
    }

    /// 某表面被写入的次数
    pub fn count(&self, id: SurfaceId) -> usize {
        self.writes.iter().filter(|(written, _)| *written == id).count()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Surfaces for RecordingSurfaces {
    fn has(&self, id: SurfaceId) -> bool {
        self.present.contains(&id)
    }

    fn apply(&mut self, id: SurfaceId, update: SurfaceUpdate<'_>) {
        self.writes.push((id, update.into()));
    }

    fn push_history(&mut self, entry: &str) {
        self.history.push(entry.to_string());
    }
}

// ===== 工厂方法 =====

/// 带 `count` 个单词的内容跨页
pub fn content_spread(title: &str, count: usize) -> Spread {
    let mut spread = ContentSpread::new(title);
    spread.words = (1..=count)
        .map(|n| WordEntry::new(format!("word{n}"), format!("발음{n}"), vec![]))
        .collect();
    Spread::Content(spread)
}

/// 封面 + 两个内容跨页
pub fn sample_spreads() -> Vec<Spread> {
    let mut first = ContentSpread::new("Spread 1");
    first.memo = Some("연습".to_string());
    first.words = vec![
        WordEntry::new("cat", "캣", vec![]),
        WordEntry::new("dog", "더그", vec!["덕".to_string()]),
    ];

    vec![
        Spread::cover("표지", "첫 줄\n둘째 줄"),
        Spread::Content(first),
        content_spread("Spread 2", 3),
    ]
}
