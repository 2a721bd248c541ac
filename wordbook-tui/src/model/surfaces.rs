//! 终端呈现表面
//!
//! 核心库的渲染器通过 `Surfaces` trait 写入这里，View 层只读取这些状态。
//! 相当于网页中的各个 DOM 节点：左右页的封面层/内容层、单词网格、
//! 备忘、照片说明、页码、上一页/下一页控件。

use wordbook_core::traits::{SurfaceId, SurfaceUpdate, Surfaces};
use wordbook_core::types::{Boundary, GridRow, Side};

/// 终端界面持有的全部表面状态
#[derive(Debug, Clone, Default)]
pub struct TerminalSurfaces {
    /// 封面层是否显示（左、右）
    pub cover_visible: [bool; 2],
    /// 内容层是否显示（左、右）
    pub content_visible: [bool; 2],
    /// 序言（纯文本，保留换行）
    pub prologue: String,
    /// 单词网格
    pub grid: Vec<GridRow>,
    pub memo: String,
    pub photo: String,
    /// 页码（左、右）；封面时为空
    pub page_numbers: [String; 2],
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// 首页/末页提示
    pub boundary: Boundary,
    pub book_visible: bool,
    /// 进入书本视图时压入的历史记录
    pub history: Vec<String>,
}

const fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl TerminalSurfaces {
    pub fn is_cover_visible(&self, side: Side) -> bool {
        self.cover_visible[slot(side)]
    }

    pub fn is_content_visible(&self, side: Side) -> bool {
        self.content_visible[slot(side)]
    }

    pub fn page_number(&self, side: Side) -> &str {
        &self.page_numbers[slot(side)]
    }
}

impl Surfaces for TerminalSurfaces {
    fn has(&self, _id: SurfaceId) -> bool {
        true
    }

    fn apply(&mut self, id: SurfaceId, update: SurfaceUpdate<'_>) {
        match (id, update) {
            (SurfaceId::CoverLayer(side), SurfaceUpdate::Visible(v)) => {
                self.cover_visible[slot(side)] = v;
            }
            (SurfaceId::ContentLayer(side), SurfaceUpdate::Visible(v)) => {
                self.content_visible[slot(side)] = v;
            }
            (SurfaceId::Prologue, SurfaceUpdate::Text(text)) => self.prologue = text.to_string(),
            (SurfaceId::WordList, SurfaceUpdate::Grid(rows)) => self.grid = rows.to_vec(),
            (SurfaceId::Memo, SurfaceUpdate::Text(text)) => self.memo = text.to_string(),
            (SurfaceId::Photo, SurfaceUpdate::Text(text)) => self.photo = text.to_string(),
            (SurfaceId::PageNumber(side), SurfaceUpdate::Text(text)) => {
                self.page_numbers[slot(side)] = text.to_string();
            }
            (SurfaceId::PageNumber(side), SurfaceUpdate::Clear) => {
                self.page_numbers[slot(side)].clear();
            }
            (SurfaceId::PrevControl, SurfaceUpdate::Enabled(v)) => self.prev_enabled = v,
            (SurfaceId::NextControl, SurfaceUpdate::Enabled(v)) => self.next_enabled = v,
            (SurfaceId::Book, SurfaceUpdate::Boundary(b)) => self.boundary = b,
            (SurfaceId::Book, SurfaceUpdate::Visible(v)) => self.book_visible = v,
            (id, update) => log::trace!("Ignoring {update:?} on {id:?}"),
        }
    }

    fn push_history(&mut self, entry: &str) {
        self.history.push(entry.to_string());
    }
}
