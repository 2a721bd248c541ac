//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 目录（跨页列表）
    #[default]
    Contents,
    /// 书本（左右两页）
    Book,
}

impl Page {
    /// 是否为书本页面
    pub fn is_book(self) -> bool {
        matches!(self, Page::Book)
    }
}
