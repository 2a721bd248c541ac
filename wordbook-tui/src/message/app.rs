//! 应用主消息枚举

use wordbook_core::services::BookInput;

use super::ContentsMessage;

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换界面语言（同时切换跨页占位文本）
    ToggleLanguage,

    /// 目录页相关消息
    Contents(ContentsMessage),

    /// 书本页输入
    Book(BookInput),

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
