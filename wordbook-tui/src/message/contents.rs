//! 目录页消息

/// 目录页消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentsMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳到第一项
    SelectFirst,
    /// 跳到最后一项
    SelectLast,
    /// 以选中的跨页打开书本
    Open,
}
