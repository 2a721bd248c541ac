//! 界面文本的结构体
//!
//! 按出现位置分组：`list.*` 目录页，`book.*` 书本页，`status_bar.*` 状态栏，
//! `hints.*` 快捷键提示，`common.*` 其余多处共用的词。
//! 跨页内部的占位文本（메모 / Memo 等）由核心库的 `Locale` 提供。

/// 一种界面语言的全部文本
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub list: ListTexts,
    pub book: BookTexts,
    pub status_bar: StatusBarTexts,
}

pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub next: &'static str,
    pub prev: &'static str,
    pub language: &'static str,
}

/// 快捷键提示，按键名和动作词分开存放以便组合
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub arrows_lr: &'static str,  // "←→"
    pub arrows_ud: &'static str,  // "↑↓"
    pub home_end: &'static str,   // "Home/End"
    pub lang: &'static str,       // "L"
    pub quit: &'static str,       // "q"
}

pub struct ActionTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub turn_page: &'static str,
    pub first_last: &'static str,
    pub close_book: &'static str,
}

/// 目录页
pub struct ListTexts {
    pub title: &'static str,
    pub no_spreads: &'static str,
    pub no_spreads_hint: &'static str,
    /// 单词数后缀，如 "12 words" / "12개"
    pub word_count: &'static str,
    pub cover_badge: &'static str,
}

/// 书本页
pub struct BookTexts {
    pub left_page: &'static str,
    pub right_page: &'static str,
    pub prologue: &'static str,
    pub memo: &'static str,
    pub photo: &'static str,
    pub first_page: &'static str,
    pub last_page: &'static str,
}

pub struct StatusBarTexts {
    pub spread: &'static str,
    pub of: &'static str,
    pub source: &'static str,
    pub language_changed: &'static str,
}
