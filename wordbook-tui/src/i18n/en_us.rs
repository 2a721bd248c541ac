//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, BookTexts, CommonTexts, HintTexts, KeyNames, ListTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Pronunciation Wordbook",
        quit: "Quit",
        next: "Next",
        prev: "Prev",
        language: "Language",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            home_end: "Home/End",
            lang: "L",
            quit: "q",
        },
        actions: ActionTexts {
            select: "Select",
            open: "Open",
            turn_page: "Turn page",
            first_last: "First/Last",
            close_book: "Contents",
        },
    },

    // ========================================================================
    // 列表页面
    // ========================================================================
    list: ListTexts {
        title: "Contents",
        no_spreads: "Nothing to show",
        no_spreads_hint: "Pass a JSON or Markdown file",
        word_count: " words",
        cover_badge: "Cover",
    },

    // ========================================================================
    // 书本页面
    // ========================================================================
    book: BookTexts {
        left_page: "Left",
        right_page: "Right",
        prologue: "Prologue",
        memo: "Memo",
        photo: "Photo",
        first_page: "First page",
        last_page: "Last page",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        spread: "Spread",
        of: "/",
        source: "Source",
        language_changed: "Language switched",
    },
};
