//! 韩文翻译 (ko-KR)

use super::keys::{
    ActionTexts, BookTexts, CommonTexts, HintTexts, KeyNames, ListTexts, StatusBarTexts,
    Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "발음 단어장",
        quit: "종료",
        next: "다음",
        prev: "이전",
        language: "언어",
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
            select: "선택",
            open: "펼치기",
            turn_page: "넘기기",
            first_last: "처음/끝",
            close_book: "목록",
        },
    },

    // ========================================================================
    // 列表页面
    // ========================================================================
    list: ListTexts {
        title: "목차",
        no_spreads: "표시할 페이지가 없습니다",
        no_spreads_hint: "JSON 또는 마크다운 파일을 지정하세요",
        word_count: "개",
        cover_badge: "표지",
    },

    // ========================================================================
    // 书本页面
    // ========================================================================
    book: BookTexts {
        left_page: "왼쪽",
        right_page: "오른쪽",
        prologue: "프롤로그",
        memo: "메모",
        photo: "사진",
        first_page: "첫 페이지",
        last_page: "마지막 페이지",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        spread: "펼침면",
        of: "/",
        source: "원본",
        language_changed: "언어를 바꿨습니다",
    },
};
