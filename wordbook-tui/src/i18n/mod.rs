//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 界面语言同时决定核心库渲染跨页占位文本时使用的 `Locale`。

use std::sync::atomic::{AtomicUsize, Ordering};

use wordbook_core::types::Locale;

mod en_us;
pub mod keys;
mod ko_kr;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 韩语（韩国）
    #[default]
    KoKr,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::KoKr => "ko-KR",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析（`ko`、`ko-KR`、`en`、`en_US` 等）
    pub fn from_code(code: &str) -> Option<Language> {
        Locale::from_code(code).map(Language::from)
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::KoKr => Language::EnUs,
            Language::EnUs => Language::KoKr,
        }
    }

    /// 对应的跨页渲染语言
    pub fn locale(self) -> Locale {
        match self {
            Language::KoKr => Locale::Ko,
            Language::EnUs => Locale::En,
        }
    }
}

impl From<Locale> for Language {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::Ko => Language::KoKr,
            Locale::En => Language::EnUs,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = KoKr

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &ko_kr::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::KoKr => 0,
        Language::EnUs => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_through_core_locale() {
        assert_eq!(Language::from_code("ko-KR"), Some(Language::KoKr));
        assert_eq!(Language::from_code("en"), Some(Language::EnUs));
        assert_eq!(Language::from_code("zh-CN"), None);
    }

    #[test]
    fn next_cycles_and_maps_locale() {
        assert_eq!(Language::KoKr.next(), Language::EnUs);
        assert_eq!(Language::EnUs.next().locale(), Locale::Ko);
        assert_eq!(Language::EnUs.code(), "en-US");
    }
}
