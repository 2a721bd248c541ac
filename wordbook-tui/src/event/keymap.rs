//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 大写字母带 SHIFT 修饰，这里把 `L` 与 `Shift+L` 视为同一按键。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
    pub const TOGGLE_LANGUAGE_UPPER: KeyBinding = KeyBinding::key(KeyCode::Char('L'));

    // 书本
    pub const PAGE_PREV: KeyBinding = KeyBinding::key(KeyCode::PageUp);
    pub const PAGE_NEXT: KeyBinding = KeyBinding::key(KeyCode::PageDown);
    pub const CLOSE_BOOK: KeyBinding = KeyBinding::key(KeyCode::Esc);
}
