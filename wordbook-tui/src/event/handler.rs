//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use wordbook_core::services::{BookInput, BookKey, NavControl};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentsMessage};
use crate::model::{App, Page};
use crate::view::layout;




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),        // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),  // 鼠标点击翻页
        Event::Resize(_, _) => AppMessage::Noop,                            // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 长按方向键产生的一串 Press 交给防抖合并
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key)
        || DefaultKeymap::TOGGLE_LANGUAGE_UPPER.matches(&key)
    {
        return AppMessage::ToggleLanguage;
    }

    // 根据当前页面处理按键
    match app.current_page {
        Page::Contents => handle_contents_keys(key),
        Page::Book => handle_book_keys(key),
    }
}

/// 处理目录页的按键
fn handle_contents_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Contents(ContentsMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Contents(ContentsMessage::SelectNext),
        // Home / End: 首项 / 末项
        KeyCode::Home => AppMessage::Contents(ContentsMessage::SelectFirst),
        KeyCode::End => AppMessage::Contents(ContentsMessage::SelectLast),
        // Enter: 打开书本
        KeyCode::Enter => AppMessage::Contents(ContentsMessage::Open),
        _ => AppMessage::Noop,
    }
}

/// 处理书本页的按键
fn handle_book_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::PAGE_PREV.matches(&key) {
        return AppMessage::Book(BookInput::Control(NavControl::Previous));
    }
    if DefaultKeymap::PAGE_NEXT.matches(&key) {
        return AppMessage::Book(BookInput::Control(NavControl::Next));
    }
    if DefaultKeymap::CLOSE_BOOK.matches(&key) {
        return AppMessage::Book(BookInput::Key(BookKey::Escape));
    }

    let book_key = match key.code {
        KeyCode::Right => BookKey::ArrowRight,
        KeyCode::Left => BookKey::ArrowLeft,
        KeyCode::Home => BookKey::Home,
        KeyCode::End => BookKey::End,
        _ => return AppMessage::Noop,
    };
    AppMessage::Book(BookInput::Key(book_key))
}

/// 处理鼠标事件：只在书本页响应左键按下
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if !app.current_page.is_book() {
        return AppMessage::Noop;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppMessage::Noop;
    }

    layout::hit_test(app.viewport, mouse.column, mouse.row)
        .map_or(AppMessage::Noop, AppMessage::Book)
}
