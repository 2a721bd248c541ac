//! Update 层
//!
//! 唯一修改 Model 的地方。
//! `update` 处理一条 Message；`tick` 由主循环每轮调用，
//! 把到期的防抖目标提交给 `BookController` 并重绘书本页。

mod book;
mod contents;

use std::time::Instant;

use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, now: Instant) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleLanguage => {
            toggle_language(app);
        }

        AppMessage::Contents(contents_msg) => {
            contents::update(app, contents_msg);
        }

        AppMessage::Book(input) => {
            book::update(app, input, now);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 主循环每轮调用：提交到期的防抖翻页
pub fn tick(app: &mut App, now: Instant) {
    if app.book.poll(now, &mut app.surfaces) {
        app.clear_status();
    }
}

/// 切换语言并写回配置
fn toggle_language(app: &mut App) {
    app.language = app.language.next();
    i18n::set_language(app.language);
    app.config.locale = app.language.locale();
    app.book.set_locale(app.config.locale, &mut app.surfaces);

    if let Err(e) = app.config_service.save(&app.config) {
        log::warn!("Failed to save config: {e:#}");
    }
    log::info!("Language switched to {}", app.language.code());
    app.set_status(format!(
        "{}: {}",
        t().status_bar.language_changed,
        app.language.code()
    ));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use wordbook_core::services::{BookInput, BookKey};
    use wordbook_core::types::{Locale, Side};

    use super::*;
    use crate::i18n::Language;
    use crate::message::ContentsMessage;
    use crate::model::Page;
    use crate::test_utils::sample_app;

    #[test]
    fn quit_sets_flag() {
        let (mut app, _) = sample_app();
        update(&mut app, AppMessage::Quit, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn arrow_key_commits_on_tick_after_window() {
        let (mut app, _) = sample_app();
        let now = Instant::now();
        update(&mut app, AppMessage::Contents(ContentsMessage::Open), now);
        assert_eq!(app.current_page, Page::Book);

        update(&mut app, AppMessage::Book(BookInput::Key(BookKey::ArrowRight)), now);
        tick(&mut app, now + Duration::from_millis(10));
        assert_eq!(app.book.state().current_index(), 0);

        tick(&mut app, now + Duration::from_millis(50));
        assert_eq!(app.book.state().current_index(), 1);
        assert_eq!(app.surfaces.page_number(Side::Left), "1");
        assert_eq!(app.surfaces.memo, "연습");
    }

    #[test]
    fn toggle_language_saves_config_and_rerenders() {
        let (mut app, memory) = sample_app();
        let now = Instant::now();
        app.contents.selected = 2;
        update(&mut app, AppMessage::Contents(ContentsMessage::Open), now);
        assert_eq!(app.surfaces.memo, "메모");

        update(&mut app, AppMessage::ToggleLanguage, now);
        assert_eq!(app.language, Language::EnUs);
        assert_eq!(app.config.locale, Locale::En);
        assert_eq!(app.surfaces.memo, "Memo");
        assert_eq!(memory.saved.borrow().len(), 1);
        assert!(app.status_message.is_some());

        update(&mut app, AppMessage::ToggleLanguage, now);
        assert_eq!(app.language, Language::KoKr);
    }

    #[test]
    fn clear_status_clears() {
        let (mut app, _) = sample_app();
        app.set_status("hello");
        update(&mut app, AppMessage::ClearStatus, Instant::now());
        assert!(app.status_message.is_none());
    }
}
