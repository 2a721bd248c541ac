//! 书本页更新逻辑

use std::time::Instant;

use wordbook_core::services::{BookInput, InputOutcome};

use crate::model::{App, Page};

/// 把书本页输入交给导航控制器
pub fn update(app: &mut App, input: BookInput, now: Instant) {
    if !app.current_page.is_book() {
        return;
    }

    match app.book.dispatch(input, now, &mut app.surfaces) {
        InputOutcome::Closed => {
            // 回到目录时选中刚才看的跨页
            app.contents.selected = app.book.state().current_index();
            app.current_page = Page::Contents;
            app.clear_status();
        }
        InputOutcome::Committed => app.clear_status(),
        InputOutcome::Queued | InputOutcome::Ignored => {}
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wordbook_core::services::{BookKey, NavControl};
    use wordbook_core::types::Side;

    use super::*;
    use crate::message::{AppMessage, ContentsMessage};
    use crate::test_utils::sample_app;
    use crate::update::{self as app_update, tick};

    fn opened_app() -> App {
        let (mut app, _) = sample_app();
        app_update::update(&mut app, AppMessage::Contents(ContentsMessage::Open), Instant::now());
        app
    }

    #[test]
    fn input_on_contents_page_is_dropped() {
        let (mut app, _) = sample_app();
        update(&mut app, BookInput::Key(BookKey::ArrowRight), Instant::now());
        assert!(app.book.state().pending().is_none());
    }

    #[test]
    fn page_click_turns_immediately() {
        let mut app = opened_app();
        update(&mut app, BookInput::PageClick(Side::Right), Instant::now());
        assert_eq!(app.book.state().current_index(), 1);
        assert!(app.surfaces.is_content_visible(Side::Left));
        assert!(!app.surfaces.is_cover_visible(Side::Right));
    }

    #[test]
    fn controls_are_debounced_until_tick() {
        let mut app = opened_app();
        let now = Instant::now();
        update(&mut app, BookInput::Control(NavControl::Next), now);
        update(&mut app, BookInput::Key(BookKey::End), now + Duration::from_millis(20));
        tick(&mut app, now + Duration::from_millis(60));
        assert_eq!(app.book.state().current_index(), 0);

        tick(&mut app, now + Duration::from_millis(70));
        assert_eq!(app.book.state().current_index(), 2);
        assert!(!app.surfaces.next_enabled);
        assert!(app.surfaces.boundary.is_last());
        assert_eq!(app.surfaces.page_number(Side::Right), "4");
    }

    #[test]
    fn escape_returns_to_contents_and_selects_current() {
        let mut app = opened_app();
        update(&mut app, BookInput::PageClick(Side::Right), Instant::now());
        app_update::update(
            &mut app,
            AppMessage::Book(BookInput::Key(BookKey::Escape)),
            Instant::now(),
        );

        assert_eq!(app.current_page, Page::Contents);
        assert_eq!(app.contents.selected, 1);
        assert!(!app.surfaces.book_visible);
    }
}
