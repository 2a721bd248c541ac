//! 目录页更新逻辑

use crate::i18n::t;
use crate::message::ContentsMessage;
use crate::model::{App, Page};

/// 处理目录页消息
pub fn update(app: &mut App, msg: ContentsMessage) {
    let total = app.total_spreads();
    match msg {
        ContentsMessage::SelectPrevious => app.contents.select_previous(),
        ContentsMessage::SelectNext => app.contents.select_next(total),
        ContentsMessage::SelectFirst => app.contents.select_first(),
        ContentsMessage::SelectLast => app.contents.select_last(total),
        ContentsMessage::Open => handle_open(app),
    }
}

/// 以选中的跨页打开书本；列表为空时先重新读取一次来源
fn handle_open(app: &mut App) {
    let source = &app.source;
    let opened = app
        .book
        .open_book(app.contents.selected, &mut app.surfaces, || source.reload());

    if opened {
        app.current_page = Page::Book;
        app.contents.selected = app.book.state().current_index();
        app.clear_status();
    } else {
        app.set_status(t().list.no_spreads);
    }
}
