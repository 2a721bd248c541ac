//! 底部状态栏组件
//!
//! 书本页时两端是上一页/下一页控件，可用状态由渲染器写入的表面决定。

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::BookRegions;
use crate::view::theme::Styles;

/// 渲染目录页状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let hints = [
        (keys.arrows_ud, actions.select),
        (keys.enter, actions.open),
        (keys.lang, t().common.language),
        (keys.quit, t().common.quit),
    ];

    let mut spans = hint_spans(&hints);
    push_status(app, &mut spans);

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::ribbon());
    frame.render_widget(paragraph, area);
}

/// 渲染书本页状态栏：◀ 控件 │ 提示 │ ▶ 控件
pub fn render_book(app: &App, frame: &mut Frame, regions: &BookRegions) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let prev = Paragraph::new(format!(" ◀ {}", texts.common.prev))
        .style(Styles::ribbon().patch(Styles::control(app.surfaces.prev_enabled)));
    frame.render_widget(prev, regions.prev_control);

    let next = Paragraph::new(format!("{} ▶ ", texts.common.next))
        .right_aligned()
        .style(Styles::ribbon().patch(Styles::control(app.surfaces.next_enabled)));
    frame.render_widget(next, regions.next_control);

    let hints = [
        (keys.arrows_lr, actions.turn_page),
        (keys.home_end, actions.first_last),
        (keys.esc, actions.close_book),
    ];
    let mut spans = hint_spans(&hints);

    let state = app.book.state();
    spans.push(separator());
    spans.push(Span::raw(format!(
        "{} {} {} {}",
        texts.status_bar.spread,
        state.current_index() + 1,
        texts.status_bar.of,
        state.total()
    )));

    // 首页/末页提示
    let boundary = app.surfaces.boundary;
    let edge = if boundary.is_first() {
        Some(texts.book.first_page)
    } else if boundary.is_last() {
        Some(texts.book.last_page)
    } else {
        None
    };
    if let Some(edge) = edge {
        spans.push(separator());
        spans.push(Span::styled(edge, Styles::hint_key()));
    }

    push_status(app, &mut spans);

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::ribbon());
    frame.render_widget(paragraph, regions.hints);
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}

fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }
    spans
}

/// 如果有状态消息，显示在最后
fn push_status(app: &App, spans: &mut Vec<Span<'static>>) {
    if let Some(ref msg) = app.status_message {
        spans.push(separator());
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }
}
