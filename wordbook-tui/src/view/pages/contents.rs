//! 目录页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use wordbook_core::types::Spread;

use crate::i18n::t;
use crate::model::App;
use crate::util::fit_width;
use crate::view::theme::Styles;

/// 标题列宽度
const TITLE_WIDTH: usize = 28;

/// 渲染目录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let spreads = app.book.state().spreads();
    if spreads.is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, spreads, frame, area);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.list.no_spreads),
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.list.no_spreads_hint),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染跨页列表
fn render_list(app: &App, spreads: &[Spread], frame: &mut Frame, area: Rect) {
    let texts = t();
    let items: Vec<ListItem> = spreads
        .iter()
        .enumerate()
        .map(|(i, spread)| {
            let is_selected = i == app.contents.selected;
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(Color::White)
            };
            let dim_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let detail = if spread.is_cover() {
                texts.list.cover_badge.to_string()
            } else {
                format!("{} {}", spread.word_count(), texts.list.word_count)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:>3}  ", i + 1), dim_style),
                Span::styled(fit_width(spread.title(), TITLE_WIDTH), style),
                Span::styled(format!("  {detail}"), dim_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.contents.selected));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}
