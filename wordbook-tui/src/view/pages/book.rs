//! 书本页面视图
//!
//! 只读取 `TerminalSurfaces`：封面层/内容层是否显示、网格、备忘、照片说明、页码。
//!
//! ```text
//! ┌ 왼쪽 ─────────────────────┐┌ 오른쪽 ───────────────────┐
//! │  1  cat    캣              ││ 메모                      │
//! │  2  dog    더그 → 덕      ││   연습                    │
//! │                           ││                           │
//! │  …                        ││ 사진                      │
//! │                           ││   사진 삽입 영역          │
//! └──────────── 1 ────────────┘└──────────── 2 ────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};
use wordbook_core::types::{GridRow, Side, WordRow};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::BookRegions;
use crate::view::theme::Styles;

/// 发音之间的分隔
const ATTEMPT_SEPARATOR: &str = " → ";

/// 渲染左右两页
pub fn render(app: &App, frame: &mut Frame, regions: &BookRegions) {
    for side in Side::BOTH {
        let area = match side {
            Side::Left => regions.left_page,
            Side::Right => regions.right_page,
        };
        render_page(app, frame, side, area);
    }
}

fn render_page(app: &App, frame: &mut Frame, side: Side, area: Rect) {
    let texts = t();
    let label = match side {
        Side::Left => texts.book.left_page,
        Side::Right => texts.book.right_page,
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::page_edge())
        .style(Styles::page());
    let number = app.surfaces.page_number(side);
    if !number.is_empty() {
        block = block.title_bottom(Line::from(format!(" {number} ")).centered());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.surfaces.is_cover_visible(side) {
        match side {
            Side::Left => render_prologue(app, frame, inner),
            Side::Right => render_cover_art(frame, inner),
        }
    } else if app.surfaces.is_content_visible(side) {
        match side {
            Side::Left => render_grid(&app.surfaces.grid, frame, inner),
            Side::Right => render_notes(app, frame, inner),
        }
    }
}

/// 封面左页：序言原样显示（保留换行）
fn render_prologue(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::styled(t().book.prologue, Styles::title()), Line::from("")];
    lines.extend(app.surfaces.prologue.lines().map(Line::from));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// 封面右页
fn render_cover_art(frame: &mut Frame, area: Rect) {
    let texts = t();
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);

    let lines = vec![
        Line::styled(texts.common.app_name, Styles::title()).centered(),
        Line::from(""),
        Line::styled(texts.list.cover_badge, Styles::placeholder()).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), middle);
}

/// 内容左页：单词网格，空行保持页面高度
fn render_grid(grid: &[GridRow], frame: &mut Frame, area: Rect) {
    let rows: Vec<Row> = grid
        .iter()
        .map(|row| match row {
            GridRow::Word(word) => word_row(word),
            GridRow::Empty => Row::new(["", "", ""]),
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Fill(1),
        ],
    );
    frame.render_widget(table, area);
}

fn word_row(word: &WordRow) -> Row<'static> {
    let mut attempts = vec![Span::raw(word.first_attempt.clone())];
    for later in &word.later_attempts {
        attempts.push(Span::styled(ATTEMPT_SEPARATOR, Styles::faded()));
        attempts.push(Span::raw(later.clone()));
    }

    Row::new(vec![
        Line::styled(word.number.to_string(), Styles::faded()),
        Line::styled(word.headword.clone(), Styles::headword(word.tier)),
        Line::from(attempts),
    ])
}

/// 内容右页：备忘 + 照片说明
fn render_notes(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let labels = app.language.locale().labels();
    let [memo_area, photo_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let memo_style = if app.surfaces.memo == labels.memo_placeholder {
        Styles::placeholder()
    } else {
        Styles::page()
    };
    let photo_style = if app.surfaces.photo == labels.photo_placeholder {
        Styles::placeholder()
    } else {
        Styles::page()
    };

    render_note(frame, memo_area, texts.book.memo, &app.surfaces.memo, memo_style);
    render_note(frame, photo_area, texts.book.photo, &app.surfaces.photo, photo_style);
}

fn render_note(frame: &mut Frame, area: Rect, heading: &str, text: &str, style: Style) {
    let mut lines = vec![Line::styled(heading.to_string(), Styles::title())];
    lines.extend(text.lines().map(|line| Line::styled(format!("  {line}"), style)));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
