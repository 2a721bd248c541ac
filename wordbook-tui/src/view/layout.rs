//! 主布局渲染与鼠标命中测试

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wordbook_core::services::{BookInput, NavControl};
use wordbook_core::types::Side;

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::Styles;

/// 状态栏两端控件的宽度
const CONTROL_WIDTH: u16 = 8;

/// 三层布局：标题栏 + 主内容区 + 状态栏
#[derive(Debug, Clone, Copy)]
pub struct AppAreas {
    pub title: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn app_areas(area: Rect) -> AppAreas {
    let [title, body, status] = Layout::vertical([
        Constraint::Length(1), // 标题栏
        Constraint::Min(1),    // 主内容区
        Constraint::Length(1), // 状态栏
    ])
    .areas(area);
    AppAreas { title, body, status }
}

/// 书本页的各个可点击区域
#[derive(Debug, Clone, Copy)]
pub struct BookRegions {
    pub left_page: Rect,
    pub right_page: Rect,
    pub prev_control: Rect,
    pub hints: Rect,
    pub next_control: Rect,
}

/// 由整个终端区域计算书本页布局
pub fn book_regions(area: Rect) -> BookRegions {
    let areas = app_areas(area);
    let [left_page, right_page] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(areas.body);
    let [prev_control, hints, next_control] = Layout::horizontal([
        Constraint::Length(CONTROL_WIDTH),
        Constraint::Min(0),
        Constraint::Length(CONTROL_WIDTH),
    ])
    .areas(areas.status);

    BookRegions {
        left_page,
        right_page,
        prev_control,
        hints,
        next_control,
    }
}

/// 鼠标点击位置 → 书本页输入
///
/// 控件优先于页面；页面以外的位置不产生输入。
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<BookInput> {
    let regions = book_regions(area);
    let position = Position::new(column, row);

    if regions.prev_control.contains(position) {
        Some(BookInput::Control(NavControl::Previous))
    } else if regions.next_control.contains(position) {
        Some(BookInput::Control(NavControl::Next))
    } else if regions.left_page.contains(position) {
        Some(BookInput::PageClick(Side::Left))
    } else if regions.right_page.contains(position) {
        Some(BookInput::PageClick(Side::Right))
    } else {
        None
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let areas = app_areas(size);

    // 渲染标题栏
    render_title_bar(app, frame, areas.title);

    // 根据当前页面渲染内容与状态栏
    match app.current_page {
        Page::Book if app.surfaces.book_visible => {
            let regions = book_regions(size);
            pages::book::render(app, frame, &regions);
            components::statusbar::render_book(app, frame, &regions);
        }
        _ => {
            render_contents(app, frame, areas.body);
            components::statusbar::render(app, frame, areas.status);
        }
    }
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let label = app.source.label();
    let text = if label.is_empty() {
        format!(" {}", texts.common.app_name)
    } else {
        format!(" {} · {}: {}", texts.common.app_name, texts.status_bar.source, label)
    };
    let title = Paragraph::new(text).style(Styles::ribbon());
    frame.render_widget(title, area);
}

/// 渲染目录页（带边框）
fn render_contents(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", t().list.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::ribbon_edge());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    pages::contents::render(app, frame, inner_area);
}
