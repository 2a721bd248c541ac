//! 书本配色
//!
//! 深色纸张上的墨色文字。样式都从 [`palette`] 派生，页面代码只用 [`Styles`]。

use ratatui::style::{Color, Modifier, Style};
use wordbook_core::types::OverflowTier;

/// 书本配色
#[derive(Debug, Clone, Copy)]
pub struct BookPalette {
    /// 正文墨色
    pub ink: Color,
    /// 序号、分隔符、占位文本
    pub faded_ink: Color,
    /// 书页底色
    pub paper: Color,
    /// 书页边框
    pub page_edge: Color,
    /// 书签色：标题栏、状态栏、目录边框
    pub ribbon: Color,
    pub ribbon_text: Color,
    /// 目录选中行
    pub bookmark: Color,
    /// 发音过多的词头
    pub crowded: Color,
    /// 快捷键
    pub key_cap: Color,
}

/// 当前配色
pub const fn palette() -> BookPalette {
    BookPalette {
        ink: Color::Rgb(226, 220, 204),
        faded_ink: Color::Rgb(140, 132, 118),
        paper: Color::Rgb(36, 34, 30),
        page_edge: Color::Rgb(92, 84, 70),
        ribbon: Color::Rgb(122, 48, 52),
        ribbon_text: Color::Rgb(246, 238, 222),
        bookmark: Color::Rgb(84, 66, 44),
        crowded: Color::Rgb(214, 160, 90),
        key_cap: Color::Rgb(240, 200, 110),
    }
}

/// 页面用到的样式
pub struct Styles;

impl Styles {
    pub fn page_edge() -> Style {
        Style::default().fg(palette().page_edge)
    }

    pub fn ribbon_edge() -> Style {
        Style::default().fg(palette().ribbon)
    }

    /// 目录选中行
    pub fn selected() -> Style {
        let p = palette();
        Style::default()
            .bg(p.bookmark)
            .fg(p.ribbon_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(palette().ink).add_modifier(Modifier::BOLD)
    }

    /// 标题栏和状态栏
    pub fn ribbon() -> Style {
        let p = palette();
        Style::default().bg(p.ribbon).fg(p.ribbon_text)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(palette().key_cap)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(palette().ribbon_text)
    }

    /// 书页正文
    pub fn page() -> Style {
        let p = palette();
        Style::default().bg(p.paper).fg(p.ink)
    }

    /// 占位文本（메모 / 사진 삽입 영역）
    pub fn placeholder() -> Style {
        Style::default()
            .fg(palette().faded_ink)
            .add_modifier(Modifier::ITALIC)
    }

    /// 单词序号和发音分隔符
    pub fn faded() -> Style {
        Style::default().fg(palette().faded_ink)
    }

    /// 词头，发音越多越收紧
    pub fn headword(tier: OverflowTier) -> Style {
        let base = Self::title();
        match tier {
            OverflowTier::Normal => base,
            OverflowTier::Four => base.fg(palette().crowded),
            OverflowTier::Five => base.fg(palette().crowded).add_modifier(Modifier::UNDERLINED),
        }
    }

    /// 翻页控件：可用 / 禁用
    pub fn control(enabled: bool) -> Style {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette().faded_ink)
                .add_modifier(Modifier::DIM)
        }
    }
}
