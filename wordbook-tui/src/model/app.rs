//! 应用主状态结构

use ratatui::layout::Rect;
use wordbook_core::{BookConfig, BookController};

use super::{ContentsState, Page, TerminalSurfaces};
use crate::backend::{ConfigService, SourceService};
use crate::i18n::Language;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 界面语言（同时决定跨页占位文本）
    pub language: Language,

    /// 书本视图配置
    pub config: BookConfig,

    // === 页面状态 ===
    /// 目录页面状态
    pub contents: ContentsState,
    /// 导航控制器（拥有跨页列表）
    pub book: BookController,
    /// 渲染器写入的表面
    pub surfaces: TerminalSurfaces,

    /// 最近一次绘制的终端区域（鼠标命中测试用）
    pub viewport: Rect,

    // === 后端 ===
    pub source: SourceService,
    pub config_service: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        config: BookConfig,
        source: SourceService,
        config_service: Box<dyn ConfigService>,
    ) -> Self {
        let spreads = source.reload();
        log::info!("{} spreads ready", spreads.len());

        Self {
            should_quit: false,
            current_page: Page::Contents,
            status_message: None,
            language: Language::from(config.locale),
            book: BookController::new(spreads, &config),
            config,
            contents: ContentsState::default(),
            surfaces: TerminalSurfaces::default(),
            viewport: Rect::default(),
            source,
            config_service,
        }
    }

    /// 跨页总数
    pub fn total_spreads(&self) -> usize {
        self.book.state().total()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
