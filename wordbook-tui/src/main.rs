//! Wordbook TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与内容来源 (`backend/`)
//!
//!
//! main.rs
//! 发音单词本 TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 解析命令行：内容文件、--lang、--no-cover、--config
//!     init_logging()          // 日志写入配置目录下的 wordbook.log
//!     ConfigService::load()   // 读取 config.json，再用命令行参数覆盖
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()       // 创建 APP 实例（此时读取并提取内容文件）
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen , EnableMouseCapture)?
//!             - 切换到 备用屏幕，并接收鼠标点击（点击左右页翻页）
//!         · 返回 Terminal 对象
//!
//!
//!     App::new()              // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use wordbook_core::{BookConfig, CoverPolicy};

use backend::{get_config_dir, ConfigService, JsonConfigService, SourceService};
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};

/// 发音单词本：以左右两页的书本形式浏览单词与发音记录
#[derive(Debug, Parser)]
#[command(name = "wordbook", version, about)]
struct Cli {
    /// 内容文件（.json / .md / .markdown / .txt）
    source: Option<PathBuf>,

    /// 界面语言（ko / en）
    #[arg(long)]
    lang: Option<String>,

    /// 不生成封面跨页
    #[arg(long)]
    no_cover: bool,

    /// 配置文件路径（默认为配置目录下的 config.json）
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// 命令行参数覆盖配置文件
    fn apply(&self, config: &mut BookConfig) -> Result<()> {
        if let Some(code) = &self.lang {
            let Some(language) = Language::from_code(code) else {
                bail!("Unsupported language: {code}");
            };
            config.locale = language.locale();
        }
        if self.no_cover {
            config.cover = CoverPolicy::None;
        }
        Ok(())
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // 1. 日志（写文件，标准输出留给界面）
    init_logging(&get_config_dir())?;

    // 2. 配置
    let json_config = match &cli.config {
        Some(path) => JsonConfigService::with_path(path),
        None => JsonConfigService::new(),
    };
    log::info!("Config file {}", json_config.path().display());
    let config_service: Box<dyn ConfigService> = Box::new(json_config);
    let mut config = config_service.load()?;
    cli.apply(&mut config)?;
    i18n::set_language(Language::from(config.locale));

    let source = SourceService::new(cli.source, &config);
    if let Some(path) = source.path() {
        log::info!("Reading spreads from {}", path.display());
    }

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(config, source, config_service);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 7. 返回结果
    result
}
