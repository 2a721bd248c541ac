//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod contents;       // 目录选择状态
//!         mod page;           // 页面路由状态（目录 / 书本）
//!         mod surfaces;       // 渲染器写入的呈现表面
//!
//!     值得一提的是，书本页面的数据有两处：
//!         - BookController（来自 wordbook-core）拥有跨页列表、当前索引与防抖状态，
//!             是导航的唯一入口；
//!         - TerminalSurfaces 是渲染结果，相当于网页里被写入的各个节点，
//!             View 层只读它，不直接读跨页数据。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub language: Language,             // 界面语言
//!             pub config: BookConfig,             // 书本视图配置
//!
//!             pub contents: ContentsState,        // 目录选中项
//!             pub book: BookController,           // 导航控制器
//!             pub surfaces: TerminalSurfaces,     // 呈现表面
//!             pub viewport: Rect,                 // 最近一次绘制区域
//!
//!             pub source: SourceService,          // 内容来源
//!             pub config_service: Box<dyn ConfigService>,
//!         }
//!

mod app;
mod contents;
mod page;
mod surfaces;

pub use app::App;
pub use contents::ContentsState;
pub use page::Page;
pub use surfaces::TerminalSurfaces;
