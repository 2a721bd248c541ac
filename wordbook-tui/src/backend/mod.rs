//!
//! src/backend/mod.rs
//! Backend 层：配置与内容来源
//!
//! Backend 层与 UI 完全解耦，只通过 wordbook-core 读取配置和内容。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（JSON）
//!         mod source_service;     // 内容文件 → 跨页列表
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/wordbook-tui/config.json
//!
//!         {
//!             "wordsPerPage": 10,
//!             "debounceMs": 50,
//!             "cover": "synthetic",
//!             "locale": "ko"
//!         }
//!
//!         文件不存在时使用默认值；缺省的字段同样取默认值。
//!         切换语言（L 键）时写回文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、内容服务（SourceService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/source_service.rs 中定义：
//!
//!         按扩展名读取内容文件（.json / .md / .markdown / .txt），
//!         交给核心库的 Extractor 得到跨页列表。
//!
//!         打开书本时若列表为空，BookController 会再调用一次
//!         reload() 作为兜底。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     main.rs 启动
//!         ↓
//!     JsonConfigService::load()  →  BookConfig
//!         ↓
//!     SourceService::load_spreads()  →  Vec<Spread>
//!         ↓
//!     App::new(config, source, config_service)  →  BookController
//!

mod config_service;
mod source_service;

pub use config_service::{get_config_dir, ConfigService, JsonConfigService};
pub use source_service::SourceService;
