//! 日志初始化
//!
//! 标准输出归终端界面所有，日志写入配置目录下的文件。
//! 核心库通过 `log` 门面输出，由 tracing-subscriber 自带的 `tracing-log` 桥接收集。

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志级别环境变量
pub const LOG_ENV: &str = "WORDBOOK_LOG";

/// 日志文件名
pub const LOG_FILE: &str = "wordbook.log";

/// 初始化文件日志
pub fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    tracing::info!("Logging to {}", path.display());
    Ok(())
}
