//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wordbook_core::BookConfig;

/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordbook-tui")
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<BookConfig>;

    /// 保存配置
    fn save(&self, config: &BookConfig) -> Result<()>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用默认位置（配置目录下的 config.json）
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join(CONFIG_FILE))
    }

    /// 使用指定文件
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<BookConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(BookConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config {}", self.path.display()))?;
        let config = BookConfig::from_json_str(&content)
            .with_context(|| format!("Invalid config {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &BookConfig) -> Result<()> {
        config.validate()?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write config {}", self.path.display()))?;
        log::info!("Saved config to {}", self.path.display());
        Ok(())
    }
}
