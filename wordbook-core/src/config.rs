//! 书本视图配置

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Locale;

/// 每个跨页的单词行数
pub const DEFAULT_WORDS_PER_PAGE: usize = 10;

/// 每个跨页允许的最大行数
pub const MAX_WORDS_PER_PAGE: usize = 100;

/// 导航防抖延迟（毫秒）
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// 块扫描模式下的封面策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverPolicy {
    /// 在列表首位插入一个合成封面，首个标题之前的段落作为序言
    #[default]
    Synthetic,
    /// 不插入封面，所有标题都是普通内容跨页
    None,
}

/// 书本视图配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookConfig {
    /// 每个跨页的网格行数（不足时补空行）
    pub words_per_page: usize,
    /// 防抖窗口
    pub debounce_ms: u64,
    /// 封面策略
    pub cover: CoverPolicy,
    /// 占位文本语言
    pub locale: Locale,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            cover: CoverPolicy::default(),
            locale: Locale::default(),
        }
    }
}

impl BookConfig {
    /// 防抖延迟
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// 校验取值范围
    pub fn validate(&self) -> CoreResult<()> {
        if self.words_per_page == 0 {
            return Err(CoreError::InvalidConfig(
                "wordsPerPage must be at least 1".to_string(),
            ));
        }
        if self.words_per_page > MAX_WORDS_PER_PAGE {
            return Err(CoreError::InvalidConfig(format!(
                "wordsPerPage must be at most {MAX_WORDS_PER_PAGE}, got {}",
                self.words_per_page
            )));
        }
        Ok(())
    }

    /// 从 JSON 文本解析并校验（缺省字段取默认值）
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}
