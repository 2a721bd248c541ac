//! 内容服务

use std::path::{Path, PathBuf};

use anyhow::Result;
use wordbook_core::types::Spread;
use wordbook_core::{load_source, BookConfig, Extractor};

/// 内容文件 → 跨页列表
pub struct SourceService {
    path: Option<PathBuf>,
    extractor: Extractor,
}

impl SourceService {
    pub fn new(path: Option<PathBuf>, config: &BookConfig) -> Self {
        Self {
            path,
            extractor: Extractor::new(config),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 状态栏显示用的文件名
    pub fn label(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// 读取并提取；未指定文件时为空列表
    pub fn load_spreads(&self) -> Result<Vec<Spread>> {
        let Some(path) = self.path.as_deref() else {
            return Ok(Vec::new());
        };
        let source = load_source(path)?;
        Ok(self.extractor.extract(&source))
    }

    /// 兜底重新提取：错误只记日志
    pub fn reload(&self) -> Vec<Spread> {
        match self.load_spreads() {
            Ok(spreads) => spreads,
            Err(e) => {
                log::warn!("Re-extraction failed: {e:#}");
                Vec::new()
            }
        }
    }
}
