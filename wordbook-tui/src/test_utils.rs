//! 测试辅助模块
//!
//! 提供内存配置服务和带示例跨页的 `App`。

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use wordbook_core::types::{ContentSpread, Spread, WordEntry};
use wordbook_core::{BookConfig, BookController};

use crate::backend::{ConfigService, SourceService};
use crate::model::App;

/// 只记录保存次数的配置服务
#[derive(Clone, Default)]
pub struct MemoryConfigService {
    pub saved: Rc<RefCell<Vec<BookConfig>>>,
}

impl ConfigService for MemoryConfigService {
    fn load(&self) -> Result<BookConfig> {
        Ok(BookConfig::default())
    }

    fn save(&self, config: &BookConfig) -> Result<()> {
        self.saved.borrow_mut().push(config.clone());
        Ok(())
    }
}

/// 封面 + 两个内容跨页
pub fn sample_spreads() -> Vec<Spread> {
    let mut first = ContentSpread::new("Spread 1");
    first.memo = Some("연습".to_string());
    first.words = vec![
        WordEntry::new("cat", "캣", vec![]),
        WordEntry::new("dog", "더그", vec!["덕".to_string()]),
    ];
    let mut second = ContentSpread::new("Spread 2");
    second.words = vec![WordEntry::new("sun", "썬", vec![])];

    vec![
        Spread::cover("표지", "첫 줄\n둘째 줄"),
        Spread::Content(first),
        Spread::Content(second),
    ]
}

/// 带示例跨页、不读写真实文件的应用
pub fn app_with(spreads: Vec<Spread>) -> (App, MemoryConfigService) {
    let config = BookConfig::default();
    let memory = MemoryConfigService::default();
    let mut app = App::new(
        config.clone(),
        SourceService::new(None, &config),
        Box::new(memory.clone()),
    );
    app.book = BookController::new(spreads, &config);
    (app, memory)
}

pub fn sample_app() -> (App, MemoryConfigService) {
    app_with(sample_spreads())
}
