//! 
//! app.rs
//! 应用主循环
//! 
//! 
//! 
//! 在应用启动时，创建终端并初始化为以下状态：
//! 
//! App {
//! 
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     current_page = Page::Contents,                  // 先显示目录，Enter 后进入书本
//!     contents: ContentsState { selected: 0 },        // 目录中选中第几项，默认为 0
//!     book: BookController { .. },                    // 跨页列表 + 当前索引 + 防抖
//!     surfaces: TerminalSurfaces::default(),          // 书本打开前什么都没写入
//!     status_message = None,                          // 状态栏消息
//! 
//! }
//! 
//! 
//! 主循环最长每 100 ms 执行一次；有待提交的翻页时按防抖截止时间提前醒来
//! 应用的主循环中有：
//! loop {
//! 
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI，顺便记下终端区域
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event(timeout) {      // 轮询获取输入，最多等待 timeout
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg , now)            // 更新终端状态
//!     }
//!     update::tick(&mut app , now)                    // 提交已到期的防抖翻页
//! }

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 无事件时的轮询间隔
const IDLE_POLL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            app.viewport = frame.area();
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（超时不晚于防抖截止时间）
        let timeout = poll_timeout(app.book.next_deadline(), Instant::now());
        if let Some(event) = event::poll_event(timeout)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg, Instant::now());
        }

        // 6. 提交到期的翻页
        update::tick(app, Instant::now());
    }

    Ok(())
}

/// 本轮最多等待多久
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
        None => IDLE_POLL,
    }
}
