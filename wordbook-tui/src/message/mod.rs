//! Message 层
//!
//! 按键、鼠标和目录操作都先被翻译成 [`AppMessage`]，再交给 Update 层。
//! 书本页的输入直接复用核心库的 `BookInput`（方向键 / 点击页面 / 导航按钮），
//! 防抖和边界处理因此只在 `BookController` 里出现一次。

mod app;
mod contents;

pub use app::AppMessage;
pub use contents::ContentsMessage;
