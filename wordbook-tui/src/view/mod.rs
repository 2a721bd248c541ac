//! View 层
//!
//! 只读 Model，把它画到终端上。
//! 唯一的例外是主循环在 draw 闭包里记下 frame.area()，供鼠标命中测试使用。
//!
//!     目录页：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────────────────────────────────────────┤
//!         │ ┌ 목차 ────────────────────────────────────┐ │
//!         │ │   1  표지                      표지      │ │
//!         │ │   2  Spread 1                  2 개      │ │
//!         │ └──────────────────────────────────────────┘ │
//!         ├──────────────────────────────────────────────┤
//!         │ 状态栏                                        │
//!         └──────────────────────────────────────────────┘
//!
//!     书本页：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────────────────┬───────────────────────┤
//!         │ 左页（网格 / 序言）   │ 右页（备忘 + 照片）    │
//!         │                      │                       │
//!         │         1            │          2            │
//!         ├────────┬─────────────┴─────────────┬─────────┤
//!         │ ◀ 이전 │ 提示                       │ 다음 ▶  │
//!         └────────┴───────────────────────────┴─────────┘
//!
//!     左页、右页、◀、▶ 四块就是 layout::hit_test() 的点击区域。
//!

mod components;
pub mod layout;
mod pages;
pub mod theme;

pub use layout::render;
