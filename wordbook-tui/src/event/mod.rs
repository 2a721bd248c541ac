//! Event 层
//!
//! `poll_event` 等待终端输入，最长等待时间由主循环按防抖截止时间缩短，
//! 到期的翻页不会被空闲的事件轮询拖住。
//! `handle_event` 按当前页面把按键和鼠标点击映射成 Message；
//! 书本页的点击先经过 `view::layout::hit_test` 判断落在哪个导航区域。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
