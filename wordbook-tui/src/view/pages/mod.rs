//! 页面视图

pub mod book;
pub mod contents;
