//! Util 层：终端与日志
//!
//!     terminal.rs     进入/离开备用屏幕、原始模式与鼠标捕获
//!     logging.rs      把日志写到文件（终端被界面占用）
//!     text.rs         按显示宽度截断与补齐（韩文字符占两列）

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::fit_width;
