//! 按显示宽度处理文本

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断或补齐到恰好 `width` 列
///
/// 超出时以 `…` 结尾；宽字符放不下的半列用空格补齐。
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text.width()));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}
