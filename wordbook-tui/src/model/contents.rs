//! 目录页面状态

/// 目录选择状态
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentsState {
    /// 当前选中的索引
    pub selected: usize,
}

impl ContentsState {
    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, total: usize) {
        self.selected = total.saturating_sub(1);
    }
}
