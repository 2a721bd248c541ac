//! 类型定义模块

mod block;
mod locale;
mod record;
mod spread;
mod view;

pub use block::ContentBlock;
pub use locale::{Locale, SpreadLabels};
pub use record::{RecordId, SpreadRecord};
pub use spread::{
    has_leading_cover, ContentSpread, CoverSpread, OverflowTier, Spread, WordEntry,
    OVERFLOW_TIER_FIVE, OVERFLOW_TIER_FOUR,
};
pub use view::{
    Boundary, ContentView, GridRow, PageNumbers, Side, SlotText, SpreadView, WordRow,
};
