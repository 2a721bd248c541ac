//! Service layer: extraction, rendering, navigation

pub mod extractor;
pub mod navigation;
pub mod renderer;

pub use extractor::Extractor;
pub use navigation::{
    BookController, BookInput, BookKey, Debouncer, InputOutcome, NavControl, NavigationState,
    PendingNavigation, BOOK_HISTORY_ENTRY,
};
pub use renderer::markup::{escape_markup, MarkupSlot, MarkupSurfaces};
pub use renderer::{refresh_controls, Renderer};
