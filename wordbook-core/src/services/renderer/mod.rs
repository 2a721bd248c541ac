//! Layout renderer
//!
//! ```text
//!            ┌──────────── Spread ────────────┐
//!            │                                │
//!      compose(spread, index, has_cover)      │
//!            │                                │
//!            ▼                                │
//!        SpreadView ──► apply ──► Surfaces ◄──┘ refresh_controls
//! ```
//!
//! Rendering is split in two: [`Renderer::compose`] computes the pure
//! presentation model, [`Renderer::render`] writes it through the host's
//! [`Surfaces`]. Every write is null-safe, a missing surface skips only
//! that sub-step.

pub mod markup;

use crate::config::{BookConfig, MAX_WORDS_PER_PAGE};
use crate::services::navigation::NavigationState;
use crate::traits::{write_surface, SurfaceId, SurfaceUpdate, Surfaces};
use crate::types::{
    Boundary, ContentSpread, ContentView, GridRow, Locale, PageNumbers, Side, SlotText,
    Spread, SpreadView, WordRow,
};

/// Layout renderer
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    words_per_page: usize,
    locale: Locale,
}

impl Renderer {
    #[must_use]
    pub fn new(config: &BookConfig) -> Self {
        Self {
            words_per_page: config.words_per_page.clamp(1, MAX_WORDS_PER_PAGE),
            locale: config.locale,
        }
    }

    pub fn words_per_page(&self) -> usize {
        self.words_per_page
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Render the current spread of `state` into `surfaces`
    ///
    /// No-op when the list is empty or the index is out of range.
    pub fn render<S>(&self, state: &NavigationState, surfaces: &mut S)
    where
        S: Surfaces + ?Sized,
    {
        let Some(spread) = state.current_spread() else {
            return;
        };
        let view = self.compose(spread, state.current_index(), state.has_cover());
        apply_view(&view, surfaces);
        refresh_controls(state.boundary(), surfaces);
    }

    /// Compute the presentation model of one spread
    ///
    /// # Arguments
    /// * `spread` - Spread to lay out
    /// * `index` - Its position in the list
    /// * `has_cover` - Whether index 0 holds a cover (shifts numbering by one spread)
    pub fn compose(&self, spread: &Spread, index: usize, has_cover: bool) -> SpreadView {
        match spread {
            Spread::Cover(cover) => SpreadView::Cover {
                title: cover.title.clone(),
                prologue: cover.prologue_text.clone(),
            },
            Spread::Content(content) => {
                let ordinal = index.saturating_sub(usize::from(has_cover));
                SpreadView::Content(self.compose_content(content, ordinal))
            }
        }
    }

    fn compose_content(&self, content: &ContentSpread, ordinal: usize) -> ContentView {
        let labels = self.locale.labels();
        let start_number = ordinal.saturating_mul(self.words_per_page).saturating_add(1);

        let mut rows: Vec<GridRow> = content
            .words
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                GridRow::Word(WordRow {
                    number: start_number.saturating_add(offset),
                    headword: entry.headword.clone(),
                    first_attempt: entry.first_attempt.clone(),
                    later_attempts: entry.later_attempts.clone(),
                    tier: entry.overflow_tier(),
                })
            })
            .collect();
        if rows.len() < self.words_per_page {
            rows.resize(self.words_per_page, GridRow::Empty);
        }

        let memo = match content.memo.as_deref().map(str::trim) {
            Some(memo) if !memo.is_empty() => SlotText::Filled(memo.to_string()),
            _ => SlotText::Placeholder(labels.memo_placeholder),
        };
        let photo = match content.photo_caption.as_deref().map(str::trim) {
            Some(caption) if !caption.is_empty() => {
                SlotText::Filled(self.locale.photo_caption(caption))
            }
            _ => SlotText::Placeholder(labels.photo_placeholder),
        };

        ContentView {
            title: content.title.clone(),
            start_number,
            rows,
            memo,
            photo,
            pages: PageNumbers {
                left: ordinal.saturating_mul(2).saturating_add(1),
                right: ordinal.saturating_mul(2).saturating_add(2),
            },
        }
    }
}

/// Write a composed view into the host
fn apply_view<S>(view: &SpreadView, surfaces: &mut S)
where
    S: Surfaces + ?Sized,
{
    let is_cover = view.is_cover();
    for side in Side::BOTH {
        write_surface(surfaces, SurfaceId::CoverLayer(side), SurfaceUpdate::Visible(is_cover));
        write_surface(surfaces, SurfaceId::ContentLayer(side), SurfaceUpdate::Visible(!is_cover));
    }

    match view {
        SpreadView::Cover { prologue, .. } => {
            write_surface(surfaces, SurfaceId::Prologue, SurfaceUpdate::Text(prologue));
            // 封面不显示页码
            for side in Side::BOTH {
                write_surface(surfaces, SurfaceId::PageNumber(side), SurfaceUpdate::Clear);
            }
        }
        SpreadView::Content(content) => {
            write_surface(surfaces, SurfaceId::WordList, SurfaceUpdate::Grid(&content.rows));
            write_surface(surfaces, SurfaceId::Memo, SurfaceUpdate::Text(content.memo.as_str()));
            write_surface(surfaces, SurfaceId::Photo, SurfaceUpdate::Text(content.photo.as_str()));
            for side in Side::BOTH {
                let number = content.pages.get(side).to_string();
                write_surface(surfaces, SurfaceId::PageNumber(side), SurfaceUpdate::Text(&number));
            }
        }
    }
}

/// Enable/disable prev/next and toggle the first/last page hints
pub fn refresh_controls<S>(boundary: Boundary, surfaces: &mut S)
where
    S: Surfaces + ?Sized,
{
    write_surface(surfaces, SurfaceId::PrevControl, SurfaceUpdate::Enabled(boundary.has_previous));
    write_surface(surfaces, SurfaceId::NextControl, SurfaceUpdate::Enabled(boundary.has_next));
    write_surface(surfaces, SurfaceId::Book, SurfaceUpdate::Boundary(boundary));
}
