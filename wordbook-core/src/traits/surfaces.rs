//! Presentation surface abstract Trait

use crate::types::{Boundary, GridRow, Side};

/// Named presentation surface provided by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    /// Cover / intro layer of one page
    CoverLayer(Side),
    /// Content layer of one page
    ContentLayer(Side),
    /// Plain-text prologue on the cover
    Prologue,
    /// Word grid container
    WordList,
    /// Memo area
    Memo,
    /// Photo caption area
    Photo,
    /// Page number display
    PageNumber(Side),
    /// "Previous" control
    PrevControl,
    /// "Next" control
    NextControl,
    /// Book root, carries the first/last page hints
    Book,
}

impl SurfaceId {
    /// Every named surface
    pub const ALL: [SurfaceId; 13] = [
        SurfaceId::CoverLayer(Side::Left),
        SurfaceId::CoverLayer(Side::Right),
        SurfaceId::ContentLayer(Side::Left),
        SurfaceId::ContentLayer(Side::Right),
        SurfaceId::Prologue,
        SurfaceId::WordList,
        SurfaceId::Memo,
        SurfaceId::Photo,
        SurfaceId::PageNumber(Side::Left),
        SurfaceId::PageNumber(Side::Right),
        SurfaceId::PrevControl,
        SurfaceId::NextControl,
        SurfaceId::Book,
    ];

    /// Whether the surface renders markup (user text must be escaped first)
    pub fn is_markup(self) -> bool {
        matches!(self, Self::WordList | Self::Memo | Self::Photo)
    }
}

/// A single write into a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceUpdate<'a> {
    /// Show or hide a layer
    Visible(bool),
    /// Enable or disable a control
    Enabled(bool),
    /// Replace the text content
    Text(&'a str),
    /// Replace the word grid rows
    Grid(&'a [GridRow]),
    /// Toggle the first/last page hints
    Boundary(Boundary),
    /// Remove any content
    Clear,
}

/// Presentation surface Trait
///
/// The host (a web page, a terminal UI, a test recorder) exposes its named
/// surfaces through this trait. Any surface may be absent; writers must call
/// [`Surfaces::has`] first and skip silently, which [`write_surface`] does.
pub trait Surfaces {
    /// Whether the host provides this surface
    ///
    /// # Arguments
    /// * `id` - Surface name
    fn has(&self, id: SurfaceId) -> bool;

    /// Apply an update to a surface that exists
    ///
    /// # Arguments
    /// * `id` - Surface name
    /// * `update` - New state
    fn apply(&mut self, id: SurfaceId, update: SurfaceUpdate<'_>);

    /// Push one history entry (called once when the book view is entered)
    fn push_history(&mut self, _entry: &str) {}
}

/// Write into a surface if the host has it; returns whether it was written
pub fn write_surface<S>(surfaces: &mut S, id: SurfaceId, update: SurfaceUpdate<'_>) -> bool
where
    S: Surfaces + ?Sized,
{
    if !surfaces.has(id) {
        return false;
    }
    surfaces.apply(id, update);
    true
}
