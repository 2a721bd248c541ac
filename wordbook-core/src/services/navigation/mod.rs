//! Navigation controller
//!
//! ```text
//!  key / button ──► request_navigate ──► Debouncer ──(due)──► poll ──┐
//!                                                                    ▼
//!  page click ──(not transitioning)────────────────────────────► commit
//!                                                                    │
//!                                    is_transitioning = true ◄───────┤
//!                                    current_index = target          │
//!                                    Renderer::render ◄──────────────┤
//!                                    is_transitioning = false ◄──────┘
//! ```
//!
//! The host owns the clock: it passes `now` into every request and calls
//! [`BookController::poll`] from its event loop, waking no later than
//! [`BookController::next_deadline`].

mod debounce;
mod input;

use std::time::{Duration, Instant};

pub use debounce::{Debouncer, PendingNavigation};
pub use input::{BookInput, BookKey, InputOutcome, NavControl};

use crate::config::BookConfig;
use crate::services::renderer::Renderer;
use crate::traits::{write_surface, SurfaceId, SurfaceUpdate, Surfaces};
use crate::types::{has_leading_cover, Boundary, Locale, Side, Spread};

/// History entry pushed when the book view is entered
pub const BOOK_HISTORY_ENTRY: &str = "book";

/// Session navigation state
///
/// Owns the spread list exclusively; the renderer only borrows it per call.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub(crate) spreads: Vec<Spread>,
    pub(crate) current_index: usize,
    pub(crate) is_transitioning: bool,
    pub(crate) debouncer: Debouncer,
}

impl NavigationState {
    #[must_use]
    pub fn new(spreads: Vec<Spread>, debounce: Duration) -> Self {
        Self {
            spreads,
            current_index: 0,
            is_transitioning: false,
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn spreads(&self) -> &[Spread] {
        &self.spreads
    }

    pub fn total(&self) -> usize {
        self.spreads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_spread(&self) -> Option<&Spread> {
        self.spreads.get(self.current_index)
    }

    /// Whether index 0 holds a cover
    pub fn has_cover(&self) -> bool {
        has_leading_cover(&self.spreads)
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.debouncer.pending()
    }

    pub fn boundary(&self) -> Boundary {
        Boundary::at(self.current_index, self.total())
    }

    /// Validate a target: in range and different from the current index
    fn resolve(&self, target: isize) -> Option<usize> {
        let index = usize::try_from(target).ok()?;
        (index < self.total() && index != self.current_index).then_some(index)
    }

    fn offset(&self, delta: isize) -> isize {
        isize::try_from(self.current_index)
            .unwrap_or(isize::MAX)
            .saturating_add(delta)
    }

    fn last_index(&self) -> isize {
        isize::try_from(self.total())
            .unwrap_or(isize::MAX)
            .saturating_sub(1)
    }
}

/// Book controller: navigation state plus the renderer it drives
#[derive(Debug, Clone)]
pub struct BookController {
    state: NavigationState,
    renderer: Renderer,
    book_open: bool,
}

impl BookController {
    /// Create the session controller
    ///
    /// # Arguments
    /// * `spreads` - Extracted spread list (may be empty)
    /// * `config` - Page capacity, debounce delay, locale
    #[must_use]
    pub fn new(spreads: Vec<Spread>, config: &BookConfig) -> Self {
        Self {
            state: NavigationState::new(spreads, config.debounce()),
            renderer: Renderer::new(config),
            book_open: false,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn is_book_open(&self) -> bool {
        self.book_open
    }

    /// Schedule a debounced navigation, superseding any pending one
    ///
    /// Returns `false` when there is nothing to navigate.
    pub fn request_navigate(&mut self, target: isize, now: Instant) -> bool {
        if self.state.is_empty() {
            return false;
        }
        if let Some(replaced) = self.state.debouncer.queue(target, now) {
            log::trace!("Navigation to {} superseded by {target}", replaced.target);
        }
        true
    }

    /// Fire the pending navigation if its window has elapsed
    ///
    /// Returns whether a commit changed the current spread.
    pub fn poll<S>(&mut self, now: Instant, surfaces: &mut S) -> bool
    where
        S: Surfaces + ?Sized,
    {
        match self.state.debouncer.take_ready(now) {
            Some(target) => self.commit(target, surfaces),
            None => false,
        }
    }

    /// When the host must call [`Self::poll`] next
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.debouncer.deadline()
    }

    /// Move to `target` immediately
    ///
    /// Out-of-range targets and the current index are silent no-ops.
    pub fn commit<S>(&mut self, target: isize, surfaces: &mut S) -> bool
    where
        S: Surfaces + ?Sized,
    {
        let Some(index) = self.state.resolve(target) else {
            return false;
        };

        self.state.is_transitioning = true;
        let from = self.state.current_index;
        self.state.current_index = index;
        log::debug!("Spread {from} -> {index}");
        self.renderer.render(&self.state, surfaces);
        self.state.is_transitioning = false;
        true
    }

    /// Direct page click: ignored mid-transition, otherwise commits at once
    pub fn click<S>(&mut self, side: Side, surfaces: &mut S) -> bool
    where
        S: Surfaces + ?Sized,
    {
        if self.state.is_transitioning {
            return false;
        }
        let boundary = self.state.boundary();
        match side {
            Side::Left if boundary.has_previous => {
                self.commit(self.state.offset(-1), surfaces)
            }
            Side::Right if boundary.has_next => self.commit(self.state.offset(1), surfaces),
            _ => false,
        }
    }

    /// Enter the book presentation at `index`
    ///
    /// Pushes one history entry on entry. If the list is empty, `fallback`
    /// gets one chance to re-extract; still empty means nothing is opened.
    pub fn open_book<S, F>(&mut self, index: usize, surfaces: &mut S, fallback: F) -> bool
    where
        S: Surfaces + ?Sized,
        F: FnOnce() -> Vec<Spread>,
    {
        if self.state.is_empty() {
            let spreads = fallback();
            if spreads.is_empty() {
                log::warn!("Book view requested but there are no spreads");
                return false;
            }
            log::info!("Re-extracted {} spreads on book open", spreads.len());
            self.state.spreads = spreads;
        }

        if !self.book_open {
            self.book_open = true;
            surfaces.push_history(BOOK_HISTORY_ENTRY);
        }
        self.state.debouncer.cancel();
        self.state.current_index = index.min(self.state.total() - 1);
        log::info!("Opened book at spread {}", self.state.current_index);

        write_surface(surfaces, SurfaceId::Book, SurfaceUpdate::Visible(true));
        self.renderer.render(&self.state, surfaces);
        true
    }

    /// Leave the book presentation; drops any pending navigation
    pub fn close_book<S>(&mut self, surfaces: &mut S) -> bool
    where
        S: Surfaces + ?Sized,
    {
        if !self.book_open {
            return false;
        }
        self.book_open = false;
        self.state.debouncer.cancel();
        write_surface(surfaces, SurfaceId::Book, SurfaceUpdate::Visible(false));
        log::info!("Closed book at spread {}", self.state.current_index);
        true
    }

    /// Switch placeholder language and re-render the open book
    pub fn set_locale<S>(&mut self, locale: Locale, surfaces: &mut S)
    where
        S: Surfaces + ?Sized,
    {
        self.renderer.set_locale(locale);
        if self.book_open {
            self.renderer.render(&self.state, surfaces);
        }
    }
}
