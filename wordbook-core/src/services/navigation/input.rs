//! Input dispatcher: named input events → controller operations

use std::time::Instant;

use super::BookController;
use crate::traits::Surfaces;
use crate::types::Side;

/// Keys the book view understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookKey {
    ArrowRight,
    ArrowLeft,
    Home,
    End,
    Escape,
}

/// Previous / next control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Previous,
    Next,
}

/// One input event addressed to the book view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookInput {
    Key(BookKey),
    PageClick(Side),
    Control(NavControl),
}

/// What dispatching an input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing happened (book not active, empty list, at a boundary, mid-transition)
    Ignored,
    /// A debounced navigation was scheduled
    Queued,
    /// The current spread changed immediately
    Committed,
    /// The book view was closed; the host should show the list
    Closed,
}

impl BookController {
    /// Route one input event
    ///
    /// Input is honored only while the book view is active.
    pub fn dispatch<S>(&mut self, input: BookInput, now: Instant, surfaces: &mut S) -> InputOutcome
    where
        S: Surfaces + ?Sized,
    {
        if !self.book_open {
            return InputOutcome::Ignored;
        }

        let target = match input {
            BookInput::Key(BookKey::Escape) => {
                return if self.close_book(surfaces) {
                    InputOutcome::Closed
                } else {
                    InputOutcome::Ignored
                };
            }
            BookInput::PageClick(side) => {
                return if self.click(side, surfaces) {
                    InputOutcome::Committed
                } else {
                    InputOutcome::Ignored
                };
            }
            BookInput::Key(BookKey::ArrowRight) | BookInput::Control(NavControl::Next) => {
                self.state.offset(1)
            }
            BookInput::Key(BookKey::ArrowLeft) | BookInput::Control(NavControl::Previous) => {
                self.state.offset(-1)
            }
            BookInput::Key(BookKey::Home) => 0,
            BookInput::Key(BookKey::End) => self.state.last_index(),
        };

        if self.request_navigate(target, now) {
            InputOutcome::Queued
        } else {
            InputOutcome::Ignored
        }
    }
}
