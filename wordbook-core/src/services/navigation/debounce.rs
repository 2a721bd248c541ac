//! Trailing-edge debounce for navigation requests

use std::time::{Duration, Instant};

/// A navigation request waiting for its debounce window to elapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingNavigation {
    /// Requested index, unvalidated (may be -1 or past the end)
    pub target: isize,
    /// When the request fires
    pub due: Instant,
}

/// Holds at most one pending request; each new request supersedes the last
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingNavigation>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Queue a request, returning the one it replaced
    pub fn queue(&mut self, target: isize, now: Instant) -> Option<PendingNavigation> {
        self.pending.replace(PendingNavigation {
            target,
            due: now + self.delay,
        })
    }

    /// Take the pending target once its window has elapsed
    pub fn take_ready(&mut self, now: Instant) -> Option<isize> {
        let pending = self.pending?;
        if now >= pending.due {
            self.pending = None;
            Some(pending.target)
        } else {
            None
        }
    }

    /// Drop any pending request
    pub fn cancel(&mut self) -> Option<PendingNavigation> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&PendingNavigation> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
