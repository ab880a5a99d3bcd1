//! List view-state: criteria, page, and fetch ordering.
//!
//! Two behavioral rules from the dashboard are load-bearing and live
//! here so every list view gets them for free:
//!
//! 1. Changing any filter criterion returns the view to page 1.
//! 2. A newer fetch always wins: results carry the generation token
//!    handed out by [`ListView::begin_fetch`], and a token that has been
//!    superseded is rejected with [`NasiyaError::Aborted`], so a fast
//!    sequence of searches can never have an earlier response overwrite
//!    a later one.

use std::time::{Duration, Instant};

use crate::config;
use crate::error::{NasiyaError, Result};
use crate::filter::{self, BranchIndex, Filterable, FilterCriteria};
use crate::paginate::{paginate, Paged};

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

/// Trailing-edge debounce for refetches.
///
/// A change arms the window; [`Debounce::ready`] reports true once the
/// window has elapsed with no further change, and [`Debounce::fire`]
/// disarms it. The window is clamped into the range the dashboard uses
/// (150–500 ms).
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    changed_at: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window: window.clamp(config::MIN_DEBOUNCE, config::MAX_DEBOUNCE),
            changed_at: None,
        }
    }

    /// Record a change at `now`, re-arming the window.
    pub fn note_change(&mut self, now: Instant) {
        self.changed_at = Some(now);
    }

    /// Whether the armed window has elapsed.
    pub fn ready(&self, now: Instant) -> bool {
        match self.changed_at {
            Some(changed) => now.duration_since(changed) >= self.window,
            None => false,
        }
    }

    /// Disarm after the refetch has been issued.
    pub fn fire(&mut self) {
        self.changed_at = None;
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(config::DEFAULT_DEBOUNCE)
    }
}

// ---------------------------------------------------------------------------
// ListView
// ---------------------------------------------------------------------------

/// Token identifying one fetch; stale tokens are rejected on apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// State of one list view: snapshot, criteria, page.
#[derive(Debug)]
pub struct ListView<T> {
    items: Vec<T>,
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
    generation: u64,
    debounce: Debounce,
}

impl<T: Filterable + Clone> ListView<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: page_size.max(1),
            generation: 0,
            debounce: Debounce::default(),
        }
    }

    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = Debounce::new(window);
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Install new criteria. Any actual change resets the page to 1 and
    /// arms the debounce window.
    pub fn set_criteria(&mut self, criteria: FilterCriteria, now: Instant) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.page = 1;
        self.debounce.note_change(now);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Whether the debounced refetch should fire now.
    pub fn refetch_ready(&self, now: Instant) -> bool {
        self.debounce.ready(now)
    }

    /// Start a fetch, superseding any in-flight one.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        self.debounce.fire();
        FetchToken(self.generation)
    }

    /// Install a fetched snapshot, unless the token has been superseded.
    pub fn apply_fetch(&mut self, token: FetchToken, items: Vec<T>) -> Result<()> {
        if token.0 != self.generation {
            log::debug!("discarding superseded fetch (generation {})", token.0);
            return Err(NasiyaError::Aborted);
        }
        self.items = items;
        Ok(())
    }

    /// The current page of the filtered snapshot.
    pub fn visible(&self, branches: &BranchIndex) -> Paged<T> {
        let filtered = filter::apply(&self.items, &self.criteria, branches);
        paginate(&filtered, self.page, self.page_size)
    }
}
