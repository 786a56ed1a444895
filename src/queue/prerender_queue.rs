//! Append-only prerender work queue
//!
//! Entries keep discovery order and are unique by canonical URL. The crawl
//! loop may move an entry's status forward but cannot insert, remove, or
//! reorder entries other than through [`PrerenderQueue::try_push`].
//!
//! The queue assumes a single writer. Check-then-append is not atomic, so a
//! caller rendering pages in parallel must serialize its calls into the queue
//! builder.

use crate::state::{LocationStatus, PrerenderLocation};
use crate::{QueueError, QueueResult};
use std::collections::HashSet;

/// Ordered, deduplicated list of locations to prerender
#[derive(Debug, Clone, Default)]
pub struct PrerenderQueue {
    /// Locations in discovery order
    locations: Vec<PrerenderLocation>,

    /// Canonical URLs already present in `locations`
    seen: HashSet<String>,
}

/// Number of queue entries per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub complete: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.pending + self.processing + self.complete
    }
}

impl PrerenderQueue {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PrerenderLocation> {
        self.locations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PrerenderLocation> {
        self.locations.iter()
    }

    /// Appends a location as pending unless its URL is already queued
    ///
    /// Duplicates are detected by exact string comparison of the canonical
    /// URL. Returns true if the location was added.
    pub fn try_push(&mut self, mut location: PrerenderLocation) -> bool {
        if !self.seen.insert(location.url().to_string()) {
            return false;
        }

        location.set_status(LocationStatus::Pending);
        self.locations.push(location);
        true
    }

    /// Updates the status of the entry at `index`
    pub fn set_status(&mut self, index: usize, status: LocationStatus) -> QueueResult<()> {
        let len = self.locations.len();
        let location = self
            .locations
            .get_mut(index)
            .ok_or(QueueError::OutOfBounds { index, len })?;

        location.set_status(status);
        Ok(())
    }

    /// Index of the earliest-discovered location still pending
    pub fn next_pending(&self) -> Option<usize> {
        self.locations
            .iter()
            .position(|l| l.status() == Some(LocationStatus::Pending))
    }

    /// Returns true once every entry has reached a terminal status
    pub fn is_exhausted(&self) -> bool {
        self.locations
            .iter()
            .all(|l| l.status().is_some_and(|s| s.is_terminal()))
    }

    /// Counts entries per status
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for location in &self.locations {
            match location.status() {
                Some(LocationStatus::Pending) | None => counts.pending += 1,
                Some(LocationStatus::Processing) => counts.processing += 1,
                Some(LocationStatus::Complete) => counts.complete += 1,
            }
        }
        counts
    }
}

impl<'a> IntoIterator for &'a PrerenderQueue {
    type Item = &'a PrerenderLocation;
    type IntoIter = std::slice::Iter<'a, PrerenderLocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}
