// SPDX-License-Identifier: MPL-2.0
//! Ordered store of ingested media records.
//!
//! Records keep the order they were appended in. There is no de-duplication,
//! and a record's position only changes when an earlier record is removed.

use crate::domain::media::{MediaKind, MediaRecord, MediaSource, RecordId, ThumbnailHandle};
use std::ops::Range;

/// A record ready to be appended; the store assigns its [`RecordId`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub kind: MediaKind,
    pub source: MediaSource,
    pub display_name: String,
}

/// Insertion-ordered collection of media records.
#[derive(Debug, Clone, Default)]
pub struct MediaStore {
    records: Vec<MediaRecord>,
    next_id: u64,
}

impl MediaStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaRecord> {
        self.records.get(index)
    }

    /// Returns the kind of the record at `index`, if any.
    #[must_use]
    pub fn kind_at(&self, index: usize) -> Option<MediaKind> {
        self.records.get(index).map(|record| record.kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaRecord> {
        self.records.iter()
    }

    /// Returns the current position of the record with the given id.
    #[must_use]
    pub fn position_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// Appends records in the given order and returns the range of positions
    /// they now occupy. Thumbnails start out absent.
    pub fn append(&mut self, records: impl IntoIterator<Item = NewRecord>) -> Range<usize> {
        let start = self.records.len();
        for new in records {
            let id = RecordId(self.next_id);
            self.next_id += 1;
            self.records.push(MediaRecord {
                id,
                kind: new.kind,
                source: new.source,
                display_name: new.display_name,
                thumbnail: None,
            });
        }
        start..self.records.len()
    }

    /// Removes and returns the record at `index`.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<MediaRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    /// Sets the thumbnail of a record by id.
    ///
    /// Returns `false` if the record no longer exists (it may have been removed
    /// while its thumbnail was being generated).
    pub fn set_thumbnail(&mut self, id: RecordId, thumbnail: Option<ThumbnailHandle>) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.thumbnail = thumbnail;
                true
            }
            None => false,
        }
    }

    /// Index after `index`, wrapping around to the start.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if self.records.is_empty() {
            return None;
        }
        Some((index + 1) % self.records.len())
    }

    /// Index before `index`, wrapping around to the end.
    #[must_use]
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        let len = self.records.len();
        if len == 0 {
            return None;
        }
        Some((index % len + len - 1) % len)
    }
}
