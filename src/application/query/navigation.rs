// SPDX-License-Identifier: MPL-2.0
//! Read-only snapshots of the viewer for the presentation surface.

use crate::domain::media::{MediaKind, MediaRecord, MediaSource, RecordId, ThumbnailHandle};
use crate::domain::ui::Vector;
use crate::domain::video::VideoDirective;

/// Navigation state information for UI rendering.
///
/// Navigation wraps around, so `has_next`/`has_previous` only need a second
/// record, while `at_first`/`at_last` report the position itself.
// Allow excessive bools: read-only UI snapshot with orthogonal capability flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether there is a next media to navigate to.
    pub has_next: bool,
    /// Whether there is a previous media to navigate to.
    pub has_previous: bool,
    /// Whether the current media is the first in the store.
    pub at_first: bool,
    /// Whether the current media is the last in the store.
    pub at_last: bool,
    /// Current position in the store (0-indexed), if any.
    pub current_index: Option<usize>,
    /// Total number of records.
    pub total_count: usize,
}

impl NavigationInfo {
    /// Builds the info for a position within a store of `total_count` records.
    #[must_use]
    pub fn new(current_index: Option<usize>, total_count: usize) -> Self {
        let can_move = current_index.is_some() && total_count > 1;
        Self {
            has_next: can_move,
            has_previous: can_move,
            at_first: current_index == Some(0),
            at_last: current_index.is_some_and(|i| i + 1 == total_count),
            current_index,
            total_count,
        }
    }
}

/// One entry of the thumbnail strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailView {
    pub id: RecordId,
    pub name: String,
    pub kind: MediaKind,
    /// Absent until resolved, or for good if generation failed.
    pub thumbnail: Option<ThumbnailHandle>,
    /// Drawn from when `thumbnail` is [`ThumbnailHandle::Source`].
    pub source: MediaSource,
    pub active: bool,
}

/// Everything the surface needs to draw the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub navigation: NavigationInfo,
    /// Displayed record; `None` in the empty state.
    pub current: Option<MediaRecord>,
    /// Directive for the displayed record if it is a video.
    pub video: Option<VideoDirective>,
    pub thumbnails: Vec<ThumbnailView>,
    pub slideshow_active: bool,
    /// Symbol for the play/pause button.
    pub slideshow_label: &'static str,
    pub chrome_visible: bool,
    pub zoom_scale: f32,
    /// Screen-space content offset.
    pub offset: Vector,
}

impl ViewSnapshot {
    /// Whether the viewer shows the zero state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
