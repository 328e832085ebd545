// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! The viewer never decodes video itself: it tells the presentation surface
//! how to play the current clip and reacts to the signals the surface emits.

/// Playback mode of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Manual browsing; videos loop.
    #[default]
    Paused,
    /// Timed / playback-driven auto-advance.
    Slideshow,
}

impl PlaybackMode {
    /// Returns true while the slideshow is running.
    #[must_use]
    pub fn is_slideshow(self) -> bool {
        matches!(self, Self::Slideshow)
    }

    /// Symbol shown on the play/pause button.
    ///
    /// The button offers the opposite action of the current mode.
    #[must_use]
    pub fn button_symbol(self) -> &'static str {
        match self {
            Self::Paused => "▶",
            Self::Slideshow => "❚❚",
        }
    }

    /// Directive for a video displayed in this mode.
    #[must_use]
    pub fn video_directive(self) -> VideoDirective {
        VideoDirective {
            autoplay: true,
            looping: !self.is_slideshow(),
            muted: true,
        }
    }
}

/// How the presentation surface should play the displayed video.
///
/// Videos are always muted and autoplay. They loop while browsing; during a
/// slideshow they play once so the `ended` signal can drive auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoDirective {
    pub autoplay: bool,
    pub looping: bool,
    pub muted: bool,
}

/// Signals emitted by the surface's video element.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSignal {
    /// `loadedmetadata`: duration became known.
    LoadedMetadata { duration_secs: f64 },
    /// `play`: playback (re)started.
    Play,
    /// `ended`: playback reached the end without looping.
    Ended,
    /// `error`: the element failed to load or play.
    Error(String),
}
