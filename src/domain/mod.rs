// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and value objects with no external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It depends only on `std` (plus the crate's own default constants) to keep
//! it testable in isolation.
//!
//! # Modules
//!
//! - [`error`]: Per-item failures ([`MediaError`](error::MediaError))
//! - [`media`]: Media types ([`MediaKind`](media::MediaKind), [`MediaRecord`](media::MediaRecord),
//!   [`RawImage`](media::RawImage), [`VideoMetadata`](media::VideoMetadata))
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::ZoomScale),
//!   [`SlideDuration`](ui::SlideDuration), [`HideDelay`](ui::HideDelay)) and geometry
//! - [`video`]: Video playback types ([`PlaybackMode`](video::PlaybackMode),
//!   [`VideoSignal`](video::VideoSignal))

pub mod error;
pub mod media;
pub mod ui;
pub mod video;
