// SPDX-License-Identifier: MPL-2.0
//! Viewer core and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern. The
//! presentation surface is not part of the crate: it sends messages in and
//! renders the effects that come back.
//!
//! - [`viewer`] - Gallery controller with navigation, slideshow, zoom and chrome
//! - [`state`] - Plain state holders (transform, gesture scratch, viewport)

pub mod state;
pub mod viewer;
