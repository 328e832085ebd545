// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer: the controller and its sub-components.

pub mod component;
pub mod subcomponents;

pub use component::{Appended, Effect, KeyAction, Message, ViewerController};
