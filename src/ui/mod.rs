// SPDX-License-Identifier: MPL-2.0
//! User interface, Elm-style: state flows down, messages flow up.
//!
//! - [`composer`] - Image picker, text editor, status labels, preferences
//! - [`surface_card`] - One preview card per surface
//! - [`notifications`] - Toasts for load and settings problems
//! - [`styles`] - Widget styles
//! - [`design_tokens`] - Spacing, sizing, palette constants
//! - [`theming`] - Light/Dark/System palettes

pub mod composer;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod surface_card;
pub mod theming;
