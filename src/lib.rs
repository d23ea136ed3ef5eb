// SPDX-License-Identifier: MPL-2.0
//! `card_preview` shows how one post image and text will look on several
//! feed surfaces at once, each with its own width, media height range, and
//! text line clamp.
//!
//! The layout rules live in [`surface`] and are pure; [`preview`] projects
//! the current inputs onto one view per surface, and [`app`] wires it into
//! an Iced application.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod preview;
pub mod surface;
pub mod ui;
