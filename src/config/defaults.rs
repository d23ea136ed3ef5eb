// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Text**: Post text typography used for measurement and rendering
//! - **Window**: Initial and minimum window geometry

// ==========================================================================
// Text Defaults
// ==========================================================================

/// Default post text font size in logical pixels.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum allowed post text font size.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum allowed post text font size.
pub const MAX_FONT_SIZE: f32 = 32.0;

/// Default post text line height in logical pixels.
pub const DEFAULT_LINE_HEIGHT: f32 = 20.0;

/// Default horizontal text padding inside a card, per side.
pub const DEFAULT_TEXT_INSET: f32 = 16.0;

/// Maximum horizontal text padding, per side.
pub const MAX_TEXT_INSET: f32 = 64.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 800.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FONT_SIZE > 0.0);
    assert!(MAX_FONT_SIZE >= MIN_FONT_SIZE);
    assert!(DEFAULT_FONT_SIZE >= MIN_FONT_SIZE);
    assert!(DEFAULT_FONT_SIZE <= MAX_FONT_SIZE);

    // A line box must hold at least one line of glyphs.
    assert!(DEFAULT_LINE_HEIGHT >= DEFAULT_FONT_SIZE);

    assert!(DEFAULT_TEXT_INSET >= 0.0);
    assert!(DEFAULT_TEXT_INSET <= MAX_TEXT_INSET);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
