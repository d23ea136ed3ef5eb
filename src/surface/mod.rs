// SPDX-License-Identifier: MPL-2.0
//! Preview surfaces and the per-surface layout resolvers.
//!
//! A surface is a named card context (desktop feed, mobile feed, profile, ...)
//! with a fixed width, an allowed media height range, and a text line clamp.
//! Every input the user gives is applied to each surface independently.
//!
//! - [`fit`] - Fits an image aspect ratio into a surface's height range
//! - [`text`] - Measures post text and decides whether it overflows the clamp

pub mod fit;
pub mod text;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Static description of one preview surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Stable identifier, also used to build the i18n label key.
    pub id: String,
    /// Card width in logical pixels.
    pub width: f32,
    /// Smallest media box height before the image gets cropped.
    pub min_height: f32,
    /// Largest media box height before the image gets cropped.
    pub max_height: f32,
    /// Lines of post text shown before truncation.
    pub text_lines: u32,
}

impl SurfaceConfig {
    pub fn new(
        id: impl Into<String>,
        width: f32,
        min_height: f32,
        max_height: f32,
        text_lines: u32,
    ) -> Self {
        Self {
            id: id.into(),
            width,
            min_height,
            max_height,
            text_lines,
        }
    }

    /// i18n key for the surface's display name.
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("surface-{}", self.id)
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Config("surface id must not be empty".into()));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::Config(format!(
                "surface '{}' has invalid width {}",
                self.id, self.width
            )));
        }
        if !(self.min_height.is_finite() && self.max_height.is_finite())
            || self.min_height < 0.0
            || self.min_height > self.max_height
        {
            return Err(Error::Config(format!(
                "surface '{}' has invalid height range {}..{}",
                self.id, self.min_height, self.max_height
            )));
        }
        if self.text_lines == 0 {
            return Err(Error::Config(format!(
                "surface '{}' must allow at least one text line",
                self.id
            )));
        }
        Ok(())
    }
}

/// Built-in surface catalog.
#[must_use]
pub fn default_catalog() -> Vec<SurfaceConfig> {
    vec![
        SurfaceConfig::new("feed-desktop", 560.0, 280.0, 640.0, 3),
        SurfaceConfig::new("feed-mobile", 360.0, 220.0, 520.0, 4),
        SurfaceConfig::new("profile", 620.0, 280.0, 640.0, 3),
        SurfaceConfig::new("repost", 520.0, 240.0, 520.0, 3),
        SurfaceConfig::new("permalink", 720.0, 320.0, 720.0, 5),
    ]
}

/// Checks a catalog for empty input, duplicate ids, and impossible geometry.
///
/// # Errors
///
/// Returns [`Error::Config`] describing the first offending surface.
pub fn validate_catalog(surfaces: &[SurfaceConfig]) -> Result<()> {
    if surfaces.is_empty() {
        return Err(Error::Config("surface catalog is empty".into()));
    }

    let mut seen = HashSet::new();
    for surface in surfaces {
        surface.validate()?;
        if !seen.insert(surface.id.as_str()) {
            return Err(Error::Config(format!(
                "duplicate surface id '{}'",
                surface.id
            )));
        }
    }
    Ok(())
}

/// Returns the configured catalog when it is valid, otherwise the built-in one.
///
/// The boolean is `true` when the configured catalog was rejected.
pub fn resolve_catalog(configured: Option<Vec<SurfaceConfig>>) -> (Vec<SurfaceConfig>, bool) {
    match configured {
        None => (default_catalog(), false),
        Some(surfaces) => match validate_catalog(&surfaces) {
            Ok(()) => (surfaces, false),
            Err(err) => {
                log::warn!("Ignoring configured surfaces: {err}");
                (default_catalog(), true)
            }
        },
    }
}
