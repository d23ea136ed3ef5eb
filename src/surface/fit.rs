// SPDX-License-Identifier: MPL-2.0
//! Fits an image into a surface's media box.
//!
//! The media box is always as wide as the surface. Its height follows the
//! image aspect ratio while that stays inside the surface's height range;
//! outside of it the box is clamped to the nearest bound and the image is
//! cropped to fill.

use super::SurfaceConfig;
use crate::error::LayoutError;

/// How the image fills its media box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Whole image visible, no crop.
    #[default]
    Contain,
    /// Image scaled to fill the box, overflow cropped.
    Cover,
}

impl FitMode {
    /// Lowercase name, matching the CSS `object-fit` values.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FitMode::Contain => "contain",
            FitMode::Cover => "cover",
        }
    }
}

impl From<FitMode> for iced::ContentFit {
    fn from(mode: FitMode) -> Self {
        match mode {
            FitMode::Contain => iced::ContentFit::Contain,
            FitMode::Cover => iced::ContentFit::Cover,
        }
    }
}

/// Resolved media box geometry for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Unrounded box height in logical pixels.
    pub height: f32,
    pub mode: FitMode,
}

impl Fit {
    /// Box height as rendered (nearest whole pixel).
    #[must_use]
    pub fn rounded_height(&self) -> f32 {
        self.height.round()
    }
}

/// Natural aspect ratio (width / height) of an image.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyImage`] when either dimension is zero.
pub fn aspect_ratio(width: u32, height: u32) -> Result<f32, LayoutError> {
    if width == 0 || height == 0 {
        return Err(LayoutError::EmptyImage { width, height });
    }
    Ok(width as f32 / height as f32)
}

/// Computes the media box height and fit mode for `surface`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidAspectRatio`] when `ratio` is not a finite
/// positive number.
pub fn resolve_fit(ratio: f32, surface: &SurfaceConfig) -> Result<Fit, LayoutError> {
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(LayoutError::InvalidAspectRatio(ratio));
    }

    let desired = surface.width / ratio;

    let fit = if desired < surface.min_height {
        Fit {
            height: surface.min_height,
            mode: FitMode::Cover,
        }
    } else if desired > surface.max_height {
        Fit {
            height: surface.max_height,
            mode: FitMode::Cover,
        }
    } else {
        Fit {
            height: desired,
            mode: FitMode::Contain,
        }
    };

    Ok(fit)
}
