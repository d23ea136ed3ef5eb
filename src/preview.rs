// SPDX-License-Identifier: MPL-2.0
//! View model for the surface cards.
//!
//! [`project`] is a pure function of (decoded image, post text, surface
//! catalog, text metrics). The UI layer only draws what it returns, so every
//! card is recomputed from scratch whenever either input changes.

use crate::error::LayoutError;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::surface::fit::{self, FitMode};
use crate::surface::text::{self, GlyphMeasurer, TextMeasurer, TextMetrics};
use crate::surface::SurfaceConfig;
use iced::widget::image;

/// Image part of a card.
#[derive(Debug, Clone)]
pub struct MediaView {
    pub handle: image::Handle,
    /// Media box height, rounded to whole pixels.
    pub height: f32,
    pub fit: FitMode,
}

/// Text part of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    /// Lines shown inside the clamp.
    pub visible: String,
    pub truncated: bool,
    pub line_clamp: u32,
}

/// Everything needed to draw one surface card.
#[derive(Debug, Clone)]
pub struct SurfaceView {
    pub id: String,
    pub label_key: String,
    pub width: f32,
    pub media: Option<MediaView>,
    pub text: TextView,
}

/// Projects the inputs onto one view per surface, in catalog order.
///
/// # Errors
///
/// Returns a [`LayoutError`] when the image has no usable aspect ratio.
pub fn project(
    image: Option<&ImageData>,
    text: &str,
    surfaces: &[SurfaceConfig],
    metrics: &TextMetrics,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<SurfaceView>, LayoutError> {
    let ratio = image
        .map(|img| fit::aspect_ratio(img.width, img.height))
        .transpose()?;

    surfaces
        .iter()
        .map(|surface| {
            let media = match (image, ratio) {
                (Some(img), Some(ratio)) => {
                    let fit = fit::resolve_fit(ratio, surface)?;
                    Some(MediaView {
                        handle: img.handle.clone(),
                        height: fit.rounded_height(),
                        fit: fit.mode,
                    })
                }
                _ => None,
            };

            let truncation = text::resolve_truncation(text, surface, metrics, measurer);

            Ok(SurfaceView {
                id: surface.id.clone(),
                label_key: surface.label_key(),
                width: surface.width,
                media,
                text: TextView {
                    visible: truncation.visible,
                    truncated: truncation.truncated,
                    line_clamp: surface.text_lines,
                },
            })
        })
        .collect()
}

/// Status of the image input, shown in the image meta label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageStatus {
    #[default]
    Empty,
    Loading {
        name: String,
    },
    Loaded {
        name: String,
        width: u32,
        height: u32,
    },
    Failed {
        name: String,
    },
}

impl ImageStatus {
    #[must_use]
    pub fn label(&self, i18n: &I18n) -> String {
        match self {
            ImageStatus::Empty => i18n.tr("image-meta-empty"),
            ImageStatus::Loading { name } => {
                i18n.tr_with_args("image-meta-loading", &[("name", name)])
            }
            ImageStatus::Loaded {
                name,
                width,
                height,
            } => i18n.tr_with_args(
                "image-meta-loaded",
                &[
                    ("name", name),
                    ("width", &width.to_string()),
                    ("height", &height.to_string()),
                ],
            ),
            ImageStatus::Failed { name } => {
                i18n.tr_with_args("image-meta-error", &[("name", name)])
            }
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ImageStatus::Failed { .. })
    }
}

/// Holds the current inputs and the cards projected from them.
#[derive(Debug)]
pub struct Preview {
    surfaces: Vec<SurfaceConfig>,
    metrics: TextMetrics,
    measurer: GlyphMeasurer,
    image: Option<ImageData>,
    text: String,
    views: Vec<SurfaceView>,
}

impl Preview {
    #[must_use]
    pub fn new(surfaces: Vec<SurfaceConfig>, metrics: TextMetrics) -> Self {
        let mut preview = Self {
            surfaces,
            metrics,
            measurer: GlyphMeasurer::new(&metrics),
            image: None,
            text: String::new(),
            views: Vec::new(),
        };
        preview.refresh_text_only();
        preview
    }

    /// Shows `image` on every surface.
    ///
    /// # Errors
    ///
    /// Leaves the preview untouched and returns the error when the image
    /// cannot be fitted.
    pub fn set_image(&mut self, image: ImageData) -> Result<(), LayoutError> {
        let views = project(
            Some(&image),
            &self.text,
            &self.surfaces,
            &self.metrics,
            &self.measurer,
        )?;
        self.image = Some(image);
        self.views = views;
        Ok(())
    }

    /// Removes the image from every surface.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.refresh_text_only();
    }

    /// Replaces the post text and recomputes truncation on every surface.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        match project(
            self.image.as_ref(),
            &self.text,
            &self.surfaces,
            &self.metrics,
            &self.measurer,
        ) {
            Ok(views) => self.views = views,
            Err(err) => {
                // Only reachable if a stored image stopped fitting; drop it.
                log::warn!("Dropping image that no longer fits: {err}");
                self.clear_image();
            }
        }
    }

    fn refresh_text_only(&mut self) {
        // Without an image the projection cannot fail.
        self.views = project(
            None,
            &self.text,
            &self.surfaces,
            &self.metrics,
            &self.measurer,
        )
        .unwrap_or_default();
    }

    #[must_use]
    pub fn views(&self) -> &[SurfaceView] {
        &self.views
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Characters in the post text, counted as Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }
}
