// SPDX-License-Identifier: MPL-2.0
//! Container styles for the composer panel and the surface cards.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Composer side panel. Derived from the iced theme background so it reads
/// in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One surface card.
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.card_background;
    let border_color = colors.card_border;
    let text_color = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Media box behind the image; visible as bars when the image is contained.
pub fn media_box(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let backdrop = colors.media_backdrop;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(backdrop)),
        ..Default::default()
    }
}

/// Pill label such as the fit mode or the truncation marker.
pub fn badge(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.badge_background;
    let text_color = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}
