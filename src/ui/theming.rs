// SPDX-License-Identifier: MPL-2.0
//! Light and dark palettes, and the persisted theme preference.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors used by the composer and the surface cards.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub window_background: Color,
    pub card_background: Color,
    pub card_border: Color,
    /// Shown around a contained image that does not fill its box.
    pub media_backdrop: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub error: Color,

    pub badge_background: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            window_background: palette::GRAY_100,
            card_background: palette::WHITE,
            card_border: palette::GRAY_200,
            media_backdrop: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            error: palette::ERROR_500,

            badge_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            window_background: palette::GRAY_900,
            card_background: Color::from_rgb(0.12, 0.12, 0.12),
            card_border: Color::from_rgb(0.25, 0.25, 0.25),
            media_backdrop: palette::BLACK,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            error: palette::ERROR_500,

            badge_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_400
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Returns true if the effective theme is dark.
    /// `System` asks the OS and falls back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }

    /// The iced built-in theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_cards() {
        let scheme = ColorScheme::light();
        assert!(scheme.card_background.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_cards() {
        let scheme = ColorScheme::dark();
        assert!(scheme.card_background.r < 0.2);
    }

    #[test]
    fn explicit_modes_pick_matching_scheme() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert!(ColorScheme::for_mode(ThemeMode::Dark).text_primary.r > 0.9);
        assert_eq!(ThemeMode::Light.iced_theme(), iced::Theme::Light);
        // System depends on the host; just make sure detection does not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_round_trips_through_toml_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper { mode: ThemeMode::Dark }).unwrap();
        assert_eq!(text.trim(), "mode = \"dark\"");
    }
}
