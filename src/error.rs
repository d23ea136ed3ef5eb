// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Decode(String),
    Svg(String),
    Config(String),
    Layout(LayoutError),
}

/// Geometry errors raised while fitting an image into a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The image aspect ratio is zero, negative, or not a finite number.
    InvalidAspectRatio(f32),

    /// The image reported a zero width or height.
    EmptyImage { width: u32, height: u32 },
}

impl LayoutError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LayoutError::InvalidAspectRatio(_) => "error-layout-aspect-ratio",
            LayoutError::EmptyImage { .. } => "error-layout-empty-image",
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidAspectRatio(ratio) => {
                write!(f, "Invalid aspect ratio: {}", ratio)
            }
            LayoutError::EmptyImage { width, height } => {
                write!(f, "Image has empty dimensions: {}x{}", width, height)
            }
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error reaches the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Decode(_) | Error::Svg(_) => "error-load-decode",
            Error::Config(_) => "notification-config-load-error",
            Error::Layout(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Layout(e) => write!(f, "Layout Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Error::Layout(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn decode_and_svg_errors_share_user_facing_key() {
        assert_eq!(Error::Decode("x".into()).i18n_key(), "error-load-decode");
        assert_eq!(Error::Svg("x".into()).i18n_key(), "error-load-decode");
    }

    #[test]
    fn layout_error_converts_and_keeps_key() {
        let err: Error = LayoutError::InvalidAspectRatio(0.0).into();
        assert!(matches!(err, Error::Layout(LayoutError::InvalidAspectRatio(_))));
        assert_eq!(err.i18n_key(), "error-layout-aspect-ratio");
    }

    #[test]
    fn layout_error_display_mentions_dimensions() {
        let err = LayoutError::EmptyImage {
            width: 0,
            height: 12,
        };
        assert!(format!("{}", err).contains("0x12"));
    }
}
