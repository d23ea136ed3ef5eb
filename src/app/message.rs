// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::DecodeResult;
use crate::ui::composer;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Composer(composer::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog. `None` when the user cancelled.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A background decode finished.
    ImageDecoded(DecodeResult),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CARD_PREVIEW_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Post text to prefill the editor with.
    pub text: Option<String>,
}
