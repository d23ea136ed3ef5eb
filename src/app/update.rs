// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Every handler receives an [`UpdateContext`] borrowing the parts of `App`
//! it may touch, mutates them, and returns the follow-up task.

use super::Message;
use crate::config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, DecodeResult, SourceSlot, IMAGE_EXTENSIONS};
use crate::preview::{ImageStatus, Preview};
use crate::ui::composer;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::text_editor;
use iced::Task;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Mutable view of the application state for one update.
pub(super) struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config_dir: Option<&'a PathBuf>,
    pub preview: &'a mut Preview,
    pub content: &'a mut text_editor::Content,
    pub source: &'a mut SourceSlot,
    pub image_status: &'a mut ImageStatus,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

pub(super) fn handle_composer_message(
    ctx: &mut UpdateContext<'_>,
    message: composer::Message,
) -> Task<Message> {
    match message {
        composer::Message::OpenFile => handle_open_file_dialog(),
        composer::Message::ClearImage => {
            clear_image(ctx);
            Task::none()
        }
        composer::Message::TextEdited(action) => {
            handle_text_edited(ctx, action);
            Task::none()
        }
        composer::Message::LanguageSelected(locale) => handle_language_selected(ctx, locale),
        composer::Message::ThemeSelected(mode) => handle_theme_selected(ctx, mode),
    }
}

/// Opens the native picker, filtered to decodable image formats.
pub(super) fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Cancelling the dialog leaves the current image and handle alone.
pub(super) fn handle_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => select_file(ctx, path),
        None => Task::none(),
    }
}

/// Swaps the active source for `path` and starts decoding it.
///
/// The previous image stays on the surfaces until the new decode lands.
pub(super) fn select_file(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    let handle = ctx.source.acquire(path);
    ctx.notifications.clear_load_errors();
    *ctx.image_status = ImageStatus::Loading {
        name: handle.name().to_string(),
    };
    log::info!("Decoding {}", handle.path().display());

    Task::perform(media::decode(handle), Message::ImageDecoded)
}

/// No file: release the handle and reset every surface to the empty state.
pub(super) fn clear_image(ctx: &mut UpdateContext<'_>) {
    ctx.source.release();
    ctx.preview.clear_image();
    *ctx.image_status = ImageStatus::Empty;
}

pub(super) fn handle_image_decoded(
    ctx: &mut UpdateContext<'_>,
    decoded: DecodeResult,
) -> Task<Message> {
    if !ctx.source.is_active(decoded.source) {
        log::debug!("Dropping decode result for superseded {:?}", decoded.source);
        return Task::none();
    }

    let name = ctx
        .source
        .active()
        .map(|handle| handle.name().to_string())
        .unwrap_or_default();

    let applied = decoded.result.and_then(|image| {
        let (width, height) = (image.width, image.height);
        ctx.preview.set_image(image)?;
        Ok((width, height))
    });

    match applied {
        Ok((width, height)) => {
            log::info!("Loaded {name} ({width}x{height})");
            *ctx.image_status = ImageStatus::Loaded {
                name,
                width,
                height,
            };
        }
        Err(err) => fail_load(ctx, name, &err),
    }
    Task::none()
}

fn fail_load(ctx: &mut UpdateContext<'_>, name: String, err: &Error) {
    log::warn!("Failed to load {name}: {err}");
    ctx.source.release();
    ctx.preview.clear_image();
    ctx.notifications
        .push(Notification::error(load_error_key(err)).with_arg("name", name.clone()));
    *ctx.image_status = ImageStatus::Failed { name };
}

fn load_error_key(err: &Error) -> &'static str {
    match err {
        Error::Io(_) => "notification-load-error-io",
        _ => "notification-load-error-decode",
    }
}

/// Applies the editor action; edits re-run truncation on every surface.
pub(super) fn handle_text_edited(ctx: &mut UpdateContext<'_>, action: text_editor::Action) {
    let is_edit = action.is_edit();
    ctx.content.perform(action);
    if is_edit {
        ctx.preview.set_text(ctx.content.text());
    }
}

fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    if !ctx.i18n.set_locale(locale.clone()) {
        log::warn!("Ignoring unknown locale {locale}");
        return Task::none();
    }
    persist_preferences(ctx, |cfg| cfg.general.language = Some(locale.to_string()));
    Task::none()
}

fn handle_theme_selected(ctx: &mut UpdateContext<'_>, mode: ThemeMode) -> Task<Message> {
    *ctx.theme_mode = mode;
    persist_preferences(ctx, |cfg| cfg.general.theme_mode = mode);
    Task::none()
}

/// Re-reads settings.toml, applies `change`, and writes it back so sections
/// the UI does not edit (text metrics, surfaces) survive untouched.
///
/// An existing file that no longer parses is left alone; the change then
/// only lasts for this session.
fn persist_preferences(ctx: &mut UpdateContext<'_>, change: impl FnOnce(&mut config::Config)) {
    let (mut cfg, load_warning) = config::load_with_override(ctx.config_dir.cloned());
    if load_warning.is_some() {
        log::warn!("Not saving preferences: existing settings file could not be read");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
        return;
    }
    change(&mut cfg);

    if let Err(err) = config::save_with_override(&cfg, ctx.config_dir.cloned()) {
        log::warn!("Failed to save config: {err}");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_failures_get_their_own_toast() {
        assert_eq!(
            load_error_key(&Error::Io("gone".into())),
            "notification-load-error-io"
        );
        assert_eq!(
            load_error_key(&Error::Decode("bad".into())),
            "notification-load-error-decode"
        );
        assert_eq!(
            load_error_key(&Error::Svg("bad".into())),
            "notification-load-error-decode"
        );
    }
}
