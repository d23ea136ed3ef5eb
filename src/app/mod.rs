// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the inputs (selected file, post text), the preview projected
//! from them, and the user preferences. Policy that the user can observe,
//! like which image wins when loads race or when settings are written,
//! lives in [`update`] so it can be audited in one place.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::i18n::fluent::I18n;
use crate::media::SourceSlot;
use crate::preview::{ImageStatus, Preview};
use crate::surface::{self, default_catalog};
use crate::surface::text::TextMetrics;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::text_editor;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub struct App {
    pub i18n: I18n,
    /// Explicit settings directory. `None` resolves through [`paths`].
    config_dir: Option<PathBuf>,
    preview: Preview,
    content: text_editor::Content,
    source: SourceSlot,
    image_status: ImageStatus,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("image_status", &self.image_status)
            .field("active_source", &self.source.active())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config_dir: None,
            preview: Preview::new(default_catalog(), TextMetrics::default()),
            content: text_editor::Content::new(),
            source: SourceSlot::new(),
            image_status: ImageStatus::Empty,
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::boot(flags, config, config_warning, None)
    }

    /// Builds the initial state from an already loaded config.
    fn boot(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);
        let (surfaces, surfaces_rejected) = surface::resolve_catalog(config.surfaces.clone());

        let mut app = App {
            i18n,
            config_dir,
            preview: Preview::new(surfaces, config.text.metrics()),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if surfaces_rejected {
            app.notifications
                .push(Notification::warning("notification-surfaces-invalid"));
        }

        if let Some(text) = flags.text {
            app.content = text_editor::Content::with_text(&text);
            app.preview.set_text(text);
        }

        let task = match flags.file_path {
            Some(path) => app.update(Message::FileDropped(PathBuf::from(path))),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.source.active() {
            Some(handle) => format!("{} - {app_name}", handle.name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config_dir: self.config_dir.as_ref(),
            preview: &mut self.preview,
            content: &mut self.content,
            source: &mut self.source,
            image_status: &mut self.image_status,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Composer(composer_message) => {
                update::handle_composer_message(&mut ctx, composer_message)
            }
            Message::OpenFileDialogResult(path) => update::handle_file_dialog_result(&mut ctx, path),
            Message::FileDropped(path) => update::select_file(&mut ctx, path),
            Message::ImageDecoded(decoded) => update::handle_image_decoded(&mut ctx, decoded),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            preview: &self.preview,
            content: &self.content,
            image_status: &self.image_status,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}
