// SPDX-License-Identifier: MPL-2.0
//! Input panel: image picker, post text editor, status labels, preferences.

use crate::i18n::fluent::I18n;
use crate::preview::ImageStatus;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, pick_list, text, text_editor, Column, Container, Row, Text};
use iced::{Element, Length};
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    OpenFile,
    ClearImage,
    TextEdited(text_editor::Action),
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub content: &'a text_editor::Content,
    pub image_status: &'a ImageStatus,
    pub char_count: usize,
    pub theme_mode: ThemeMode,
}

/// Language entry for the picker, labelled in its own language.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageOption {
    locale: LanguageIdentifier,
    label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ThemeOption {
    mode: ThemeMode,
    label: String,
}

impl fmt::Display for ThemeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let heading = Text::new(i18n.tr("composer-heading")).size(typography::TITLE_SM);

    let has_input = !matches!(ctx.image_status, ImageStatus::Empty);
    let clear = button(text(i18n.tr("composer-clear-button")))
        .on_press_maybe(has_input.then_some(Message::ClearImage))
        .padding(spacing::XS)
        .style(styles::button::secondary);
    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text(i18n.tr("composer-open-button")))
                .on_press(Message::OpenFile)
                .padding(spacing::XS)
                .style(styles::button::primary),
        )
        .push(clear);

    let status_color = if ctx.image_status.is_error() {
        ctx.colors.error
    } else {
        ctx.colors.text_secondary
    };
    let image_meta = text(ctx.image_status.label(i18n))
        .size(typography::BODY_SM)
        .color(status_color);

    let drop_hint = text(i18n.tr("composer-drop-hint"))
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary);

    let editor = text_editor(ctx.content)
        .placeholder(i18n.tr("composer-text-placeholder"))
        .on_action(Message::TextEdited)
        .height(Length::Fixed(sizing::TEXT_EDITOR_HEIGHT));

    let text_meta = text(i18n.tr_count("text-meta", ctx.char_count))
        .size(typography::BODY_SM)
        .color(ctx.colors.text_secondary);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(buttons)
            .push(image_meta)
            .push(drop_hint)
            .push(editor)
            .push(text_meta)
            .push(language_picker(i18n))
            .push(theme_picker(i18n, ctx.theme_mode)),
    )
    .width(Length::Fixed(sizing::COMPOSER_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::panel)
    .into()
}

fn language_picker<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let options: Vec<LanguageOption> = i18n
        .available_locales
        .iter()
        .map(|locale| LanguageOption {
            locale: locale.clone(),
            label: i18n.tr(&format!("language-name-{locale}")),
        })
        .collect();
    let selected = options
        .iter()
        .find(|opt| &opt.locale == i18n.current_locale())
        .cloned();

    labelled(
        i18n.tr("composer-language-label"),
        pick_list(options, selected, |opt| Message::LanguageSelected(opt.locale))
            .padding(spacing::XS)
            .width(Length::Fill)
            .into(),
    )
}

fn theme_picker<'a>(i18n: &'a I18n, current: ThemeMode) -> Element<'a, Message> {
    let options: Vec<ThemeOption> = ThemeMode::ALL
        .iter()
        .map(|&mode| ThemeOption {
            mode,
            label: i18n.tr(mode.i18n_key()),
        })
        .collect();
    let selected = options.iter().find(|opt| opt.mode == current).cloned();

    labelled(
        i18n.tr("composer-theme-label"),
        pick_list(options, selected, |opt| Message::ThemeSelected(opt.mode))
            .padding(spacing::XS)
            .width(Length::Fill)
            .into(),
    )
}

fn labelled<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(control)
        .into()
}
