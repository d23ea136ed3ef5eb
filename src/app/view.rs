// SPDX-License-Identifier: MPL-2.0
//! Window layout: composer on the left, surface cards on the right, toasts
//! stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::preview::{ImageStatus, Preview};
use crate::ui::composer;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Toast};
use crate::ui::surface_card;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{scrollable, text_editor, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preview: &'a Preview,
    pub content: &'a text_editor::Content,
    pub image_status: &'a ImageStatus,
    pub theme_mode: ThemeMode,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    // Computed per frame so the System mode follows OS changes.
    let colors = ColorScheme::for_mode(ctx.theme_mode);

    let composer_view = composer::view(composer::ViewContext {
        i18n: ctx.i18n,
        colors,
        content: ctx.content,
        image_status: ctx.image_status,
        char_count: ctx.preview.char_count(),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Composer);

    let cards = surfaces_view(ctx.i18n, colors, ctx.preview);

    let layout = Row::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(composer_view)
        .push(
            scrollable(cards)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let base = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(colors.window_background.into()),
            ..Default::default()
        });

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(base).push(toasts).into()
}

fn surfaces_view<'a>(
    i18n: &'a I18n,
    colors: ColorScheme,
    preview: &'a Preview,
) -> Element<'a, Message> {
    let card_ctx = surface_card::ViewContext {
        i18n,
        colors,
        metrics: preview.metrics(),
    };

    preview
        .views()
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, surface| {
            column.push(surface_card::view(&card_ctx, surface))
        })
        .into()
}
