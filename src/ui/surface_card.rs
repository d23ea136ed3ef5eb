// SPDX-License-Identifier: MPL-2.0
//! Draws one [`SurfaceView`] as a card of the surface's fixed width.
//!
//! The card only reads the view model; media height, fit mode, and the
//! clamped text were all resolved before reaching this module.

use crate::i18n::fluent::I18n;
use crate::preview::{MediaView, SurfaceView, TextView};
use crate::surface::text::TextMetrics;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{container, image, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Padding, Pixels};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub metrics: &'a TextMetrics,
}

pub fn view<'a, Message: 'a>(ctx: &ViewContext<'a>, surface: &'a SurfaceView) -> Element<'a, Message> {
    let inset = ctx.metrics.inset;

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(text(ctx.i18n.tr(&surface.label_key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            text(format!("{}px", surface.width))
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );

    let mut card = Column::new()
        .width(Length::Fixed(surface.width))
        .push(Container::new(header).padding(Padding::from([spacing::SM, inset])));

    card = match &surface.media {
        Some(media) => card.push(media_box(ctx, media, surface.width)),
        None => card.push(
            Container::new(
                text(ctx.i18n.tr("surface-no-image"))
                    .size(typography::CAPTION)
                    .color(ctx.colors.text_secondary),
            )
            .padding(Padding::from([spacing::XS, inset])),
        ),
    };

    card = card.push(
        Container::new(text_block(ctx, &surface.text))
            .width(Length::Fill)
            .padding(Padding::from([spacing::SM, inset])),
    );

    Container::new(card)
        .style(styles::container::card(&ctx.colors))
        .clip(true)
        .into()
}

fn media_box<'a, Message: 'a>(
    ctx: &ViewContext<'a>,
    media: &'a MediaView,
    width: f32,
) -> Element<'a, Message> {
    let picture = image(media.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(media.fit.into());

    let fit_key = format!("surface-fit-{}", media.fit.as_str());
    let caption = Row::new()
        .spacing(spacing::XS)
        .push(
            Container::new(text(ctx.i18n.tr(&fit_key)).size(typography::CAPTION))
                .padding(Padding::from([spacing::XXS / 2.0, spacing::XS]))
                .style(styles::container::badge(&ctx.colors)),
        )
        .push(
            text(format!("{}px", media.height))
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        );

    Column::new()
        .push(
            Container::new(picture)
                .width(Length::Fixed(width))
                .height(Length::Fixed(media.height))
                .style(styles::container::media_box(&ctx.colors))
                .clip(true),
        )
        .push(Container::new(caption).padding(Padding::from([spacing::XXS, ctx.metrics.inset])))
        .into()
}

fn text_block<'a, Message: 'a>(ctx: &ViewContext<'a>, view: &'a TextView) -> Element<'a, Message> {
    let body = text(view.visible.as_str())
        .size(ctx.metrics.font_size)
        .line_height(LineHeight::Absolute(Pixels(ctx.metrics.line_height)))
        .wrapping(Wrapping::WordOrGlyph);

    let clamp = Container::new(body)
        .width(Length::Fill)
        .max_height(ctx.metrics.line_height * view.line_clamp as f32)
        .clip(true);

    let mut block = Column::new().spacing(spacing::XXS).push(clamp);
    if view.truncated {
        block = block.push(
            container(text(ctx.i18n.tr("surface-truncated-badge")).size(typography::CAPTION))
                .padding(Padding::from([spacing::XXS / 2.0, spacing::XS]))
                .style(styles::container::badge(&ctx.colors)),
        );
    }
    block.into()
}
