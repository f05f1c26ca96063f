// SPDX-License-Identifier: MPL-2.0
//! Hero slider controls: previous/next arrows, pagination dots, and the
//! autoplay progress bar.

use crate::i18n::I18n;
use iced::widget::{button, container, progress_bar, tooltip, Column, Row, Space, Text};
use iced::{alignment::Vertical, border, Background, Color, Element, Length, Shadow};

const DOT_SIZE: f32 = 10.0;
const DOT_ACTIVE: Color = Color::from_rgb(1.0, 1.0, 1.0);
const DOT_INACTIVE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.35);
const ARROW_BACKGROUND: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: usize,
    pub slide_count: usize,
    pub autoplay_progress: f32,
    pub autoplay_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    DotPressed(usize),
}

/// The previous/next arrow overlay, vertically centered over the slides.
pub fn navigation(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let arrow = |glyph: &'static str, label: String, message: Message| {
        tooltip(
            button(Text::new(glyph).size(30))
                .on_press(message)
                .padding([2, 14])
                .style(|_theme, _status| button::Style {
                    background: Some(Background::Color(ARROW_BACKGROUND)),
                    text_color: Color::WHITE,
                    border: border::rounded(4),
                    shadow: Shadow::default(),
                    snap: false,
                }),
            Text::new(label).size(14),
            tooltip::Position::Bottom,
        )
    };

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(arrow("‹", ctx.i18n.tr("hero-previous"), Message::Previous))
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(arrow("›", ctx.i18n.tr("hero-next"), Message::Next));

    container(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .padding([0, 16])
        .into()
}

/// Pagination dots and the autoplay progress bar, pinned to the hero's
/// bottom edge.
pub fn indicators(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut dots = Row::new().spacing(8);
    for index in 0..ctx.slide_count {
        let selected = index == ctx.current;
        dots = dots.push(
            button(Space::new()
                .width(Length::Fixed(DOT_SIZE))
                .height(Length::Fixed(DOT_SIZE)))
            .on_press(Message::DotPressed(index))
            .padding(0)
            .style(move |_theme, _status| button::Style {
                background: Some(Background::Color(if selected {
                    DOT_ACTIVE
                } else {
                    DOT_INACTIVE
                })),
                text_color: Color::WHITE,
                border: border::rounded(DOT_SIZE / 2.0),
                shadow: Shadow::default(),
                snap: false,
            }),
        );
    }

    let mut footer = Column::new()
        .push(Space::new().width(Length::Shrink).height(Length::Fill))
        .push(
            container(dots)
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .push(Space::new().width(Length::Shrink).height(Length::Fixed(14.0)));

    if ctx.autoplay_enabled {
        footer = footer.push(
            progress_bar(0.0..=1.0, ctx.autoplay_progress).girth(Length::Fixed(3.0)),
        );
    }

    container(footer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
