// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column: the hero slider on top and a
//! couple of content sections below it, which gives the scroll-driven
//! adapters (parallax, viewport intersection) something real to react to.

use super::Message;
use crate::i18n::I18n;
use crate::ui::hero::component;
use iced::widget::{container, scrollable, Column, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hero: &'a component::State,
    pub scroll_offset: f32,
}

/// Renders the demo page hosting the hero slider.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let hero_view = ctx
        .hero
        .view(component::ViewEnv {
            i18n: ctx.i18n,
            scroll_offset: ctx.scroll_offset,
        })
        .map(Message::Hero);

    let page = Column::new()
        .push(hero_view)
        .push(section(
            ctx.i18n.tr("page-mission-heading"),
            ctx.i18n.tr("page-mission-body"),
        ))
        .push(section(
            ctx.i18n.tr("page-impact-heading"),
            ctx.i18n.tr("page-impact-body"),
        ))
        .width(Length::Fill);

    scrollable(page)
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section<'a>(heading: String, body: String) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(18)
        .max_width(860.0)
        .push(Text::new(heading).size(30))
        .push(Text::new(body).size(17));

    container(content)
        .width(Length::Fill)
        .padding([72, 96])
        .into()
}
