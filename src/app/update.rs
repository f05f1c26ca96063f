// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::Message;
use crate::config::{self, Config};
use crate::deck::Deck;
use crate::error::Error;
use crate::ui::hero::component;
use iced::widget::scrollable;
use iced::Task;

/// Mutable borrows of the application state handed to each handler.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub hero: &'a mut component::State,
    pub scroll_offset: &'a mut f32,
}

pub fn handle_hero_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    ctx.hero.handle_message(message).map(Message::Hero)
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: std::time::Instant) -> Task<Message> {
    ctx.hero
        .handle_message(component::Message::Tick(now))
        .map(Message::Hero)
}

pub fn handle_page_scrolled(
    ctx: &mut UpdateContext<'_>,
    viewport: scrollable::Viewport,
) -> Task<Message> {
    let offset = viewport.absolute_offset();
    *ctx.scroll_offset = offset.y;
    ctx.hero
        .handle_message(component::Message::PageScrolled {
            bounds: viewport.bounds(),
            offset,
        })
        .map(Message::Hero)
}

pub fn handle_deck_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Deck, Error>,
) -> Task<Message> {
    ctx.hero
        .handle_message(component::Message::DeckLoaded(result))
        .map(Message::Hero)
}

pub fn handle_close_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.hero.shutdown();
    if let Err(error) = config::save(ctx.config) {
        eprintln!("Failed to persist settings: {}", error);
    }
    Task::none()
}
