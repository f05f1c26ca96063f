// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::deck::Deck;
use crate::error::Error;
use crate::ui::hero::component;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Hero(component::Message),
    /// Periodic tick driving slide transitions and autoplay progress.
    Tick(Instant),
    /// The demo page scrolled; feeds parallax and the visibility adapter.
    PageScrolled(scrollable::Viewport),
    /// Result of loading the slide deck passed on the command line.
    DeckLoaded(Result<Deck, Error>),
    /// Window close was requested; tear the slider down before exit.
    WindowCloseRequested,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional slide deck file to show instead of the built-in deck.
    pub deck_path: Option<String>,
}
