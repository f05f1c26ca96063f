// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the hero slider.
//!
//! The `App` struct wires together configuration, localization, and the
//! hero component, and keeps the scroll position the parallax and
//! visibility adapters feed on. Policy decisions (window sizing, where
//! the deck comes from, teardown on close) live here, close to the main
//! update loop.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::deck::{self, Deck};
use crate::i18n::I18n;
use crate::ui::hero;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    hero: hero::State,
    scroll_offset: f32,
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            hero: hero::State::new(Deck::builtin(), config.slider_options()),
            config,
            scroll_offset: 0.0,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off asynchronous deck
    /// loading when a deck file was passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load settings: {}", error);
            Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        let options = config.slider_options();

        let (initial_deck, task) = match flags.deck_path {
            Some(path) => {
                let path = PathBuf::from(path);
                // start inert; the loaded deck replaces it
                (
                    Deck::default(),
                    Task::perform(
                        async move { deck::load_from_path(&path) },
                        Message::DeckLoaded,
                    ),
                )
            }
            None => (Deck::builtin(), Task::none()),
        };

        let app = App {
            i18n,
            config,
            hero: hero::State::new(initial_deck, options),
            scroll_offset: 0.0,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.hero.needs_tick()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            hero: &mut self.hero,
            scroll_offset: &mut self.scroll_offset,
        };

        match message {
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::PageScrolled(viewport) => update::handle_page_scrolled(&mut ctx, viewport),
            Message::DeckLoaded(result) => update::handle_deck_loaded(&mut ctx, result),
            Message::WindowCloseRequested => update::handle_close_requested(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            hero: &self.hero,
            scroll_offset: self.scroll_offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::hero::component;
    use std::time::{Duration, Instant};

    #[test]
    fn title_uses_localized_window_title() {
        let app = App::default();
        assert_eq!(app.title(), "Layer Slider");
    }

    #[test]
    fn tick_message_advances_autoplay() {
        let mut app = App::default();
        let later = Instant::now() + Duration::from_millis(7001);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.hero.slider().current_slide(), Some(1));
    }

    #[test]
    fn close_request_shuts_the_slider_down() {
        let mut app = App::default();
        assert!(app.hero.needs_tick());
        let _ = app.update(Message::WindowCloseRequested);
        assert!(!app.hero.needs_tick());
    }

    #[test]
    fn deck_load_error_leaves_inert_hero() {
        let mut app = App::default();
        let _ = app.update(Message::DeckLoaded(Err(crate::error::Error::Deck(
            "broken".into(),
        ))));
        assert!(app.hero.slider().is_empty());
    }

    #[test]
    fn hero_navigation_messages_are_routed() {
        let mut app = App::default();
        let _ = app.update(Message::Hero(component::Message::Controls(
            crate::ui::hero::controls::Message::Next,
        )));
        assert_eq!(app.hero.slider().current_slide(), Some(1));
    }
}
