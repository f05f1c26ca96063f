// SPDX-License-Identifier: MPL-2.0
//! Hero slider component encapsulating state, event translation, and
//! rendering.
//!
//! The component owns the slider core and translates raw host events
//! (keyboard, pointer, touch, window focus, page scroll) into slider
//! operations. It holds no timing logic of its own: every time-sensitive
//! call passes the current instant down to the core.

use crate::deck::{Deck, Slide};
use crate::error::Error;
use crate::i18n::I18n;
use crate::slider::{input, LayerSlider, SliderOptions};
use crate::ui::hero::{controls, parallax, HERO_HEIGHT};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{container, image, mouse_area, Column, Stack, Text};
use iced::{
    event, keyboard, mouse, touch, window, Background, Color, ContentFit, Element, Length,
    Padding, Point, Rectangle, Task,
};
use std::time::Instant;

/// Background used when a slide declares no tint (or a malformed one).
const FALLBACK_BACKGROUND: Color = Color::from_rgb(0.08, 0.09, 0.12);

/// Messages emitted by the hero slider and its controls.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// Host scheduler tick; drives transitions and autoplay.
    Tick(Instant),
    /// Pointer entered the hero region.
    HoverEntered,
    /// Pointer left the hero region.
    HoverExited,
    RawEvent {
        event: event::Event,
    },
    /// The page scrollable moved or was resized.
    PageScrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Result of loading the slide deck at startup.
    DeckLoaded(Result<Deck, Error>),
}

/// Environment information required to render the hero.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// Vertical page scroll offset, for the parallax effect.
    pub scroll_offset: f32,
}

/// Complete hero slider component state.
#[derive(Debug)]
pub struct State {
    deck: Deck,
    slider: LayerSlider,
    swipe: input::SwipeTracker,
    cursor_position: Option<Point>,
    /// Bounds of the page viewport, updated from scroll events.
    page_bounds: Rectangle,
    scroll_offset: f32,
    /// Last intersection verdict, so pause/resume fire only on crossings.
    viewport_visible: bool,
    /// Instant of the most recent message, reused while rendering.
    last_now: Instant,
}

impl State {
    pub fn new(deck: Deck, options: SliderOptions) -> Self {
        let now = Instant::now();
        let slider = LayerSlider::new(deck.len(), options, now);
        Self {
            deck,
            slider,
            swipe: input::SwipeTracker::default(),
            cursor_position: None,
            page_bounds: Rectangle::new(
                Point::ORIGIN,
                iced::Size::new(
                    crate::app::WINDOW_DEFAULT_WIDTH as f32,
                    crate::app::WINDOW_DEFAULT_HEIGHT as f32,
                ),
            ),
            scroll_offset: 0.0,
            viewport_visible: true,
            last_now: now,
        }
    }

    pub fn slider(&self) -> &LayerSlider {
        &self.slider
    }

    /// Whether the host should keep the tick subscription alive.
    pub fn needs_tick(&self) -> bool {
        self.slider.needs_tick()
    }

    /// Replaces the deck, rebuilding the slider over the new slide count.
    pub fn set_deck(&mut self, deck: Deck, now: Instant) {
        let options = *self.slider.options();
        self.slider = LayerSlider::new(deck.len(), options, now);
        self.deck = deck;
        self.last_now = now;
    }

    /// Tears down the slider ahead of window close; no further ticks are
    /// requested afterwards.
    pub fn shutdown(&mut self) {
        self.slider.destroy();
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(control) => {
                let now = Instant::now();
                self.last_now = now;
                match control {
                    controls::Message::Previous => self.slider.previous(now),
                    controls::Message::Next => self.slider.next(now),
                    controls::Message::DotPressed(index) => self.slider.go_to_slide(index, now),
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.last_now = now;
                self.slider.tick(now);
                Task::none()
            }
            Message::HoverEntered => {
                if self.slider.options().pause_on_hover {
                    self.slider.pause_autoplay();
                }
                Task::none()
            }
            Message::HoverExited => {
                if self.slider.options().pause_on_hover {
                    let now = Instant::now();
                    self.last_now = now;
                    self.slider.resume_autoplay(now);
                }
                Task::none()
            }
            Message::RawEvent { event } => {
                let now = Instant::now();
                self.last_now = now;
                self.handle_raw_event(event, now);
                Task::none()
            }
            Message::PageScrolled { bounds, offset } => {
                self.page_bounds = bounds;
                self.scroll_offset = offset.y;
                self.apply_intersection(Instant::now());
                Task::none()
            }
            Message::DeckLoaded(result) => {
                match result {
                    Ok(deck) => self.set_deck(deck, Instant::now()),
                    Err(error) => {
                        eprintln!("Failed to load slide deck: {}", error);
                        self.set_deck(Deck::default(), Instant::now());
                    }
                }
                Task::none()
            }
        }
    }

    /// Pauses or resumes autoplay when the hero's visible fraction crosses
    /// the intersection threshold. Edge-triggered: repeated scroll events
    /// on the same side of the threshold do nothing.
    fn apply_intersection(&mut self, now: Instant) {
        let fraction = input::visible_fraction(
            HERO_HEIGHT,
            self.scroll_offset,
            self.page_bounds.height,
        );
        let visible = input::is_sufficiently_visible(fraction);
        if visible == self.viewport_visible {
            return;
        }
        self.viewport_visible = visible;
        if visible {
            self.slider.resume_autoplay(now);
        } else {
            self.slider.pause_autoplay();
        }
    }

    /// Screen-space rectangle the hero currently occupies, for hit-testing
    /// swipe starts.
    fn hero_screen_rect(&self) -> Rectangle {
        Rectangle {
            x: self.page_bounds.x,
            y: self.page_bounds.y - self.scroll_offset,
            width: self.page_bounds.width,
            height: HERO_HEIGHT,
        }
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) {
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if !self.slider.options().keyboard {
                    return;
                }
                // global bindings, deliberately not scoped to focus
                match key {
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                        self.slider.previous(now);
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                        self.slider.next(now);
                    }
                    _ => {}
                }
            }
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(position);
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    if let Some(position) = self.cursor_position {
                        self.begin_swipe(position);
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    if let Some(position) = self.cursor_position {
                        self.finish_swipe(position, now);
                    } else {
                        self.swipe.cancel();
                    }
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    self.swipe.cancel();
                }
                _ => {}
            },
            event::Event::Touch(touch_event) => match touch_event {
                touch::Event::FingerPressed { position, .. } => {
                    self.begin_swipe(position);
                }
                touch::Event::FingerLifted { position, .. } => {
                    self.finish_swipe(position, now);
                }
                touch::Event::FingerLost { .. } => {
                    self.swipe.cancel();
                }
                _ => {}
            },
            event::Event::Window(window_event) => match window_event {
                // window focus is the desktop analog of tab visibility;
                // not gated by any configuration flag
                window::Event::Unfocused => self.slider.pause_autoplay(),
                window::Event::Focused => self.slider.resume_autoplay(now),
                _ => {}
            },
            _ => {}
        }
    }

    fn begin_swipe(&mut self, position: Point) {
        if !self.slider.options().swipe {
            return;
        }
        if self.hero_screen_rect().contains(position) {
            self.swipe.begin(position.x, position.y);
        }
    }

    fn finish_swipe(&mut self, position: Point, now: Instant) {
        match self.swipe.finish(position.x, position.y) {
            Some(input::NavDirection::Next) => self.slider.next(now),
            Some(input::NavDirection::Previous) => self.slider.previous(now),
            None => {}
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let Some(current) = self.slider.current_slide() else {
            return self.empty_view(env.i18n);
        };
        let parallax = parallax::compute(env.scroll_offset, HERO_HEIGHT);

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
        if let Some(leaving) = self.slider.leaving_slide() {
            layers = layers.push(slide_layer(&self.deck.slides[leaving], 1.0, parallax));
        }
        let alpha = self
            .slider
            .transition_progress(self.last_now)
            .unwrap_or(1.0);
        layers = layers.push(slide_layer(&self.deck.slides[current], alpha, parallax));

        let slides = container(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: parallax.layer_offset,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            });

        let controls_context = controls::ViewContext {
            i18n: env.i18n,
            current,
            slide_count: self.slider.slide_count(),
            autoplay_progress: self.slider.autoplay_progress(),
            autoplay_enabled: self.slider.options().autoplay_enabled(),
        };

        let hero = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .push(slides)
            .push(controls::navigation(controls_context.clone()).map(Message::Controls))
            .push(controls::indicators(controls_context).map(Message::Controls));

        mouse_area(hero)
            .on_enter(Message::HoverEntered)
            .on_exit(Message::HoverExited)
            .into()
    }

    fn empty_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let content = Column::new()
            .spacing(8)
            .align_x(iced::alignment::Horizontal::Center)
            .push(Text::new(i18n.tr("hero-empty")).size(28).color(Color::WHITE))
            .push(
                Text::new(i18n.tr("hero-empty-hint"))
                    .size(16)
                    .color(Color::from_rgba(1.0, 1.0, 1.0, 0.7)),
            );

        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(FALLBACK_BACKGROUND)),
                ..container::Style::default()
            })
            .into()
    }
}

/// Renders one slide layer at the given opacity. During a transition the
/// incoming slide is stacked on top of the leaving one and faded in.
fn slide_layer(slide: &Slide, alpha: f32, parallax: parallax::Parallax) -> Element<'_, Message> {
    let content = slide_content(slide, alpha, parallax);

    if let Some(path) = &slide.image {
        return Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(
                image(path.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover)
                    .opacity(alpha),
            )
            .push(content)
            .into();
    }

    let (r, g, b) = slide.background_rgb().unwrap_or((20, 23, 31));
    let background = Color::from_rgba8(r, g, b, alpha);
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            ..container::Style::default()
        })
        .into()
}

/// The kicker/title/subtitle block, faded and shifted by the transition
/// alpha and the scroll parallax.
fn slide_content(slide: &Slide, alpha: f32, parallax: parallax::Parallax) -> Element<'_, Message> {
    let text_alpha = alpha * parallax.content_opacity;
    let text_line = |value: &str, size: u16, opacity: f32| {
        Text::new(value.to_string())
            .size(f32::from(size))
            .color(Color::from_rgba(1.0, 1.0, 1.0, opacity * text_alpha))
    };

    let mut content = Column::new().spacing(14).max_width(720.0);
    if let Some(kicker) = &slide.kicker {
        content = content.push(text_line(kicker, 15, 0.75));
    }
    content = content.push(text_line(&slide.title, 46, 1.0));
    if let Some(subtitle) = &slide.subtitle {
        content = content.push(text_line(subtitle, 19, 0.85));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 130.0 + parallax.content_offset,
            right: 96.0,
            bottom: 40.0,
            left: 96.0,
        })
        .into()
}
