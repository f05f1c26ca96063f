// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw window events (keyboard, pointer, touch, focus) are routed to the
//! hero component, which owns the translation into slider operations.
//! The tick subscription runs only while the slider actually needs time:
//! a transition in flight or a running autoplay cycle.

use super::Message;
use crate::ui::hero::component;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval between slider ticks while animation or autoplay is live.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes native events to the hero component.
///
/// Window close requests are intercepted for teardown. Focus changes are
/// forwarded unconditionally; input events only when no widget captured
/// them, so pressing an arrow button never doubles as a swipe start.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Handle window close request for teardown
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested);
        }

        // Focus changes feed the visibility adapter on every screen state
        if matches!(
            event,
            event::Event::Window(window::Event::Focused | window::Event::Unfocused)
        ) {
            return Some(Message::Hero(component::Message::RawEvent { event }));
        }

        let relevant = matches!(
            event,
            event::Event::Keyboard(_)
                | event::Event::Touch(_)
                | event::Event::Mouse(
                    mouse::Event::CursorMoved { .. }
                        | mouse::Event::CursorLeft
                        | mouse::Event::ButtonPressed(mouse::Button::Left)
                        | mouse::Event::ButtonReleased(mouse::Button::Left)
                )
        );
        if !relevant {
            return None;
        }

        match status {
            event::Status::Ignored => Some(Message::Hero(component::Message::RawEvent { event })),
            event::Status::Captured => None,
        }
    })
}

/// Creates the periodic tick subscription while the slider needs it.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
