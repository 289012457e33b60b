// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw keyboard and mouse events are forwarded to `App::update`, which routes
//! them based on what is currently on screen. Wheel events are forwarded even
//! when a widget captured them, so zooming overrides the scrollable's own
//! scrolling.

use super::{App, Message};
use crate::config::INTRO_TICK_MS;
use crate::ui::intro;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([event_subscription(), intro_tick_subscription(app)])
}

fn event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if matches!(
            event,
            iced::Event::Mouse(
                mouse::Event::WheelScrolled { .. }
                    | mouse::Event::CursorMoved { .. }
                    | mouse::Event::ButtonPressed(_)
                    | mouse::Event::ButtonReleased(_)
            ) | iced::Event::Window(window::Event::Resized(_))
        ) {
            return Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
            });
        }

        if let iced::Event::Keyboard(..) = &event {
            return match status {
                event::Status::Ignored => Some(Message::RawEvent {
                    window: window_id,
                    event: event.clone(),
                }),
                event::Status::Captured => None,
            };
        }

        None
    })
}

/// Frame-paced ticks that drive the intro progress while it is animating.
fn intro_tick_subscription(app: &App) -> Subscription<Message> {
    if app.intro.is_animating() {
        time::every(Duration::from_millis(INTRO_TICK_MS))
            .map(|now| Message::Intro(intro::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}
