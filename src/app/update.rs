// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Raw window events are routed here rather than inside the subscription so
//! the routing can consult application state (the intro consumes keys while
//! it is visible).

use super::{App, Message};
use crate::config::CLOSE_DELAY_MS;
use crate::ui::intro;
use crate::ui::lightbox;
use iced::{keyboard, mouse, window, Task};
use std::time::Duration;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Lightbox(msg) => handle_lightbox(app, msg),
        Message::Intro(msg) => {
            match app.intro.handle(msg) {
                intro::Effect::Finished => {
                    app.config.intro_seen = Some(true);
                    app.persist_config();
                }
                intro::Effect::None => {}
            }
            Task::none()
        }
        Message::ImageLoaded(Ok(data)) => {
            let (width, height) = (data.width, data.height);
            app.media = Some(data);
            app.load_error = None;
            handle_lightbox(app, lightbox::Message::ImageMeasured { width, height })
        }
        Message::ImageLoaded(Err(error)) => {
            eprintln!("Failed to load image: {error}");
            app.load_error = Some(error.to_string());
            Task::none()
        }
        Message::RawEvent { event, .. } => route_event(app, event),
    }
}

fn handle_lightbox(app: &mut App, msg: lightbox::Message) -> Task<Message> {
    let (effect, task) = app.lightbox.handle(msg);
    let follow_up = match effect {
        lightbox::Effect::ScheduleClose { epoch } => Task::perform(
            tokio::time::sleep(Duration::from_millis(CLOSE_DELAY_MS)),
            move |()| Message::Lightbox(lightbox::Message::CloseTimerFired { epoch }),
        ),
        lightbox::Effect::None | lightbox::Effect::Opened | lightbox::Effect::Closed => {
            Task::none()
        }
    };

    Task::batch([task.map(Message::Lightbox), follow_up])
}

fn route_event(app: &mut App, event: iced::Event) -> Task<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            // The intro sits on top of everything and consumes keys first.
            if app.intro.is_visible() {
                if let Some(msg) = intro::State::skip_message(&key) {
                    return update(app, Message::Intro(msg));
                }
                return Task::none();
            }
            if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape))
                && app.lightbox.lifecycle().is_visible()
            {
                return handle_lightbox(app, lightbox::Message::CloseRequested);
            }
            Task::none()
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            handle_lightbox(app, lightbox::Message::CursorMoved(position))
        }
        iced::Event::Mouse(mouse::Event::ButtonPressed(button)) => {
            handle_lightbox(app, lightbox::Message::PointerPressed(button))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(button)) => {
            handle_lightbox(app, lightbox::Message::PointerReleased(button))
        }
        iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            handle_lightbox(app, lightbox::Message::WheelScrolled(delta))
        }
        iced::Event::Window(window::Event::Resized(size)) => {
            handle_lightbox(app, lightbox::Message::WindowResized(size))
        }
        _ => Task::none(),
    }
}
