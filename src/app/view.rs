// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the base page with the trigger surface, the modal
//! overlay while the lifecycle is visible, and the intro reveal on top.

use super::{App, Message};
use iced::widget::{container, opaque, Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Background, Color, Element, Length, Theme,
};

pub fn view(app: &App) -> Element<'_, Message> {
    let mut layers = Stack::new().push(base_page(app));

    if app.lightbox.lifecycle().is_visible() {
        layers = layers.push(opaque(
            app.lightbox
                .view_modal(app.media.as_ref())
                .map(Message::Lightbox),
        ));
    }

    if app.intro.is_visible() {
        layers = layers.push(opaque(app.intro.view().map(Message::Intro)));
    }

    layers.into()
}

fn base_page(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &app.load_error {
        Some(error) => Column::new()
            .push(Text::new("Could not load the image").size(16))
            .push(Text::new(error.clone()).size(12))
            .spacing(8)
            .align_x(Horizontal::Center)
            .into(),
        None => app
            .lightbox
            .view_trigger(app.media.as_ref())
            .map(Message::Lightbox),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgb(0.96, 0.97, 0.98))),
            ..Default::default()
        })
        .into()
}
