// SPDX-License-Identifier: MPL-2.0
//! Lightbox views: the trigger surface and the modal overlay with the
//! pannable, zoomable image viewport.

use crate::media::ImageData;
use crate::ui::lightbox::component::{Message, State, SCROLLABLE_ID};
use crate::ui::lightbox::TriggerMode;
use iced::mouse;
use iced::widget::{button, container, mouse_area, Column, Container, Row, Scrollable, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::scrollable::{Direction, Scrollbar, Viewport},
    widget::Id,
    Background, Color, Element, Length, Padding, Size, Theme,
};

/// Fraction of the window width the panel may occupy.
const PANEL_WIDTH_FRACTION: f32 = 0.92;
/// Hard cap on the panel width.
const PANEL_MAX_WIDTH: f32 = 1000.0;
/// Fraction of the window height given to the image viewport.
const PANEL_BODY_HEIGHT_FRACTION: f32 = 0.70;
/// Height of the thumbnail trigger.
const THUMBNAIL_HEIGHT: f32 = 220.0;

/// Size of the image viewport for a given window size.
///
/// Used both for layout and to seed the geometry model before the scrollable
/// reports its real bounds.
#[must_use]
pub fn panel_body_size(window: Size) -> Size {
    Size::new(
        (window.width * PANEL_WIDTH_FRACTION).min(PANEL_MAX_WIDTH),
        window.height * PANEL_BODY_HEIGHT_FRACTION,
    )
}

/// Padding that centers content of the given size inside the available box.
fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

/// Renders the trigger surface that opens the modal.
pub fn trigger<'a>(state: &'a State, media: Option<&'a ImageData>) -> Element<'a, Message> {
    match state.props().mode {
        TriggerMode::Thumbnail => thumbnail_trigger(state, media),
        TriggerMode::Overlay => overlay_trigger(),
    }
}

fn thumbnail_trigger<'a>(state: &'a State, media: Option<&'a ImageData>) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match media {
        Some(data) => iced::widget::image(data.handle.clone())
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .into(),
        None => Text::new("Loading preview...").size(14).into(),
    };

    let caption = Text::new(state.caption().to_owned()).size(13);

    let content = Column::new()
        .push(preview)
        .push(caption)
        .spacing(8)
        .align_x(Horizontal::Center);

    button(content)
        .on_press(Message::TriggerPressed)
        .padding(12)
        .style(button::text)
        .into()
}

/// Transparent surface covering the host region. The press handler decides
/// whether the press landed inside an exclusion rectangle.
fn overlay_trigger<'a>() -> Element<'a, Message> {
    mouse_area(
        Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(Message::TriggerPressed)
    .interaction(mouse::Interaction::Pointer)
    .into()
}

/// Renders the modal overlay: dimmed backdrop, panel with header, image
/// viewport, and zoom toolbar. Callers stack this on top of the base page
/// while the lifecycle is visible.
pub fn modal<'a>(state: &'a State, media: Option<&'a ImageData>) -> Element<'a, Message> {
    let panel = Container::new(
        Column::new()
            .push(header(state))
            .push(image_viewport(state, media))
            .push(toolbar(state))
            .spacing(8),
    )
    .padding(16)
    .max_width(PANEL_MAX_WIDTH)
    .style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: iced::Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let backdrop = mouse_area(
        Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.72))),
                ..Default::default()
            }),
    )
    .on_press(Message::OutsidePressed);

    backdrop.into()
}

fn header(state: &State) -> Element<'_, Message> {
    let title = Text::new(state.caption().to_owned()).size(15);

    let close = button(Text::new("✕").size(14))
        .on_press(Message::CloseRequested)
        .padding(6)
        .style(button::text);

    Row::new()
        .push(Container::new(title).width(Length::Fill))
        .push(close)
        .align_y(Vertical::Center)
        .into()
}

fn image_viewport<'a>(state: &'a State, media: Option<&'a ImageData>) -> Element<'a, Message> {
    let geometry = state.geometry();
    let scale = state.transform().scale().value();
    let (display_w, display_h) = geometry.displayed_size(scale);
    let body = Size::new(geometry.cw, geometry.ch);

    let content: Element<'a, Message> = match media {
        Some(data) => iced::widget::image(data.handle.clone())
            .width(Length::Fixed(display_w))
            .height(Length::Fixed(display_h))
            .into(),
        None => Text::new("Loading image...").size(14).into(),
    };

    // Pad the content so it sits centered when smaller than the viewport and
    // overflows symmetrically when zoomed past it.
    let padded = Container::new(content).padding(centering_padding(
        Size::new(display_w, display_h),
        body,
    ));

    let scrollable = Scrollable::new(padded)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fixed(body.width))
        .height(Length::Fixed(body.height))
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        })
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let cursor_interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else if !state.transform().scale().is_min() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    };

    mouse_area(scrollable)
        .interaction(cursor_interaction)
        .into()
}

fn toolbar(state: &State) -> Element<'_, Message> {
    let scale = state.transform().scale();

    let zoom_out = button(Text::new("−").size(14)).padding(6).style(button::text);
    let zoom_out = if scale.is_min() {
        zoom_out
    } else {
        zoom_out.on_press(Message::ZoomOutPressed)
    };

    let zoom_in = button(Text::new("+").size(14)).padding(6).style(button::text);
    let zoom_in = if scale.is_max() {
        zoom_in
    } else {
        zoom_in.on_press(Message::ZoomInPressed)
    };

    let reset = button(Text::new("Reset").size(12)).padding(6).style(button::text);
    let reset = if state.transform().is_identity() {
        reset
    } else {
        reset.on_press(Message::ResetPressed)
    };

    let percent = Text::new(format!("{:.0}%", scale.value() * 100.0)).size(12);

    Row::new()
        .push(zoom_out)
        .push(Container::new(percent).align_y(Vertical::Center).padding(4))
        .push(zoom_in)
        .push(iced::widget::Space::new().width(Length::Fixed(12.0)).height(Length::Shrink))
        .push(reset)
        .align_y(Vertical::Center)
        .spacing(4)
        .into()
}
