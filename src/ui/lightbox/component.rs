// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.
//!
//! The component owns the modal lifecycle, the viewport geometry, and the
//! transform state, and translates raw pointer/wheel/keyboard input into
//! clamped pan/zoom changes. Rendering-side effects (scroll sync) are
//! returned as tasks; timing-side effects (the close delay) are returned as
//! effects so the orchestrator can schedule them.

use crate::config::{BUTTON_ZOOM_STEP, MAX_SCALE, WHEEL_ZOOM_STEP};
use crate::media::ImageData;
use crate::ui::lightbox::{view, TriggerMode};
use crate::ui::state::{DragState, Lifecycle, ModalLifecycle, TransformState, ViewportGeometry};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{mouse, Element, Point, Rectangle, Size, Task};

/// Identifier used for the lightbox image scrollable widget.
pub const SCROLLABLE_ID: &str = "lightbox-image-scrollable";

/// Static presentation inputs supplied by the mounting shell.
#[derive(Debug, Clone, Default)]
pub struct Props {
    /// Caption shown in the panel header and footer.
    pub title: Option<String>,
    /// Alternative text, used when no title is given.
    pub alt: String,
    /// Trigger presentation mode.
    pub mode: TriggerMode,
}

/// Lightbox component state.
#[derive(Debug, Clone)]
pub struct State {
    props: Props,
    lifecycle: Lifecycle,
    geometry: ViewportGeometry,
    transform: TransformState,
    drag: DragState,
    /// Natural image size, kept across close/open cycles so geometry can be
    /// re-seeded after the per-close reset.
    natural_size: Option<(u32, u32)>,
    /// Last known window size, used to derive the panel body measurement.
    window_size: Size,
    /// Current cursor position in window coordinates.
    cursor_position: Option<Point>,
    /// Bounds of the image viewport, reported by the scrollable.
    panel_bounds: Option<Rectangle>,
    /// Regions of the trigger surface that must not open the modal
    /// (overlay mode only).
    exclusion_zones: Vec<Rectangle>,
    /// Scale change per wheel notch.
    zoom_step: f32,
    /// Upper scale bound.
    max_scale: f32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            props: Props::default(),
            lifecycle: Lifecycle::default(),
            geometry: ViewportGeometry::default(),
            transform: TransformState::default(),
            drag: DragState::default(),
            natural_size: None,
            window_size: Size::ZERO,
            cursor_position: None,
            panel_bounds: None,
            exclusion_zones: Vec::new(),
            zoom_step: WHEEL_ZOOM_STEP,
            max_scale: MAX_SCALE,
        }
    }
}

/// Messages emitted by the lightbox widgets and the event subscription.
#[derive(Debug, Clone)]
pub enum Message {
    /// The trigger surface was pressed.
    TriggerPressed,
    /// The backdrop (outside the panel) was pressed.
    OutsidePressed,
    /// Close requested via the close button or Escape.
    CloseRequested,
    /// The scheduled close delay elapsed.
    CloseTimerFired { epoch: u64 },
    /// Wheel movement over the image viewport.
    WheelScrolled(mouse::ScrollDelta),
    /// Cursor moved (window coordinates).
    CursorMoved(Point),
    /// A mouse button was pressed.
    PointerPressed(mouse::Button),
    /// A mouse button was released.
    PointerReleased(mouse::Button),
    /// Toolbar zoom-in button.
    ZoomInPressed,
    /// Toolbar zoom-out button.
    ZoomOutPressed,
    /// Toolbar reset button.
    ResetPressed,
    /// The image viewport reported new bounds or scroll offset.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// The window was resized.
    WindowResized(Size),
    /// The image finished loading; natural size is now known.
    ImageMeasured { width: u32, height: u32 },
}

/// Effects produced by lightbox updates.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The modal opened.
    Opened,
    /// The orchestrator should deliver `CloseTimerFired { epoch }` after the
    /// close transition delay.
    ScheduleClose { epoch: u64 },
    /// The modal finished closing; transform and geometry were reset.
    Closed,
}

impl State {
    #[must_use]
    pub fn new(props: Props) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    /// Overrides the wheel zoom step (already clamped by the config layer).
    pub fn set_zoom_step(&mut self, step: f32) {
        self.zoom_step = step;
    }

    /// Overrides the maximum scale (already clamped by the config layer).
    pub fn set_max_scale(&mut self, max_scale: f32) {
        self.max_scale = max_scale;
    }

    /// Replaces the exclusion rectangles for overlay-mode triggers.
    pub fn set_exclusion_zones(&mut self, zones: Vec<Rectangle>) {
        self.exclusion_zones = zones;
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn lifecycle(&self) -> ModalLifecycle {
        self.lifecycle.phase()
    }

    /// Current transform (scale and offset).
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.transform
    }

    /// Current viewport geometry.
    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Whether a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Caption for the header/footer: the title, falling back to alt text.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.props.title.as_deref().unwrap_or(&self.props.alt)
    }

    /// Handle a lightbox message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> (Effect, Task<Message>) {
        match msg {
            Message::TriggerPressed => {
                if self.props.mode == TriggerMode::Overlay && self.press_is_excluded() {
                    return (Effect::None, Task::none());
                }
                self.open()
            }
            Message::OutsidePressed => {
                // Defensive: a press reported as outside while the cursor is
                // demonstrably inside the panel is ignored.
                if self.cursor_is_inside_panel() {
                    return (Effect::None, Task::none());
                }
                self.request_close()
            }
            Message::CloseRequested => self.request_close(),
            Message::CloseTimerFired { epoch } => {
                if self.lifecycle.finish_close(epoch) {
                    self.reset_view_state();
                    (Effect::Closed, Task::none())
                } else {
                    // Stale timer from before a re-open; ignore.
                    (Effect::None, Task::none())
                }
            }
            Message::WheelScrolled(delta) => self.handle_wheel(delta),
            Message::CursorMoved(position) => {
                self.cursor_position = Some(position);
                if self.drag.is_dragging {
                    let task = self.handle_cursor_moved_during_drag(position);
                    (Effect::None, task)
                } else {
                    (Effect::None, Task::none())
                }
            }
            Message::PointerPressed(button) => {
                if button == mouse::Button::Left {
                    self.maybe_start_drag();
                }
                (Effect::None, Task::none())
            }
            Message::PointerReleased(button) => {
                if button == mouse::Button::Left {
                    self.drag.stop();
                }
                (Effect::None, Task::none())
            }
            Message::ZoomInPressed => self.zoom_by(BUTTON_ZOOM_STEP),
            Message::ZoomOutPressed => self.zoom_by(-BUTTON_ZOOM_STEP),
            Message::ResetPressed => {
                self.transform.reset();
                (Effect::None, self.scroll_sync_task())
            }
            Message::ViewportChanged { bounds, offset: _ } => {
                self.panel_bounds = Some(bounds);
                self.geometry.set_container(bounds.width, bounds.height);
                // Bounds changes can shrink the pan range.
                self.transform
                    .set_offset(self.transform.offset(), &self.geometry);
                (Effect::None, Task::none())
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.measure();
                (Effect::None, self.scroll_sync_task())
            }
            Message::ImageMeasured { width, height } => {
                self.natural_size = Some((width, height));
                self.measure();
                (Effect::None, Task::none())
            }
        }
    }

    /// Opens the modal, resetting the transform to identity.
    fn open(&mut self) -> (Effect, Task<Message>) {
        if !self.lifecycle.open() {
            return (Effect::None, Task::none());
        }
        self.transform.reset();
        self.drag.stop();
        self.measure();
        (Effect::Opened, self.scroll_sync_task())
    }

    fn request_close(&mut self) -> (Effect, Task<Message>) {
        self.drag.stop();
        match self.lifecycle.begin_close() {
            Some(epoch) => (Effect::ScheduleClose { epoch }, Task::none()),
            None => (Effect::None, Task::none()),
        }
    }

    /// Closes immediately, without the transition delay. Used on teardown
    /// when the modal surface may already be gone; the lifecycle still
    /// completes and the view state is reset.
    pub fn force_close(&mut self) -> Effect {
        self.drag.stop();
        if self.lifecycle.force_close() {
            self.reset_view_state();
            Effect::Closed
        } else {
            Effect::None
        }
    }

    /// Recomputes the viewport geometry from the current window size and the
    /// image's natural size. Called after image load and on every resize.
    pub fn measure(&mut self) {
        let body = view::panel_body_size(self.window_size);
        self.geometry.set_container(body.width, body.height);
        if let Some((width, height)) = self.natural_size {
            self.geometry.set_image(width as f32, height as f32);
        }
        // Remeasuring can invalidate the current offset.
        self.transform
            .set_offset(self.transform.offset(), &self.geometry);
    }

    fn reset_view_state(&mut self) {
        self.transform.reset();
        self.geometry = ViewportGeometry::default();
        self.panel_bounds = None;
    }

    fn handle_wheel(&mut self, delta: mouse::ScrollDelta) -> (Effect, Task<Message>) {
        if !self.lifecycle.phase().is_interactive() {
            return (Effect::None, Task::none());
        }
        if let (Some(bounds), Some(position)) = (self.panel_bounds, self.cursor_position) {
            if !bounds.contains(position) {
                return (Effect::None, Task::none());
            }
        }

        let steps = scroll_steps(&delta);
        if steps.abs() < f32::EPSILON {
            return (Effect::None, Task::none());
        }

        self.zoom_by(steps * self.zoom_step)
    }

    fn zoom_by(&mut self, delta: f32) -> (Effect, Task<Message>) {
        if !self.lifecycle.phase().is_interactive() {
            return (Effect::None, Task::none());
        }
        if self.transform.zoom_by(delta, self.max_scale, &self.geometry) {
            (Effect::None, self.scroll_sync_task())
        } else {
            (Effect::None, Task::none())
        }
    }

    fn maybe_start_drag(&mut self) {
        if !self.lifecycle.phase().is_interactive() {
            return;
        }
        // Drag starts are ignored while unzoomed.
        if self.transform.scale().is_min() {
            return;
        }
        let Some(position) = self.cursor_position else {
            return;
        };
        if let Some(bounds) = self.panel_bounds {
            if !bounds.contains(position) {
                return;
            }
        }
        self.drag.start(position, self.transform.offset());
    }

    /// Applies the drag movement, clamps it, and mirrors the change to the
    /// scrollable widget so wheel and drag interactions stay in sync.
    fn handle_cursor_moved_during_drag(&mut self, position: Point) -> Task<Message> {
        let Some(proposed) = self.drag.proposed_offset(position) else {
            return Task::none();
        };
        if self.transform.set_offset(proposed, &self.geometry) {
            self.scroll_sync_task()
        } else {
            Task::none()
        }
    }

    /// Scrolls the image viewport to mirror the current offset.
    ///
    /// The centered offset domain `[-max, +max]` maps onto the scrollable's
    /// relative range `[0, 1]`; a zero offset lands at 0.5 (centered).
    fn scroll_sync_task(&self) -> Task<Message> {
        let max = self.geometry.max_offset(self.transform.scale().value());
        let offset = self.transform.offset();
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: relative_position(offset.x, max.x),
                y: relative_position(offset.y, max.y),
            },
        )
    }

    fn cursor_is_inside_panel(&self) -> bool {
        match (self.panel_bounds, self.cursor_position) {
            (Some(bounds), Some(position)) => bounds.contains(position),
            // Missing measurements are treated as outside, so the modal can
            // always be dismissed.
            _ => false,
        }
    }

    fn press_is_excluded(&self) -> bool {
        let Some(position) = self.cursor_position else {
            return false;
        };
        self.exclusion_zones.iter().any(|zone| zone.contains(position))
    }

    /// Renders the trigger surface.
    pub fn view_trigger<'a>(&'a self, media: Option<&'a ImageData>) -> Element<'a, Message> {
        view::trigger(self, media)
    }

    /// Renders the modal overlay. Callers stack this over the base page
    /// while `lifecycle().is_visible()`.
    pub fn view_modal<'a>(&'a self, media: Option<&'a ImageData>) -> Element<'a, Message> {
        view::modal(self, media)
    }
}

/// Normalizes mouse wheel units (lines vs. pixels) into abstract notch
/// counts so zooming feels consistent across platforms.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

/// Maps a centered offset in `[-max, +max]` to a relative scroll position.
fn relative_position(offset: f32, max: f32) -> f32 {
    if max > 0.0 {
        ((max - offset) / (2.0 * max)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
