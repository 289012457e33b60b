// SPDX-License-Identifier: MPL-2.0
//! Intro reveal overlay shown once per installation.
//!
//! The progress bar is a pure function of elapsed time, decoupled from the
//! tick subscription that samples it, so the progression is testable without
//! real timers. Whether the intro plays at all is decided by the application
//! shell (config flag injected at boot); this widget holds no global state.

use crate::config::{INTRO_DURATION_MS, TIP_ROTATION_MS};
use iced::widget::{container, progress_bar, text, Column};
use iced::{keyboard, Background, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Rotating status lines shown under the headline.
pub const TIPS: [&str; 4] = [
    "Crafting your experience...",
    "Aligning pixels and performance...",
    "Loading components & caffeine...",
    "Pro tip: press Esc to skip",
];

/// Eased progress curve: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Progress percentage for a given elapsed time, 0 to 100.
#[must_use]
pub fn progress_percent(elapsed: Duration) -> u8 {
    let t = (elapsed.as_secs_f32() / Duration::from_millis(INTRO_DURATION_MS).as_secs_f32())
        .clamp(0.0, 1.0);
    (ease_out_cubic(t) * 100.0).floor() as u8
}

/// Tip index for a given elapsed time.
#[must_use]
pub fn tip_index(elapsed: Duration) -> usize {
    (elapsed.as_millis() / u128::from(TIP_ROTATION_MS)) as usize % TIPS.len()
}

/// Phase of the intro overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Never shown (already seen, or disabled).
    #[default]
    Hidden,
    /// Animating towards 100%.
    Running,
    /// Done; the overlay is gone.
    Finished,
}

/// Intro overlay state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    phase: Phase,
    started_at: Option<Instant>,
    progress: u8,
    tip: usize,
}

/// Messages for the intro overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// Begin the reveal at the given instant.
    Start(Instant),
    /// Frame-paced progress sample.
    Tick(Instant),
    /// Skip request (Escape, Enter, or Space).
    Skip,
}

/// Effects produced by intro updates.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The intro finished or was skipped; the shell should persist the
    /// intro-seen flag.
    Finished,
}

impl State {
    /// Handle an intro message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start(now) => {
                if self.phase == Phase::Hidden {
                    self.phase = Phase::Running;
                    self.started_at = Some(now);
                    self.progress = 0;
                    self.tip = 0;
                }
                Effect::None
            }
            Message::Tick(now) => {
                // Ticks after finish (or before start) are no-ops.
                if self.phase != Phase::Running {
                    return Effect::None;
                }
                let Some(started_at) = self.started_at else {
                    return Effect::None;
                };
                let elapsed = now.saturating_duration_since(started_at);
                self.progress = progress_percent(elapsed);
                self.tip = tip_index(elapsed);
                if elapsed >= Duration::from_millis(INTRO_DURATION_MS) {
                    self.finish()
                } else {
                    Effect::None
                }
            }
            Message::Skip => {
                if self.phase == Phase::Running {
                    self.progress = 100;
                    self.finish()
                } else {
                    Effect::None
                }
            }
        }
    }

    fn finish(&mut self) -> Effect {
        self.phase = Phase::Finished;
        self.started_at = None;
        Effect::Finished
    }

    /// Whether the tick subscription should be running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether the overlay should be rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Current progress percentage (0-100).
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Current tip line.
    #[must_use]
    pub fn tip(&self) -> &'static str {
        TIPS[self.tip]
    }

    /// Maps a key press to a skip request, if it is one of the skip keys.
    #[must_use]
    pub fn skip_message(key: &keyboard::Key) -> Option<Message> {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape)
            | keyboard::Key::Named(keyboard::key::Named::Enter)
            | keyboard::Key::Named(keyboard::key::Named::Space) => Some(Message::Skip),
            _ => None,
        }
    }

    /// Renders the full-window reveal overlay.
    pub fn view(&self) -> Element<'_, Message> {
        let headline = text("Loading your experience...").size(16);
        let tip_line = text(self.tip()).size(12);
        let bar = progress_bar(0.0..=100.0, f32::from(self.progress)).girth(Length::Fixed(8.0));
        let percent = text(format!("{}%", self.progress)).size(10);

        let card = Column::new()
            .push(headline)
            .push(tip_line)
            .push(bar)
            .push(percent)
            .spacing(12)
            .width(Length::Fixed(360.0));

        container(
            container(card)
                .padding(24)
                .style(|_theme: &Theme| container::Style {
                    background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.92))),
                    border: iced::Border {
                        radius: 16.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::from_rgba(
                0.96, 0.97, 0.98, 1.0,
            ))),
            ..Default::default()
        })
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_starts_at_zero_and_ends_at_one_hundred() {
        assert_eq!(progress_percent(Duration::ZERO), 0);
        assert_eq!(progress_percent(Duration::from_millis(INTRO_DURATION_MS)), 100);
        assert_eq!(progress_percent(Duration::from_millis(INTRO_DURATION_MS * 2)), 100);
    }

    #[test]
    fn progress_is_monotone_non_decreasing() {
        let mut last = 0;
        for ms in (0..=INTRO_DURATION_MS).step_by(50) {
            let p = progress_percent(Duration::from_millis(ms));
            assert!(p >= last, "progress regressed at {ms}ms: {p} < {last}");
            last = p;
        }
    }

    #[test]
    fn eased_progress_front_loads_the_curve() {
        // Ease-out cubic crosses well past the linear midpoint at t=0.5.
        let halfway = progress_percent(Duration::from_millis(INTRO_DURATION_MS / 2));
        assert!(halfway > 50, "expected front-loaded easing, got {halfway}%");
    }

    #[test]
    fn tip_index_rotates_every_interval_and_wraps() {
        assert_eq!(tip_index(Duration::ZERO), 0);
        assert_eq!(tip_index(Duration::from_millis(TIP_ROTATION_MS)), 1);
        assert_eq!(
            tip_index(Duration::from_millis(TIP_ROTATION_MS * TIPS.len() as u64)),
            0
        );
    }

    #[test]
    fn ticks_drive_progress_to_finish() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle(Message::Start(start));
        assert!(state.is_animating());

        let effect = state.handle(Message::Tick(start + Duration::from_millis(300)));
        assert!(matches!(effect, Effect::None));
        assert!(state.progress() > 0);

        let effect = state.handle(Message::Tick(start + Duration::from_millis(1300)));
        assert!(matches!(effect, Effect::Finished));
        assert_eq!(state.progress(), 100);
        assert!(!state.is_animating());
    }

    #[test]
    fn ticks_after_finish_are_no_ops() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle(Message::Start(start));
        state.handle(Message::Tick(start + Duration::from_millis(2000)));

        let effect = state.handle(Message::Tick(start + Duration::from_millis(3000)));
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.progress(), 100);
    }

    #[test]
    fn ticks_before_start_are_no_ops() {
        let mut state = State::default();
        let effect = state.handle(Message::Tick(Instant::now()));
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn skip_finishes_immediately() {
        let mut state = State::default();
        state.handle(Message::Start(Instant::now()));

        let effect = state.handle(Message::Skip);
        assert!(matches!(effect, Effect::Finished));
        assert_eq!(state.progress(), 100);

        // A second skip is a no-op.
        let effect = state.handle(Message::Skip);
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn skip_keys_map_to_skip_messages() {
        use iced::keyboard::{key::Named, Key};

        assert!(State::skip_message(&Key::Named(Named::Escape)).is_some());
        assert!(State::skip_message(&Key::Named(Named::Enter)).is_some());
        assert!(State::skip_message(&Key::Named(Named::Space)).is_some());
        assert!(State::skip_message(&Key::Character("x".into())).is_none());
    }

    #[test]
    fn start_while_running_does_not_restart() {
        let mut state = State::default();
        let start = Instant::now();
        state.handle(Message::Start(start));
        state.handle(Message::Tick(start + Duration::from_millis(600)));
        let progress = state.progress();

        state.handle(Message::Start(start + Duration::from_millis(700)));
        assert_eq!(state.progress(), progress);
    }
}
