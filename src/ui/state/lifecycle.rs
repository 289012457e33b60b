// SPDX-License-Identifier: MPL-2.0
//! Modal lifecycle state machine
//!
//! The modal moves through `Closed -> Opening -> Open -> Closing -> Closed`.
//! Opening is a pass-through phase (the panel becomes visible immediately),
//! while Closing holds for the visual transition delay before the modal
//! actually disappears. A close epoch counter makes timer completions that
//! outlive a re-open harmless.

use crate::config::CLOSE_DELAY_MS;
use std::time::Duration;

/// Discrete open/close phase of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalLifecycle {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl ModalLifecycle {
    /// Whether the modal surface should be rendered at all.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self != ModalLifecycle::Closed
    }

    /// Whether the modal is accepting zoom/pan interaction.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, ModalLifecycle::Opening | ModalLifecycle::Open)
    }
}

/// Lifecycle phase plus the close epoch used to invalidate stale timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lifecycle {
    phase: ModalLifecycle,
    close_epoch: u64,
}

impl Lifecycle {
    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ModalLifecycle {
        self.phase
    }

    /// Epoch a scheduled close must match to take effect.
    #[must_use]
    pub fn close_epoch(&self) -> u64 {
        self.close_epoch
    }

    /// The fixed visual-transition delay between a close request and the
    /// modal actually closing.
    #[must_use]
    pub fn close_delay() -> Duration {
        Duration::from_millis(CLOSE_DELAY_MS)
    }

    /// Opens the modal: `Closed -> Opening -> Open`.
    ///
    /// Returns `false` (no-op) when the modal is already open or opening.
    /// Re-opening during Closing cancels the pending close by bumping the
    /// epoch, so the stale timer completion is ignored.
    pub fn open(&mut self) -> bool {
        match self.phase {
            ModalLifecycle::Opening | ModalLifecycle::Open => false,
            ModalLifecycle::Closed | ModalLifecycle::Closing => {
                self.close_epoch += 1;
                self.phase = ModalLifecycle::Opening;
                self.phase = ModalLifecycle::Open;
                true
            }
        }
    }

    /// Requests a close: `Open -> Closing`.
    ///
    /// Returns the epoch a timer should carry when it fires, or `None` when
    /// the request is a no-op (already closing or closed).
    pub fn begin_close(&mut self) -> Option<u64> {
        match self.phase {
            ModalLifecycle::Opening | ModalLifecycle::Open => {
                self.phase = ModalLifecycle::Closing;
                Some(self.close_epoch)
            }
            ModalLifecycle::Closing | ModalLifecycle::Closed => None,
        }
    }

    /// Completes a close: `Closing -> Closed`.
    ///
    /// Returns `true` when the modal actually closed. A mismatched epoch
    /// means the timer outlived a re-open and is ignored.
    pub fn finish_close(&mut self, epoch: u64) -> bool {
        if self.phase == ModalLifecycle::Closing && epoch == self.close_epoch {
            self.phase = ModalLifecycle::Closed;
            true
        } else {
            false
        }
    }

    /// Forces the modal closed without waiting for the transition delay.
    ///
    /// Used on teardown or when the modal surface is already gone; the
    /// lifecycle still completes.
    pub fn force_close(&mut self) -> bool {
        let was_visible = self.phase.is_visible();
        self.phase = ModalLifecycle::Closed;
        self.close_epoch += 1;
        was_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lifecycle_is_closed() {
        let lifecycle = Lifecycle::default();
        assert_eq!(lifecycle.phase(), ModalLifecycle::Closed);
        assert!(!lifecycle.phase().is_visible());
    }

    #[test]
    fn open_transitions_to_open_and_is_idempotent() {
        let mut lifecycle = Lifecycle::default();
        assert!(lifecycle.open());
        assert_eq!(lifecycle.phase(), ModalLifecycle::Open);

        // A second open is a no-op.
        assert!(!lifecycle.open());
        assert_eq!(lifecycle.phase(), ModalLifecycle::Open);
    }

    #[test]
    fn close_round_trip() {
        let mut lifecycle = Lifecycle::default();
        lifecycle.open();

        let epoch = lifecycle.begin_close().expect("close should schedule");
        assert_eq!(lifecycle.phase(), ModalLifecycle::Closing);

        // A repeat close during Closing is a no-op.
        assert!(lifecycle.begin_close().is_none());

        assert!(lifecycle.finish_close(epoch));
        assert_eq!(lifecycle.phase(), ModalLifecycle::Closed);
    }

    #[test]
    fn finish_close_ignores_stale_epochs() {
        let mut lifecycle = Lifecycle::default();
        lifecycle.open();
        let stale_epoch = lifecycle.begin_close().expect("close should schedule");

        // The user re-opens before the timer fires.
        assert!(lifecycle.open());
        assert_eq!(lifecycle.phase(), ModalLifecycle::Open);

        // The stale timer completion must not close the re-opened modal.
        assert!(!lifecycle.finish_close(stale_epoch));
        assert_eq!(lifecycle.phase(), ModalLifecycle::Open);
    }

    #[test]
    fn finish_close_without_begin_is_a_no_op() {
        let mut lifecycle = Lifecycle::default();
        lifecycle.open();
        assert!(!lifecycle.finish_close(lifecycle.close_epoch()));
        assert_eq!(lifecycle.phase(), ModalLifecycle::Open);
    }

    #[test]
    fn force_close_completes_from_any_phase() {
        let mut lifecycle = Lifecycle::default();
        lifecycle.open();
        lifecycle.begin_close();
        assert!(lifecycle.force_close());
        assert_eq!(lifecycle.phase(), ModalLifecycle::Closed);

        // Forcing an already-closed modal reports nothing visible.
        assert!(!lifecycle.force_close());
    }

    #[test]
    fn close_delay_matches_the_visual_transition() {
        assert_eq!(Lifecycle::close_delay(), Duration::from_millis(180));
    }
}
