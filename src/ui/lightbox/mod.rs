// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox: trigger surface, open/close lifecycle, and in-modal
//! pan/zoom interaction.

pub mod component;
mod view;

pub use component::{Effect, Message, State, SCROLLABLE_ID};

/// How the trigger surface is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// A visible thumbnail button.
    #[default]
    Thumbnail,
    /// A transparent overlay covering the host region; presses inside the
    /// configured exclusion rectangles are ignored.
    Overlay,
}
