// SPDX-License-Identifier: MPL-2.0
//! Pure interaction state for the lightbox.
//!
//! Everything in here is independent of the rendering layer so the clamp and
//! lifecycle logic can be unit-tested without a window.

pub mod drag;
pub mod geometry;
pub mod lifecycle;
pub mod transform;

pub use drag::DragState;
pub use geometry::{Offset, ViewportGeometry};
pub use lifecycle::{Lifecycle, ModalLifecycle};
pub use transform::{Scale, TransformState};
