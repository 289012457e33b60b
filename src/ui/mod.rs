// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`lightbox`] - Modal image previewer with zoom and pan
//! - [`intro`] - One-time intro reveal overlay
//! - [`state`] - Reusable interaction state (geometry, transform, lifecycle, drag)

pub mod intro;
pub mod lightbox;
pub mod state;
