// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all interaction tuning constants.
//!
//! This module serves as the single source of truth for the presentation
//! tuning values used across the application. The values themselves carry no
//! deeper meaning; they are kept here as named, validated constants.
//!
//! # Categories
//!
//! - **Scale**: zoom bounds and step sizes for the lightbox
//! - **Lifecycle**: modal close transition delay
//! - **Intro**: reveal duration, tip rotation, and tick pacing

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale applied when the lightbox opens (fit-to-box).
pub const MIN_SCALE: f32 = 1.0;

/// Maximum allowed scale.
pub const MAX_SCALE: f32 = 6.0;

/// Scale change per mouse wheel notch.
pub const WHEEL_ZOOM_STEP: f32 = 0.12;

/// Scale change per toolbar zoom button press.
pub const BUTTON_ZOOM_STEP: f32 = 0.2;

/// Minimum allowed configurable wheel step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Maximum allowed configurable wheel step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Delay between a close request and the modal actually closing, matching
/// the panel's visual transition.
pub const CLOSE_DELAY_MS: u64 = 180;

// ==========================================================================
// Intro Defaults
// ==========================================================================

/// Total duration of the intro reveal progress animation.
pub const INTRO_DURATION_MS: u64 = 1200;

/// Interval at which the intro rotates through its tip lines.
pub const TIP_ROTATION_MS: u64 = 900;

/// Pacing of intro progress ticks (roughly one frame at 60 Hz).
pub const INTRO_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(WHEEL_ZOOM_STEP > 0.0);
    assert!(BUTTON_ZOOM_STEP > 0.0);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(WHEEL_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(WHEEL_ZOOM_STEP <= MAX_ZOOM_STEP);

    // Lifecycle validation
    assert!(CLOSE_DELAY_MS > 0);

    // Intro validation
    assert!(INTRO_DURATION_MS > 0);
    assert!(TIP_ROTATION_MS > 0);
    assert!(INTRO_TICK_MS > 0);
    assert!(INTRO_TICK_MS < INTRO_DURATION_MS);
};
