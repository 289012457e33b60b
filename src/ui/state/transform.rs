// SPDX-License-Identifier: MPL-2.0
//! Transform state management
//!
//! This module handles the lightbox's scale and pan offset, including:
//! - Scale clamping to the supported range
//! - Offset re-clamping whenever the scale changes
//! - Pan gating while the image is unzoomed

use crate::config::{MAX_SCALE, MIN_SCALE};
use crate::ui::state::geometry::{Offset, ViewportGeometry};

/// Display scale, guaranteed to be within the valid range (1–6).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(MIN_SCALE)
    }
}

/// Manages the scale and pan offset of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    scale: Scale,
    offset: Offset,
}

impl TransformState {
    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Current pan offset.
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Whether the transform is at its identity state (scale 1, no offset).
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_min() && self.offset == Offset::ZERO
    }

    /// Adjusts the scale by a signed step, clamped to `[MIN_SCALE, max_scale]`,
    /// and re-clamps the offset so the image stays within bounds.
    ///
    /// Returns `false` when the clamped result equals the current scale.
    pub fn zoom_by(&mut self, delta: f32, max_scale: f32, geometry: &ViewportGeometry) -> bool {
        self.set_scale(self.scale.value() + delta, max_scale, geometry)
    }

    /// Sets the scale to a specific value, clamped, re-clamping the offset.
    ///
    /// Returns `false` when the clamped result equals the current scale.
    pub fn set_scale(&mut self, target: f32, max_scale: f32, geometry: &ViewportGeometry) -> bool {
        let bounded_max = max_scale.clamp(MIN_SCALE, MAX_SCALE);
        let next = Scale::new(target.min(bounded_max));
        if next == self.scale {
            return false;
        }
        self.scale = next;
        self.offset = geometry.clamp_offset(self.offset, next.value());
        true
    }

    /// Pans by the given deltas, clamping to the current bounds.
    ///
    /// Panning is only permitted while zoomed in; at scale 1 this is a no-op.
    /// Returns `false` when the offset did not change.
    pub fn pan(&mut self, dx: f32, dy: f32, geometry: &ViewportGeometry) -> bool {
        if self.scale.is_min() {
            return false;
        }
        self.set_offset(self.offset.translated(dx, dy), geometry)
    }

    /// Replaces the offset with a clamped candidate.
    ///
    /// Returns `false` when the clamped result equals the current offset.
    pub fn set_offset(&mut self, candidate: Offset, geometry: &ViewportGeometry) -> bool {
        let clamped = geometry.clamp_offset(candidate, self.scale.value());
        if clamped == self.offset {
            return false;
        }
        self.offset = clamped;
        true
    }

    /// Resets to the identity transform (scale 1, offset zero) unconditionally.
    pub fn reset(&mut self) {
        self.scale = Scale::default();
        self.offset = Offset::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn geometry() -> ViewportGeometry {
        ViewportGeometry::new(800.0, 600.0, 400.0, 300.0)
    }

    #[test]
    fn scale_requests_outside_range_clamp_to_nearest_bound() {
        assert_abs_diff_eq!(Scale::new(-5.0).value(), 1.0);
        assert_abs_diff_eq!(Scale::new(10.0).value(), 6.0);
        assert_abs_diff_eq!(Scale::new(3.5).value(), 3.5);
    }

    #[test]
    fn default_transform_is_identity() {
        let transform = TransformState::default();
        assert!(transform.is_identity());
        assert!(transform.scale().is_min());
    }

    #[test]
    fn zoom_by_clamps_and_reports_changes() {
        let geometry = geometry();
        let mut transform = TransformState::default();

        assert!(transform.zoom_by(0.12, MAX_SCALE, &geometry));
        assert_abs_diff_eq!(transform.scale().value(), 1.12, epsilon = 1e-5);

        // Already at the minimum: zooming out further is a no-op.
        transform.reset();
        assert!(!transform.zoom_by(-0.12, MAX_SCALE, &geometry));
        assert_abs_diff_eq!(transform.scale().value(), 1.0);
    }

    #[test]
    fn zoom_respects_a_lower_configured_maximum() {
        let geometry = geometry();
        let mut transform = TransformState::default();

        assert!(transform.zoom_by(10.0, 4.0, &geometry));
        assert_abs_diff_eq!(transform.scale().value(), 4.0);
        assert!(!transform.zoom_by(0.12, 4.0, &geometry));
    }

    #[test]
    fn zooming_out_pulls_the_offset_back_in_bounds() {
        let geometry = geometry();
        let mut transform = TransformState::default();
        transform.zoom_by(1.0, MAX_SCALE, &geometry); // scale 2
        transform.pan(400.0, 300.0, &geometry);
        assert_abs_diff_eq!(transform.offset().x, 400.0);

        // Dropping to scale 1.5 shrinks the bounds to (200, 150).
        transform.set_scale(1.5, MAX_SCALE, &geometry);
        assert_abs_diff_eq!(transform.offset().x, 200.0);
        assert_abs_diff_eq!(transform.offset().y, 150.0);
    }

    #[test]
    fn pan_is_a_no_op_while_unzoomed() {
        let geometry = geometry();
        let mut transform = TransformState::default();
        assert!(!transform.pan(50.0, 50.0, &geometry));
        assert_eq!(transform.offset(), Offset::ZERO);
    }

    #[test]
    fn pan_clamps_to_the_scaled_bounds() {
        let geometry = geometry();
        let mut transform = TransformState::default();
        transform.zoom_by(1.0, MAX_SCALE, &geometry); // scale 2 -> max (400, 300)

        assert!(transform.pan(1000.0, 1000.0, &geometry));
        assert_abs_diff_eq!(transform.offset().x, 400.0);
        assert_abs_diff_eq!(transform.offset().y, 300.0);

        // Pushing further in the same direction changes nothing.
        assert!(!transform.pan(10.0, 10.0, &geometry));
    }

    #[test]
    fn reset_is_idempotent() {
        let geometry = geometry();
        let mut transform = TransformState::default();
        transform.zoom_by(2.0, MAX_SCALE, &geometry);
        transform.pan(100.0, 100.0, &geometry);

        transform.reset();
        let once = transform;
        transform.reset();
        assert_eq!(transform, once);
        assert!(transform.is_identity());
    }

    #[test]
    fn zoom_with_unmeasured_geometry_keeps_offset_at_zero() {
        let geometry = ViewportGeometry::default();
        let mut transform = TransformState::default();
        assert!(transform.zoom_by(2.0, MAX_SCALE, &geometry));
        assert_eq!(transform.offset(), Offset::ZERO);
        assert!(!transform.pan(50.0, 50.0, &geometry) || transform.offset() == Offset::ZERO);
    }
}
