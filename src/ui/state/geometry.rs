// SPDX-License-Identifier: MPL-2.0
//! Viewport geometry for the lightbox.
//!
//! Tracks the container and natural image sizes and derives the fit-to-box
//! ratio, displayed size at a given scale, and the per-axis pan bounds.
//! All math degrades to a centered, immovable image when any measurement is
//! missing or zero, so callers never divide by zero or see NaN offsets.

/// Pan offset of the displayed image relative to the container center,
/// in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns this offset shifted by the given deltas.
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Container and natural image dimensions, refreshed whenever the container
/// resizes or the image finishes loading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportGeometry {
    /// Container width.
    pub cw: f32,
    /// Container height.
    pub ch: f32,
    /// Natural image width.
    pub iw: f32,
    /// Natural image height.
    pub ih: f32,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(cw: f32, ch: f32, iw: f32, ih: f32) -> Self {
        Self { cw, ch, iw, ih }
    }

    /// Records a new container size.
    pub fn set_container(&mut self, width: f32, height: f32) {
        self.cw = width.max(0.0);
        self.ch = height.max(0.0);
    }

    /// Records the natural size of the loaded image.
    pub fn set_image(&mut self, width: f32, height: f32) {
        self.iw = width.max(0.0);
        self.ih = height.max(0.0);
    }

    /// Whether every dimension is a usable, positive finite number.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        [self.cw, self.ch, self.iw, self.ih]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    /// Fit-to-box ratio at scale 1: `min(cw/iw, ch/ih)`.
    ///
    /// Returns 0.0 when any dimension is missing.
    #[must_use]
    pub fn fit_ratio(&self) -> f32 {
        if !self.is_measurable() {
            return 0.0;
        }
        (self.cw / self.iw).min(self.ch / self.ih)
    }

    /// Displayed size at scale 1 (the image fitted inside the container).
    #[must_use]
    pub fn base_size(&self) -> (f32, f32) {
        let ratio = self.fit_ratio();
        (self.iw * ratio, self.ih * ratio)
    }

    /// Displayed size at the given scale.
    #[must_use]
    pub fn displayed_size(&self, scale: f32) -> (f32, f32) {
        let (base_w, base_h) = self.base_size();
        (base_w * scale, base_h * scale)
    }

    /// Maximum allowed offset magnitude per axis at the given scale.
    ///
    /// When the displayed image is smaller than the container on an axis the
    /// bound is zero, forcing the image to stay centered on that axis.
    #[must_use]
    pub fn max_offset(&self, scale: f32) -> Offset {
        if !self.is_measurable() {
            return Offset::ZERO;
        }
        let (cur_w, cur_h) = self.displayed_size(scale);
        Offset {
            x: ((cur_w - self.cw) / 2.0).max(0.0),
            y: ((cur_h - self.ch) / 2.0).max(0.0),
        }
    }

    /// Clamps an offset so the displayed image never leaves the container.
    ///
    /// Each axis is clamped independently to `[-max, +max]`. Zero-sized
    /// measurements yield `(0, 0)` rather than dividing by zero.
    #[must_use]
    pub fn clamp_offset(&self, offset: Offset, scale: f32) -> Offset {
        if !self.is_measurable() {
            return Offset::ZERO;
        }
        let max = self.max_offset(scale);
        Offset {
            x: offset.x.clamp(-max.x, max.x),
            y: offset.y.clamp(-max.y, max.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fit_ratio_picks_the_tighter_axis() {
        // Container 800x600, image 400x300: both axes give 2.0.
        let geometry = ViewportGeometry::new(800.0, 600.0, 400.0, 300.0);
        assert_abs_diff_eq!(geometry.fit_ratio(), 2.0);

        // Tall image is limited by the height axis.
        let geometry = ViewportGeometry::new(800.0, 600.0, 400.0, 1200.0);
        assert_abs_diff_eq!(geometry.fit_ratio(), 0.5);
    }

    #[test]
    fn offset_is_centered_when_image_fits() {
        let geometry = ViewportGeometry::new(800.0, 600.0, 400.0, 300.0);
        let clamped = geometry.clamp_offset(Offset::new(250.0, -80.0), 1.0);
        assert_eq!(clamped, Offset::ZERO);
    }

    #[test]
    fn pan_bounds_match_half_the_overflow() {
        // base 800x600, scale 2 -> 1600x1200 -> max (400, 300)
        let geometry = ViewportGeometry::new(800.0, 600.0, 400.0, 300.0);
        let max = geometry.max_offset(2.0);
        assert_abs_diff_eq!(max.x, 400.0);
        assert_abs_diff_eq!(max.y, 300.0);

        let clamped = geometry.clamp_offset(Offset::new(1000.0, 1000.0), 2.0);
        assert_abs_diff_eq!(clamped.x, 400.0);
        assert_abs_diff_eq!(clamped.y, 300.0);
    }

    #[test]
    fn negative_offsets_clamp_to_the_lower_bound() {
        let geometry = ViewportGeometry::new(800.0, 600.0, 400.0, 300.0);
        let clamped = geometry.clamp_offset(Offset::new(-1000.0, -1000.0), 2.0);
        assert_abs_diff_eq!(clamped.x, -400.0);
        assert_abs_diff_eq!(clamped.y, -300.0);
    }

    #[test]
    fn axes_clamp_independently() {
        // Wide image: at scale 2 only the horizontal axis overflows.
        let geometry = ViewportGeometry::new(800.0, 600.0, 800.0, 200.0);
        // ratio = min(1.0, 3.0) = 1.0, base 800x200, scale 2 -> 1600x400
        let max = geometry.max_offset(2.0);
        assert_abs_diff_eq!(max.x, 400.0);
        assert_abs_diff_eq!(max.y, 0.0);

        let clamped = geometry.clamp_offset(Offset::new(100.0, 100.0), 2.0);
        assert_abs_diff_eq!(clamped.x, 100.0);
        assert_abs_diff_eq!(clamped.y, 0.0);
    }

    #[test]
    fn zero_dimensions_guard_against_division_by_zero() {
        let zero_image = ViewportGeometry::new(800.0, 600.0, 0.0, 300.0);
        assert_eq!(zero_image.clamp_offset(Offset::new(50.0, 50.0), 3.0), Offset::ZERO);
        assert_abs_diff_eq!(zero_image.fit_ratio(), 0.0);

        let zero_container = ViewportGeometry::new(0.0, 600.0, 400.0, 300.0);
        assert_eq!(
            zero_container.clamp_offset(Offset::new(50.0, 50.0), 3.0),
            Offset::ZERO
        );

        let unmeasured = ViewportGeometry::default();
        assert_eq!(unmeasured.clamp_offset(Offset::new(50.0, 50.0), 1.0), Offset::ZERO);
    }

    #[test]
    fn setters_floor_negative_measurements_at_zero() {
        let mut geometry = ViewportGeometry::default();
        geometry.set_container(-10.0, 600.0);
        geometry.set_image(400.0, -5.0);
        assert_abs_diff_eq!(geometry.cw, 0.0);
        assert_abs_diff_eq!(geometry.ih, 0.0);
        assert!(!geometry.is_measurable());
    }
}
