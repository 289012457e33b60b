// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning through the zoomed
//! image. The drag is tracked from pointer-down to pointer-up; moves that
//! arrive while no drag is active are ignored.

use crate::ui::state::geometry::Offset;
use iced::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    start_position: Option<Point>,

    /// Pan offset when the drag started
    start_offset: Option<Offset>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: Offset) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Calculates the candidate offset for the current cursor position.
    ///
    /// The image follows the cursor: moving the cursor right moves the image
    /// right. The result is unclamped; callers clamp against the geometry.
    #[must_use]
    pub fn proposed_offset(&self, current_position: Point) -> Option<Offset> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        let dx = current_position.x - start_pos.x;
        let dy = current_position.y - start_pos.y;

        Some(start_offset.translated(dx, dy))
    }
}
