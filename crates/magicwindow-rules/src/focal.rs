//! Focal-point geometry and the drag gesture state machine.

/// The user-chosen point of interest on the displayed image, as
/// percentages of the rendered bounding box.
///
/// Both axes are always within `[0, 100]`; construction clamps pointer
/// positions that fall outside the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    /// Horizontal position, percent of box width from the left edge.
    pub x: f64,
    /// Vertical position, percent of box height from the top edge.
    pub y: f64,
}

impl Default for FocalPoint {
    /// The image center: `(50, 50)`.
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl FocalPoint {
    /// Map a pointer offset within a rendered box to a focal point.
    ///
    /// `offset_x`/`offset_y` are the pointer position relative to the
    /// box's top-left corner; `width`/`height` are the box dimensions.
    /// Each axis is normalized to `[0, 1]`, clamped, and converted to a
    /// percentage, so pointers outside the box pin to the nearest edge.
    ///
    /// Returns `None` for a degenerate box (zero or non-finite size),
    /// which can occur transiently before layout settles.
    #[must_use]
    pub fn from_pointer(offset_x: f64, offset_y: f64, width: f64, height: f64) -> Option<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return None;
        }
        Some(Self {
            x: (offset_x / width).clamp(0.0, 1.0) * 100.0,
            y: (offset_y / height).clamp(0.0, 1.0) * 100.0,
        })
    }
}

/// The press → move* → release gesture, as an explicit two-state
/// machine. Moves only relocate the focal point while `Dragging`;
/// release and pointer-leave both return to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down; moves relocate the focal point.
    Dragging,
}

impl DragState {
    /// Transition on pointer press.
    #[must_use]
    pub const fn press(self) -> Self {
        Self::Dragging
    }

    /// Transition on pointer release or leaving the image area.
    #[must_use]
    pub const fn release(self) -> Self {
        Self::Idle
    }

    /// Whether moves should relocate the focal point.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_image_center() {
        assert_eq!(FocalPoint::default(), FocalPoint { x: 50.0, y: 50.0 });
    }

    #[test]
    fn pointer_inside_box_maps_to_percentages() {
        let p = FocalPoint::from_pointer(100.0, 150.0, 200.0, 300.0);
        assert_eq!(p, Some(FocalPoint { x: 50.0, y: 50.0 }));

        let p = FocalPoint::from_pointer(50.0, 300.0, 200.0, 400.0);
        assert_eq!(p, Some(FocalPoint { x: 25.0, y: 75.0 }));
    }

    #[test]
    fn pointer_outside_box_clamps_to_edges() {
        // Above and left of the box.
        let p = FocalPoint::from_pointer(-40.0, -5.0, 200.0, 300.0);
        assert_eq!(p, Some(FocalPoint { x: 0.0, y: 0.0 }));

        // Below and right of the box.
        let p = FocalPoint::from_pointer(250.0, 9000.0, 200.0, 300.0);
        assert_eq!(p, Some(FocalPoint { x: 100.0, y: 100.0 }));

        // Mixed: right of the box but vertically inside.
        let p = FocalPoint::from_pointer(400.0, 150.0, 200.0, 300.0);
        assert_eq!(p, Some(FocalPoint { x: 100.0, y: 50.0 }));
    }

    #[test]
    fn degenerate_box_produces_no_point() {
        assert_eq!(FocalPoint::from_pointer(10.0, 10.0, 0.0, 300.0), None);
        assert_eq!(FocalPoint::from_pointer(10.0, 10.0, 200.0, 0.0), None);
        assert_eq!(FocalPoint::from_pointer(10.0, 10.0, -1.0, 300.0), None);
        assert_eq!(
            FocalPoint::from_pointer(10.0, 10.0, f64::NAN, 300.0),
            None
        );
    }

    #[test]
    fn drag_machine_transitions() {
        let s = DragState::default();
        assert!(!s.is_dragging());

        let s = s.press();
        assert!(s.is_dragging());

        // Press while already dragging stays dragging.
        assert!(s.press().is_dragging());

        let s = s.release();
        assert_eq!(s, DragState::Idle);

        // Release while idle stays idle (pointer-leave without press).
        assert_eq!(s.release(), DragState::Idle);
    }
}
