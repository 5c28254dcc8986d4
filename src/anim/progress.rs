//! Scroll progress for the sticky section stack.
//!
//! Each pinned section tracks how far its top edge has travelled between two
//! viewport landmarks: the vertical center of the viewport (progress 0) and
//! the bottom edge of the viewport (progress 1). The section's image is then
//! animated as a pure function of that fraction.

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalized position of an element's top edge between the viewport-center
/// landmark and the viewport-bottom landmark, clamped to `[0, 1]`.
///
/// `element_top` is the bounding-rect top relative to the viewport. A
/// non-positive landmark range (zero-height viewport) yields 0 rather than
/// dividing by zero.
pub fn scroll_progress(element_top: f64, viewport_height: f64) -> f64 {
    let start = viewport_height * 0.5;
    let end = viewport_height;
    let range = end - start;
    if range <= 0.0 {
        return 0.0;
    }
    ((element_top - start) / range).clamp(0.0, 1.0)
}

/// Transform applied to a sticky section's image at a given scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform {
    /// Vertical translation as a percentage of the element's own height.
    pub translate_pct: f64,
    pub rotate_deg: f64,
    pub scale: f64,
}

impl ImageTransform {
    /// yPercent 10 -> -100, rotation 0 -> 10, scale 1 -> 0.9.
    pub fn at(progress: f64) -> Self {
        Self {
            translate_pct: lerp(10.0, -100.0, progress),
            rotate_deg: lerp(0.0, 10.0, progress),
            scale: lerp(1.0, 0.9, progress),
        }
    }

    /// Inline CSS `transform` value for the image wrapper.
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateY({:.3}%) rotate({:.3}deg) scale({:.4});",
            self.translate_pct, self.rotate_deg, self.scale
        )
    }
}

/// Height occupied by a section pinned at `offset` pixels from the top: the
/// stack reserves 90% of the viewport, minus the pin offset.
pub fn pin_height(offset: f64) -> String {
    format!("calc(90vh - {offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_hits_landmarks_exactly() {
        let vh = 1000.0;
        // Top edge at viewport center -> 0.
        assert_eq!(scroll_progress(500.0, vh), 0.0);
        // Top edge at viewport bottom -> 1.
        assert_eq!(scroll_progress(1000.0, vh), 1.0);
        // Midpoint is linear.
        assert!((scroll_progress(750.0, vh) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_is_clamped_outside_the_range() {
        let vh = 800.0;
        assert_eq!(scroll_progress(-5000.0, vh), 0.0);
        assert_eq!(scroll_progress(0.0, vh), 0.0);
        assert_eq!(scroll_progress(12_000.0, vh), 1.0);
    }

    #[test]
    fn zero_height_viewport_does_not_divide_by_zero() {
        assert_eq!(scroll_progress(100.0, 0.0), 0.0);
        assert_eq!(scroll_progress(100.0, -50.0), 0.0);
    }

    #[test]
    fn transform_endpoints() {
        let start = ImageTransform::at(0.0);
        assert_eq!(start.translate_pct, 10.0);
        assert_eq!(start.rotate_deg, 0.0);
        assert_eq!(start.scale, 1.0);

        let end = ImageTransform::at(1.0);
        assert_eq!(end.translate_pct, -100.0);
        assert_eq!(end.rotate_deg, 10.0);
        assert!((end.scale - 0.9).abs() < 1e-12);
    }

    #[test]
    fn transform_midpoint() {
        let mid = ImageTransform::at(0.5);
        assert!((mid.translate_pct - -45.0).abs() < 1e-12);
        assert!((mid.rotate_deg - 5.0).abs() < 1e-12);
        assert!((mid.scale - 0.95).abs() < 1e-12);
    }

    #[test]
    fn pin_height_formats_offset() {
        assert_eq!(pin_height(0.0), "calc(90vh - 0px)");
        assert_eq!(pin_height(151.583), "calc(90vh - 151.583px)");
    }
}
