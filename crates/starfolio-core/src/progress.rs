//! Scroll-linked progress for the experience timeline.

/// Fill percentage of the timeline's vertical line, driven by how far the
/// viewport has scrolled into the section.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollProgress {
    percent: f32,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from the section's position. `top` is the section's offset
    /// relative to the top of the viewport (negative once scrolled past).
    /// The value only updates while some part of the section intersects the
    /// viewport; scrolling fully past or fully away leaves it frozen.
    pub fn update(&mut self, top: i64, height: u64, viewport_height: u64) {
        if height == 0 {
            return;
        }
        let bottom = top + height as i64;
        let intersects = top < viewport_height as i64 && bottom > 0;
        if !intersects {
            return;
        }
        let traveled = viewport_height as i64 - top;
        let ratio = traveled as f32 / height as f32;
        self.percent = ratio.clamp(0.0, 1.0) * 100.0;
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_to_range() {
        let mut progress = ScrollProgress::new();
        // Section top exactly at the bottom edge of the viewport
        progress.update(39, 100, 40);
        assert!(progress.percent() > 0.0);
        assert!(progress.percent() <= 100.0);

        // Deep into the section: traveled exceeds height, clamps at 100
        progress.update(-70, 100, 40);
        assert!((progress.percent() - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_halfway_through_section() {
        let mut progress = ScrollProgress::new();
        // viewport 40 rows, section 80 rows, top at 0: traveled 40/80
        progress.update(0, 80, 40);
        assert!((progress.percent() - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_frozen_when_fully_outside_viewport() {
        let mut progress = ScrollProgress::new();
        progress.update(0, 80, 40);
        let before = progress.percent();

        // Fully below the viewport
        progress.update(100, 80, 40);
        assert_eq!(progress.percent(), before);

        // Fully above the viewport
        progress.update(-200, 80, 40);
        // -200 + 80 = -120 <= 0, no intersection, still frozen
        assert_eq!(progress.percent(), before);
    }
}
