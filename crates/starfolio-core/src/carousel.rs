//! Carousel pagination for the certifications section.
//!
//! Pure index math: a responsive page size derived from the viewport
//! width, a clamped current page, and placeholder padding so the final
//! page always renders a full grid.

/// Width thresholds for the responsive page size. Below `medium` one card
/// per page, from `medium` two, from `large` three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub medium: u16,
    pub large: u16,
}

impl Default for Breakpoints {
    /// Terminal-column breakpoints; the classic CSS pair is `768`/`1024`.
    fn default() -> Self {
        Self {
            medium: 80,
            large: 120,
        }
    }
}

impl Breakpoints {
    pub fn new(medium: u16, large: u16) -> Self {
        Self { medium, large }
    }

    /// Step function from viewport width to cards per page.
    pub fn page_size(&self, width: u16) -> usize {
        if width < self.medium {
            1
        } else if width < self.large {
            2
        } else {
            3
        }
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    item_count: usize,
    breakpoints: Breakpoints,
    page_size: usize,
    current_page: usize,
}

impl Carousel {
    pub fn new(item_count: usize, breakpoints: Breakpoints) -> Self {
        Self {
            item_count,
            breakpoints,
            page_size: 1,
            current_page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(item_count / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    /// Recompute the page size for a new viewport width. A changed page
    /// size resets the current page to 0 so it can never reference a page
    /// that no longer exists.
    pub fn set_width(&mut self, width: u16) {
        let size = self.breakpoints.page_size(width);
        if size != self.page_size {
            self.page_size = size;
            self.current_page = 0;
        }
    }

    /// Advance one page; a no-op at the last page.
    pub fn next(&mut self) {
        let last = self.total_pages().saturating_sub(1);
        self.current_page = (self.current_page + 1).min(last);
    }

    /// Go back one page; a no-op at the first page.
    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    /// Jump directly to a page, clamping out-of-range values.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages().saturating_sub(1));
    }

    /// Item indices for the current page, padded with `None` placeholder
    /// slots so every page has exactly `page_size` entries.
    pub fn page_slots(&self) -> Vec<Option<usize>> {
        let start = self.current_page * self.page_size;
        (start..start + self.page_size)
            .map(|i| (i < self.item_count).then_some(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSS: Breakpoints = Breakpoints {
        medium: 768,
        large: 1024,
    };

    #[test]
    fn test_page_size_step_function() {
        assert_eq!(CSS.page_size(0), 1);
        assert_eq!(CSS.page_size(767), 1);
        assert_eq!(CSS.page_size(768), 2);
        assert_eq!(CSS.page_size(1023), 2);
        assert_eq!(CSS.page_size(1024), 3);
        assert_eq!(CSS.page_size(u16::MAX), 3);

        let term = Breakpoints::default();
        assert_eq!(term.page_size(79), 1);
        assert_eq!(term.page_size(80), 2);
        assert_eq!(term.page_size(120), 3);
    }

    #[test]
    fn test_total_pages_after_resize() {
        let mut carousel = Carousel::new(6, CSS);
        for width in [200, 800, 1100, 640, 1024] {
            carousel.set_width(width);
            let ps = carousel.page_size();
            assert_eq!(carousel.total_pages(), 6usize.div_ceil(ps));
        }
    }

    #[test]
    fn test_next_prev_clamp_and_are_idempotent() {
        let mut carousel = Carousel::new(6, CSS);
        carousel.set_width(200); // page size 1 -> 6 pages

        carousel.prev();
        assert_eq!(carousel.current_page(), 0);

        for _ in 0..10 {
            carousel.next();
        }
        assert_eq!(carousel.current_page(), 5);
        carousel.next();
        assert_eq!(carousel.current_page(), 5);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = Carousel::new(6, CSS);
        carousel.set_width(1100); // page size 3 -> 2 pages
        carousel.go_to(99);
        assert_eq!(carousel.current_page(), 1);
        carousel.go_to(0);
        assert_eq!(carousel.current_page(), 0);
    }

    #[test]
    fn test_resize_resets_page() {
        let mut carousel = Carousel::new(6, CSS);
        carousel.set_width(200);
        carousel.go_to(4);
        carousel.set_width(1100);
        assert_eq!(carousel.current_page(), 0);

        // Same page size again: no reset
        carousel.go_to(1);
        carousel.set_width(1200);
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn test_last_page_padded_with_placeholders() {
        let mut carousel = Carousel::new(5, CSS);
        carousel.set_width(1100); // page size 3
        carousel.go_to(1);
        let slots = carousel.page_slots();
        assert_eq!(slots, vec![Some(3), Some(4), None]);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0, CSS);
        carousel.set_width(1100);
        assert_eq!(carousel.total_pages(), 0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.page_slots(), vec![None, None, None]);
    }
}
