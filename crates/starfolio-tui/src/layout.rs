//! Vertical document layout.
//!
//! The page is one tall column of sections; the terminal shows a window
//! into it. Heights are derived from the compiled-in content so the
//! layout only changes on resize.

use starfolio_core::content::{
    Section, CONTACT_CHANNELS, HIGHLIGHTS, PROJECTS, SKILL_CATEGORIES, TIMELINE,
};

/// Rows used by a section heading (title plus underline and spacing).
pub const HEADING_ROWS: usize = 3;
/// Rows per rendered project card.
pub const PROJECT_CARD_ROWS: usize = 8;
/// Rows per timeline entry.
pub const TIMELINE_ENTRY_ROWS: usize = 6;
/// Rows of the certification card area, excluding heading and page dots.
pub const CERT_CARD_ROWS: usize = 8;
/// Rows of the contact form (three fields plus the submit hint).
pub const CONTACT_FORM_ROWS: usize = 12;
pub const FOOTER_ROWS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct SectionLayout {
    pub section: Section,
    /// First document row of the section.
    pub top: usize,
    pub height: usize,
}

#[derive(Debug, Clone)]
pub struct DocumentLayout {
    sections: Vec<SectionLayout>,
    total_height: usize,
}

impl DocumentLayout {
    pub fn compute(viewport_height: usize) -> Self {
        let mut sections = Vec::with_capacity(Section::ALL.len());
        let mut top = 0;
        for section in Section::ALL {
            let height = section_height(section, viewport_height);
            sections.push(SectionLayout {
                section,
                top,
                height,
            });
            top += height;
        }
        Self {
            sections,
            total_height: top + FOOTER_ROWS,
        }
    }

    pub fn sections(&self) -> &[SectionLayout] {
        &self.sections
    }

    pub fn section(&self, section: Section) -> SectionLayout {
        self.sections[section.index()]
    }

    pub fn total_height(&self) -> usize {
        self.total_height
    }

    /// Largest valid scroll offset for a given viewport height.
    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.total_height.saturating_sub(viewport_height)
    }

    /// The section that owns the document row at the top of the viewport.
    pub fn section_at(&self, row: usize) -> Section {
        self.sections
            .iter()
            .rev()
            .find(|s| row >= s.top)
            .map(|s| s.section)
            .unwrap_or(Section::Home)
    }
}

fn section_height(section: Section, viewport_height: usize) -> usize {
    match section {
        // The hero fills one full screen
        Section::Home => viewport_height.max(10),
        Section::About => {
            // Heading, summary block, highlight cards
            HEADING_ROWS + 10 + HIGHLIGHTS.len() * 2 + 2
        }
        Section::Skills => {
            let rows: usize = SKILL_CATEGORIES
                .iter()
                .map(|c| 2 + c.skills.len())
                .sum();
            HEADING_ROWS + rows + 2
        }
        Section::Projects => HEADING_ROWS + PROJECTS.len() * PROJECT_CARD_ROWS + 2,
        Section::Experience => HEADING_ROWS + TIMELINE.len() * TIMELINE_ENTRY_ROWS + 2,
        // Cards plus the page-dot row; paging keeps the height constant
        Section::Certifications => HEADING_ROWS + CERT_CARD_ROWS + 2,
        Section::Contact => {
            HEADING_ROWS + CONTACT_CHANNELS.len() * 2 + CONTACT_FORM_ROWS + 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_contiguous() {
        let layout = DocumentLayout::compute(40);
        let mut expected_top = 0;
        for s in layout.sections() {
            assert_eq!(s.top, expected_top);
            assert!(s.height > 0);
            expected_top += s.height;
        }
        assert_eq!(layout.total_height(), expected_top + FOOTER_ROWS);
    }

    #[test]
    fn test_section_at_boundaries() {
        let layout = DocumentLayout::compute(40);
        assert_eq!(layout.section_at(0), Section::Home);
        let about = layout.section(Section::About);
        assert_eq!(layout.section_at(about.top), Section::About);
        assert_eq!(layout.section_at(about.top - 1), Section::Home);
        assert_eq!(layout.section_at(usize::MAX), Section::Contact);
    }

    #[test]
    fn test_max_scroll() {
        let layout = DocumentLayout::compute(40);
        assert_eq!(layout.max_scroll(40), layout.total_height() - 40);
        assert_eq!(layout.max_scroll(usize::MAX), 0);
    }
}
