pub mod about;
pub mod certifications;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod status_bar;
pub mod timeline;
pub mod toast;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Draw a section heading with an accent underline, returning the area
/// left for the section body.
pub(crate) fn heading(area: Rect, buf: &mut Buffer, theme: &Theme, title: &str) -> Rect {
    if area.height < 2 {
        return Rect::new(area.x, area.y, area.width, 0);
    }
    buf.set_string(
        area.x + 1,
        area.y,
        title,
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    );
    let underline = "─".repeat(title.width().min(area.width as usize));
    buf.set_string(
        area.x + 1,
        area.y + 1,
        underline,
        Style::default().fg(theme.accent),
    );
    Rect::new(
        area.x,
        area.y + 3,
        area.width,
        area.height.saturating_sub(3),
    )
}

/// Horizontal start for a centered string.
pub(crate) fn centered_x(area: Rect, text: &str) -> u16 {
    let w = text.width() as u16;
    area.x + area.width.saturating_sub(w) / 2
}
