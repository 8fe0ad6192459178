use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use starfolio_core::content::PROFILE;

use crate::app::App;
use crate::widgets::centered_x;

/// Full-screen hero: greeting, name, rotating typewriter title, tagline
/// and a scroll hint pinned to the bottom edge.
pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    if area.height < 8 {
        return;
    }
    let theme = &app.theme;
    let mid = area.y + area.height / 2 - 3;

    buf.set_string(
        centered_x(area, PROFILE.greeting),
        mid,
        PROFILE.greeting,
        Style::default().fg(theme.muted),
    );
    buf.set_string(
        centered_x(area, PROFILE.name),
        mid + 1,
        PROFILE.name,
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    // Typed prefix plus a block cursor
    let typed = app.typewriter.text();
    let line = format!("{typed}▌");
    buf.set_string(
        centered_x(area, &line),
        mid + 3,
        &line,
        Style::default().fg(theme.accent_alt),
    );

    buf.set_string(
        centered_x(area, PROFILE.tagline),
        mid + 5,
        PROFILE.tagline,
        Style::default().fg(theme.text),
    );

    let hint = "↓ scroll to explore (j/k, 1-7 sections)";
    buf.set_string(
        centered_x(area, hint),
        area.y + area.height - 2,
        hint,
        Style::default().fg(theme.muted),
    );
}
