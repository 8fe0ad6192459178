use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use starfolio_core::content::{Section, PROFILE};

use crate::app::App;

/// Top navigation bar: the owner's name and one numbered entry per
/// section, the current one highlighted.
pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    if area.height == 0 {
        return;
    }
    let theme = &app.theme;
    let current = app.current_section();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", PROFILE.name),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", Style::default().fg(theme.border)),
    ];
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == current {
            Style::default()
                .fg(theme.heading)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(
            format!(" {}:{} ", i + 1, section.title()),
            style,
        ));
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.surface))
        .render(area, buf);
}
