use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use starfolio_core::content::{TimelineKind, TIMELINE};

use crate::app::App;
use crate::layout::TIMELINE_ENTRY_ROWS;
use crate::widgets::heading;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let theme = &app.theme;
    let body = heading(area, buf, theme, "Experience & Education");
    if body.height == 0 {
        return;
    }

    let line_x = body.x + 2;
    let rows = (TIMELINE.len() * TIMELINE_ENTRY_ROWS) as u16;
    let rows = rows.min(body.height);

    // The spine fills top-down as the section scrolls through the viewport
    let filled = (app.timeline_progress.percent() / 100.0 * rows as f32).round() as u16;
    for dy in 0..rows {
        let style = if dy < filled {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        };
        buf.set_string(line_x, body.y + dy, "│", style);
    }

    let revealed = app.timeline_reveal.revealed();
    for (i, entry) in TIMELINE.iter().enumerate().take(revealed) {
        let top = body.y + (i * TIMELINE_ENTRY_ROWS) as u16;
        if top + 4 > body.y + body.height {
            break;
        }
        let marker = match entry.kind {
            TimelineKind::Work => "◉",
            TimelineKind::Education => "◈",
        };
        buf.set_string(line_x, top, marker, Style::default().fg(theme.accent_alt));

        let x = line_x + 3;
        buf.set_string(
            x,
            top,
            entry.title,
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            x,
            top + 1,
            format!("{} · {}", entry.organization, entry.location),
            Style::default().fg(theme.text),
        );
        buf.set_string(x, top + 2, entry.period, Style::default().fg(theme.muted));
        for (j, highlight) in entry.highlights.iter().enumerate() {
            let y = top + 3 + j as u16;
            if y >= body.y + body.height {
                break;
            }
            buf.set_string(
                x,
                y,
                format!("· {highlight}"),
                Style::default().fg(theme.accent_alt),
            );
        }
    }
}
