use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use starfolio_core::content::{Section, HIGHLIGHTS, PROFILE};

use crate::app::App;
use crate::widgets::heading;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let theme = &app.theme;
    let body = heading(area, buf, theme, "About Me");
    if !app.section_reveals[Section::About.index()].is_visible() || body.height == 0 {
        return;
    }

    let summary_height = 10.min(body.height);
    let summary = Paragraph::new(vec![
        Line::from(Span::styled(
            PROFILE.about_heading,
            Style::default()
                .fg(theme.accent_alt)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(PROFILE.about_summary),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(theme.text));
    summary.render(
        Rect::new(body.x + 1, body.y, body.width.saturating_sub(2), summary_height),
        buf,
    );

    let mut y = body.y + summary_height + 1;
    for h in &HIGHLIGHTS {
        if y >= body.y + body.height {
            break;
        }
        buf.set_string(
            body.x + 1,
            y,
            format!("◆ {}", h.title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        if y + 1 < body.y + body.height {
            buf.set_string(
                body.x + 3,
                y + 1,
                h.description,
                Style::default().fg(theme.muted),
            );
        }
        y += 2;
    }
}
