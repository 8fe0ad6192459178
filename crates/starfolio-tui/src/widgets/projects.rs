use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use starfolio_core::content::PROJECTS;

use crate::app::App;
use crate::layout::PROJECT_CARD_ROWS;
use crate::widgets::heading;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let theme = &app.theme;
    let body = heading(area, buf, theme, "Featured Projects");
    if !app.projects_reveal.is_visible() || body.height == 0 {
        return;
    }

    let now = Instant::now();
    for (i, project) in PROJECTS.iter().enumerate() {
        if !app.projects_reveal.item_shown(i, now) {
            break;
        }
        let top = body.y + (i * PROJECT_CARD_ROWS) as u16;
        if top + PROJECT_CARD_ROWS as u16 > body.y + body.height {
            break;
        }
        let card = Rect::new(
            body.x + 1,
            top,
            body.width.saturating_sub(2),
            PROJECT_CARD_ROWS as u16 - 1,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                format!(" {} ", project.title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Span::styled(
                format!(" {} · {} ", project.category, project.date),
                Style::default().fg(theme.muted),
            ));
        let inner = block.inner(card);
        block.render(card, buf);

        let tech = project.technologies.join(" · ");
        Paragraph::new(vec![
            Line::from(Span::styled(project.description, Style::default().fg(theme.text))),
            Line::default(),
            Line::from(vec![
                Span::styled(tech, Style::default().fg(theme.accent_alt)),
            ]),
            Line::from(Span::styled(
                project.github_url,
                Style::default().fg(theme.muted),
            )),
        ])
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}
