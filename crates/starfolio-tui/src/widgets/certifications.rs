use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use starfolio_core::content::CERTIFICATIONS;

use crate::app::App;
use crate::layout::CERT_CARD_ROWS;
use crate::widgets::{centered_x, heading};

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let theme = &app.theme;
    let body = heading(area, buf, theme, "Certifications");
    if body.height == 0 {
        return;
    }

    let slots = app.carousel.page_slots();
    let per_page = slots.len() as u16;
    if per_page == 0 || body.width < 4 {
        return;
    }
    let card_width = body.width.saturating_sub(2) / per_page;
    let card_height = (CERT_CARD_ROWS as u16).min(body.height);

    for (col, slot) in slots.iter().enumerate() {
        let card = Rect::new(
            body.x + 1 + col as u16 * card_width,
            body.y,
            card_width.saturating_sub(1),
            card_height,
        );
        // Placeholder slots keep the grid shape but stay empty
        if let Some(index) = slot {
            render_card(card, buf, app, *index);
        }
    }

    // Page dots, current page highlighted
    let total = app.carousel.total_pages();
    let dots: String = (0..total)
        .map(|p| if p == app.carousel.current_page() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    let dots_line = format!("{dots}  (h/l to flip)");
    if card_height < body.height {
        buf.set_string(
            centered_x(body, &dots_line),
            body.y + card_height,
            dots_line,
            Style::default().fg(theme.muted),
        );
    }
}

fn render_card(card: Rect, buf: &mut Buffer, app: &App, index: usize) {
    let theme = &app.theme;
    let cert = &CERTIFICATIONS[index];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .title(Span::styled(
            format!(" {} ", cert.issuer),
            Style::default().fg(theme.accent_alt),
        ));
    let inner = block.inner(card);
    block.render(card, buf);

    Paragraph::new(vec![
        Line::from(Span::styled(
            cert.title,
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(cert.date, Style::default().fg(theme.muted))),
        Line::from(Span::styled(cert.verify_url, Style::default().fg(theme.muted))),
    ])
    .wrap(Wrap { trim: true })
    .render(inner, buf);
}
