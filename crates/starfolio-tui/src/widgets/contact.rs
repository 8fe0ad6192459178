use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use starfolio_core::content::CONTACT_CHANNELS;

use crate::app::{App, FormField, Mode};
use crate::widgets::heading;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let theme = &app.theme;
    let body = heading(area, buf, theme, "Get In Touch");
    if body.height == 0 {
        return;
    }

    let mut y = body.y;
    for channel in &CONTACT_CHANNELS {
        if y + 1 >= body.y + body.height {
            break;
        }
        buf.set_string(
            body.x + 1,
            y,
            format!("{}:", channel.label),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            body.x + 12,
            y,
            channel.value,
            Style::default().fg(theme.text),
        );
        y += 2;
    }

    let form_area = Rect::new(
        body.x + 1,
        y,
        body.width.saturating_sub(2),
        (body.y + body.height).saturating_sub(y),
    );
    render_form(form_area, buf, app);
}

fn render_form(area: Rect, buf: &mut Buffer, app: &App) {
    if area.height < 4 {
        return;
    }
    let theme = &app.theme;
    let editing = app.mode == Mode::Form;

    let title = if app.form.submitting {
        " Send a Message (sending…) "
    } else if editing {
        " Send a Message (Tab: next field, Enter: send, Esc: done) "
    } else {
        " Send a Message (press i to write) "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if editing { theme.accent } else { theme.border }))
        .title(Span::styled(title, Style::default().fg(theme.accent_alt)));
    let inner = block.inner(area);
    block.render(area, buf);

    let fields = [FormField::Name, FormField::Email, FormField::Message];
    for (i, field) in fields.iter().enumerate() {
        let y = inner.y + i as u16 * 3;
        if y + 1 >= inner.y + inner.height {
            break;
        }
        let focused = editing && app.form.field == Some(*field);
        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        buf.set_string(inner.x, y, field.label(), label_style);

        let value = app.form.value(*field);
        let shown = if focused {
            format!("{value}▌")
        } else {
            value.to_string()
        };
        let max = inner.width.saturating_sub(2) as usize;
        let clipped: String = shown.chars().rev().take(max).collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        buf.set_string(
            inner.x + 2,
            y + 1,
            clipped,
            Style::default().fg(theme.text),
        );
    }
}
