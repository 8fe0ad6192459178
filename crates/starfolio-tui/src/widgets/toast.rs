use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ToastKind};

/// Transient notification drawn over the top-right corner.
pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };
    let theme = &app.theme;

    let width = (toast.text.width() as u16 + 4).min(area.width.saturating_sub(2));
    if width < 6 || area.height < 4 {
        return;
    }
    let popup = Rect::new(area.x + area.width - width - 1, area.y + 1, width, 3);

    let (color, label) = match toast.kind {
        ToastKind::Success => (theme.success, " ✓ "),
        ToastKind::Error => (theme.error, " ✗ "),
        ToastKind::Info => (theme.accent_alt, " i "),
    };

    Clear.render(popup, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(popup);
    block.render(popup, buf);

    Paragraph::new(toast.text.as_str())
        .style(Style::default().fg(theme.text).bg(theme.surface))
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}
