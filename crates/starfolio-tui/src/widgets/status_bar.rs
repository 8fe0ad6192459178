use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    if area.height == 0 {
        return;
    }
    let theme = &app.theme;

    let mode_str = match app.mode {
        Mode::Browse => "BROWSE",
        Mode::Form => "FORM",
    };
    let theme_str = if app.theme_manager.is_dark() { "dark" } else { "light" };
    let status = format!(
        " {} | {} | theme: {}",
        mode_str,
        app.current_section().title(),
        theme_str
    );

    let help_hint = match app.mode {
        Mode::Browse => " q:quit j/k:scroll 1-7:section h/l:certs t:theme i:contact ",
        Mode::Form => " Tab:field Enter:send Esc:back ",
    };
    let padding_len = padding_width(area.width, &status, help_hint);

    let line = Line::from(vec![
        Span::styled(
            status,
            Style::default().fg(theme.text).bg(theme.surface),
        ),
        Span::styled(
            " ".repeat(padding_len),
            Style::default().bg(theme.surface),
        ),
        Span::styled(
            help_hint,
            Style::default().fg(theme.muted).bg(theme.surface),
        ),
    ]);

    Paragraph::new(line).render(area, buf);
}

/// Columns of filler between the status and the right-aligned hint,
/// measured in display width rather than bytes.
fn padding_width(total: u16, status: &str, hint: &str) -> usize {
    (total as usize).saturating_sub(status.width() + hint.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_uses_display_width() {
        // "●" is 3 bytes but 1 column wide
        assert_eq!(padding_width(20, " ● dark", " q:quit "), 20 - 7 - 8);
    }

    #[test]
    fn test_padding_saturates_when_narrow() {
        assert_eq!(padding_width(5, " BROWSE | Home", " q:quit "), 0);
    }
}
