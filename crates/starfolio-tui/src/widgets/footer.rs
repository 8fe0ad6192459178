use chrono::{Datelike, Local};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use starfolio_core::content::PROFILE;

use crate::app::App;
use crate::widgets::centered_x;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    if area.height == 0 {
        return;
    }
    let theme = &app.theme;
    let year = Local::now().year();
    let text = format!("© {year} {} · Built with care", PROFILE.name);
    buf.set_string(
        centered_x(area, &text),
        area.y + area.height / 2,
        text,
        Style::default().fg(theme.muted),
    );
}
