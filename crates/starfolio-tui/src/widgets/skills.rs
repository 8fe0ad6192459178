use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use starfolio_core::content::SKILL_CATEGORIES;

use crate::app::App;
use crate::widgets::heading;

const BAR_WIDTH: usize = 20;
const NAME_WIDTH: usize = 30;

pub fn render(area: Rect, buf: &mut Buffer, app: &App) {
    let theme = &app.theme;
    let body = heading(area, buf, theme, "Skills & Technologies");
    if !app.skills_reveal.is_visible() || body.height == 0 {
        return;
    }

    let now = Instant::now();
    let mut y = body.y;
    let bottom = body.y + body.height;
    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
        // Categories fade in one after another
        if !app.skills_reveal.item_shown(i, now) {
            break;
        }
        if y >= bottom {
            break;
        }
        buf.set_string(
            body.x + 1,
            y,
            category.title,
            Style::default()
                .fg(theme.accent_alt)
                .add_modifier(Modifier::BOLD),
        );
        y += 1;
        for skill in category.skills {
            if y >= bottom {
                return;
            }
            let filled = (skill.level as usize * BAR_WIDTH) / 100;
            let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
            buf.set_string(
                body.x + 3,
                y,
                format!("{:<NAME_WIDTH$}", skill.name),
                Style::default().fg(theme.text),
            );
            buf.set_string(
                body.x + 3 + NAME_WIDTH as u16,
                y,
                bar,
                Style::default().fg(theme.accent),
            );
            buf.set_string(
                body.x + 4 + (NAME_WIDTH + BAR_WIDTH) as u16,
                y,
                format!("{:>3}%", skill.level),
                Style::default().fg(theme.muted),
            );
            y += 1;
        }
        y += 1;
    }
}
