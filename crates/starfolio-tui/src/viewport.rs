//! Scrolling renderer.
//!
//! Sections are drawn into off-screen buffers at their natural height,
//! then the rows falling inside the viewport are blitted into the frame.
//! This lets a section be partially visible at either edge, which is what
//! the visibility trackers key off.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use starfolio_core::content::Section;

use crate::app::App;
use crate::layout::FOOTER_ROWS;
use crate::widgets;

pub fn render_document(frame: &mut Frame, area: Rect, app: &App) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    fill_background(buf, area, app);

    for s in app.layout.sections() {
        let mut scratch = match scratch_buffer(area.width, s.height) {
            Some(b) => b,
            None => continue,
        };
        render_section(s.section, scratch.area, &mut scratch, app);
        blit(&scratch, buf, area, s.top, app.scroll);
    }

    // Footer sits below the last section
    let footer_top = app.layout.total_height() - FOOTER_ROWS;
    if let Some(mut scratch) = scratch_buffer(area.width, FOOTER_ROWS) {
        widgets::footer::render(scratch.area, &mut scratch, app);
        blit(&scratch, buf, area, footer_top, app.scroll);
    }

    overlay_starfield(buf, area, app);
}

fn fill_background(buf: &mut Buffer, area: Rect, app: &App) {
    buf.set_style(area, Style::default().bg(app.theme.bg).fg(app.theme.text));
}

fn scratch_buffer(width: u16, height: usize) -> Option<Buffer> {
    if height == 0 || height > u16::MAX as usize {
        return None;
    }
    Some(Buffer::empty(Rect::new(0, 0, width, height as u16)))
}

fn render_section(section: Section, area: Rect, buf: &mut Buffer, app: &App) {
    buf.set_style(area, Style::default().bg(app.theme.bg).fg(app.theme.text));
    match section {
        Section::Home => widgets::hero::render(area, buf, app),
        Section::About => widgets::about::render(area, buf, app),
        Section::Skills => widgets::skills::render(area, buf, app),
        Section::Projects => widgets::projects::render(area, buf, app),
        Section::Experience => widgets::timeline::render(area, buf, app),
        Section::Certifications => widgets::certifications::render(area, buf, app),
        Section::Contact => widgets::contact::render(area, buf, app),
    }
}

/// Copy the rows of `scratch` that fall inside the viewport into `target`.
/// `doc_top` is the scratch buffer's first document row.
fn blit(scratch: &Buffer, target: &mut Buffer, area: Rect, doc_top: usize, scroll: usize) {
    let view_bottom = scroll + area.height as usize;
    let height = scratch.area.height as usize;
    let first = doc_top.max(scroll);
    let last = (doc_top + height).min(view_bottom);
    for doc_row in first..last {
        let src_y = (doc_row - doc_top) as u16;
        let dst_y = area.y + (doc_row - scroll) as u16;
        for x in 0..area.width {
            if let (Some(src), Some(dst)) =
                (scratch.cell((x, src_y)), target.cell_mut((area.x + x, dst_y)))
            {
                *dst = src.clone();
            }
        }
    }
}

/// Draw stars onto cells the content left blank. The field is fixed to
/// the viewport, so stars do not scroll with the page.
fn overlay_starfield(buf: &mut Buffer, area: Rect, app: &App) {
    for star in app.starfield.stars() {
        let x = star.x.round();
        let y = star.y.round();
        if x < 0.0 || y < 0.0 || x >= area.width as f32 || y >= area.height as f32 {
            continue;
        }
        let pos = (area.x + x as u16, area.y + y as u16);
        if let Some(cell) = buf.cell_mut(pos) {
            if cell.symbol() == " " {
                let glyph = if star.radius < 1.0 {
                    "·"
                } else if star.radius < 1.6 {
                    "•"
                } else {
                    "✦"
                };
                cell.set_symbol(glyph);
                cell.set_fg(app.theme.star_color(star.opacity));
            }
        }
    }
}
