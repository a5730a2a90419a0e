use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, MenuItem};
use crate::ui::field::scenery_lines;

const BANNER: &str = r#"
 ╔═══════════════════════════════════════╗
 ║  D U C K   D A S H                    ║
 ║        ~ pixel edition ~        >o)   ║
 ║                                 (_>   ║
 ╚═══════════════════════════════════════╝"#;

const BUTTON_W: u16 = 24;

pub fn render_menu(frame: &mut Frame, area: Rect, app: &mut App) {
    // Backdrop
    let backdrop = scenery_lines(area.width, area.height, app.frame_count, true, None);
    frame.render_widget(Paragraph::new(backdrop), area);

    let items = MenuItem::all();
    let banner_h = BANNER.lines().count() as u16;
    let panel_w = 48u16.min(area.width);
    let panel_h = (banner_h + 2 + items.len() as u16 * 2 + 2).min(area.height);
    let x = area.x + (area.width.saturating_sub(panel_w)) / 2;
    let y = area.y + (area.height.saturating_sub(panel_h)) / 3;
    let panel = Rect::new(x, y, panel_w, panel_h);

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Rgb(181, 101, 29)))
        .style(Style::default().bg(Color::Rgb(255, 255, 255)));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_h), // Title
            Constraint::Min(0),           // Buttons
        ])
        .split(inner);

    let banner = Paragraph::new(BANNER)
        .style(Style::default().fg(Color::Rgb(56, 142, 60)).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[0]);

    app.menu_areas.clear();
    let buttons = chunks[1];
    let bx = buttons.x + buttons.width.saturating_sub(BUTTON_W) / 2;
    for (i, item) in items.iter().enumerate() {
        let by = buttons.y + 1 + i as u16 * 2;
        if by >= buttons.bottom() {
            break;
        }
        let rect = Rect::new(bx, by, BUTTON_W.min(buttons.width), 1);
        let selected = i == app.selected_item;
        let style = if selected {
            Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .bg(Color::Rgb(56, 142, 60))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(40, 40, 60)).bg(Color::Rgb(230, 230, 230))
        };
        let label = format!("[{}] {}", i + 1, item.title());
        frame.render_widget(Paragraph::new(label).style(style).alignment(Alignment::Center), rect);
        app.menu_areas.push(rect);
    }

    if !app.music.is_available() {
        let hint_y = panel.bottom();
        if hint_y < area.bottom() {
            let hint = Paragraph::new(Span::styled(
                "♪ music unavailable",
                Style::default().fg(Color::Rgb(90, 90, 110)),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(hint, Rect::new(panel.x, hint_y, panel.width, 1));
        }
    }
}
