pub mod canvas;
pub mod field;
pub mod hud;
pub mod menu;
pub mod screens;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // HUD
            Constraint::Min(0),    // Content
        ])
        .split(frame.area());

    // Keep the field size current so clicks and spawns map to what is shown
    let (field, _) = field::play_layout(chunks[1]);
    app.field_area = field;

    hud::render_hud(frame, app, chunks[0]);

    match app.screen {
        Screen::Menu => menu::render_menu(frame, chunks[1], app),
        Screen::Instructions => screens::render_instructions(frame, chunks[1]),
        Screen::Settings => screens::render_settings(frame, chunks[1], app),
        Screen::Leaderboard => screens::render_leaderboard(frame, chunks[1], app),
        Screen::Playing => field::render_play(frame, chunks[1], app),
    }

    // Name entry overlay (renders on top of everything)
    if app.entering_name {
        let score = app.round.session().score;
        let rank = app.leaderboard.rank_of(score);
        let area = frame.area();
        render_name_entry(frame, area, &app.name_buffer, score, rank);
    }
}

fn render_name_entry(frame: &mut Frame, area: Rect, name_buffer: &str, score: u32, rank: Option<usize>) {
    let overlay_w = 44u16.min(area.width.saturating_sub(4));
    let overlay_h = 13u16.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(overlay_w)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_h)) / 2;
    let overlay_area = Rect::new(x, y, overlay_w, overlay_h);

    // Clear background
    frame.render_widget(Clear, overlay_area);

    let title = match rank {
        Some(1) => " 🏆 NEW HIGH SCORE! ".to_string(),
        Some(n) => format!(" 🦆 GAME OVER · rank #{} ", n),
        None => " 🦆 GAME OVER ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .title(title)
        .title_style(Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    // Typed chars + underscores for what is left
    let max_len = 12;
    let typed_len = name_buffer.chars().count();
    let remaining = max_len - typed_len.min(max_len);
    let display_name = format!("{}{}", name_buffer, "_".repeat(remaining));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  Final score: {}", score), Style::default().fg(Color::Rgb(255, 215, 0)).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter your name:", Style::default().fg(Color::Rgb(180, 180, 200))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    [ ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled(display_name, Style::default().fg(Color::Rgb(255, 255, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" ]", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" confirm  ", Style::default().fg(Color::Rgb(100, 100, 130))),
            Span::styled("Esc", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled(" save as Player", Style::default().fg(Color::Rgb(100, 100, 130))),
        ]),
    ];

    let p = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(15, 15, 25)));
    frame.render_widget(p, inner);
}
