use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

const PANEL_BG: Color = Color::Rgb(116, 192, 252);
const KEY_COLOR: Color = Color::Rgb(10, 37, 64);
const TEXT_COLOR: Color = Color::Rgb(30, 30, 50);

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(KEY_COLOR))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(PANEL_BG))
}

fn footer(keys: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, what)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 90, 120))));
        }
        spans.push(Span::styled(*key, Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", what), Style::default().fg(TEXT_COLOR)));
    }
    Line::from(spans)
}

pub fn render_instructions(frame: &mut Frame, area: Rect) {
    let bullet = |text: &'static str| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Rgb(243, 156, 18))),
            Span::styled(text, Style::default().fg(TEXT_COLOR)),
        ])
    };
    let lines = vec![
        Line::from(""),
        bullet("Click the duck to score"),
        bullet("Misses cost nothing, so click freely"),
        bullet("Score as much as possible before time runs out"),
        Line::from(""),
        bullet("Space dashes: hits score double for a few seconds"),
        bullet("1/2/3 (or S/M/F) pick how often the duck hops"),
        bullet("R restarts the round"),
        Line::from(""),
        footer(&[("Enter", "Back"), ("Esc", "Menu")]),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Instructions")), area);
}

pub fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let music = if !app.music.is_available() {
        "OFF (unavailable)".to_string()
    } else if app.settings.music_on {
        "ON".to_string()
    } else {
        "OFF".to_string()
    };
    let rows = [
        ("Music", music),
        ("Difficulty", app.settings.difficulty.label().to_string()),
        ("Starting speed", app.settings.speed_tier.label().to_string()),
        ("Back", String::new()),
    ];

    let mut lines = vec![Line::from("")];
    for (i, (label, value)) in rows.iter().enumerate() {
        let selected = i == app.settings_row;
        let marker = if selected { "  ▶ " } else { "    " };
        let label_style = if selected {
            Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_COLOR)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Rgb(243, 156, 18))),
            Span::styled(format!("{:<16}", label), label_style),
            Span::styled(value.clone(), Style::default().fg(Color::Rgb(56, 142, 60)).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(footer(&[("↑↓", "Select"), ("Enter/←→", "Change"), ("Esc", "Menu")]));
    frame.render_widget(Paragraph::new(lines).block(panel("Settings")), area);
}

pub fn render_leaderboard(frame: &mut Frame, area: Rect, app: &App) {
    let display = app.round.config().leaderboard_display;
    let title = format!("Leaderboard (Top {})", display);
    let entries = app.leaderboard.top_n(display);

    let mut lines = vec![Line::from("")];
    if entries.is_empty() {
        lines.push(Line::from(Span::styled("  No scores yet.", Style::default().fg(TEXT_COLOR))));
    } else {
        for (i, e) in entries.iter().enumerate() {
            let medal = match i {
                0 => Color::Rgb(255, 200, 0),
                1 => Color::Rgb(150, 150, 170),
                2 => Color::Rgb(181, 101, 29),
                _ => TEXT_COLOR,
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:2}. ", i + 1), Style::default().fg(medal).add_modifier(Modifier::BOLD)),
                Span::styled(format!("{:<14}", e.name), Style::default().fg(TEXT_COLOR)),
                Span::styled(format!("{:>5}", e.score), Style::default().fg(KEY_COLOR).add_modifier(Modifier::BOLD)),
            ]));
        }
    }
    lines.push(Line::from(""));
    if let Some(notice) = &app.notice {
        lines.push(Line::from(Span::styled(
            format!("  ⚠ {}", notice),
            Style::default().fg(Color::Rgb(200, 40, 40)).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.push(footer(&[("Enter", "Play again"), ("Esc", "Menu")]));

    frame.render_widget(Paragraph::new(lines).block(panel(&title)), area);
}
