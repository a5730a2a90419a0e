use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Screen};

pub fn render_hud(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.round.session();
    let playing = app.screen == Screen::Playing;
    let remaining = if playing {
        app.round.time_remaining()
    } else {
        app.round.config().round_seconds
    };
    let (tier, difficulty) = if playing {
        (session.speed_tier, app.round.difficulty())
    } else {
        (app.settings.speed_tier, app.settings.difficulty)
    };

    let time_color = if playing && remaining <= 10 {
        Color::Rgb(255, 90, 90)
    } else {
        Color::White
    };

    let mut spans = vec![
        Span::styled(
            format!(" Score: {} ", if playing { session.score } else { 0 }),
            Style::default().fg(Color::Rgb(255, 220, 80)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        Span::styled(
            format!("⏱ Time: {}s ", remaining),
            Style::default().fg(time_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))),
        Span::styled(
            format!("Speed: {} ({}) ", tier.label(), difficulty.label()),
            Style::default().fg(Color::Rgb(120, 200, 255)),
        ),
    ];
    if playing && session.dash_active() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::Rgb(60, 60, 80))));
        spans.push(Span::styled(
            format!("⚡ DASH x{} {:.1}s ", session.multiplier(), session.dash_remaining().as_secs_f32()),
            Style::default().fg(Color::Rgb(255, 140, 40)).add_modifier(Modifier::BOLD),
        ));
    }
    if app.music.is_playing() {
        spans.push(Span::styled(" │ ♪", Style::default().fg(Color::Rgb(200, 120, 255))));
    }

    let hud = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
            .border_type(BorderType::Rounded)
            .title(" 🦆 Duck Dash · Pixel Edition ")
            .title_style(
                Style::default()
                    .fg(Color::Rgb(200, 120, 255))
                    .add_modifier(Modifier::BOLD),
            )
            .title_bottom(Line::from(" Esc Main Menu ").right_aligned())
            .style(Style::default().bg(Color::Rgb(10, 37, 64))),
    );

    frame.render_widget(hud, area);
}
