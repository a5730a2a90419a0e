use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::spawner::Position;
use crate::game::sprites;
use crate::game::RoundPhase;
use crate::ui::canvas::PixelCanvas;

const SKY_FILL: Color = Color::Rgb(135, 206, 250);
const GRASS_H: i32 = 3;
// Horizontal spots for props, as fractions of the field width
const CLOUD_SPOTS: [f32; 3] = [0.12, 0.40, 0.73];
const PIPE_SPOTS: [f32; 3] = [0.21, 0.54, 0.85];
const BUSH_SPOTS: [f32; 3] = [0.10, 0.44, 0.77];

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Sky, sun, drifting clouds, bricks, grass and water. Shared by the menu
/// backdrop and the play field.
pub fn draw_scenery(canvas: &mut PixelCanvas, frame_count: u64, props: bool) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    let ground_y = h * 11 / 13;

    let band_h = (h / 8).max(1);
    for (i, &col) in sprites::SKY.iter().enumerate() {
        canvas.fill_rect(0, i as i32 * band_h, w, band_h, rgb(col));
    }
    canvas.blit(&sprites::SUN, 3, 2);

    // Clouds drift left and wrap around
    let (cloud_w, _) = sprites::size(&sprites::CLOUD);
    let span = w + cloud_w as i32 * 2;
    let drift = (frame_count / 6) as i32;
    for (i, spot) in CLOUD_SPOTS.iter().enumerate() {
        let base = (spot * w as f32) as i32;
        let x = (base - drift).rem_euclid(span.max(1)) - cloud_w as i32;
        let y = 3 + (i as i32 % 2) * 3;
        canvas.blit(&sprites::CLOUD, x, y);
    }

    canvas.fill_rect(0, ground_y, w, h - ground_y, rgb(sprites::WATER));
    canvas.fill_rect(0, ground_y - GRASS_H, w, GRASS_H, rgb(sprites::GRASS));
    let (block_w, block_h) = sprites::size(&sprites::BLOCK);
    let mut x = 0;
    while x < w {
        canvas.blit(&sprites::BLOCK, x, ground_y - GRASS_H - block_h as i32);
        x += block_w as i32;
    }

    if props {
        let (_, pipe_h) = sprites::size(&sprites::PIPE);
        for spot in PIPE_SPOTS {
            canvas.blit(&sprites::PIPE, (spot * w as f32) as i32, ground_y - pipe_h as i32);
        }
        let (_, bush_h) = sprites::size(&sprites::BUSH);
        for spot in BUSH_SPOTS {
            canvas.blit(&sprites::BUSH, (spot * w as f32) as i32, ground_y - bush_h as i32);
        }
    }
}

pub fn scenery_lines(width: u16, rows: u16, frame_count: u64, props: bool, duck: Option<Position>) -> Vec<Line<'static>> {
    let mut canvas = PixelCanvas::new(width, rows.saturating_mul(2), SKY_FILL);
    draw_scenery(&mut canvas, frame_count, props);
    if let Some(duck) = duck {
        canvas.blit(&sprites::DUCK, duck.x as i32, duck.y as i32);
    }
    canvas.into_lines()
}

/// Split the bordered play area into the field and the help line.
pub fn play_layout(area: Rect) -> (Rect, Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Field
            Constraint::Length(1), // Help
        ])
        .split(inner);
    (chunks[0], chunks[1])
}

pub fn render_play(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(244, 208, 63)))
        .title(" 🦆 Duck Dash ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 220, 80))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);

    let (field, help_area) = play_layout(area);
    let session = app.round.session();
    let lines = scenery_lines(field.width, field.height, app.frame_count, true, Some(session.duck));
    frame.render_widget(Paragraph::new(lines), field);

    let help = if app.round.phase() == RoundPhase::Running {
        Line::from(vec![
            Span::styled(" Click ", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled("the duck ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Space ", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled("Dash ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("1/2/3 ", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled("Speed ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("R ", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled("Restart ", Style::default().fg(Color::DarkGray)),
            Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60))),
            Span::styled("Esc ", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
            Span::styled("Menu", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            " ⏰ TIME'S UP! ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(help), help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenery_fills_every_cell() {
        let lines = scenery_lines(40, 12, 0, true, None);
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|l| l.spans.len() == 40));
    }

    #[test]
    fn duck_pixels_show_up() {
        let mut canvas = PixelCanvas::new(40, 24, SKY_FILL);
        draw_scenery(&mut canvas, 0, false);
        canvas.blit(&sprites::DUCK, 10, 0);
        // Row 1 of the duck starts at column 5
        assert_eq!(canvas.get(15, 1), Some(Color::Rgb(244, 208, 63)));
    }

    #[test]
    fn tiny_field_does_not_panic() {
        let lines = scenery_lines(1, 1, 99, true, Some(Position { x: 0, y: 0 }));
        assert_eq!(lines.len(), 1);
        let lines = scenery_lines(0, 0, 5, true, None);
        assert!(lines.is_empty());
    }
}
