use ratatui::prelude::*;

use crate::game::sprites;

/// A small RGB framebuffer drawn two pixels per terminal cell with `▀`.
pub struct PixelCanvas {
    width: u16,
    height: u16,
    pixels: Vec<Color>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Fill a rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for py in y..y + h {
            for px in x..x + w {
                self.put(px, py, color);
            }
        }
    }

    /// Draw a pixel map with its top-left at (x, y). Transparent pixels and
    /// anything off the canvas are skipped.
    pub fn blit(&mut self, pixmap: &[&str], x: i32, y: i32) {
        for (row, line) in pixmap.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if let Some((r, g, b)) = sprites::palette(ch) {
                    self.put(x + col as i32, y + row as i32, Color::Rgb(r, g, b));
                }
            }
        }
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        let w = self.width as usize;
        let mut lines = Vec::with_capacity((self.height as usize + 1) / 2);
        for top in (0..self.height as usize).step_by(2) {
            let spans: Vec<Span<'static>> = (0..w)
                .map(|x| {
                    let upper = self.pixels[top * w + x];
                    let lower = if top + 1 < self.height as usize {
                        self.pixels[(top + 1) * w + x]
                    } else {
                        Color::Reset
                    };
                    Span::styled("▀", Style::default().fg(upper).bg(lower))
                })
                .collect();
            lines.push(Line::from(spans));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_clips_at_edges() {
        let mut canvas = PixelCanvas::new(4, 4, Color::Black);
        canvas.blit(&["YY", "YY"], -1, 3);
        assert_eq!(canvas.get(0, 3), Some(Color::Rgb(244, 208, 63)));
        assert_eq!(canvas.get(1, 3), Some(Color::Black));
        assert_eq!(canvas.get(0, 2), Some(Color::Black));
    }

    #[test]
    fn transparent_pixels_keep_background() {
        let mut canvas = PixelCanvas::new(3, 1, Color::Blue);
        canvas.blit(&[".Y."], 0, 0);
        assert_eq!(canvas.get(0, 0), Some(Color::Blue));
        assert_eq!(canvas.get(2, 0), Some(Color::Blue));
    }

    #[test]
    fn two_pixel_rows_per_line() {
        let mut canvas = PixelCanvas::new(2, 3, Color::Black);
        canvas.fill_rect(0, 1, 2, 1, Color::Red);
        let lines = canvas.into_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Black));
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::Red));
        assert_eq!(lines[1].spans[1].style.bg, Some(Color::Reset));
    }
}
