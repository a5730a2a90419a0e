use std::time::Duration;

use crate::config::{GameConfig, SpeedTier};
use crate::game::spawner::Position;

/// Mutable state of one round: score, dash window and where the duck is.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub score: u32,
    pub speed_tier: SpeedTier,
    pub duck: Position,
    duck_w: u16,
    duck_h: u16,
    dash_remaining: Duration,
    dash_duration: Duration,
    dash_multiplier: u32,
}

impl GameSession {
    pub fn new(cfg: &GameConfig, speed_tier: SpeedTier, duck: Position, duck_size: (u16, u16)) -> Self {
        Self {
            score: 0,
            speed_tier,
            duck,
            duck_w: duck_size.0,
            duck_h: duck_size.1,
            dash_remaining: Duration::ZERO,
            dash_duration: cfg.dash_duration,
            dash_multiplier: cfg.dash_multiplier,
        }
    }

    pub fn dash_active(&self) -> bool {
        !self.dash_remaining.is_zero()
    }

    pub fn dash_remaining(&self) -> Duration {
        self.dash_remaining
    }

    /// Points a hit is worth right now.
    pub fn multiplier(&self) -> u32 {
        if self.dash_active() {
            self.dash_multiplier
        } else {
            1
        }
    }

    pub fn duck_contains(&self, point: Position) -> bool {
        let (px, py) = (u32::from(point.x), u32::from(point.y));
        let (dx, dy) = (u32::from(self.duck.x), u32::from(self.duck.y));
        px >= dx && px < dx + u32::from(self.duck_w) && py >= dy && py < dy + u32::from(self.duck_h)
    }

    /// Score a click. Returns the points awarded on a hit; the caller is
    /// expected to move the duck afterwards. Misses cost nothing.
    pub fn on_click(&mut self, point: Position) -> Option<u32> {
        if !self.duck_contains(point) {
            return None;
        }
        let points = self.multiplier();
        self.score = self.score.saturating_add(points);
        Some(points)
    }

    /// Open (or refresh) the dash window.
    pub fn on_dash(&mut self) {
        self.dash_remaining = self.dash_duration;
    }

    pub fn cool_down(&mut self, dt: Duration) {
        self.dash_remaining = self.dash_remaining.saturating_sub(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(x: u16, y: u16) -> GameSession {
        GameSession::new(&GameConfig::default(), SpeedTier::Slow, Position { x, y }, (16, 11))
    }

    #[test]
    fn click_on_duck_scores_one() {
        let mut s = session_at(10, 5);
        assert_eq!(s.on_click(Position { x: 10, y: 5 }), Some(1));
        assert_eq!(s.on_click(Position { x: 25, y: 15 }), Some(1));
        assert_eq!(s.score, 2);
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let mut s = session_at(10, 5);
        for p in [(9, 5), (10, 4), (26, 5), (10, 16), (0, 0), (u16::MAX, u16::MAX)] {
            assert_eq!(s.on_click(Position { x: p.0, y: p.1 }), None);
        }
        assert_eq!(s.score, 0);
    }

    #[test]
    fn dash_multiplies_hits() {
        let mut s = session_at(0, 0);
        s.on_dash();
        assert!(s.dash_active());
        assert_eq!(s.on_click(Position { x: 3, y: 3 }), Some(2));
        assert_eq!(s.score, 2);
    }

    #[test]
    fn dash_expires_without_input() {
        let mut s = session_at(0, 0);
        s.on_dash();
        s.cool_down(Duration::from_millis(2999));
        assert_eq!(s.multiplier(), 2);
        s.cool_down(Duration::from_millis(1));
        assert!(!s.dash_active());
        assert_eq!(s.multiplier(), 1);
    }

    #[test]
    fn dash_press_refreshes_window() {
        let mut s = session_at(0, 0);
        s.on_dash();
        s.cool_down(Duration::from_secs(2));
        s.on_dash();
        assert_eq!(s.dash_remaining(), Duration::from_secs(3));
    }
}
