use std::time::Duration;

use rand::Rng;

/// Top-left corner of the duck, in field pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

/// Size of the play field in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: u16,
    pub height: u16,
}

pub struct DuckSpawner {
    sprite_w: u16,
    sprite_h: u16,
    since_move: Duration,
}

impl DuckSpawner {
    pub fn new(sprite_w: u16, sprite_h: u16) -> Self {
        Self {
            sprite_w,
            sprite_h,
            since_move: Duration::ZERO,
        }
    }

    pub fn sprite_size(&self) -> (u16, u16) {
        (self.sprite_w, self.sprite_h)
    }

    /// Pick a fresh spot where the whole sprite is visible and restart the
    /// cadence clock. An axis too small for the sprite pins to 0.
    pub fn respawn<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) -> Position {
        self.since_move = Duration::ZERO;
        Position {
            x: pick(bounds.width, self.sprite_w, rng),
            y: pick(bounds.height, self.sprite_h, rng),
        }
    }

    /// Pull a position back inside bounds that have shrunk under it.
    pub fn fit(&self, pos: Position, bounds: Bounds) -> Position {
        Position {
            x: pos.x.min(bounds.width.saturating_sub(self.sprite_w)),
            y: pos.y.min(bounds.height.saturating_sub(self.sprite_h)),
        }
    }

    /// Advance the cadence clock. Returns true once `interval` has passed
    /// since the last move.
    pub fn due(&mut self, dt: Duration, interval: Duration) -> bool {
        self.since_move += dt;
        if self.since_move >= interval {
            self.since_move = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

fn pick<R: Rng + ?Sized>(extent: u16, size: u16, rng: &mut R) -> u16 {
    if extent < size {
        0
    } else {
        rng.gen_range(0..=extent - size)
    }
}
