//! Tuning constants and the player-adjustable settings.

use std::time::Duration;

/// How often the duck hops when the speed factor is 1.
const BASE_RELOCATION_MS: u64 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedTier {
    Slow,
    Medium,
    Fast,
}

impl SpeedTier {
    pub fn label(&self) -> &'static str {
        match self {
            SpeedTier::Slow => "slow",
            SpeedTier::Medium => "medium",
            SpeedTier::Fast => "fast",
        }
    }

    pub fn next(&self) -> SpeedTier {
        match self {
            SpeedTier::Slow => SpeedTier::Medium,
            SpeedTier::Medium => SpeedTier::Fast,
            SpeedTier::Fast => SpeedTier::Slow,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Speed factor of a tier under this preset. Higher hops more often.
    pub fn speed(&self, tier: SpeedTier) -> u32 {
        let base = match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        };
        match tier {
            SpeedTier::Slow => base,
            SpeedTier::Medium => base + 1,
            SpeedTier::Fast => base + 2,
        }
    }

    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Gameplay tuning. None of these are exposed in the settings screen.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Length of a round in whole seconds
    pub round_seconds: u32,

    /// How long one dash press lasts
    pub dash_duration: Duration,

    /// Points per hit while dashing
    pub dash_multiplier: u32,

    /// Relocation interval is divided by this while dashing
    pub dash_cadence_factor: u32,

    /// Relocation interval at speed factor 1
    pub base_relocation: Duration,

    /// Entries kept in the leaderboard file
    pub leaderboard_capacity: usize,

    /// Entries shown on the leaderboard screen
    pub leaderboard_display: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: 60,
            dash_duration: Duration::from_secs(3),
            dash_multiplier: 2,
            dash_cadence_factor: 2,
            base_relocation: Duration::from_millis(BASE_RELOCATION_MS),
            leaderboard_capacity: 20,
            leaderboard_display: 10,
        }
    }
}

impl GameConfig {
    pub fn relocation_interval(&self, tier: SpeedTier, difficulty: Difficulty, dashing: bool) -> Duration {
        let mut divisor = difficulty.speed(tier).max(1);
        if dashing {
            divisor *= self.dash_cadence_factor.max(1);
        }
        self.base_relocation / divisor
    }
}

/// Player choices from the settings screen. Kept in memory for the session.
#[derive(Debug, Clone)]
pub struct Settings {
    pub music_on: bool,
    pub difficulty: Difficulty,
    pub speed_tier: SpeedTier,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_on: true,
            difficulty: Difficulty::Normal,
            speed_tier: SpeedTier::Slow,
        }
    }
}
