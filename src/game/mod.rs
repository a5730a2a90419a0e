pub mod session;
pub mod spawner;
pub mod sprites;
pub mod timer;

use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{Difficulty, GameConfig, SpeedTier};
use crate::error::PersistenceError;
use crate::leaderboard::Leaderboard;
use session::GameSession;
use spawner::{Bounds, DuckSpawner, Position};
use timer::RoundTimer;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Where a round is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting at the menu
    Idle,
    /// Timer ticking, clicks count
    Running,
    /// Time is up, score frozen, waiting to be recorded
    Expired,
    /// Leaderboard write attempted
    Recorded,
}

/// One duck-clicking round: timer, spawner and session driven by wall-clock
/// deltas from the UI loop.
pub struct Round<R: Rng = StdRng> {
    phase: RoundPhase,
    cfg: GameConfig,
    difficulty: Difficulty,
    session: GameSession,
    timer: RoundTimer,
    spawner: DuckSpawner,
    bounds: Bounds,
    second_acc: Duration,
    rng: R,
}

impl<R: Rng> Round<R> {
    pub fn new(cfg: GameConfig, rng: R) -> Self {
        let (w, h) = sprites::duck_size();
        let session = GameSession::new(&cfg, SpeedTier::Slow, Position::default(), (w, h));
        Self {
            phase: RoundPhase::Idle,
            timer: RoundTimer::new(cfg.round_seconds),
            cfg,
            difficulty: Difficulty::Normal,
            session,
            spawner: DuckSpawner::new(w, h),
            bounds: Bounds { width: 80, height: 40 },
            second_acc: Duration::ZERO,
            rng,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    /// Idle -> Running. Ignored in any other phase.
    pub fn start(&mut self, tier: SpeedTier, difficulty: Difficulty, bounds: Bounds) -> bool {
        if self.phase != RoundPhase::Idle {
            debug!("start ignored in phase {:?}", self.phase);
            return false;
        }
        self.begin(tier, difficulty, bounds);
        true
    }

    /// Throw away the round in progress and start over with the same settings.
    pub fn restart(&mut self) {
        if self.phase == RoundPhase::Running {
            self.begin(self.session.speed_tier, self.difficulty, self.bounds);
        }
    }

    fn begin(&mut self, tier: SpeedTier, difficulty: Difficulty, bounds: Bounds) {
        self.bounds = bounds;
        self.difficulty = difficulty;
        self.timer.reset(self.cfg.round_seconds);
        self.second_acc = Duration::ZERO;
        let duck = self.spawner.respawn(bounds, &mut self.rng);
        self.session = GameSession::new(&self.cfg, tier, duck, self.spawner.sprite_size());
        self.phase = RoundPhase::Running;
        info!(
            "Round started: {}s, {} tier, {} difficulty",
            self.cfg.round_seconds,
            tier.label(),
            difficulty.label()
        );
    }

    /// Move the round forward by `dt` of wall time.
    pub fn advance(&mut self, dt: Duration, bounds: Bounds) {
        if self.phase != RoundPhase::Running {
            return;
        }
        if bounds != self.bounds {
            self.bounds = bounds;
            self.session.duck = self.spawner.fit(self.session.duck, bounds);
        }

        self.session.cool_down(dt);

        self.second_acc += dt;
        while self.second_acc >= ONE_SECOND && !self.timer.is_expired() {
            self.second_acc -= ONE_SECOND;
            self.timer.tick();
        }
        if self.timer.is_expired() {
            self.phase = RoundPhase::Expired;
            info!("Round over with score {}", self.session.score);
            return;
        }

        let interval = self.cfg.relocation_interval(
            self.session.speed_tier,
            self.difficulty,
            self.session.dash_active(),
        );
        if self.spawner.due(dt, interval) {
            self.session.duck = self.spawner.respawn(self.bounds, &mut self.rng);
        }
    }

    /// Click at a field pixel. A hit scores and sends the duck elsewhere.
    pub fn on_click(&mut self, point: Position) -> Option<u32> {
        if self.phase != RoundPhase::Running {
            return None;
        }
        let points = self.session.on_click(point)?;
        self.session.duck = self.spawner.respawn(self.bounds, &mut self.rng);
        Some(points)
    }

    pub fn on_dash(&mut self) {
        if self.phase == RoundPhase::Running {
            self.session.on_dash();
        }
    }

    pub fn set_speed_tier(&mut self, tier: SpeedTier) {
        self.session.speed_tier = tier;
    }

    /// Expired -> Recorded. The phase moves on whether or not the write
    /// worked; the result is handed back for the UI to report.
    pub fn record_into(&mut self, board: &mut Leaderboard, name: &str) -> Result<(), PersistenceError> {
        if self.phase != RoundPhase::Expired {
            debug!("record ignored in phase {:?}", self.phase);
            return Ok(());
        }
        let result = board.record(name, self.session.score);
        self.phase = RoundPhase::Recorded;
        result
    }

    pub fn return_to_idle(&mut self) {
        self.phase = RoundPhase::Idle;
    }
}
