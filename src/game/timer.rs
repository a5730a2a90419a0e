/// Countdown in whole seconds. Never goes below zero.
#[derive(Clone, Debug)]
pub struct RoundTimer {
    remaining: u32,
}

impl RoundTimer {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_one_per_tick() {
        for t in 0..=60 {
            let mut timer = RoundTimer::new(60);
            for _ in 0..t {
                timer.tick();
            }
            assert_eq!(timer.remaining(), 60 - t);
            assert_eq!(timer.is_expired(), t == 60);
        }
    }

    #[test]
    fn clamps_at_zero() {
        let mut timer = RoundTimer::new(2);
        for _ in 0..5 {
            timer.tick();
        }
        assert_eq!(timer.remaining(), 0);
        assert!(timer.is_expired());
    }

    #[test]
    fn reset_restores_duration() {
        let mut timer = RoundTimer::new(1);
        timer.tick();
        timer.reset(45);
        assert_eq!(timer.remaining(), 45);
        assert!(!timer.is_expired());
    }
}
