use std::f32::consts::PI;

const SAMPLE_RATE: u32 = 22_050;
const BPM: f32 = 140.0;
const AMPLITUDE: f32 = 0.3;

// 0.0 is a rest
const MELODY_HZ: [f32; 18] = [
    523.25, 523.25, 659.25, 523.25, 0.0, 523.25,
    587.33, 659.25, 587.33, 523.25, 0.0, 392.00,
    440.00, 523.25, 440.00, 392.00, 0.0, 349.23,
];

/// Endless square-wave loop, mono.
#[derive(Debug, Clone)]
pub struct Chiptune {
    frame: u64,
    note_frames: u64,
}

impl Chiptune {
    pub fn new() -> Self {
        // Eighth notes
        let note_secs = 60.0 / BPM * 0.5;
        Self {
            frame: 0,
            note_frames: (SAMPLE_RATE as f32 * note_secs) as u64,
        }
    }

    pub fn note_frames(&self) -> u64 {
        self.note_frames
    }
}

impl Default for Chiptune {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Chiptune {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let note_i = ((self.frame / self.note_frames) % MELODY_HZ.len() as u64) as usize;
        let freq = MELODY_HZ[note_i];
        let pos_in_note = self.frame % self.note_frames;
        self.frame = self.frame.wrapping_add(1);

        if freq <= 0.0 {
            return Some(0.0);
        }
        let t = pos_in_note as f32 / SAMPLE_RATE as f32;
        let sample = if (2.0 * PI * freq * t).sin() >= 0.0 { AMPLITUDE } else { -AMPLITUDE };
        Some(sample)
    }
}

#[cfg(feature = "music")]
impl rodio::Source for Chiptune {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<std::time::Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_square_or_silent() {
        let tune = Chiptune::new();
        let loop_len = tune.note_frames() as usize * MELODY_HZ.len();
        for s in tune.take(loop_len) {
            assert!(s == 0.0 || s.abs() == AMPLITUDE);
        }
    }

    #[test]
    fn rests_are_silent() {
        let tune = Chiptune::new();
        let n = tune.note_frames() as usize;
        // Fifth note is a rest
        assert!(tune.skip(4 * n).take(n).all(|s| s == 0.0));
    }

    #[test]
    fn never_ends() {
        let tune = Chiptune::new();
        let loop_len = tune.note_frames() as usize * MELODY_HZ.len();
        assert_eq!(tune.take(loop_len * 3).count(), loop_len * 3);
    }
}
