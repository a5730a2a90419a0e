//! Best-effort background music.
//!
//! The output device is probed once at startup. If it is missing the game
//! carries on silently and every call here becomes a no-op.

mod chiptune;

use log::{info, warn};

use crate::error::AudioError;
#[cfg(feature = "music")]
use chiptune::Chiptune;

pub struct Music {
    backend: Option<backend::Backend>,
    playing: bool,
}

impl Music {
    pub fn probe() -> Self {
        let backend = match backend::Backend::open() {
            Ok(b) => {
                info!("Music backend ready");
                Some(b)
            }
            Err(e) => {
                warn!("{}; music disabled", e);
                None
            }
        };
        Self { backend, playing: false }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        if let Some(b) = &self.backend {
            b.resume();
            self.playing = true;
        }
    }

    pub fn stop(&mut self) {
        if let Some(b) = &self.backend {
            b.pause();
        }
        self.playing = false;
    }
}

#[cfg(feature = "music")]
mod backend {
    use rodio::{OutputStream, Sink};

    use super::{AudioError, Chiptune};

    const MUSIC_VOLUME: f32 = 0.35;

    pub struct Backend {
        _stream: OutputStream,
        sink: Sink,
    }

    impl Backend {
        pub fn open() -> Result<Self, AudioError> {
            let (stream, handle) =
                OutputStream::try_default().map_err(|e| AudioError::Unavailable(e.to_string()))?;
            let sink = Sink::try_new(&handle).map_err(|e| AudioError::Unavailable(e.to_string()))?;
            sink.set_volume(MUSIC_VOLUME);
            sink.append(Chiptune::new());
            sink.pause();
            Ok(Self { _stream: stream, sink })
        }

        pub fn resume(&self) {
            self.sink.play();
        }

        pub fn pause(&self) {
            self.sink.pause();
        }
    }
}

#[cfg(not(feature = "music"))]
mod backend {
    use super::AudioError;

    pub struct Backend;

    impl Backend {
        pub fn open() -> Result<Self, AudioError> {
            Err(AudioError::Unavailable("built without the `music` feature".to_string()))
        }

        pub fn resume(&self) {}

        pub fn pause(&self) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "music"))]
    #[test]
    fn without_backend_everything_is_a_no_op() {
        let mut music = Music::probe();
        assert!(!music.is_available());
        music.play();
        assert!(!music.is_playing());
        music.stop();
        assert!(!music.is_playing());
    }

    #[test]
    fn stop_always_clears_playing() {
        let mut music = Music::probe();
        music.play();
        music.stop();
        assert!(!music.is_playing());
    }
}
