use thiserror::Error;

/// Failures reading or writing the leaderboard file.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("leaderboard I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("leaderboard format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The music backend could not be opened. Music is simply switched off.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("audio unavailable: {0}")]
    Unavailable(String),
}
