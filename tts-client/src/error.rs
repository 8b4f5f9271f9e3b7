use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Speed {0} is outside the supported range 0.25-2.0")]
    SpeedOutOfRange(f64),
    #[error("Pitch {0} is outside the supported range 0.5-1.5")]
    PitchOutOfRange(f64),
    #[error("Error {}: {}", .status.as_u16(), .body)]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
