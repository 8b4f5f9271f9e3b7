mod client;
mod error;
mod request;

pub use client::{CHUNK_SIZE, TtsClient, default_output_path, read_input};
pub use error::SpeechError;
pub use request::{DEFAULT_MODEL, DEFAULT_VOICE, ResponseFormat, SpeechOptions, SynthesisRequest};

pub use reqwest::StatusCode;
