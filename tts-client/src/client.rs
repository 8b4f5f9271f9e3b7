use std::path::{Path, PathBuf};

use bytes::Bytes;
use reqwest::StatusCode;
use tokio::{
    fs,
    io::{AsyncWriteExt, BufWriter},
};

use crate::{
    SpeechError, SpeechOptions, SynthesisRequest,
    request::{DEFAULT_MODEL, DEFAULT_VOICE},
};

/// Size of the write buffer used when a streamed body is copied to disk.
pub const CHUNK_SIZE: usize = 8192;

/// Client for an OpenAI-compatible `/v1/audio/speech` endpoint.
pub struct TtsClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    default_voice: String,
}

impl TtsClient {
    /// `api_url` is the full synthesis endpoint, `api_key` the bearer token.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            default_voice: DEFAULT_VOICE.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_default_voice(mut self, voice: impl Into<String>) -> Self {
        self.default_voice = voice.into();
        self
    }

    /// The voice a request with these options will be sent with.
    pub fn resolve_voice<'a>(&'a self, options: &'a SpeechOptions) -> &'a str {
        options.voice.as_deref().unwrap_or(&self.default_voice)
    }

    /// Synthesize `text` and return the audio body in memory.
    pub async fn synthesize(
        &self,
        text: &str,
        options: &SpeechOptions,
    ) -> Result<Bytes, SpeechError> {
        let response = self.send(text, options).await?;
        Ok(response.bytes().await?)
    }

    /// Synthesize `text` and write the audio to `output`, replacing any
    /// existing file. Nothing is written unless the endpoint answers 200.
    pub async fn generate_speech(
        &self,
        text: &str,
        output: impl AsRef<Path>,
        options: &SpeechOptions,
    ) -> Result<PathBuf, SpeechError> {
        let output = output.as_ref();
        let response = self.send(text, options).await?;

        let written = if options.stream {
            write_chunked(response, output).await?
        } else {
            let audio = response.bytes().await?;
            fs::write(output, &audio).await?;
            audio.len()
        };
        log::info!("wrote {written} bytes to {}", output.display());

        Ok(output.to_path_buf())
    }

    /// Read UTF-8 text from `input` and synthesize it. Without an explicit
    /// `output` the audio lands next to the input with an `.mp3` extension.
    pub async fn generate_from_file(
        &self,
        input: impl AsRef<Path>,
        output: Option<&Path>,
        options: &SpeechOptions,
    ) -> Result<PathBuf, SpeechError> {
        let input = input.as_ref();
        let text = read_input(input).await?;
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        self.generate_speech(&text, &output, options).await
    }

    async fn send(
        &self,
        text: &str,
        options: &SpeechOptions,
    ) -> Result<reqwest::Response, SpeechError> {
        options.validate()?;

        let voice = self.resolve_voice(options);
        let payload = SynthesisRequest::new(&self.model, voice, text, options);
        log::debug!(
            "requesting speech from {} (voice: {voice}, {} characters)",
            self.api_url,
            text.chars().count()
        );

        // send the request
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            log::warn!("speech endpoint answered {status}");
            return Err(SpeechError::Api { status, body });
        }

        Ok(response)
    }
}

async fn write_chunked(
    mut response: reqwest::Response,
    output: &Path,
) -> Result<usize, SpeechError> {
    let file = fs::File::create(output).await?;
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
    let mut written = 0;

    while let Some(chunk) = response.chunk().await? {
        writer.write_all(&chunk).await?;
        written += chunk.len();
    }
    writer.flush().await?;

    Ok(written)
}

/// Load the UTF-8 text of `input`, failing with `FileNotFound` when it does
/// not exist.
pub async fn read_input(input: &Path) -> Result<String, SpeechError> {
    if !fs::try_exists(input).await? {
        return Err(SpeechError::FileNotFound(input.to_path_buf()));
    }

    Ok(fs::read_to_string(input).await?)
}

/// `story.txt` becomes `story.mp3`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("mp3")
}
