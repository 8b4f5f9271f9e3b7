use serde::Serialize;

use crate::SpeechError;

pub const DEFAULT_MODEL: &str = "tts-1";
pub const DEFAULT_VOICE: &str = "zh-CN-XiaoxiaoMultilingualNeural";

const SPEED_RANGE: std::ops::RangeInclusive<f64> = 0.25..=2.0;
const PITCH_RANGE: std::ops::RangeInclusive<f64> = 0.5..=1.5;

/// Audio container the endpoint should answer with.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

/// Tunable synthesis parameters. Anything left unset falls back to the
/// client's defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechOptions {
    pub voice: Option<String>,
    pub speed: f64,
    pub pitch: f64,
    pub stream: bool,
    pub response_format: ResponseFormat,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            voice: None,
            speed: 1.0,
            pitch: 1.0,
            stream: false,
            response_format: ResponseFormat::default(),
        }
    }
}

impl SpeechOptions {
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn with_response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = response_format;
        self
    }

    /// Speed must stay within 0.25..=2.0 and pitch within 0.5..=1.5.
    pub fn validate(&self) -> Result<(), SpeechError> {
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(SpeechError::SpeedOutOfRange(self.speed));
        }
        if !PITCH_RANGE.contains(&self.pitch) {
            return Err(SpeechError::PitchOutOfRange(self.pitch));
        }
        Ok(())
    }
}

/// Body of a `POST /v1/audio/speech` call.
#[derive(Serialize, Debug)]
pub struct SynthesisRequest<'a> {
    pub model: &'a str,
    pub voice: &'a str,
    pub input: &'a str,
    pub speed: f64,
    pub pitch: f64,
    pub stream: bool,
    pub response_format: ResponseFormat,
}

impl<'a> SynthesisRequest<'a> {
    pub fn new(model: &'a str, voice: &'a str, input: &'a str, options: &SpeechOptions) -> Self {
        Self {
            model,
            voice,
            input,
            speed: options.speed,
            pitch: options.pitch,
            stream: options.stream,
            response_format: options.response_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        SpeechError,
        request::{ResponseFormat, SpeechOptions, SynthesisRequest},
    };

    #[test]
    fn serialize_synthesis_request() {
        let options = SpeechOptions::default()
            .with_speed(1.5)
            .with_stream(true)
            .with_response_format(ResponseFormat::Opus);
        let request = SynthesisRequest::new("tts-1", "alloy", "hello", &options);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "tts-1",
                "voice": "alloy",
                "input": "hello",
                "speed": 1.5,
                "pitch": 1.0,
                "stream": true,
                "response_format": "opus",
            })
        );
    }

    #[test]
    fn accept_range_bounds() {
        let options = SpeechOptions::default().with_speed(0.25).with_pitch(1.5);
        assert!(options.validate().is_ok());
        let options = SpeechOptions::default().with_speed(2.0).with_pitch(0.5);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn reject_out_of_range_speed() {
        let err = SpeechOptions::default().with_speed(2.5).validate().unwrap_err();
        assert!(matches!(err, SpeechError::SpeedOutOfRange(speed) if speed == 2.5));

        let err = SpeechOptions::default()
            .with_speed(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SpeechError::SpeedOutOfRange(_)));
    }

    #[test]
    fn reject_out_of_range_pitch() {
        let err = SpeechOptions::default().with_pitch(0.25).validate().unwrap_err();
        assert!(matches!(err, SpeechError::PitchOutOfRange(pitch) if pitch == 0.25));
    }

    #[test]
    fn default_options() {
        let options = SpeechOptions::default();
        assert_eq!(options.response_format, ResponseFormat::Mp3);
        assert_eq!(options.voice, None);
        assert!(!options.stream);
    }
}
