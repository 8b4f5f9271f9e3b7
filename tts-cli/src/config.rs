use std::env;

use tts_client::{DEFAULT_MODEL, DEFAULT_VOICE, TtsClient};

use crate::utils::required_var;

pub struct AppConfig {
    pub tts: TtsConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            tts: TtsConfig::from_vars(|name| env::var(name).ok())?,
        })
    }
}

pub struct TtsConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub voice: String,
}

impl TtsConfig {
    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            api_url: required_var(&vars, "TTS_API_URL")?,
            api_key: required_var(&vars, "TTS_API_KEY")?,
            model: vars("TTS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            voice: vars("TTS_VOICE").unwrap_or_else(|| DEFAULT_VOICE.to_string()),
        })
    }

    pub fn client(&self) -> TtsClient {
        TtsClient::new(&self.api_url, &self.api_key)
            .with_model(&self.model)
            .with_default_voice(&self.voice)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tts_client::{DEFAULT_MODEL, DEFAULT_VOICE};

    use crate::config::TtsConfig;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fill_optional_defaults() {
        let env = vars(&[
            ("TTS_API_URL", "http://localhost:5050/v1/audio/speech"),
            ("TTS_API_KEY", "secret"),
        ]);
        let config = TtsConfig::from_vars(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.api_url, "http://localhost:5050/v1/audio/speech");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.voice, DEFAULT_VOICE);
    }

    #[test]
    fn override_model_and_voice() {
        let env = vars(&[
            ("TTS_API_URL", "http://localhost:5050/v1/audio/speech"),
            ("TTS_API_KEY", "secret"),
            ("TTS_MODEL", "tts-1-hd"),
            ("TTS_VOICE", "en-US-AvaNeural"),
        ]);
        let config = TtsConfig::from_vars(|name| env.get(name).cloned()).unwrap();

        assert_eq!(config.model, "tts-1-hd");
        assert_eq!(config.voice, "en-US-AvaNeural");
    }

    #[test]
    fn require_api_key() {
        let env = vars(&[("TTS_API_URL", "http://localhost:5050/v1/audio/speech")]);
        let err = TtsConfig::from_vars(|name| env.get(name).cloned())
            .err()
            .unwrap();

        assert_eq!(err.to_string(), "Environment variable TTS_API_KEY not found");
    }
}
