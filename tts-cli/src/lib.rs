use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
};

use clap::{CommandFactory, Parser};
use tts_client::{SpeechError, SpeechOptions, TtsClient, default_output_path, read_input};

use crate::{
    cli::{Cli, Command},
    config::AppConfig,
};

mod cli;
pub mod config;
pub(crate) mod utils;

/// Parse `args`, run the requested synthesis and report progress on stdout.
///
/// Returns whether the invocation succeeded. The error case is reserved for
/// failures writing to the terminal itself.
pub async fn run<I, T>(args: I) -> anyhow::Result<bool>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with(args, AppConfig::from_env, &mut std::io::stdout()).await
}

/// Same as [`run`], with the configuration source and output stream supplied
/// by the caller. `load_config` is only consulted once there is text to speak.
pub async fn run_with<I, T, W>(
    args: I,
    load_config: impl FnOnce() -> anyhow::Result<AppConfig>,
    out: &mut W,
) -> anyhow::Result<bool>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match Cli::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => {
            write!(out, "{}", err.render())?;
            return Ok(false);
        }
    };

    let command = match args.into_command() {
        Ok(Some(command)) => command,
        Ok(None) => {
            write!(out, "{}", Cli::command().render_long_help())?;
            return Ok(false);
        }
        Err(err) => {
            writeln!(out, "✗ {err}")?;
            return Ok(false);
        }
    };

    let (text, output) = match command {
        Command::Speak { text, output } => (text, output),
        Command::SpeakFile { input, output } => match read_input(&input).await {
            Ok(text) => (
                text,
                output.unwrap_or_else(|| default_output_path(&input)),
            ),
            Err(err) => {
                writeln!(out, "✗ {}", diagnostic(&err))?;
                return Ok(false);
            }
        },
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            writeln!(out, "✗ {err}")?;
            return Ok(false);
        }
    };

    let client = config.tts.client();
    let options = SpeechOptions::default();
    write_summary(out, &client, &options, &text)?;

    match client.generate_speech(&text, &output, &options).await {
        Ok(path) => {
            writeln!(out, "✓ Audio saved to: {}", absolute(&path).display())?;
            Ok(true)
        }
        Err(err) => {
            log::debug!("speech generation failed: {err:?}");
            writeln!(out, "✗ {}", diagnostic(&err))?;
            Ok(false)
        }
    }
}

fn write_summary(
    out: &mut impl Write,
    client: &TtsClient,
    options: &SpeechOptions,
    text: &str,
) -> std::io::Result<()> {
    writeln!(out, "Generating speech...")?;
    writeln!(out, "Voice: {}", client.resolve_voice(options))?;
    writeln!(
        out,
        "Speed: {:?}x, Pitch: {:?}x",
        options.speed, options.pitch
    )?;
    writeln!(out, "Text length: {} characters", text.chars().count())
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Render a failure the way it is shown to the user.
fn diagnostic(err: &SpeechError) -> String {
    match err {
        SpeechError::Api { .. } | SpeechError::FileNotFound(_) => err.to_string(),
        _ => format!("Exception: {err}"),
    }
}
