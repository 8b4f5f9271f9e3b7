use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "output.mp3";

#[derive(clap::Parser, Debug)]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Generate speech from text using a TTS service",
    after_help = "Examples:\n  tts-cli \"Hello world!\"\n  tts-cli \"你好世界\" output.mp3\n  tts-cli --file story.txt audiobook.mp3"
)]
pub struct Cli {
    /// Read the text from this file instead of the command line
    #[arg(long, value_name = "INPUT_FILE")]
    pub file: Option<PathBuf>,
    /// Text to speak, or the output file when --file is given
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: Option<String>,
    /// Where to write the audio
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Speak {
        text: String,
        output: PathBuf,
    },
    SpeakFile {
        input: PathBuf,
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// `None` when nothing to speak was given and usage should be shown.
    pub fn into_command(self) -> anyhow::Result<Option<Command>> {
        let command = match (self.file, self.text, self.output) {
            (None, None, _) => return Ok(None),
            (None, Some(text), output) => Command::Speak {
                text,
                output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            },
            // with --file the first positional is the output path
            (Some(input), output, None) => Command::SpeakFile {
                input,
                output: output.map(PathBuf::from),
            },
            (Some(input), None, Some(output)) => Command::SpeakFile {
                input,
                output: Some(output),
            },
            (Some(_), Some(_), Some(extra)) => {
                anyhow::bail!("Unexpected argument '{}'", extra.display())
            }
        };

        Ok(Some(command))
    }
}
