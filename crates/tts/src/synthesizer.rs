use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Output, Stdio},
    time::{Duration, Instant},
};

use tempfile::TempPath;
use tokio::process::Command;
use vox_config::SynthesizerConfig;

use crate::{
    error::SynthesisError,
    format::resolve_data_format,
    types::{SynthesisRequest, SynthesizedAudio},
    voices::VoiceSet,
};

/// Container type requested from the synthesizer
const FILE_FORMAT: &str = "WAVE";

const TEMP_PREFIX: &str = "vox-";

/// Drives the external speech synthesizer (`say` by default)
///
/// Each call runs one subprocess and waits for it to exit. Per-call
/// temporary files are created with unique names inside `temp_dir`.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    command: String,
    args: Vec<String>,
    list_voices_args: Vec<String>,
    temp_dir: PathBuf,
    timeout: Option<Duration>,
}

impl Synthesizer {
    /// # Errors
    ///
    /// Returns an error if the configured timeout cannot be parsed
    pub fn from_config(config: &SynthesizerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            command: config.command.clone(),
            args: config.args.clone(),
            list_voices_args: config.list_voices_args.clone(),
            temp_dir: config.temp_dir(),
            timeout: config.timeout_duration()?,
        })
    }

    pub fn command_name(&self) -> &str {
        &self.command
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Ask the synthesizer which voices it has
    pub async fn list_voices(&self) -> Result<VoiceSet, SynthesisError> {
        let mut command = self.base_command();
        command.args(&self.list_voices_args).stdout(Stdio::piped());

        let output = self.run(command).await?;

        Ok(VoiceSet::from_listing(&String::from_utf8_lossy(&output.stdout)))
    }

    /// Render `request.text` to a WAV file
    ///
    /// The text file is removed as soon as the subprocess exits. The WAV
    /// file is owned by the returned value and removed when it is dropped,
    /// or right away if synthesis fails.
    pub async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedAudio, SynthesisError> {
        let data_format = resolve_data_format(&request.format).into_owned();

        let temp_dir = self.temp_dir.clone();
        let text = request.text;
        let (text_file, wav_file) = tokio::task::spawn_blocking(move || prepare_files(&temp_dir, &text))
            .await
            .map_err(|e| SynthesisError::Task(e.to_string()))?
            .map_err(SynthesisError::TempFile)?;

        let mut command = self.base_command();
        command
            .arg("-v")
            .arg(&request.voice)
            .arg("-f")
            .arg(&*text_file)
            .arg("-o")
            .arg(&*wav_file)
            .arg(format!("--file-format={FILE_FORMAT}"))
            .arg(format!("--data-format={data_format}"))
            .stdout(Stdio::null());

        tracing::debug!(
            voice = %request.voice,
            data_format = %data_format,
            output = %wav_file.display(),
            "running synthesizer"
        );

        let started = Instant::now();
        let result = self.run(command).await;

        if let Err(e) = text_file.close() {
            tracing::warn!("failed to remove synthesizer input file: {e}");
        }

        result?;

        let len = tokio::fs::metadata(&*wav_file)
            .await
            .map_err(SynthesisError::TempFile)?
            .len();

        tracing::debug!("synthesized {len} bytes in {:?}", started.elapsed());

        Ok(SynthesizedAudio::new(wav_file, len))
    }

    fn base_command(&self) -> Command {
        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(self.timeout.is_some());
        command
    }

    /// Run to completion and require a successful exit
    async fn run(&self, mut command: Command) -> Result<Output, SynthesisError> {
        let launched = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| SynthesisError::TimedOut(limit))?,
            None => command.output().await,
        };

        let output = launched.map_err(|source| SynthesisError::Launch {
            command: self.command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(SynthesisError::Exited {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

/// Create the text input (written and closed) and an empty, closed WAV path
fn prepare_files(dir: &Path, text: &str) -> std::io::Result<(TempPath, TempPath)> {
    let mut text_file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".txt")
        .tempfile_in(dir)?;
    text_file.write_all(text.as_bytes())?;
    text_file.flush()?;
    let text_file = text_file.into_temp_path();

    let wav_file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".wav")
        .tempfile_in(dir)?
        .into_temp_path();

    Ok((text_file, wav_file))
}
