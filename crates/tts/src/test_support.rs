//! A stand-in for `say` written as a POSIX shell script
//!
//! The script is run through `/bin/sh` rather than executed directly, so a
//! freshly written file never races with `fork` in another test thread.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vox_config::{Config, SynthesizerConfig};

use crate::synthesizer::Synthesizer;

const VOICE_LISTING: &str = r#"if [ "$1" = "-v" ] && [ "$2" = "?" ]; then
  printf 'Alex      en_US  # Most people recognize me by my voice.\n'
  printf 'Bad News  en_US  # The light you see at the end of the tunnel\n'
  printf 'Samantha  en_US  # Hello, my name is Samantha.\n'
  exit 0
fi
"#;

const FAILING_VOICE_LISTING: &str = r#"if [ "$1" = "-v" ] && [ "$2" = "?" ]; then
  echo "voice database unavailable" >&2
  exit 1
fi
"#;

const SYNTHESIS: &str = r#"voice=""; input=""; output=""; file_format=""; data_format=""
while [ $# -gt 0 ]; do
  case "$1" in
    -v) voice="$2"; shift 2 ;;
    -f) input="$2"; shift 2 ;;
    -o) output="$2"; shift 2 ;;
    --file-format=*) file_format="$1"; shift ;;
    --data-format=*) data_format="$1"; shift ;;
    *) shift ;;
  esac
done
text=$(cat "$input")
case "$text" in
  *fail*) echo "synthesis exploded" >&2; exit 3 ;;
  *sleep*) exec sleep 5 ;;
  *linger*) sleep 2 ;;
esac
printf 'RIFF voice=%s %s %s text=%s' "$voice" "$file_format" "$data_format" "$text" > "$output"
"#;

pub struct FakeSay {
    scripts: TempDir,
    work: TempDir,
}

impl FakeSay {
    pub fn new() -> Self {
        Self::with_listing(VOICE_LISTING)
    }

    pub fn failing_voice_listing() -> Self {
        Self::with_listing(FAILING_VOICE_LISTING)
    }

    fn with_listing(listing: &str) -> Self {
        let scripts = tempfile::tempdir().unwrap();
        let work = tempfile::tempdir().unwrap();
        std::fs::write(scripts.path().join("say.sh"), format!("{listing}{SYNTHESIS}")).unwrap();
        Self { scripts, work }
    }

    /// Where per-request temporary files are created
    pub fn temp_dir(&self) -> &Path {
        self.work.path()
    }

    pub fn synthesizer_config(&self) -> SynthesizerConfig {
        SynthesizerConfig {
            command: "/bin/sh".to_string(),
            args: vec![self.scripts.path().join("say.sh").display().to_string()],
            temp_dir: Some(self.work.path().to_path_buf()),
            ..SynthesizerConfig::default()
        }
    }

    pub fn config(&self) -> Config {
        Config {
            synthesizer: self.synthesizer_config(),
            ..Config::default()
        }
    }

    pub fn synthesizer(&self) -> Synthesizer {
        Synthesizer::from_config(&self.synthesizer_config()).unwrap()
    }

    pub fn synthesizer_with_timeout(&self, timeout: &str) -> Synthesizer {
        let config = SynthesizerConfig {
            timeout: Some(timeout.to_string()),
            ..self.synthesizer_config()
        };
        Synthesizer::from_config(&config).unwrap()
    }
}

/// Sorted entries of a directory
pub fn temp_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    entries.sort();
    entries
}
