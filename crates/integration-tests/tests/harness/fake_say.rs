//! Shell script standing in for the platform `say` program

use std::path::{Path, PathBuf};

use tempfile::TempDir;

const LIST_VOICES: &str = r#"if [ "$1" = "-v" ] && [ "$2" = "?" ]; then
  printf 'Alex      en_US  # Most people recognize me by my voice.\n'
  printf 'Fred      en_US  # I sure like being inside this fancy computer\n'
  printf 'Victoria  en_US  # Hello there\n'
  printf 'alex      en_GB  # listed twice\n'
  exit 0
fi
"#;

const BROKEN_LIST_VOICES: &str = r#"if [ "$1" = "-v" ] && [ "$2" = "?" ]; then
  echo "no speech engine" >&2
  exit 2
fi
"#;

const SYNTHESIZE: &str = r#"while [ $# -gt 0 ]; do
  case "$1" in
    -v) voice="$2"; shift 2 ;;
    -f) input="$2"; shift 2 ;;
    -o) output="$2"; shift 2 ;;
    --data-format=*) data_format="${1#--data-format=}"; shift ;;
    *) shift ;;
  esac
done
case "$(cat "$input")" in
  *explode*) echo "audio device on fire" >&2; exit 1 ;;
esac
printf 'RIFF\044\000\000\000WAVEfmt ' > "$output"
printf '%s|%s|' "$voice" "$data_format" >> "$output"
cat "$input" >> "$output"
"#;

/// Fake synthesizer plus an isolated directory for its temporary files
pub struct FakeSay {
    scripts: TempDir,
    work: TempDir,
}

impl FakeSay {
    pub fn new() -> Self {
        Self::from_script(LIST_VOICES)
    }

    /// A synthesizer whose voice query exits non-zero
    pub fn broken() -> Self {
        Self::from_script(BROKEN_LIST_VOICES)
    }

    fn from_script(listing: &str) -> Self {
        let scripts = tempfile::tempdir().expect("script dir");
        let work = tempfile::tempdir().expect("work dir");
        std::fs::write(scripts.path().join("say.sh"), format!("{listing}{SYNTHESIZE}")).expect("write script");
        Self { scripts, work }
    }

    pub fn script(&self) -> PathBuf {
        self.scripts.path().join("say.sh")
    }

    pub fn temp_dir(&self) -> &Path {
        self.work.path()
    }

    /// Sorted contents of the temporary-file directory
    pub fn temp_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.work.path())
            .expect("read work dir")
            .map(|entry| entry.expect("dir entry").path())
            .collect();
        files.sort();
        files
    }

    /// Wait until the temporary-file directory is empty
    ///
    /// The response body is dropped by the server right after its last
    /// chunk is written, which can trail the client's read slightly.
    pub async fn wait_for_no_temp_files(&self) -> Vec<PathBuf> {
        for _ in 0..50 {
            let files = self.temp_files();
            if files.is_empty() {
                return files;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        self.temp_files()
    }
}
