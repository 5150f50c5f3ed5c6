use crate::domain::script::ArchivedScript;
use chrono::{DateTime, Local};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

static UNSAFE_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Filesystem archive for generated scripts.
///
/// Names are `<YYYYmmdd_HHMMSS>_<persona>.txt`. Resolution is one second, so
/// a second script for the same persona within that second replaces the first.
pub struct ScriptArchiveRepository {
    dir: PathBuf,
}

impl ScriptArchiveRepository {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn archive(
        &self,
        script: &str,
        speaker_mode: &str,
        document_length: usize,
    ) -> Result<ArchivedScript, String> {
        self.archive_at(script, speaker_mode, document_length, Local::now())
            .await
    }

    pub async fn archive_at(
        &self,
        script: &str,
        speaker_mode: &str,
        document_length: usize,
        timestamp: DateTime<Local>,
    ) -> Result<ArchivedScript, String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| format!("cannot create {}: {}", self.dir.display(), e))?;

        let path = self.dir.join(archive_file_name(timestamp, speaker_mode));

        tokio::fs::write(&path, script.as_bytes())
            .await
            .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;

        tracing::info!(
            path = %path.display(),
            speaker_mode = %speaker_mode,
            document_length = document_length,
            script_length = script.len(),
            "Script archived"
        );

        Ok(ArchivedScript {
            path,
            document_length,
        })
    }
}

pub fn archive_file_name(timestamp: DateTime<Local>, speaker_mode: &str) -> String {
    format!(
        "{}_{}.txt",
        timestamp.format(TIMESTAMP_FORMAT),
        sanitize_persona_id(speaker_mode)
    )
}

/// Keep word characters, whitespace and hyphens; spaces become underscores
pub fn sanitize_persona_id(speaker_mode: &str) -> String {
    UNSAFE_CHARS
        .replace_all(speaker_mode, "")
        .replace(' ', "_")
        .to_lowercase()
}
