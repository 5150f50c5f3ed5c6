use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores synthesized audio as `<uuid>.mp3`; every call gets a fresh name.
pub struct AudioFileRepository {
    dir: PathBuf,
}

impl AudioFileRepository {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn save(&self, audio: &[u8]) -> Result<PathBuf, String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| format!("cannot create {}: {}", self.dir.display(), e))?;

        let path = self.dir.join(format!("{}.mp3", Uuid::new_v4()));

        tokio::fs::write(&path, audio)
            .await
            .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;

        tracing::info!(
            path = %path.display(),
            audio_size_bytes = audio.len(),
            "Audio saved"
        );

        Ok(path)
    }
}
