use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::application::ports::{ClipStore, ClipStoreError, StoredClip};
use crate::domain::AudioFormat;

/// Persists uploaded clips as uniquely named files in a scratch directory.
/// The file keeps the original extension so the transcription engine can
/// identify the container, and is removed when the handle drops.
pub struct TempAudioStore {
    dir: PathBuf,
}

impl TempAudioStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ClipStore for TempAudioStore {
    fn store(&self, data: &[u8], format: AudioFormat) -> Result<Box<dyn StoredClip>, ClipStoreError> {
        let mut file = tempfile::Builder::new()
            .prefix("clip-")
            .suffix(&format!(".{}", format.extension()))
            .tempfile_in(&self.dir)?;

        file.write_all(data)?;
        file.flush()?;

        tracing::debug!(path = %file.path().display(), bytes = data.len(), "Stored uploaded clip");
        Ok(Box::new(TempClip { file }))
    }
}

struct TempClip {
    file: NamedTempFile,
}

impl StoredClip for TempClip {
    fn path(&self) -> &Path {
        self.file.path()
    }
}
