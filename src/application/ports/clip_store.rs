use std::io;
use std::path::Path;

use crate::domain::AudioFormat;

/// A persisted clip, alive only while transcription needs it. Dropping the
/// handle removes the underlying artifact, so cleanup happens whether
/// transcription succeeded or failed.
pub trait StoredClip: Send {
    fn path(&self) -> &Path;
}

/// Transient storage for one uploaded clip, uniquely named and preserving
/// the original extension.
pub trait ClipStore: Send + Sync {
    fn store(&self, data: &[u8], format: AudioFormat) -> Result<Box<dyn StoredClip>, ClipStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClipStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
