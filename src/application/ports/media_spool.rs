use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

#[async_trait]
pub trait MediaSpool: Send + Sync {
    async fn acquire(&self, data: &[u8], suffix: &str) -> Result<SpooledAudio, SpoolError>;
}

#[derive(Debug)]
pub struct SpooledAudio {
    path: PathBuf,
    released: bool,
}

impl SpooledAudio {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the spooled file. A file that is already gone counts as
    /// released.
    pub async fn release(mut self) -> Result<(), SpoolError> {
        let outcome = tokio::fs::remove_file(&self.path).await;
        // Flagged only after the await so a cancellation mid-remove still
        // reaches the drop backstop.
        self.released = true;
        match outcome {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(SpoolError::Delete(e)),
            _ => Ok(()),
        }
    }
}

impl Drop for SpooledAudio {
    fn drop(&mut self) {
        // Best-effort cleanup when a request future is dropped before release.
        if !self.released {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpoolError {
    #[error("create failed: {0}")]
    Create(#[source] io::Error),
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
    #[error("delete failed: {0}")]
    Delete(#[source] io::Error),
}
