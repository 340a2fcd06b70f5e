use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::Builder;

use crate::application::ports::{MediaSpool, SpoolError, SpooledAudio};

pub struct TempDirSpool {
    base_dir: PathBuf,
}

impl TempDirSpool {
    pub fn new(base_dir: PathBuf) -> Result<Self, SpoolError> {
        std::fs::create_dir_all(&base_dir).map_err(SpoolError::Create)?;
        Ok(Self { base_dir })
    }
}

#[async_trait]
impl MediaSpool for TempDirSpool {
    async fn acquire(&self, data: &[u8], suffix: &str) -> Result<SpooledAudio, SpoolError> {
        let temp_path = Builder::new()
            .prefix("audio-")
            .suffix(suffix)
            .tempfile_in(&self.base_dir)
            .map_err(SpoolError::Create)?
            .into_temp_path();

        // The TempPath still owns the file; an early return here removes it.
        tokio::fs::write(&temp_path, data)
            .await
            .map_err(SpoolError::Write)?;

        let path = temp_path.keep().map_err(|e| SpoolError::Create(e.error))?;
        Ok(SpooledAudio::new(path))
    }
}
