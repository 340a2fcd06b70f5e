use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    MediaSpool, SpoolError, SummarizationError, Summarizer, Transcriber, TranscriptionError,
};
use crate::domain::{Briefing, UploadedAudio};

pub struct BriefingService<T, S>
where
    T: Transcriber,
    S: Summarizer,
{
    transcriber: Arc<T>,
    summarizer: Arc<S>,
    spool: Arc<dyn MediaSpool>,
}

impl<T, S> BriefingService<T, S>
where
    T: Transcriber,
    S: Summarizer,
{
    pub fn new(transcriber: Arc<T>, summarizer: Arc<S>, spool: Arc<dyn MediaSpool>) -> Self {
        Self {
            transcriber,
            summarizer,
            spool,
        }
    }

    /// Spools the upload to disk, transcribes it, and summarizes the
    /// transcript. The spooled file is removed on every exit path.
    pub async fn process(&self, upload: UploadedAudio) -> Result<Briefing, BriefingError> {
        let suffix = upload.suffix_hint();
        let media = self
            .spool
            .acquire(&upload.bytes, &suffix)
            .await
            .map_err(BriefingError::Spool)?;
        tracing::debug!(
            path = %media.path().display(),
            size_bytes = upload.bytes.len(),
            "Upload spooled"
        );

        let outcome = self.run_pipeline(media.path()).await;

        match outcome {
            Ok(briefing) => {
                media.release().await.map_err(BriefingError::Spool)?;
                Ok(briefing)
            }
            Err(e) => {
                if let Err(del_err) = media.release().await {
                    tracing::warn!(
                        error = %del_err,
                        "Failed to remove spooled audio after pipeline failure"
                    );
                }
                Err(e)
            }
        }
    }

    async fn run_pipeline(&self, audio_path: &Path) -> Result<Briefing, BriefingError> {
        let transcript = self
            .transcriber
            .transcribe(audio_path)
            .await
            .map_err(BriefingError::Transcription)?;
        tracing::debug!(transcript_chars = transcript.len(), "Transcription finished");

        let summary = self
            .summarizer
            .summarize(&transcript)
            .await
            .map_err(BriefingError::Summarization)?;
        tracing::debug!(summary_chars = summary.len(), "Summarization finished");

        Ok(Briefing {
            transcript,
            summary,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BriefingError {
    #[error("spooling: {0}")]
    Spool(#[from] SpoolError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("summarization: {0}")]
    Summarization(#[from] SummarizationError),
}
