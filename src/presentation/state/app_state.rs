use std::sync::Arc;

use crate::application::ports::{Summarizer, Transcriber};
use crate::application::services::BriefingService;

pub struct AppState<T, S>
where
    T: Transcriber,
    S: Summarizer,
{
    pub briefing_service: Arc<BriefingService<T, S>>,
    pub upload_limit_bytes: usize,
}

impl<T, S> Clone for AppState<T, S>
where
    T: Transcriber,
    S: Summarizer,
{
    fn clone(&self) -> Self {
        Self {
            briefing_service: Arc::clone(&self.briefing_service),
            upload_limit_bytes: self.upload_limit_bytes,
        }
    }
}
