mod media_spool;
mod summarizer;
mod transcriber;

pub use media_spool::{MediaSpool, SpoolError, SpooledAudio};
pub use summarizer::{SummarizationError, Summarizer};
pub use transcriber::{Transcriber, TranscriptionError};
