mod briefing;
mod upload;

pub use briefing::Briefing;
pub use upload::UploadedAudio;
