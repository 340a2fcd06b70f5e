mod settings;

pub use settings::{
    Environment, ProviderSettings, ServerSettings, Settings, SummarizationSettings,
    TranscriptionSettings, UploadSettings,
};
