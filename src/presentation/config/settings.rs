use std::fmt;
use std::path::PathBuf;

use config::{Config, ConfigError, File};
use serde::Deserialize;

/// Deployment environment the process runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Test,
    Prod,
}

impl Environment {
    /// Casing matches the `appsettings.<env>.toml` file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" | "dev" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!("unrecognized environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub transcription: TranscriptionSettings,
    pub summarization: SummarizationSettings,
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationSettings {
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
    #[serde(default)]
    pub spool_dir: Option<PathBuf>,
}

impl Settings {
    /// Layered configuration: built-in defaults, then an optional
    /// `appsettings.<env>` file, then `APP__`-prefixed environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("provider.base_url", "https://api.openai.com/v1")?
            .set_default("transcription.model", "whisper-1")?
            .set_default("summarization.model", "gpt-4o-mini")?
            .set_default("summarization.max_tokens", 512)?
            .set_default("summarization.temperature", 0.2)?
            .set_default("upload.max_file_size_mb", 25)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.upload.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}
