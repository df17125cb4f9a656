use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub models: ModelSettings,
    pub charts: ChartSettings,
    pub upload: UploadSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    pub provider: ModelBackend,
    #[serde(default)]
    pub classifier_url: Option<String>,
    #[serde(default)]
    pub summarizer_url: Option<String>,
    #[serde(default)]
    pub extractor_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    Http,
    Scaffold,
}

impl ModelBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelBackend::Http => "http",
            ModelBackend::Scaffold => "scaffold",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartSettings {
    pub backend: ChartBackend,
    pub word_cloud: WordCloudSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartBackend {
    Svg,
    Html,
}

impl ChartBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartBackend::Svg => "svg",
            ChartBackend::Html => "html",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordCloudSettings {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub font_family: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: u64,
}

impl UploadSettings {
    /// Saturates rather than wrapping for absurdly large limits.
    pub fn max_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
}

impl Settings {
    /// Built-in defaults, overlaid by `appsettings.<env>.toml` when present,
    /// overlaid by `APP_*` environment variables (`APP_SERVER__PORT=8080`).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let settings = defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Defaults only, ignoring files and the environment.
    pub fn defaults() -> Result<Self, SettingsError> {
        Ok(defaults()?.build()?.try_deserialize()?)
    }
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("models.provider", "http")?
        .set_default("models.timeout_secs", 30)?
        .set_default("charts.backend", "svg")?
        .set_default("charts.word_cloud.width", 800)?
        .set_default("charts.word_cloud.height", 400)?
        .set_default("charts.word_cloud.max_words", 100)?
        .set_default("charts.word_cloud.font_family", "sans-serif")?
        .set_default("upload.max_file_size_mb", 5)?
        .set_default("logging.level", "info,khabar=debug,tower_http=debug")?
        .set_default("logging.enable_json", false)
}
