use std::path::{Path, PathBuf};

use mangadex::chapters::LanguageFilter;
use serde::{Deserialize, Serialize};
use url::Url;

use super::Environment;

const ENV_PREFIX: &str = "MANGASHELF";
const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";
const DEFAULT_DATA_DIR: &str = "./.mangashelf";

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("couldn't read config: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("couldn't parse config: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),
}

/// Every field has a default, so running without a config file works.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub reader: ReaderConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub(super) fn load(env: &Environment) -> Result<Self, Error> {
        let path = env.config_file().to_string_lossy();

        ::config::Config::builder()
            .add_source(::config::File::new(&path, ::config::FileFormat::Toml).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub mangadex_url: Url,
    pub uploads_url: Url,

    /// The account backend: registration, login, profile and follows.
    pub backend_url: Url,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mangadex_url: Url::parse(mangadex::API_URL).expect("hard-coded url should be valid"),
            uploads_url: Url::parse(mangadex::UPLOADS_URL)
                .expect("hard-coded url should be valid"),
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("hard-coded url should be valid"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct ReaderConfig {
    /// `"all"` or a language code.
    language: String,
    page_size: usize,
    title_languages: Vec<String>,
    pub data_saver: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            language: "all".to_owned(),
            page_size: crate::cli::DEFAULT_PAGE_SIZE,
            title_languages: vec!["vi".to_owned(), "en".to_owned()],
            data_saver: false,
        }
    }
}

impl ReaderConfig {
    pub fn language(&self) -> LanguageFilter {
        crate::cli::language(&self.language)
    }

    pub fn page_size(&self) -> usize {
        if self.page_size == 0 {
            tracing::warn!("reader.page_size is 0 in config, using the default");
            return crate::cli::DEFAULT_PAGE_SIZE;
        }

        self.page_size
    }

    pub fn title_languages(&self) -> impl Iterator<Item = &str> + Clone {
        self.title_languages.iter().map(String::as_str)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(default)]
pub struct StorageConfig {
    data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn data_dir(&self) -> &Path {
        self.data_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR))
    }

    pub fn history_file(&self) -> PathBuf {
        self.data_dir().join("history.json")
    }

    pub fn session_file(&self) -> PathBuf {
        self.data_dir().join("session.json")
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use mangadex::chapters::LanguageFilter;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = AppConfig::default();

        assert_eq!(config.reader.language(), LanguageFilter::All);
        assert_eq!(config.reader.page_size(), crate::cli::DEFAULT_PAGE_SIZE);
        assert_eq!(
            config.storage.history_file(),
            std::path::Path::new("./.mangashelf/history.json")
        );
        assert_eq!(config.api.mangadex_url.as_str(), "https://api.mangadex.org/");
    }

    #[test]
    fn partial_file() {
        let config: AppConfig = toml::from_str(
            r#"
            [reader]
            language = "vi"
            page_size = 0

            [storage]
            data_dir = "/tmp/shelf"
            "#,
        )
        .expect("config should parse");

        assert_eq!(
            config.reader.language(),
            LanguageFilter::Only("vi".to_owned())
        );
        assert_eq!(config.reader.page_size(), crate::cli::DEFAULT_PAGE_SIZE);
        assert_eq!(
            config.reader.title_languages().collect::<Vec<_>>(),
            vec!["vi", "en"]
        );
        assert_eq!(
            config.storage.session_file(),
            std::path::Path::new("/tmp/shelf/session.json")
        );
    }

    #[test]
    fn round_trips_through_toml() {
        let rendered = AppConfig::default().to_toml().expect("config should serialize");

        assert!(rendered.contains("[api]"));
        assert!(rendered.contains("backend_url"));
    }
}
