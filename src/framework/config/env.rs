use std::path::{Path, PathBuf};

const CONFIG_FILE_VAR: &str = "MANGASHELF_TOML";
const DEFAULT_CONFIG_FILE: &str = "./mangashelf.toml";

#[derive(Debug, thiserror::Error)]
#[error("couldn't load environment variable '{key}': {message}")]
pub struct Error {
    key: &'static str,
    message: &'static str,
}

/// Process environment: `.env` is read first, then the config file path is
/// taken from the command line, `MANGASHELF_TOML`, or the default.
#[derive(Debug, Clone)]
pub struct Environment {
    config_file: PathBuf,
}

impl Environment {
    pub fn load(cli_path: Option<PathBuf>) -> Result<Self, Error> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                tracing::warn!(%err, "couldn't read .env file");
            }
        }

        let config_file = match cli_path {
            Some(path) => path,
            None => match std::env::var(CONFIG_FILE_VAR) {
                Ok(path) => {
                    tracing::trace!(var = CONFIG_FILE_VAR, value = path, "using value from environment");
                    PathBuf::from(path)
                }
                Err(std::env::VarError::NotPresent) => PathBuf::from(DEFAULT_CONFIG_FILE),
                Err(std::env::VarError::NotUnicode(_)) => {
                    return Err(Error {
                        key: CONFIG_FILE_VAR,
                        message: "path to configuration must be valid UTF-8",
                    })
                }
            },
        };

        if config_file.to_str().is_none() {
            return Err(Error {
                key: CONFIG_FILE_VAR,
                message: "path to configuration must be valid UTF-8",
            });
        }

        Ok(Self { config_file })
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }
}
