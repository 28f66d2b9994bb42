mod app;
pub use app::AppConfig as Config;

pub mod env;
pub use env::Environment;

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("problem loading environment: {0}")]
    #[event(level = ERROR)]
    Env(#[from] env::Error),

    #[error("problem loading config file: {0}")]
    App(#[from] app::Error),
}

#[derive(Debug, Clone)]
pub struct ConfigSetup {
    pub app: Config,
    pub env: Environment,
}

impl ConfigSetup {
    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(cli: &crate::Cli) -> Result<Self, Error> {
        let env = Environment::load(cli.config.clone())?;
        let app = Config::load(&env)?;

        Ok(Self { app, env })
    }

    pub fn finish(self) -> Config {
        tracing::debug!(path = %self.env.config_file().display(), "config loaded");
        self.app
    }
}
