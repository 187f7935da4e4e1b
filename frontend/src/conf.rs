// Configuration definitions, functions and tests
//
// The default profile is embedded at compile time, there is no file system
// to read from once running in the browser.

use serde::Deserialize;
use store::Theme;

static DEFAULT_CONF: &str = include_str!("../conf/default.yaml");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Conf {
    pub mount_id: String,
    pub initial_theme: Option<Theme>,
    #[serde(default)]
    pub log: Log,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Log {
    pub verbose: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfError {
    #[error("Configuration is malformed: {0}")]
    Malformed(#[source] config::ConfigError),
}

impl Conf {
    pub fn derive() -> Result<Self, ConfError> {
        Self::from_yaml(DEFAULT_CONF)
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Yaml))
            .build()
            .and_then(|conf| conf.try_deserialize())
            .map_err(ConfError::Malformed)
    }
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            mount_id: "root".into(),
            initial_theme: None,
            log: Log::default(),
        }
    }
}
