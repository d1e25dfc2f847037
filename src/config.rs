use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{card, scene},
    utils::{get_config_dir, get_data_dir, PROJECT_NAME},
};

const CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CardConfig {
    /// Used when the year prompt is left empty.
    pub default_year: String,
    /// Printed when no custom message is given.
    pub default_message: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self { default_year: card::DEFAULT_YEAR.to_string(), default_message: card::DEFAULT_MESSAGE.to_string() }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SceneConfig {
    pub snowflakes: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { snowflakes: scene::SNOWFLAKE_COUNT, seed: None }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(&get_config_dir(), &get_data_dir(), None)
    }

    /// Layers the built-in defaults, `<config_dir>/config.yaml` and `CHRISTMAS_CARD_*` variables.
    ///
    /// `env` replaces the process environment when given.
    pub fn load(
        config_dir: &Path,
        data_dir: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Yaml));

        let config_files = [("config.yaml", config::FileFormat::Yaml)];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(config::File::from(config_dir.join(file)).format(*format).required(false));
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!("No configuration file found in {}, using defaults", config_dir.display());
        }

        builder = builder.add_source(
            config::Environment::with_prefix(PROJECT_NAME.as_str())
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let cfg: Self = builder.build()?.try_deserialize()?;
        log::debug!("Loaded configuration: {cfg:?}");
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
