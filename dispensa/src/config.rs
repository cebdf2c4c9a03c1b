use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Catalog seed document; the embedded catalog is used when unset
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,

    #[serde(default = "default_image")]
    pub default_image: String,

    #[serde(default = "default_log_buffer_size")]
    pub log_buffer_size: usize,
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("resources/img/home")
}

fn default_image() -> String {
    "default.jpg".to_string()
}

fn default_log_buffer_size() -> usize {
    5000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed_path: None,
            asset_dir: default_asset_dir(),
            default_image: default_image(),
            log_buffer_size: default_log_buffer_size(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("DISPENSA_CONFIG").unwrap_or_else(|_| "dispensa.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Layer the optional TOML file under `DISPENSA_*` environment variables
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("DISPENSA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.default_image.trim().is_empty() {
            return Err("default_image is required".to_string());
        }
        if self.log_buffer_size == 0 {
            return Err("log_buffer_size must be greater than zero".to_string());
        }
        Ok(())
    }
}
