use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod predictor;
pub mod vocabulary;

pub use predictor::{EnsembleWeights, OffsetRule, PredictorConfig, TypeRules};
pub use vocabulary::Vocabulary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub predictor: PredictorConfig,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_preview_rows() -> usize {
    5
}
fn default_seed() -> u64 {
    42
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            predictor: PredictorConfig::default(),
            preview_rows: default_preview_rows(),
            seed: default_seed(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpetlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpetlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpetlog.conf")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit path, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Serialize the configuration as YAML
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file (skipped in test mode)
    pub fn init_all(custom_path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = custom_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        let yaml = Config::default().to_yaml()?;

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(path)
    }
}
