use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza una instalación "portable".
pub const BASE_DIR_ENV: &str = "TUNESWAP_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct TuneswapPaths {
  pub config_dir: PathBuf,
}

impl TuneswapPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      return Self::from_base(env_base);
    }

    let proj_dirs = ProjectDirs::from("com", "tuneswap", "tuneswap").ok_or(ConfigError::Directories)?;
    Self::with_config_dir(proj_dirs.config_dir().to_path_buf())
  }

  /// Layout portable: la configuración vive en `<base>/config`.
  pub fn from_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    Self::with_config_dir(base.as_ref().join("config"))
  }

  fn with_config_dir(config_dir: PathBuf) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&config_dir)?;
    Ok(Self { config_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("tuneswap.toml")
  }
}
