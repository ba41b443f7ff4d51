use serde::{Deserialize, Serialize};
use tuneswap_config::{ConfigBackend, ConfigError, config_backend};

use crate::domain::PopularityCount;

/// Regalía que se acredita al artista por cada descarga completada.
pub const ROYALTY_PER_DOWNLOAD: f64 = 0.25;

const SECTION: &str = "exchange";

/// Sección `[exchange]` de `tuneswap.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeConfig {
  /// Importe sumado a `royalties[artista]` por descarga.
  #[serde(default = "default_royalty_per_download")]
  pub royalty_per_download: f64,

  /// Prefijo de los importes en el informe de regalías.
  #[serde(default = "default_currency_symbol")]
  pub currency_symbol: String,

  /// Modo de conteo del ranking de popularidad.
  #[serde(default)]
  pub popularity_count: PopularityCount,
}

fn default_royalty_per_download() -> f64 {
  ROYALTY_PER_DOWNLOAD
}

fn default_currency_symbol() -> String {
  "$".to_string()
}

impl Default for ExchangeConfig {
  fn default() -> Self {
    ExchangeConfig {
      royalty_per_download: default_royalty_per_download(),
      currency_symbol: default_currency_symbol(),
      popularity_count: PopularityCount::default(),
    }
  }
}

impl ExchangeConfig {
  /// Carga `[exchange]` del backend global y la reescribe con los valores
  /// por defecto ya materializados.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_to(config_backend()?)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;
  use tuneswap_config::{TomlConfigBackend, TuneswapPaths};

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(TuneswapPaths::from_base(dir).unwrap())
  }

  #[test]
  fn first_load_writes_defaults() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let cfg = ExchangeConfig::load_from(&backend).unwrap();
    assert_eq!(cfg, ExchangeConfig::default());

    let written = std::fs::read_to_string(backend.config_file()).unwrap();
    assert!(written.contains("[exchange]"));
    assert!(written.contains("royalty_per_download = 0.25"));
    assert!(written.contains("popularity_count = \"per-song\""));
  }

  #[test]
  fn partial_section_fills_missing_keys() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    std::fs::write(backend.config_file(), "[exchange]\npopularity_count = \"per-title\"\n").unwrap();

    let cfg = ExchangeConfig::load_from(&backend).unwrap();
    assert_eq!(cfg.popularity_count, PopularityCount::PerTitle);
    assert_eq!(cfg.royalty_per_download, ROYALTY_PER_DOWNLOAD);
    assert_eq!(cfg.currency_symbol, "$");
  }

  #[test]
  fn unknown_count_mode_is_rejected() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    std::fs::write(backend.config_file(), "[exchange]\npopularity_count = \"per-artist\"\n").unwrap();

    assert!(matches!(ExchangeConfig::load_from(&backend), Err(ConfigError::Other(_))));
  }

  #[test]
  fn save_round_trips() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let cfg = ExchangeConfig { royalty_per_download: 1.5, currency_symbol: "€".into(), ..Default::default() };

    cfg.save_to(&backend).unwrap();
    assert_eq!(ExchangeConfig::load_from(&backend).unwrap(), cfg);
  }
}
