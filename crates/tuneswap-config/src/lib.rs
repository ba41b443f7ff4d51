mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use paths::{ConfigError, TuneswapPaths};

use once_cell::sync::OnceCell;

static PATHS: OnceCell<TuneswapPaths> = OnceCell::new();
static CONFIG_BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

/// Rutas de la instalación (portable vía `TUNESWAP_BASE_DIR` o las del sistema).
///
/// Se resuelven una sola vez; si la primera resolución falla se reintenta en
/// la siguiente llamada.
pub fn paths() -> Result<&'static TuneswapPaths, ConfigError> {
  PATHS.get_or_try_init(TuneswapPaths::detect)
}

/// Backend TOML global apuntando a `tuneswap.toml`.
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.get_or_try_init(|| Ok(TomlConfigBackend::new(paths()?.clone())))
}
