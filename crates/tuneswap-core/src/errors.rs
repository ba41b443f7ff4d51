// crates/tuneswap-core/src/errors.rs
use thiserror::Error;

/// Motivo por el que una descarga no se completó.
///
/// Las consultas públicas del centro devuelven `Option`; este error solo
/// aparece en las variantes `try_*` para quien necesite distinguir el caso
/// (CLI, logs, tests).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
  #[error("unknown user: {0}")]
  UnknownUser(String),

  #[error("user is not online: {0}")]
  UserOffline(String),

  #[error("{owner} has no song titled \"{title}\"")]
  SongNotFound { title: String, owner: String },
}
