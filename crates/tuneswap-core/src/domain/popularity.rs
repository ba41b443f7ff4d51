use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cómo se cuentan las descargas en el ranking de popularidad.
///
/// El ranking siempre deduplica por título. Lo que cambia es qué entradas del
/// historial cuentan para cada fila:
///
/// - [`PopularityCount::PerSong`]: solo las descargas de esa misma canción
///   (identidad). Si dos usuarios comparten una canción con el mismo título,
///   la fila muestra únicamente las descargas del representante.
/// - [`PopularityCount::PerTitle`]: todas las descargas con ese título.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopularityCount {
  #[default]
  PerSong,
  PerTitle,
}

/// Error producido cuando una cadena no es un [`PopularityCount`] válido.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid popularity count mode: {input} (expected per-song or per-title)")]
pub struct PopularityCountParseError {
  pub input: String,
}

impl FromStr for PopularityCount {
  type Err = PopularityCountParseError;

  /// Acepta `per-song`/`per-title` sin distinguir mayúsculas, guiones ni
  /// guiones bajos.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");

    match normalized.as_str() {
      "persong" | "song" => Ok(PopularityCount::PerSong),
      "pertitle" | "title" => Ok(PopularityCount::PerTitle),
      _ => Err(PopularityCountParseError { input: s.to_string() }),
    }
  }
}

impl fmt::Display for PopularityCount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PopularityCount::PerSong => write!(f, "per-song"),
      PopularityCount::PerTitle => write!(f, "per-title"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_loose_spellings() {
    assert_eq!("per-song".parse(), Ok(PopularityCount::PerSong));
    assert_eq!("PER_TITLE".parse(), Ok(PopularityCount::PerTitle));
    assert_eq!(" title ".parse(), Ok(PopularityCount::PerTitle));
    assert!("artist".parse::<PopularityCount>().is_err());
  }

  #[test]
  fn display_matches_config_spelling() {
    for mode in [PopularityCount::PerSong, PopularityCount::PerTitle] {
      assert_eq!(mode.to_string().parse(), Ok(mode));
    }
  }
}
