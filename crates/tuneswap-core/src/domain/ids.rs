use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador estable de un usuario.
///
/// Es el "handle" con el que el centro enruta cualquier cambio de estado al
/// único `User` registrado, sin importar qué copia tenga el llamador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
  pub fn new() -> Self {
    UserId(Uuid::new_v4())
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identidad de una canción concreta.
///
/// Dos canciones con el mismo título, artista y duración siguen siendo
/// entidades distintas: cada `Song::new` genera un `SongId` nuevo y solo las
/// referencias compartidas (`Arc<Song>`) comparten id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
  pub fn new() -> Self {
    SongId(Uuid::new_v4())
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_new_id_is_fresh() {
    assert_ne!(SongId::new(), SongId::new());
    assert_ne!(UserId::new(), UserId::new());
  }

  #[test]
  fn display_is_the_hyphenated_uuid() {
    let id = SongId::new();
    let shown = id.to_string();

    assert_eq!(shown.len(), 36);
    assert!(Uuid::parse_str(&shown).is_ok());
  }
}
