use std::fmt;

use crate::domain::ids::{SongId, UserId};

/// Una canción publicada en el centro de intercambio.
///
/// Inmutable salvo el dueño, que se asigna una sola vez cuando la canción
/// entra en el catálogo de un usuario ([`crate::domain::User::add_song`]).
/// A partir de ahí vive detrás de un `Arc` y se comparte por referencia.
#[derive(Debug, PartialEq, Eq)]
pub struct Song {
  id: SongId,
  title: String,
  artist: String,
  duration_secs: u32,
  owner: Option<UserId>,
}

impl Song {
  /// Crea una canción sin dueño. La duración es `minutes * 60 + seconds`;
  /// no se valida que `seconds < 60`.
  pub fn new(title: impl Into<String>, artist: impl Into<String>, minutes: u32, seconds: u32) -> Self {
    Self {
      id: SongId::new(),
      title: title.into(),
      artist: artist.into(),
      duration_secs: minutes.saturating_mul(60).saturating_add(seconds),
      owner: None,
    }
  }

  pub fn id(&self) -> SongId {
    self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn artist(&self) -> &str {
    &self.artist
  }

  /// Duración total en segundos.
  pub fn duration_secs(&self) -> u32 {
    self.duration_secs
  }

  pub fn minutes(&self) -> u32 {
    self.duration_secs / 60
  }

  pub fn seconds(&self) -> u32 {
    self.duration_secs % 60
  }

  /// Usuario que subió la canción. Una descarga no lo cambia.
  pub fn owner(&self) -> Option<UserId> {
    self.owner
  }

  pub(crate) fn with_owner(mut self, owner: UserId) -> Self {
    self.owner = Some(owner);
    self
  }
}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "\"{}\" by {} {}:{}", self.title, self.artist, self.minutes(), self.seconds())
  }
}
