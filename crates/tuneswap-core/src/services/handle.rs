use std::sync::Arc;

use crate::domain::{Song, UserId};
use crate::report::listing;
use crate::services::ExchangeCenter;

/// Referencia de un llamador a un usuario registrado.
///
/// No guarda estado propio: cada operación se resuelve por [`UserId`] contra
/// la instancia canónica del centro, así que dos handles del mismo usuario
/// nunca divergen. Usado contra un centro donde el usuario no está
/// registrado, todo es un no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHandle {
  id: UserId,
  name: String,
}

impl UserHandle {
  pub(crate) fn new(id: UserId, name: &str) -> Self {
    Self { id, name: name.to_string() }
  }

  pub fn id(&self) -> UserId {
    self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn is_online(&self, center: &ExchangeCenter) -> bool {
    center.user(self.id).is_some_and(|u| u.is_online())
  }

  pub fn logon(&self, center: &mut ExchangeCenter) -> bool {
    center.logon(self.id)
  }

  pub fn logoff(&self, center: &mut ExchangeCenter) -> bool {
    center.logoff(self.id)
  }

  /// Añade `song` al catálogo del usuario registrado, que pasa a ser su dueño.
  pub fn add_song(&self, center: &mut ExchangeCenter, song: Song) -> Option<Arc<Song>> {
    center.user_mut(self.id).map(|u| u.add_song(song))
  }

  pub fn song_with_title(&self, center: &ExchangeCenter, title: &str) -> Option<Arc<Song>> {
    center.user(self.id)?.song_with_title(title).cloned()
  }

  pub fn total_catalog_duration(&self, center: &ExchangeCenter) -> Option<u64> {
    center.user(self.id).map(|u| u.total_catalog_duration())
  }

  pub fn request_complete_song_list(&self, center: &ExchangeCenter) -> Vec<String> {
    listing::song_rows(center, center.available_songs())
  }

  pub fn request_song_list_by_artist(&self, center: &ExchangeCenter, artist: &str) -> Vec<String> {
    listing::song_rows(center, center.available_songs_by_artist(artist))
  }

  /// Descarga `title` de `owner_name` al catálogo de este usuario. El dueño
  /// de la canción no cambia.
  pub fn download_song(&self, center: &mut ExchangeCenter, title: &str, owner_name: &str) -> Option<Arc<Song>> {
    center.download_into(self.id, title, owner_name)
  }
}
