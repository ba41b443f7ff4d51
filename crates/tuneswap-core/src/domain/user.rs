use std::{fmt, sync::Arc};

use crate::domain::ids::UserId;
use crate::domain::song::Song;
use crate::report::listing;
use crate::services::{ExchangeCenter, UserHandle};

/// Un participante del intercambio: identidad, sesión y catálogo propio.
///
/// El nombre es la clave natural dentro de un [`ExchangeCenter`]. Una vez
/// registrado, el centro es dueño del `User`; el llamador opera con el
/// [`UserHandle`] devuelto por [`User::register`].
#[derive(Debug)]
pub struct User {
  id: UserId,
  name: String,
  online: bool,
  catalog: Vec<Arc<Song>>,
}

impl User {
  /// Crea un usuario desconectado y con el catálogo vacío.
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: UserId::new(), name: name.into(), online: false, catalog: Vec::new() }
  }

  pub fn id(&self) -> UserId {
    self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn is_online(&self) -> bool {
    self.online
  }

  /// Catálogo en orden de inserción.
  pub fn songs(&self) -> &[Arc<Song>] {
    &self.catalog
  }

  /// Añade una canción al catálogo y pasa a ser su dueño.
  ///
  /// No se comprueban títulos duplicados.
  pub fn add_song(&mut self, song: Song) -> Arc<Song> {
    let song = Arc::new(song.with_owner(self.id));
    self.catalog.push(Arc::clone(&song));
    song
  }

  /// Incorpora una canción descargada conservando su dueño original.
  pub(crate) fn acquire(&mut self, song: Arc<Song>) {
    self.catalog.push(song);
  }

  pub(crate) fn set_online(&mut self, online: bool) {
    self.online = online;
  }

  /// Suma de las duraciones del catálogo, en segundos.
  pub fn total_catalog_duration(&self) -> u64 {
    self.catalog.iter().map(|s| u64::from(s.duration_secs())).sum()
  }

  /// Primera canción del catálogo con ese título exacto.
  pub fn song_with_title(&self, title: &str) -> Option<&Arc<Song>> {
    self.catalog.iter().find(|s| s.title() == title)
  }

  /// Registra al usuario en `center`.
  ///
  /// Si el nombre ya existía el registro no hace nada y el handle apunta al
  /// usuario que ya estaba registrado.
  pub fn register(self, center: &mut ExchangeCenter) -> UserHandle {
    center.register_user(self)
  }

  /// Conecta al usuario registrado con este mismo nombre.
  ///
  /// Solo actúa si esta instancia figura desconectada; el cambio se aplica a
  /// la instancia canónica del centro, nunca a `self`.
  pub fn logon(&self, center: &mut ExchangeCenter) -> bool {
    if self.online {
      return false;
    }
    let Some(id) = center.find_user_by_name(&self.name).map(User::id) else {
      return false;
    };
    center.logon(id)
  }

  /// Inverso de [`User::logon`].
  pub fn logoff(&self, center: &mut ExchangeCenter) -> bool {
    if !self.online {
      return false;
    }
    let Some(id) = center.find_user_by_name(&self.name).map(User::id) else {
      return false;
    };
    center.logoff(id)
  }

  pub fn request_complete_song_list(&self, center: &ExchangeCenter) -> Vec<String> {
    listing::song_rows(center, center.available_songs())
  }

  pub fn request_song_list_by_artist(&self, center: &ExchangeCenter, artist: &str) -> Vec<String> {
    listing::song_rows(center, center.available_songs_by_artist(artist))
  }

  /// Descarga `title` de `owner_name` y la guarda en el catálogo propio.
  ///
  /// La canción conserva a su dueño original: a diferencia de
  /// [`User::add_song`], el dueño no se reasigna.
  pub fn download_song(&mut self, center: &mut ExchangeCenter, title: &str, owner_name: &str) -> Option<Arc<Song>> {
    let song = center.download_song(title, owner_name)?;
    self.acquire(Arc::clone(&song));
    Some(song)
  }
}

impl fmt::Display for User {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {} songs (", self.name, self.catalog.len())?;
    if !self.online {
      write!(f, "not ")?;
    }
    write!(f, "online)")
  }
}
