use std::collections::BTreeMap;
use std::{fmt, sync::Arc};

use tracing::{debug, info};

use crate::config::ExchangeConfig;
use crate::domain::{PopularityCount, Song, User, UserId};
use crate::errors::ExchangeError;
use crate::report::royalties::{RoyaltyEntry, RoyaltyReport};
use crate::services::handle::UserHandle;

/// El centro de intercambio: registro de usuarios, historial de descargas y
/// regalías por artista.
///
/// Es el único objeto con estado del sistema. No hay instancia global: cada
/// operación que lo necesita lo recibe explícitamente. Todo es síncrono y en
/// memoria; quien quiera compartirlo entre hilos debe envolverlo en su propio
/// lock.
#[derive(Debug, Default)]
pub struct ExchangeCenter {
  /// Usuarios en orden de registro. Nombres únicos.
  users: Vec<User>,
  /// Una entrada por descarga completada, en orden cronológico.
  download_log: Vec<Arc<Song>>,
  royalties: BTreeMap<String, f64>,
  config: ExchangeConfig,
}

impl ExchangeCenter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: ExchangeConfig) -> Self {
    Self { config, ..Self::default() }
  }

  pub fn config(&self) -> &ExchangeConfig {
    &self.config
  }

  // -------- REGISTRO --------

  /// Registra `user` salvo que ya exista uno con el mismo nombre.
  ///
  /// En ese caso no hace nada (ni error) y devuelve el handle del usuario
  /// que ya estaba registrado; `user` se descarta.
  pub fn register_user(&mut self, user: User) -> UserHandle {
    if let Some(existing) = self.find_user_by_name(user.name()) {
      debug!(user = existing.name(), "user already registered");
      return UserHandle::new(existing.id(), existing.name());
    }

    let handle = UserHandle::new(user.id(), user.name());
    debug!(user = user.name(), songs = user.songs().len(), "user registered");
    self.users.push(user);
    handle
  }

  pub fn find_user_by_name(&self, name: &str) -> Option<&User> {
    self.users.iter().find(|u| u.name() == name)
  }

  pub fn user(&self, id: UserId) -> Option<&User> {
    self.users.iter().find(|u| u.id() == id)
  }

  pub(crate) fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
    self.users.iter_mut().find(|u| u.id() == id)
  }

  /// Todos los usuarios registrados, en orden de registro.
  pub fn users(&self) -> &[User] {
    &self.users
  }

  /// Conecta al usuario. Devuelve `false` si no existe o ya estaba conectado.
  pub fn logon(&mut self, id: UserId) -> bool {
    self.set_online(id, true)
  }

  /// Desconecta al usuario. Devuelve `false` si no existe o ya estaba
  /// desconectado.
  pub fn logoff(&mut self, id: UserId) -> bool {
    self.set_online(id, false)
  }

  fn set_online(&mut self, id: UserId, online: bool) -> bool {
    match self.user_mut(id) {
      Some(user) if user.is_online() != online => {
        user.set_online(online);
        debug!(user = user.name(), online, "session changed");
        true
      }
      _ => false,
    }
  }

  // -------- DIRECTORIO --------

  pub fn online_users(&self) -> Vec<&User> {
    self.users.iter().filter(|u| u.is_online()).collect()
  }

  /// Catálogos de los usuarios conectados, concatenados en orden de registro
  /// y, dentro de cada usuario, en orden de catálogo.
  pub fn available_songs(&self) -> Vec<&Arc<Song>> {
    self.online_users().into_iter().flat_map(|u| u.songs()).collect()
  }

  /// Igual que [`ExchangeCenter::available_songs`], filtrando por artista
  /// (comparación exacta).
  pub fn available_songs_by_artist(&self, artist: &str) -> Vec<&Arc<Song>> {
    self.available_songs().into_iter().filter(|s| s.artist() == artist).collect()
  }

  /// Nombre del dueño original de `song`, si está registrado aquí.
  pub fn owner_name(&self, song: &Song) -> Option<&str> {
    song.owner().and_then(|id| self.user(id)).map(User::name)
  }

  // -------- DESCARGAS --------

  /// Descarga `title` del catálogo vivo de `owner_name`.
  ///
  /// Solo requiere que el dueño exista y esté conectado; no se valida contra
  /// ningún listado previo. Al completarse se anota en el historial y se
  /// acredita la regalía al artista. Si falla no hay efectos.
  pub fn try_download_song(&mut self, title: &str, owner_name: &str) -> Result<Arc<Song>, ExchangeError> {
    let owner =
      self.find_user_by_name(owner_name).ok_or_else(|| ExchangeError::UnknownUser(owner_name.to_string()))?;

    if !owner.is_online() {
      return Err(ExchangeError::UserOffline(owner_name.to_string()));
    }

    let song = owner
      .song_with_title(title)
      .cloned()
      .ok_or_else(|| ExchangeError::SongNotFound { title: title.to_string(), owner: owner_name.to_string() })?;

    self.record_download(&song);
    info!(
      title = song.title(),
      artist = song.artist(),
      owner = owner_name,
      royalty = self.royalties.get(song.artist()).copied().unwrap_or_default(),
      "song downloaded"
    );

    Ok(song)
  }

  pub fn download_song(&mut self, title: &str, owner_name: &str) -> Option<Arc<Song>> {
    self
      .try_download_song(title, owner_name)
      .inspect_err(|e| debug!(title, owner = owner_name, error = %e, "download failed"))
      .ok()
  }

  /// Descarga para un usuario registrado: la canción entra en su catálogo
  /// sin cambiar de dueño.
  pub(crate) fn download_into(&mut self, downloader: UserId, title: &str, owner_name: &str) -> Option<Arc<Song>> {
    self.user(downloader)?;

    let song = self.download_song(title, owner_name)?;
    if let Some(user) = self.user_mut(downloader) {
      user.acquire(Arc::clone(&song));
    }
    Some(song)
  }

  fn record_download(&mut self, song: &Arc<Song>) {
    let unit = self.config.royalty_per_download;
    self.download_log.push(Arc::clone(song));
    *self.royalties.entry(song.artist().to_string()).or_insert(0.0) += unit;
  }

  /// Historial completo, duplicados incluidos.
  pub fn download_log(&self) -> &[Arc<Song>] {
    &self.download_log
  }

  // -------- REGALÍAS --------

  pub fn royalties(&self) -> &BTreeMap<String, f64> {
    &self.royalties
  }

  pub fn royalty_for(&self, artist: &str) -> Option<f64> {
    self.royalties.get(artist).copied()
  }

  pub fn royalty_report(&self) -> RoyaltyReport {
    let entries =
      self.royalties.iter().map(|(artist, amount)| RoyaltyEntry { artist: artist.clone(), amount: *amount });
    RoyaltyReport::new(self.config.currency_symbol.clone(), entries.collect())
  }

  /// Imprime el informe de regalías por stdout.
  pub fn display_royalty_report(&self) {
    print!("{}", self.royalty_report());
  }

  // -------- ESTADÍSTICAS --------

  /// Canciones descargadas sin repetir título, ordenadas por título.
  ///
  /// Si varias canciones distintas comparten título queda la primera que se
  /// descargó.
  pub fn unique_downloaded_songs(&self) -> Vec<Arc<Song>> {
    let mut by_title: BTreeMap<&str, &Arc<Song>> = BTreeMap::new();
    for song in &self.download_log {
      by_title.entry(song.title()).or_insert(song);
    }
    by_title.into_values().cloned().collect()
  }

  /// Ranking por número de descargas, contando por identidad de canción.
  ///
  /// Ojo: la deduplicación es por título pero el conteo es por canción; un
  /// título compartido por dos usuarios solo refleja las descargas del
  /// representante. Ver [`PopularityCount`].
  pub fn songs_by_download_count(&self) -> Vec<(usize, Arc<Song>)> {
    self.popularity(PopularityCount::PerSong)
  }

  /// Ranking con el modo de conteo indicado. Orden descendente; los empates
  /// conservan el orden por título.
  pub fn popularity(&self, mode: PopularityCount) -> Vec<(usize, Arc<Song>)> {
    let mut ranked: Vec<(usize, Arc<Song>)> = self
      .unique_downloaded_songs()
      .into_iter()
      .map(|song| {
        let count = match mode {
          PopularityCount::PerSong => self.download_log.iter().filter(|d| d.id() == song.id()).count(),
          PopularityCount::PerTitle => self.download_log.iter().filter(|d| d.title() == song.title()).count(),
        };
        (count, song)
      })
      .collect();

    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked
  }
}

impl fmt::Display for ExchangeCenter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Music Exchange Center ({} users on line, {} songs available)",
      self.online_users().len(),
      self.available_songs().len()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn center_with(name: &str, songs: &[(&str, &str)]) -> (ExchangeCenter, UserHandle) {
    let mut center = ExchangeCenter::new();
    let mut user = User::new(name);
    for (title, artist) in songs {
      user.add_song(Song::new(*title, *artist, 3, 0));
    }
    let handle = user.register(&mut center);
    (center, handle)
  }

  #[test]
  fn second_registration_with_same_name_is_ignored() {
    let mut center = ExchangeCenter::new();
    let first = User::new("A").register(&mut center);
    let second = User::new("A").register(&mut center);

    assert_eq!(center.users().len(), 1);
    assert_eq!(first, second);
  }

  #[test]
  fn offline_users_contribute_no_songs() {
    let (mut center, a) = center_with("A", &[("X", "Art1"), ("Y", "Art2")]);
    let b = User::new("B").register(&mut center);
    assert!(center.available_songs().is_empty());

    a.logon(&mut center);
    b.logon(&mut center);
    assert_eq!(center.online_users().len(), 2);
    assert_eq!(center.available_songs().len(), 2);

    a.logoff(&mut center);
    assert!(center.available_songs().is_empty());
    assert_eq!(center.find_user_by_name("A").map(|u| u.songs().len()), Some(2));
  }

  #[test]
  fn logon_twice_is_a_noop() {
    let (mut center, a) = center_with("A", &[]);
    assert!(center.logon(a.id()));
    assert!(!center.logon(a.id()));
    assert!(center.logoff(a.id()));
    assert!(!center.logoff(a.id()));
  }

  #[test]
  fn filter_by_artist_is_case_sensitive() {
    let (mut center, a) = center_with("A", &[("X", "Clip"), ("Y", "clip"), ("Z", "Clip")]);
    a.logon(&mut center);

    let titles: Vec<_> = center.available_songs_by_artist("Clip").into_iter().map(|s| s.title()).collect();
    assert_eq!(titles, ["X", "Z"]);
  }

  #[test]
  fn failed_downloads_report_reason_and_leave_no_trace() {
    let (mut center, a) = center_with("A", &[("X", "Art1")]);

    assert_eq!(center.try_download_song("X", "Nobody"), Err(ExchangeError::UnknownUser("Nobody".into())));
    assert_eq!(center.try_download_song("X", "A"), Err(ExchangeError::UserOffline("A".into())));

    a.logon(&mut center);
    assert!(matches!(center.try_download_song("Missing", "A"), Err(ExchangeError::SongNotFound { .. })));

    assert!(center.download_log().is_empty());
    assert!(center.royalties().is_empty());
  }

  #[test]
  fn royalty_unit_comes_from_config() {
    let mut center =
      ExchangeCenter::with_config(ExchangeConfig { royalty_per_download: 1.0, ..Default::default() });
    let mut user = User::new("A");
    user.add_song(Song::new("X", "Art1", 3, 0));
    let a = user.register(&mut center);
    a.logon(&mut center);

    center.download_song("X", "A");
    center.download_song("X", "A");
    assert_eq!(center.royalty_for("Art1"), Some(2.0));
  }

  #[test]
  fn report_uses_configured_currency() {
    let mut center =
      ExchangeCenter::with_config(ExchangeConfig { currency_symbol: "€".into(), ..Default::default() });
    let mut user = User::new("A");
    user.add_song(Song::new("X", "Art1", 3, 0));
    user.register(&mut center).logon(&mut center);
    center.download_song("X", "A");

    let report = center.royalty_report();
    assert_eq!(report.entries().len(), 1);
    assert!(report.to_string().ends_with("€0.25    Art1\n"));
    center.display_royalty_report();
  }

  #[test]
  fn unique_downloads_keep_first_representative() {
    let mut center = ExchangeCenter::new();
    let mut a = User::new("A");
    let first = a.add_song(Song::new("Same", "Art1", 3, 0));
    let mut b = User::new("B");
    b.add_song(Song::new("Same", "Art2", 4, 0));
    let a = a.register(&mut center);
    let b = b.register(&mut center);
    a.logon(&mut center);
    b.logon(&mut center);

    center.download_song("Same", "A");
    center.download_song("Same", "B");
    center.download_song("Same", "B");

    let unique = center.unique_downloaded_songs();
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].id(), first.id());

    assert_eq!(center.songs_by_download_count()[0].0, 1);
    assert_eq!(center.popularity(PopularityCount::PerTitle)[0].0, 3);
  }

  #[test]
  fn popularity_ties_keep_title_order() {
    let (mut center, a) = center_with("A", &[("C", "x"), ("A", "x"), ("B", "x")]);
    a.logon(&mut center);
    for title in ["C", "A", "B", "B"] {
      center.download_song(title, "A");
    }

    let ranked: Vec<_> = center.songs_by_download_count().iter().map(|(n, s)| (*n, s.title().to_string())).collect();
    assert_eq!(ranked, [(2, "B".to_string()), (1, "A".to_string()), (1, "C".to_string())]);
  }

  #[test]
  fn display_counts_online_users_and_songs() {
    let (mut center, a) = center_with("A", &[("X", "Art1"), ("Y", "Art1")]);
    User::new("B").register(&mut center);
    assert_eq!(center.to_string(), "Music Exchange Center (0 users on line, 0 songs available)");

    a.logon(&mut center);
    assert_eq!(center.to_string(), "Music Exchange Center (1 users on line, 2 songs available)");
  }
}
