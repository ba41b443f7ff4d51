use std::sync::Arc;

use crate::domain::Song;
use crate::services::ExchangeCenter;

/// Duración como `M:SS`.
pub fn format_time(duration_secs: u32) -> String {
  format!("{}:{:02}", duration_secs / 60, duration_secs % 60)
}

pub fn header_row() -> String {
  format!("{:>4} {:<30} {:<20} {:<10} {}", "", "TITLE", "ARTIST", "TIME", "OWNER")
}

/// Cabecera más una fila numerada (desde 1) por canción.
///
/// El dueño se resuelve contra `center`; si no está registrado allí la
/// columna queda vacía.
pub fn song_rows<'a, I>(center: &ExchangeCenter, songs: I) -> Vec<String>
where
  I: IntoIterator<Item = &'a Arc<Song>>,
{
  let mut rows = vec![header_row()];

  for (index, song) in songs.into_iter().enumerate() {
    rows.push(format!(
      "{:>3}. {:<30} {:<20} {:<10} {}",
      index + 1,
      song.title(),
      song.artist(),
      format_time(song.duration_secs()),
      center.owner_name(song).unwrap_or_default()
    ));
  }

  rows
}
