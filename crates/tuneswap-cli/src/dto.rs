use serde::Serialize;
use tuneswap_core::{ExchangeCenter, Song, SongId, report::listing};

/// Fila del ranking de popularidad tal como se serializa a JSON.
#[derive(Debug, Serialize)]
pub struct PopularityRowDto {
  pub rank: usize,
  pub downloads: usize,
  pub song_id: SongId,
  pub title: String,
  pub artist: String,
  pub time: String,
  pub owner: Option<String>,
}

impl PopularityRowDto {
  pub fn new(center: &ExchangeCenter, rank: usize, downloads: usize, song: &Song) -> Self {
    PopularityRowDto {
      rank,
      downloads,
      song_id: song.id(),
      title: song.title().to_string(),
      artist: song.artist().to_string(),
      time: listing::format_time(song.duration_secs()),
      owner: center.owner_name(song).map(str::to_string),
    }
  }
}
