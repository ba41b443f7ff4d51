use std::io::{self, Write};

use anyhow::{Context, Result};
use tuneswap_core::{ExchangeCenter, ExchangeConfig, PopularityCount, UserHandle, fixtures};

use crate::dto::PopularityRowDto;

/// Sesión de ejemplo: registra los usuarios de prueba, abre y cierra
/// sesiones, lista canciones, descarga y muestra regalías y ranking.
pub fn run(config: ExchangeConfig, mode: PopularityCount, json: bool) -> Result<()> {
  let mut center = ExchangeCenter::with_config(config);
  let mut out = io::stdout().lock();

  let users: Vec<UserHandle> = fixtures::all().into_iter().map(|u| u.register(&mut center)).collect();
  let [disco, sam, ronnie, candy, punk] = users.as_slice() else {
    anyhow::bail!("expected five sample users, got {}", users.len());
  };

  writeln!(out, "{center}")?;
  print_users(&mut out, &center)?;

  for user in [disco, sam, punk] {
    user.logon(&mut center);
  }
  writeln!(out, "\n{center}")?;

  writeln!(out, "\nSongs available to {}:", candy.name())?;
  print_rows(&mut out, candy.request_complete_song_list(&center))?;

  writeln!(out, "\nSongs by Jaw:")?;
  print_rows(&mut out, candy.request_song_list_by_artist(&center, "Jaw"))?;

  // Ronnie sigue desconectado: esta descarga no debe tener efecto.
  candy.download_song(&mut center, "Rock is Cool", ronnie.name());

  candy.download_song(&mut center, "Hey Jude", disco.name());
  candy.download_song(&mut center, "Bite My Arms Off", punk.name());
  sam.download_song(&mut center, "Barbie Girl", disco.name());
  sam.download_song(&mut center, "Only You Can Rock Me", disco.name());

  ronnie.logon(&mut center);
  punk.logoff(&mut center);
  candy.logon(&mut center);

  disco.download_song(&mut center, "Only You Can Rock Me", ronnie.name());
  disco.download_song(&mut center, "Only You Can Rock Me", ronnie.name());
  disco.download_song(&mut center, "My Hair is on Fire", punk.name());
  punk.download_song(&mut center, "If I Had a Hammer", candy.name());
  ronnie.download_song(&mut center, "Hey Jude", disco.name());
  ronnie.download_song(&mut center, "Bite My Arms Off", candy.name());

  writeln!(out, "\n{center}")?;
  print_users(&mut out, &center)?;

  writeln!(out)?;
  let report = center.royalty_report();
  report.write_to(&mut out).context("failed to write royalty report")?;
  writeln!(out, "Total: {}{:.2}", report.currency(), report.total())?;

  writeln!(out, "\nUnique downloads:")?;
  for song in center.unique_downloaded_songs() {
    writeln!(out, "{song}")?;
  }

  let ranked = center.popularity(mode);
  if json {
    let rows: Vec<PopularityRowDto> = ranked
      .iter()
      .enumerate()
      .map(|(i, (count, song))| PopularityRowDto::new(&center, i + 1, *count, song))
      .collect();
    writeln!(out, "\n{}", serde_json::to_string_pretty(&rows)?)?;
  } else {
    writeln!(out, "\nSongs by popularity ({mode}):")?;
    for (count, song) in &ranked {
      writeln!(out, "({count}) {song}")?;
    }
  }

  Ok(())
}

fn print_users(out: &mut impl Write, center: &ExchangeCenter) -> io::Result<()> {
  for user in center.users() {
    writeln!(out, "  {user}")?;
  }
  Ok(())
}

fn print_rows(out: &mut impl Write, rows: Vec<String>) -> io::Result<()> {
  for row in rows {
    writeln!(out, "{row}")?;
  }
  Ok(())
}
