//! Usuarios de ejemplo con catálogo, desconectados y sin registrar.
//!
//! Los usa la demo del CLI y sirven como datos de prueba realistas: hay
//! títulos repetidos entre usuarios ("Only You Can Rock Me") y artistas con
//! varias canciones repartidas ("Jaw", "Clip").

use crate::domain::{Song, User};

fn user_with(name: &str, songs: &[(&str, &str, u32, u32)]) -> User {
  let mut user = User::new(name);
  for &(title, artist, minutes, seconds) in songs {
    user.add_song(Song::new(title, artist, minutes, seconds));
  }
  user
}

pub fn disco_stew() -> User {
  user_with(
    "Disco Stew",
    &[
      ("Hey Jude", "The Beatles", 4, 35),
      ("Barbie Girl", "Aqua", 3, 54),
      ("Only You Can Rock Me", "UFO", 4, 59),
      ("Paper Soup Cats", "Jaw", 4, 18),
    ],
  )
}

pub fn sleeping_sam() -> User {
  user_with("Sleeping Sam", &[("Meadows", "Sleepfest", 7, 15), ("Calm is Good", "Waterfall", 6, 22)])
}

pub fn ronnie_rocker() -> User {
  user_with(
    "Ronnie Rocker",
    &[
      ("Rock is Cool", "Yeah", 4, 17),
      ("My Girl is Mean to Me", "Can't Stand Up", 3, 29),
      ("Only You Can Rock Me", "UFO", 4, 52),
      ("We're Not Gonna Take It", "Twisted Sister", 3, 9),
    ],
  )
}

pub fn country_candy() -> User {
  user_with(
    "Country Candy",
    &[
      ("If I Had a Hammer", "Long Road", 4, 15),
      ("My Man is a 4x4 Driver", "Ms. Lonely", 3, 7),
      ("This Song is for Johnny", "Lone Wolf", 4, 22),
    ],
  )
}

pub fn peter_punk() -> User {
  user_with(
    "Peter Punk",
    &[
      ("Bite My Arms Off", "Jaw", 4, 12),
      ("Where's My Sweater", "The Knitters", 3, 41),
      ("Is that My Toenail ?", "Clip", 4, 47),
      ("Anvil Headache", "Clip", 4, 34),
      ("My Hair is on Fire", "Jaw", 3, 55),
    ],
  )
}

/// Los cinco usuarios de ejemplo, en el orden habitual de registro.
pub fn all() -> Vec<User> {
  vec![disco_stew(), sleeping_sam(), ronnie_rocker(), country_candy(), peter_punk()]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fixtures_own_their_songs() {
    let users = all();
    assert_eq!(users.len(), 5);
    for user in &users {
      assert!(!user.is_online());
      assert!(user.songs().iter().all(|s| s.owner() == Some(user.id())));
    }
  }

  #[test]
  fn catalog_sizes() {
    let sizes: Vec<_> = all().iter().map(|u| u.songs().len()).collect();
    assert_eq!(sizes, [4, 2, 4, 3, 5]);
    assert_eq!(peter_punk().total_catalog_duration(), 252 + 221 + 287 + 274 + 235);
  }
}
