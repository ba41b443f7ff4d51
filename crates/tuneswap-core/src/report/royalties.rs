use std::{fmt, io};

use serde::Serialize;

/// Regalía acumulada de un artista.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoyaltyEntry {
  pub artist: String,
  pub amount: f64,
}

/// Informe de regalías: solo artistas con al menos una descarga.
///
/// Se imprime en dos columnas:
///
/// ```text
/// Amount   Artist
/// ---------------
/// $0.50    Jaw
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoyaltyReport {
  currency: String,
  entries: Vec<RoyaltyEntry>,
}

impl RoyaltyReport {
  pub fn new(currency: impl Into<String>, entries: Vec<RoyaltyEntry>) -> Self {
    Self { currency: currency.into(), entries }
  }

  pub fn currency(&self) -> &str {
    &self.currency
  }

  pub fn entries(&self) -> &[RoyaltyEntry] {
    &self.entries
  }

  /// Suma de todas las regalías del informe.
  pub fn total(&self) -> f64 {
    self.entries.iter().map(|e| e.amount).sum()
  }

  pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
    write!(out, "{self}")
  }
}

impl fmt::Display for RoyaltyReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{:<8} {}", "Amount", "Artist")?;
    writeln!(f, "{}", "-".repeat(15))?;
    for entry in &self.entries {
      writeln!(f, "{}{:<7.2} {}", self.currency, entry.amount, entry.artist)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(artist: &str, amount: f64) -> RoyaltyEntry {
    RoyaltyEntry { artist: artist.to_string(), amount }
  }

  #[test]
  fn renders_two_columns() {
    let report = RoyaltyReport::new("$", vec![entry("Aqua", 0.25), entry("Jaw", 1.5)]);

    assert_eq!(report.to_string(), "Amount   Artist\n---------------\n$0.25    Aqua\n$1.50    Jaw\n");
  }

  #[test]
  fn empty_report_keeps_header() {
    let report = RoyaltyReport::new("$", Vec::new());
    assert_eq!(report.to_string(), "Amount   Artist\n---------------\n");
    assert_eq!(report.total(), 0.0);
  }

  #[test]
  fn write_to_matches_display() {
    let report = RoyaltyReport::new("€", vec![entry("Clip", 0.75)]);
    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), report.to_string());
    assert_eq!(report.currency(), "€");
    assert_eq!(report.total(), 0.75);
  }

  #[test]
  fn total_sums_every_artist() {
    let report = RoyaltyReport::new("$", vec![entry("Aqua", 0.25), entry("Jaw", 1.5), entry("UFO", 0.75)]);
    assert_eq!(report.total(), 2.5);
  }
}
