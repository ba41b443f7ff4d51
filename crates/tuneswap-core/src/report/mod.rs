//! Salida de texto del intercambio: listados de canciones e informe de
//! regalías. Los anchos de columna son fijos para que la salida sea estable.

pub mod listing;
pub mod royalties;

pub use royalties::{RoyaltyEntry, RoyaltyReport};
