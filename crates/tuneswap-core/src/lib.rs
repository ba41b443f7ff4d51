pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod report;
pub mod services;

pub use config::ExchangeConfig;
pub use domain::{PopularityCount, Song, SongId, User, UserId};
pub use errors::ExchangeError;
pub use services::{ExchangeCenter, UserHandle};
