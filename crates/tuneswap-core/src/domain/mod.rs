pub mod ids;
pub mod popularity;
pub mod song;
pub mod user;

pub use ids::{SongId, UserId};
pub use popularity::PopularityCount;
pub use song::Song;
pub use user::User;
