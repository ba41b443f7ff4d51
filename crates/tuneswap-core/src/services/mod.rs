pub mod exchange_center;
pub mod handle;

pub use exchange_center::ExchangeCenter;
pub use handle::UserHandle;
