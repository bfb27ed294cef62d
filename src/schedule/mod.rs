//! Fixed-tick scheduling around the engine

pub mod session;
pub mod ticker;

pub use session::GameSession;
pub use ticker::Ticker;
